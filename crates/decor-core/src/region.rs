//! Semantic regions of a window frame.
//!
//! The hit-test engine produces a [`Region`]; the platform layer maps it
//! to native hit codes, cursor shapes and sizing codes.

/// One of the eight resize handles: four edges and four corners.
///
/// The discriminant order matches the edge indices accepted by
/// `StartResize` (0 = left ... 7 = bottom-right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    /// All edges in index order.
    pub const ALL: [Self; 8] = [
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Decodes an edge index from the C ABI. Out-of-range values are `None`.
    pub fn from_index(index: i32) -> Option<Self> {
        let index = usize::try_from(index).ok()?;
        Self::ALL.get(index).copied()
    }

    /// The `WMSZ_*` value that selects this edge in a `SC_SIZE` command.
    pub fn sizing_code(self) -> u32 {
        match self {
            Self::Left => 1,
            Self::Right => 2,
            Self::Top => 3,
            Self::TopLeft => 4,
            Self::TopRight => 5,
            Self::Bottom => 6,
            Self::BottomLeft => 7,
            Self::BottomRight => 8,
        }
    }

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight
        )
    }
}

/// A caption button zone configured by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptionButton {
    Minimize,
    Maximize,
    Close,
}

/// Result of classifying a point against a window frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The window is not managed, or the point is outside it.
    None,
    Client,
    /// The draggable caption band.
    Caption,
    CaptionButton(CaptionButton),
    /// A resize edge or corner.
    Border(ResizeEdge),
}

impl Region {
    /// Returns the resize handle if this region is an edge or corner.
    pub fn border(self) -> Option<ResizeEdge> {
        match self {
            Self::Border(edge) => Some(edge),
            _ => None,
        }
    }

    pub fn is_border(self) -> bool {
        self.border().is_some()
    }
}

/// Resize cursor shown while the pointer is over a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorShape {
    /// Horizontal double arrow.
    SizeWE,
    /// Vertical double arrow.
    SizeNS,
    /// Diagonal double arrow, top-left to bottom-right.
    SizeNWSE,
    /// Diagonal double arrow, top-right to bottom-left.
    SizeNESW,
}

impl CursorShape {
    /// Maps a region to its resize cursor. Non-border regions have none.
    pub fn for_region(region: Region) -> Option<Self> {
        Some(match region.border()? {
            ResizeEdge::Left | ResizeEdge::Right => Self::SizeWE,
            ResizeEdge::Top | ResizeEdge::Bottom => Self::SizeNS,
            ResizeEdge::TopLeft | ResizeEdge::BottomRight => Self::SizeNWSE,
            ResizeEdge::TopRight | ResizeEdge::BottomLeft => Self::SizeNESW,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_indices_match_abi_order() {
        // Arrange
        let expected = [
            ResizeEdge::Left,
            ResizeEdge::Right,
            ResizeEdge::Top,
            ResizeEdge::Bottom,
            ResizeEdge::TopLeft,
            ResizeEdge::TopRight,
            ResizeEdge::BottomLeft,
            ResizeEdge::BottomRight,
        ];

        // Act / Assert
        for (i, edge) in expected.iter().enumerate() {
            assert_eq!(ResizeEdge::from_index(i as i32), Some(*edge));
        }
        assert_eq!(ResizeEdge::from_index(8), None);
        assert_eq!(ResizeEdge::from_index(-1), None);
    }

    #[test]
    fn sizing_codes_follow_wmsz_values() {
        assert_eq!(ResizeEdge::Top.sizing_code(), 3);
        assert_eq!(ResizeEdge::Bottom.sizing_code(), 6);
        assert_eq!(ResizeEdge::TopLeft.sizing_code(), 4);
        assert_eq!(ResizeEdge::BottomRight.sizing_code(), 8);
    }

    #[test]
    fn cursor_shapes_pair_opposite_handles() {
        assert_eq!(
            CursorShape::for_region(Region::Border(ResizeEdge::Left)),
            Some(CursorShape::SizeWE)
        );
        assert_eq!(
            CursorShape::for_region(Region::Border(ResizeEdge::Bottom)),
            Some(CursorShape::SizeNS)
        );
        assert_eq!(
            CursorShape::for_region(Region::Border(ResizeEdge::BottomRight)),
            Some(CursorShape::SizeNWSE)
        );
        assert_eq!(
            CursorShape::for_region(Region::Border(ResizeEdge::TopRight)),
            Some(CursorShape::SizeNESW)
        );
        assert_eq!(CursorShape::for_region(Region::Caption), None);
        assert_eq!(CursorShape::for_region(Region::Client), None);
    }
}
