use crate::mode::FrameMode;
use crate::rect::{Point, Rect};
use crate::region::CaptionButton;

/// Caption height in logical pixels used when none (or a non-positive
/// value) has been supplied.
pub const DEFAULT_CAPTION_HEIGHT: i32 = 32;

/// Largest caption height accepted, in logical pixels.
pub const MAX_CAPTION_HEIGHT: i32 = 512;

/// Caption button zones in client coordinates.
///
/// Zones are only consulted while `enabled` is set. Clearing keeps the
/// rectangles but stops hit-testing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptionButtons {
    pub minimize: Rect,
    pub maximize: Rect,
    pub close: Rect,
    pub enabled: bool,
}

impl CaptionButtons {
    /// Returns the button under a client-space point.
    ///
    /// Zones are tested close, then maximize, then minimize, so close
    /// wins wherever zones overlap.
    pub fn hit(&self, client: Point) -> Option<CaptionButton> {
        if !self.enabled {
            return None;
        }
        [
            (self.close, CaptionButton::Close),
            (self.maximize, CaptionButton::Maximize),
            (self.minimize, CaptionButton::Minimize),
        ]
        .into_iter()
        .find(|(zone, _)| zone.contains(client))
        .map(|(_, button)| button)
    }
}

/// Frame state of one managed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    pub mode: FrameMode,
    /// The window procedure that was installed before ours, as an opaque
    /// pointer value.
    pub original_proc: usize,
    /// Caption band height in logical pixels.
    pub caption_height: i32,
    pub buttons: CaptionButtons,
    /// Client size the caption button zones were laid out for, once known.
    pub client_size: Option<(i32, i32)>,
}

impl WindowState {
    pub fn new(original_proc: usize) -> Self {
        Self {
            mode: FrameMode::Normal,
            original_proc,
            caption_height: DEFAULT_CAPTION_HEIGHT,
            buttons: CaptionButtons::default(),
            client_size: None,
        }
    }
}

/// Replaces a non-positive caption height with `fallback` and caps the
/// rest at [`MAX_CAPTION_HEIGHT`].
pub fn effective_caption_height(requested: i32, fallback: i32) -> i32 {
    if requested > 0 {
        requested.min(MAX_CAPTION_HEIGHT)
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlapping_buttons() -> CaptionButtons {
        CaptionButtons {
            minimize: Rect::from_ltrb(620, 0, 660, 32),
            maximize: Rect::from_ltrb(660, 0, 701, 32),
            close: Rect::from_ltrb(700, 0, 732, 32),
            enabled: true,
        }
    }

    #[test]
    fn close_wins_over_maximize_where_zones_overlap() {
        // Arrange
        let buttons = overlapping_buttons();

        // Act
        let hit = buttons.hit(Point::new(700, 16));

        // Assert
        assert_eq!(hit, Some(CaptionButton::Close));
    }

    #[test]
    fn disabled_zones_are_never_hit() {
        // Arrange
        let buttons = CaptionButtons {
            enabled: false,
            ..overlapping_buttons()
        };

        // Act / Assert
        assert_eq!(buttons.hit(Point::new(710, 16)), None);
        assert_eq!(buttons.hit(Point::new(630, 16)), None);
    }

    #[test]
    fn each_zone_reports_its_button() {
        let buttons = overlapping_buttons();

        assert_eq!(buttons.hit(Point::new(630, 5)), Some(CaptionButton::Minimize));
        assert_eq!(buttons.hit(Point::new(680, 5)), Some(CaptionButton::Maximize));
        assert_eq!(buttons.hit(Point::new(731, 5)), Some(CaptionButton::Close));
        assert_eq!(buttons.hit(Point::new(500, 5)), None);
    }

    #[test]
    fn non_positive_caption_height_falls_back() {
        assert_eq!(effective_caption_height(40, 32), 40);
        assert_eq!(effective_caption_height(0, 32), 32);
        assert_eq!(effective_caption_height(-5, 32), 32);
    }

    #[test]
    fn oversized_caption_height_is_capped() {
        assert_eq!(effective_caption_height(512, 32), 512);
        assert_eq!(effective_caption_height(513, 32), MAX_CAPTION_HEIGHT);
        assert_eq!(effective_caption_height(i32::MAX, 32), MAX_CAPTION_HEIGHT);
    }
}
