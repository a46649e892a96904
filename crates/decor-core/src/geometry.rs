//! Frame geometry calculator: answers the non-client size negotiation and
//! fixes maximized placement.

use crate::dpi::FrameThickness;
use crate::mode::FrameMode;
use crate::rect::{Point, Rect};

/// Margins by which the DWM frame is extended into the client area.
///
/// A value of `-1` on every side turns the whole window into frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameMargins {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl FrameMargins {
    /// Frame extension applied for a given mode.
    pub fn for_mode(mode: FrameMode) -> Self {
        match mode {
            FrameMode::Normal => Self::default(),
            FrameMode::Hidden => Self {
                top: 1,
                ..Self::default()
            },
            FrameMode::CustomFrame => Self {
                left: -1,
                right: -1,
                top: -1,
                bottom: -1,
            },
        }
    }
}

/// Computes the client rectangle from the proposed window rectangle.
///
/// `proposed` is the first rectangle of the size-negotiation request, in
/// the window's parent coordinates. `thickness` is the sizing frame plus
/// padded border at the window's DPI.
pub fn adjust_client_rect(
    mode: FrameMode,
    proposed: Rect,
    maximized: bool,
    thickness: FrameThickness,
) -> Rect {
    let FrameThickness { x: tx, y: ty } = thickness;
    match mode {
        FrameMode::Normal => proposed,
        // The top edge stays put while restored so the native 1px accent
        // line remains; a maximized window hangs past the monitor by the
        // frame thickness on every side.
        FrameMode::CustomFrame => {
            let top = if maximized { ty } else { 0 };
            proposed.inset(tx, top, tx, ty)
        }
        FrameMode::Hidden => {
            if maximized {
                proposed.inset(tx, tx, tx, tx)
            } else {
                proposed.inset(0, -1, 0, 0)
            }
        }
    }
}

/// Maximized position and size for a window on a monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaximizedPlacement {
    /// Position relative to the monitor's top-left corner.
    pub position: Point,
    pub width: i32,
    pub height: i32,
}

/// Places a maximized window over the monitor's work area rather than
/// its full bounds, so it never covers the taskbar.
pub fn maximized_placement(monitor: Rect, work_area: Rect) -> MaximizedPlacement {
    MaximizedPlacement {
        position: Point::new(work_area.x - monitor.x, work_area.y - monitor.y),
        width: work_area.width,
        height: work_area.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THICKNESS: FrameThickness = FrameThickness { x: 8, y: 8 };

    fn proposed() -> Rect {
        Rect::from_ltrb(100, 100, 900, 700)
    }

    #[test]
    fn custom_frame_keeps_top_edge_when_restored() {
        // Arrange / Act
        let client = adjust_client_rect(FrameMode::CustomFrame, proposed(), false, THICKNESS);

        // Assert
        assert_eq!(client, Rect::from_ltrb(108, 100, 892, 692));
    }

    #[test]
    fn custom_frame_compensates_top_when_maximized() {
        // Arrange
        let proposed = Rect::from_ltrb(-8, -8, 1928, 1048);

        // Act
        let client = adjust_client_rect(FrameMode::CustomFrame, proposed, true, THICKNESS);

        // Assert
        assert_eq!(client, Rect::from_ltrb(0, 0, 1920, 1040));
    }

    #[test]
    fn hidden_mode_raises_top_by_one_pixel_when_restored() {
        let client = adjust_client_rect(FrameMode::Hidden, proposed(), false, THICKNESS);

        assert_eq!(client, Rect::from_ltrb(100, 99, 900, 700));
    }

    #[test]
    fn hidden_mode_shrinks_uniformly_when_maximized() {
        // Arrange
        let thickness = FrameThickness::new(12, 10);

        // Act
        let client = adjust_client_rect(FrameMode::Hidden, proposed(), true, thickness);

        // Assert
        assert_eq!(client, Rect::from_ltrb(112, 112, 888, 688));
    }

    #[test]
    fn normal_mode_passes_through() {
        assert_eq!(
            adjust_client_rect(FrameMode::Normal, proposed(), true, THICKNESS),
            proposed()
        );
    }

    #[test]
    fn maximized_placement_uses_work_area() {
        // Arrange
        let monitor = Rect::new(1920, 0, 2560, 1440);
        let work = Rect::new(1920, 0, 2560, 1392);

        // Act
        let placement = maximized_placement(monitor, work);

        // Assert
        assert_eq!(placement.position, Point::new(0, 0));
        assert_eq!((placement.width, placement.height), (2560, 1392));
    }

    #[test]
    fn maximized_placement_offsets_for_left_taskbar() {
        let monitor = Rect::new(0, 0, 1920, 1080);
        let work = Rect::new(48, 0, 1872, 1080);

        let placement = maximized_placement(monitor, work);

        assert_eq!(placement.position, Point::new(48, 0));
        assert_eq!(placement.width, 1872);
    }

    #[test]
    fn margins_per_mode() {
        assert_eq!(FrameMargins::for_mode(FrameMode::Normal), FrameMargins::default());
        assert_eq!(FrameMargins::for_mode(FrameMode::Hidden).top, 1);
        assert_eq!(FrameMargins::for_mode(FrameMode::CustomFrame).left, -1);
    }
}
