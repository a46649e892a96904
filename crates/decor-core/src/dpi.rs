//! DPI scaling arithmetic shared by the hit-test engine and the frame
//! geometry calculator.
//!
//! The platform layer queries raw metrics; everything here is pure.

/// The DPI at which logical and physical pixels coincide.
pub const BASE_DPI: u32 = 96;

/// Minimum resize border width in physical pixels.
///
/// Keeps edges grabbable on platforms that report near-zero frame metrics.
pub const RESIZE_BORDER_WIDTH: i32 = 8;

/// First Windows build number that ships the snap-layout flyout.
const WINDOWS_11_FIRST_BUILD: u32 = 22000;

/// Resize frame thickness (sizing frame plus padded border), in physical
/// pixels, per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameThickness {
    pub x: i32,
    pub y: i32,
}

impl FrameThickness {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Combines the sizing-frame and padded-border metrics.
    pub fn from_metrics(frame_x: i32, frame_y: i32, padding: i32) -> Self {
        Self::new(frame_x + padding, frame_y + padding)
    }

    /// Raises each axis to at least `minimum`.
    pub fn at_least(self, minimum: i32) -> Self {
        Self::new(self.x.max(minimum), self.y.max(minimum))
    }

    /// Replaces non-positive axes with `minimum`, leaving valid ones alone.
    pub fn or_minimum(self, minimum: i32) -> Self {
        let fix = |v: i32| if v > 0 { v } else { minimum };
        Self::new(fix(self.x), fix(self.y))
    }
}

/// Scales a logical pixel value to physical pixels at `dpi`.
///
/// Truncates toward zero, matching the integer cast the system metrics
/// fallback path uses. A zero DPI is treated as the base DPI.
pub fn scale(value: i32, dpi: u32) -> i32 {
    let dpi = if dpi == 0 { BASE_DPI } else { dpi };
    (i64::from(value) * i64::from(dpi) / i64::from(BASE_DPI)) as i32
}

/// Scales a metric queried at the system DPI to the window's DPI.
///
/// Used when the per-DPI metrics API is unavailable: the unscaled metric
/// is multiplied by `window_dpi / BASE_DPI`.
pub fn scale_thickness(thickness: FrameThickness, dpi: u32) -> FrameThickness {
    FrameThickness::new(scale(thickness.x, dpi), scale(thickness.y, dpi))
}

/// Converts a caption height in logical pixels to physical pixels.
pub fn scaled_caption_height(logical: i32, dpi: u32) -> i32 {
    scale(logical, dpi)
}

/// Returns whether a Windows build number is Windows 11 or later.
pub fn is_windows11_build(build: u32) -> bool {
    build >= WINDOWS_11_FIRST_BUILD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_identity_at_base_dpi() {
        assert_eq!(scale(32, 96), 32);
        assert_eq!(scale(8, 96), 8);
    }

    #[test]
    fn scale_follows_dpi_ratio() {
        // Arrange / Act / Assert
        assert_eq!(scale(32, 144), 48);
        assert_eq!(scale(32, 192), 64);
        assert_eq!(scale(5, 120), 6); // 6.25 truncated
    }

    #[test]
    fn zero_dpi_is_treated_as_base() {
        assert_eq!(scale(32, 0), 32);
    }

    #[test]
    fn thickness_combines_frame_and_padding() {
        // Arrange / Act
        let t = FrameThickness::from_metrics(4, 4, 4);

        // Assert
        assert_eq!(t, FrameThickness::new(8, 8));
        assert_eq!(scale_thickness(t, 144), FrameThickness::new(12, 12));
    }

    #[test]
    fn minimum_clamps() {
        assert_eq!(
            FrameThickness::new(3, 12).at_least(RESIZE_BORDER_WIDTH),
            FrameThickness::new(8, 12)
        );
        assert_eq!(
            FrameThickness::new(0, -2).or_minimum(RESIZE_BORDER_WIDTH),
            FrameThickness::new(8, 8)
        );
        assert_eq!(
            FrameThickness::new(3, 5).or_minimum(RESIZE_BORDER_WIDTH),
            FrameThickness::new(3, 5)
        );
    }

    #[test]
    fn windows11_starts_at_build_22000() {
        assert!(!is_windows11_build(19045));
        assert!(is_windows11_build(22000));
        assert!(is_windows11_build(26100));
    }
}
