/// How a managed window's non-client area is negotiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameMode {
    /// No interception; the window behaves as if it were not managed.
    #[default]
    Normal,
    /// Legacy borderless mode: title bar suppressed by a 1px top shift,
    /// resize borders computed from system metrics.
    Hidden,
    /// Title bar removed, side and bottom borders kept, plus a custom
    /// caption band and optional caption buttons.
    CustomFrame,
}

impl FrameMode {
    /// Integer encoding used across the C ABI.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Normal => 0,
            Self::Hidden => 1,
            Self::CustomFrame => 2,
        }
    }

    /// Decodes the C ABI integer. Unknown values map to `Normal`.
    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => Self::Hidden,
            2 => Self::CustomFrame,
            _ => Self::Normal,
        }
    }

    /// Returns whether messages for a window in this mode are intercepted.
    pub fn is_managed(self) -> bool {
        self != Self::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abi_encoding_is_stable() {
        assert_eq!(FrameMode::Normal.as_i32(), 0);
        assert_eq!(FrameMode::Hidden.as_i32(), 1);
        assert_eq!(FrameMode::CustomFrame.as_i32(), 2);
        assert_eq!(FrameMode::from_i32(2), FrameMode::CustomFrame);
        assert_eq!(FrameMode::from_i32(-7), FrameMode::Normal);
    }

    #[test]
    fn only_non_normal_modes_are_managed() {
        assert!(!FrameMode::Normal.is_managed());
        assert!(FrameMode::Hidden.is_managed());
        assert!(FrameMode::CustomFrame.is_managed());
    }
}
