pub mod config;
pub mod dpi;
pub mod geometry;
pub mod hook;
pub mod log;
pub mod manager;
pub mod mode;
pub mod platform;
pub mod pointer;
pub mod rect;
pub mod region;
pub mod registry;
pub mod state;
pub mod window;

pub use dpi::FrameThickness;
pub use geometry::FrameMargins;
pub use hit_test::HitTestFrame;
pub use manager::FrameManager;
pub use mode::FrameMode;
pub use platform::Platform;
pub use rect::{Point, Rect};
pub use region::{CaptionButton, CursorShape, Region, ResizeEdge};
pub use registry::Registry;
pub use state::{CaptionButtons, WindowState};
pub use window::{WindowId, WindowResult};
