//! Win32 backend for custom window decorations.
//!
//! Everything here is Windows-only; on other targets the crate is empty so
//! the rest of the workspace still builds and tests.
#![cfg(windows)]

/// One-time OS capability detection.
pub mod capabilities;

/// DPI awareness and per-DPI frame metrics.
pub mod dpi;

/// C ABI consumed by host frameworks.
pub mod exports;

/// DWM frame extension and default hit-testing.
pub mod frame;

mod hit_code;
mod hook;
mod message;

/// Monitor bounds and work areas.
pub mod monitor;

mod platform;
mod wndproc;

/// Window type wrapping a Win32 `HWND`.
pub mod window;

mod context;

pub use context::with_manager;
pub use platform::Win32Platform;
pub use window::Window;
