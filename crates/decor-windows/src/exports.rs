//! Exported entry points for host frameworks (loaded via FFI).
//!
//! Every function must be called on the thread that owns `hwnd`; calls
//! from other threads are ignored. Unknown windows are ignored too, and
//! queries on them return defaults.
#![allow(non_snake_case)]

use decor_core::dpi::RESIZE_BORDER_WIDTH;
use decor_core::{Rect, WindowId};
use windows::Win32::Foundation::HWND;

use crate::capabilities;
use crate::context::with_owned_window;

fn id(hwnd: HWND) -> WindowId {
    WindowId(hwnd.0 as usize)
}

/// Manages `hwnd` with a DWM-drawn custom frame and a caption band of
/// `caption_height` logical pixels.
#[unsafe(no_mangle)]
pub extern "C" fn EnableCustomFrameMode(hwnd: HWND, caption_height: i32) {
    with_owned_window(id(hwnd), |m| m.enable_custom_frame_mode(id(hwnd), caption_height));
}

/// Sets the minimize, maximize and close zones in client coordinates.
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub extern "C" fn SetCaptionButtonZones(
    hwnd: HWND,
    min_left: i32,
    min_top: i32,
    min_right: i32,
    min_bottom: i32,
    max_left: i32,
    max_top: i32,
    max_right: i32,
    max_bottom: i32,
    close_left: i32,
    close_top: i32,
    close_right: i32,
    close_bottom: i32,
) {
    let minimize = Rect::from_ltrb(min_left, min_top, min_right, min_bottom);
    let maximize = Rect::from_ltrb(max_left, max_top, max_right, max_bottom);
    let close = Rect::from_ltrb(close_left, close_top, close_right, close_bottom);
    with_owned_window(id(hwnd), |m| m.set_caption_button_zones(id(hwnd), minimize, maximize, close));
}

#[unsafe(no_mangle)]
pub extern "C" fn ClearCaptionButtonZones(hwnd: HWND) {
    with_owned_window(id(hwnd), |m| m.clear_caption_button_zones(id(hwnd)));
}

/// Non-positive heights reset to the configured default.
#[unsafe(no_mangle)]
pub extern "C" fn SetCaptionHeight(hwnd: HWND, caption_height: i32) {
    with_owned_window(id(hwnd), |m| m.set_caption_height(id(hwnd), caption_height));
}

/// Toggles the hidden-title-bar mode.
#[unsafe(no_mangle)]
pub extern "C" fn EnableCustomFrame(hwnd: HWND, enable: bool) {
    with_owned_window(id(hwnd), |m| m.enable_custom_frame(id(hwnd), enable));
}

#[unsafe(no_mangle)]
pub extern "C" fn DisableCustomFrame(hwnd: HWND) {
    with_owned_window(id(hwnd), |m| m.disable_custom_frame(id(hwnd)));
}

/// Returns 0 (normal), 1 (hidden) or 2 (custom frame).
#[unsafe(no_mangle)]
pub extern "C" fn GetFrameMode(hwnd: HWND) -> i32 {
    with_owned_window(id(hwnd), |m| m.frame_mode(id(hwnd)))
        .unwrap_or_default()
        .as_i32()
}

#[unsafe(no_mangle)]
pub extern "C" fn IsCustomFrameEnabled(hwnd: HWND) -> bool {
    with_owned_window(id(hwnd), |m| m.is_custom_frame_enabled(id(hwnd))).unwrap_or_default()
}

/// Restores the window's own procedure and forgets the window.
#[unsafe(no_mangle)]
pub extern "C" fn RestoreWindowProc(hwnd: HWND) {
    with_owned_window(id(hwnd), |m| m.restore_window_proc(id(hwnd)));
}

/// Starts a native resize from `edge` (0 = left ... 7 = bottom-right).
/// Blocks until the user releases the mouse.
#[unsafe(no_mangle)]
pub extern "C" fn StartResize(hwnd: HWND, edge: i32) {
    with_owned_window(id(hwnd), |m| m.start_resize(id(hwnd), edge));
}

/// Starts a native move. Blocks until the user releases the mouse.
#[unsafe(no_mangle)]
pub extern "C" fn StartDrag(hwnd: HWND) {
    with_owned_window(id(hwnd), |m| m.start_drag(id(hwnd)));
}

#[unsafe(no_mangle)]
pub extern "C" fn GetResizeBorderWidth() -> i32 {
    RESIZE_BORDER_WIDTH
}

#[unsafe(no_mangle)]
pub extern "C" fn IsWindows11() -> bool {
    capabilities::get().windows11
}

#[cfg(test)]
mod tests {
    use std::ptr;
    use std::thread;

    use windows::Win32::UI::WindowsAndMessaging::{
        CreateWindowExW, DestroyWindow, GWLP_WNDPROC, GetWindowLongPtrW, HWND_MESSAGE,
        WINDOW_EX_STYLE, WINDOW_STYLE,
    };
    use windows::core::w;

    use super::*;
    use crate::context::with_manager;

    fn message_window() -> HWND {
        // SAFETY: creates a message-only window owned by the calling thread.
        unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE::default(),
                w!("STATIC"),
                w!(""),
                WINDOW_STYLE::default(),
                0,
                0,
                0,
                0,
                Some(HWND_MESSAGE),
                None,
                None,
                None,
            )
        }
        .expect("message-only window")
    }

    fn window_proc(hwnd: HWND) -> isize {
        // SAFETY: reads a field of a live window.
        unsafe { GetWindowLongPtrW(hwnd, GWLP_WNDPROC) }
    }

    #[test]
    fn calls_from_another_thread_leave_the_window_alone() {
        // Arrange
        let hwnd = message_window();
        let before = window_proc(hwnd);
        let raw = hwnd.0 as usize;

        // Act
        let (mode, enabled) = thread::spawn(move || {
            let hwnd = HWND(raw as *mut _);
            EnableCustomFrameMode(hwnd, 40);
            EnableCustomFrame(hwnd, true);
            (GetFrameMode(hwnd), IsCustomFrameEnabled(hwnd))
        })
        .join()
        .expect("worker thread");

        // Assert
        assert_eq!((mode, enabled), (0, false));
        assert_eq!(window_proc(hwnd), before);
        assert!(with_manager(|m| m.state(id(hwnd))).is_none());

        // SAFETY: the window was created by this thread.
        unsafe { DestroyWindow(hwnd) }.expect("destroy");
    }

    #[test]
    fn owner_thread_calls_subclass_and_restore() {
        // Arrange
        let hwnd = message_window();
        let before = window_proc(hwnd);

        // Act
        EnableCustomFrameMode(hwnd, 40);
        let mode = GetFrameMode(hwnd);
        RestoreWindowProc(hwnd);

        // Assert
        assert_eq!(mode, 2);
        assert_eq!(window_proc(hwnd), before);
        assert!(with_manager(|m| m.state(id(hwnd))).is_none());

        // SAFETY: the window was created by this thread.
        unsafe { DestroyWindow(hwnd) }.expect("destroy");
    }

    #[test]
    fn null_window_is_owned_by_nobody() {
        let window = crate::window::Window::new(HWND(ptr::null_mut()));
        assert!(!window.is_owned_by_current_thread());
    }
}
