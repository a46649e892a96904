//! `WH_GETMESSAGE` hook that sees mouse input before it is dispatched.
//!
//! Content windows (child render surfaces) cover the whole client area of
//! a managed window, so border presses and hovers never reach the managed
//! window's own procedure. The hook classifies them against the managed
//! window and redirects border presses into native resize.

use decor_core::pointer::CursorUpdate;
use decor_core::{CursorShape, Point, Region, WindowId, log_debug, log_warn};
use windows::Win32::Foundation::{LPARAM, LRESULT, POINT, WPARAM};
use windows::Win32::UI::Input::KeyboardAndMouse::ReleaseCapture;
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, GetCursorPos, HHOOK, IDC_ARROW, LoadCursorW, MSG, PostMessageW, SetCursor,
    SetWindowsHookExW, UnhookWindowsHookEx, WH_GETMESSAGE, WM_LBUTTONDOWN, WM_MOUSEMOVE,
    WM_NCLBUTTONDOWN, WM_NCMOUSEMOVE, WM_NULL,
};

use crate::context::try_with_manager;
use crate::hit_code;
use crate::message::lparam_from_point;
use crate::window::Window;

/// Installs the hook on the thread that owns `window`.
pub(crate) fn install(window: Window) -> Option<HHOOK> {
    let thread_id = window.thread_id();
    // SAFETY: the hook procedure lives for the whole process and the hook
    // is thread-scoped, so no module handle is required.
    match unsafe { SetWindowsHookExW(WH_GETMESSAGE, Some(get_msg_proc), None, thread_id) } {
        Ok(handle) => {
            log_debug!("message hook installed on thread {thread_id}");
            Some(handle)
        }
        Err(e) => {
            log_warn!("failed to install message hook on thread {thread_id}: {e}");
            None
        }
    }
}

pub(crate) fn remove(handle: HHOOK) {
    // SAFETY: `handle` came from SetWindowsHookExW and is removed once.
    if let Err(e) = unsafe { UnhookWindowsHookEx(handle) } {
        log_debug!("failed to remove message hook: {e}");
    } else {
        log_debug!("message hook removed");
    }
}

unsafe extern "system" fn get_msg_proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if code >= 0 && lparam.0 != 0 {
        // SAFETY: for WH_GETMESSAGE, lParam points to the MSG about to be
        // returned by GetMessage/PeekMessage; the hook may modify it.
        let msg = unsafe { &mut *(lparam.0 as *mut MSG) };
        inspect(msg);
    }
    unsafe { CallNextHookEx(None, code, wparam, lparam) }
}

/// What the hook does with one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HookAction {
    Ignore,
    /// Pointer movement: update the resize cursor.
    Track,
    /// A press that must be classified against the managed window.
    Classify,
}

fn action_for(message: u32) -> HookAction {
    match message {
        WM_MOUSEMOVE | WM_NCMOUSEMOVE => HookAction::Track,
        WM_LBUTTONDOWN => HookAction::Classify,
        _ => HookAction::Ignore,
    }
}

fn inspect(msg: &mut MSG) {
    let action = action_for(msg.message);
    if action == HookAction::Ignore {
        return;
    }

    let recipient = WindowId(msg.hwnd.0 as usize);
    let Some((id, state)) = try_with_manager(|m| m.managed_window_for(recipient)).flatten() else {
        return;
    };
    let Some(cursor) = cursor_position() else {
        return;
    };
    let window = Window::from_id(id);
    let region = window.classify(&state, cursor);

    if action == HookAction::Track {
        match try_with_manager(|m| m.pointer_moved(region)).unwrap_or(CursorUpdate::Keep) {
            CursorUpdate::Set(shape) => set_resize_cursor(shape),
            CursorUpdate::Reset => set_arrow_cursor(),
            CursorUpdate::Keep => {}
        }
    } else if suppress_border_press(msg, region) {
        redirect_press(window, region, cursor);
    }
}

/// Turns a press on a resize border into `WM_NULL` so the content window
/// never sees it. Returns whether the press was swallowed.
fn suppress_border_press(msg: &mut MSG, region: Region) -> bool {
    if !region.is_border() {
        return false;
    }
    msg.message = WM_NULL;
    true
}

/// Re-posts a swallowed press as a non-client press on the managed
/// window, which starts the native resize loop.
fn redirect_press(window: Window, region: Region, cursor: Point) {
    let code = hit_code::to_code(region, false);
    // SAFETY: posting to a live window owned by this thread.
    unsafe {
        let _ = ReleaseCapture();
        if let Err(e) = PostMessageW(
            Some(window.hwnd()),
            WM_NCLBUTTONDOWN,
            WPARAM(code as usize),
            lparam_from_point(cursor),
        ) {
            log_debug!("failed to post border press to {}: {e}", window.id());
        }
    }
}

fn cursor_position() -> Option<Point> {
    let mut point = POINT::default();
    // SAFETY: GetCursorPos fills the POINT.
    unsafe { GetCursorPos(&mut point) }.ok()?;
    Some(Point::new(point.x, point.y))
}

fn set_resize_cursor(shape: CursorShape) {
    if let Some(cursor) = hit_code::load_cursor(shape) {
        // SAFETY: system cursors never need freeing.
        unsafe { SetCursor(Some(cursor)) };
    }
}

fn set_arrow_cursor() {
    // SAFETY: system cursors never need freeing.
    unsafe {
        if let Ok(arrow) = LoadCursorW(None, IDC_ARROW) {
            SetCursor(Some(arrow));
        }
    }
}
