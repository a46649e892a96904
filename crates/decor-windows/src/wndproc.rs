//! The replacement window procedure installed on every managed window.
//!
//! Frame messages are answered here according to the window's mode;
//! everything else goes to the procedure the window had before.

use decor_core::geometry::{adjust_client_rect, maximized_placement};
use decor_core::{CursorShape, FrameMode, Region, WindowResult, WindowState, log_debug};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, POINT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    MINMAXINFO, NCCALCSIZE_PARAMS, SIZE_MINIMIZED, SetCursor, WM_CREATE, WM_GETMINMAXINFO,
    WM_NCACTIVATE, WM_NCCALCSIZE, WM_NCDESTROY, WM_NCHITTEST, WM_SETCURSOR, WM_SIZE,
};

use crate::context::try_with_manager;
use crate::message::{Message, OriginalProc, default_proc, low_word};
use crate::monitor::{self, MonitorAreas};
use crate::window::{Window, to_rect, to_win32_rect};
use crate::{capabilities, dpi, frame, hit_code};

pub(crate) unsafe extern "system" fn frame_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let message = Message {
        hwnd,
        id: msg,
        wparam,
        lparam,
    };
    let Some(state) = try_with_manager(|m| m.state(message.window())).flatten() else {
        return default_proc(&message);
    };
    let original = OriginalProc::new(state.original_proc);

    match message.id {
        WM_NCDESTROY => return on_nc_destroy(original, &message),
        WM_SIZE => on_size(&message),
        _ => {}
    }

    intercept(&state, original, &message).unwrap_or_else(|| original.call(&message))
}

/// Which handler, if any, answers a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Forward,
    NcCalcSize,
    NcHitTest,
    SetCursor,
    NcActivate,
    MinMaxInfo,
    Create,
}

fn route(mode: FrameMode, id: u32, wparam: usize) -> Route {
    if !mode.is_managed() {
        return Route::Forward;
    }
    let custom = mode == FrameMode::CustomFrame;
    match id {
        // wParam 0 asks for a plain client rect; only the TRUE variant
        // carries NCCALCSIZE_PARAMS.
        WM_NCCALCSIZE if wparam != 0 => Route::NcCalcSize,
        WM_NCHITTEST => Route::NcHitTest,
        WM_SETCURSOR => Route::SetCursor,
        WM_NCACTIVATE => Route::NcActivate,
        WM_GETMINMAXINFO if custom => Route::MinMaxInfo,
        WM_CREATE if custom => Route::Create,
        _ => Route::Forward,
    }
}

/// Answers a frame message for a managed window. `None` defers to the
/// original procedure.
fn intercept(state: &WindowState, original: OriginalProc, message: &Message) -> Option<LRESULT> {
    match route(state.mode, message.id, message.wparam.0) {
        Route::Forward => None,
        Route::NcCalcSize => on_nc_calc_size(state, message),
        Route::NcHitTest => on_nc_hit_test(state, message),
        Route::SetCursor => on_set_cursor(message),
        Route::NcActivate => Some(on_nc_activate(|m| original.call(m), message)),
        Route::MinMaxInfo => Some(on_get_min_max_info(
            |m| original.call(m),
            message,
            monitor::areas_for_window(message.hwnd),
        )),
        Route::Create => Some(on_create(original, message)),
    }
}

fn on_nc_calc_size(state: &WindowState, message: &Message) -> Option<LRESULT> {
    let params = message.lparam.0 as *mut NCCALCSIZE_PARAMS;
    if params.is_null() {
        return None;
    }
    let window = Window::new(message.hwnd);
    let thickness = dpi::frame_thickness(message.hwnd, None);
    // SAFETY: with wParam TRUE, lParam points to NCCALCSIZE_PARAMS owned by
    // the system for the duration of this message.
    let proposed = unsafe { &mut (*params).rgrc[0] };
    let client = adjust_client_rect(
        state.mode,
        to_rect(*proposed),
        window.is_maximized(),
        thickness,
    );
    *proposed = to_win32_rect(client);
    Some(LRESULT(0))
}

fn on_nc_hit_test(state: &WindowState, message: &Message) -> Option<LRESULT> {
    if let Some(result) = frame::dwm_default_proc(message) {
        return Some(result);
    }
    let region = Window::new(message.hwnd).classify(state, message.point());
    let code = hit_test_code(state.mode, region, capabilities::get().windows11)?;
    Some(LRESULT(code as isize))
}

/// The code to answer `WM_NCHITTEST` with. `None` lets the original
/// procedure decide; the hidden mode leaves its client area to the host.
fn hit_test_code(mode: FrameMode, region: Region, native_buttons: bool) -> Option<u32> {
    match (mode, region) {
        (_, Region::None) | (FrameMode::Hidden, Region::Client) => None,
        _ => Some(hit_code::to_code(region, native_buttons)),
    }
}

fn on_set_cursor(message: &Message) -> Option<LRESULT> {
    let code = low_word(message.lparam) as u16 as u32;
    let edge = hit_code::edge_from_code(code)?;
    let cursor = hit_code::load_cursor(CursorShape::for_region(Region::Border(edge))?)?;
    // SAFETY: system cursors never need freeing.
    unsafe { SetCursor(Some(cursor)) };
    Some(LRESULT(1))
}

/// Lets the original procedure update activation state while telling it
/// not to repaint the (hidden) native frame.
fn on_nc_activate(forward: impl FnOnce(&Message) -> LRESULT, message: &Message) -> LRESULT {
    forward(&message.with_lparam(LPARAM(-1)));
    LRESULT(1)
}

/// Pins the maximized window to the monitor's work area so the taskbar
/// stays visible.
/// The original procedure runs first so its track sizes survive.
fn on_get_min_max_info(
    forward: impl FnOnce(&Message) -> LRESULT,
    message: &Message,
    areas: WindowResult<MonitorAreas>,
) -> LRESULT {
    forward(message);
    let info = message.lparam.0 as *mut MINMAXINFO;
    if info.is_null() {
        return LRESULT(0);
    }
    match areas {
        Ok(areas) => {
            let placement = maximized_placement(areas.bounds, areas.work);
            // SAFETY: lParam points to a MINMAXINFO owned by the system for
            // the duration of this message.
            unsafe {
                (*info).ptMaxPosition = POINT {
                    x: placement.position.x,
                    y: placement.position.y,
                };
                (*info).ptMaxSize = POINT {
                    x: placement.width,
                    y: placement.height,
                };
            }
        }
        Err(e) => log_debug!("no monitor for {}: {e}", message.window()),
    }
    LRESULT(0)
}

/// Windows created while already managed need one frame refresh so the
/// first `WM_NCCALCSIZE` sees the custom frame.
fn on_create(original: OriginalProc, message: &Message) -> LRESULT {
    let result = original.call(message);
    if let Err(e) = Window::new(message.hwnd).refresh_frame() {
        log_debug!("frame refresh on create failed for {}: {e}", message.window());
    }
    result
}

fn on_size(message: &Message) {
    if message.wparam.0 as u32 == SIZE_MINIMIZED {
        return;
    }
    // Client sizes are unsigned words.
    let width = (message.lparam.0 & 0xFFFF) as i32;
    let height = ((message.lparam.0 >> 16) & 0xFFFF) as i32;
    try_with_manager(|m| m.client_resized(message.window(), width, height));
}

/// The window is going away: forward first, then drop its registration so
/// the hook reference is released.
fn on_nc_destroy(original: OriginalProc, message: &Message) -> LRESULT {
    let result = original.call(message);
    try_with_manager(|m| m.restore_window_proc(message.window()));
    result
}
