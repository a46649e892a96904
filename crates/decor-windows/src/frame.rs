use decor_core::{FrameMargins, WindowResult};
use windows::Win32::Foundation::{HWND, LRESULT};
use windows::Win32::Graphics::Dwm::{DwmDefWindowProc, DwmExtendFrameIntoClientArea};
use windows::Win32::UI::Controls::MARGINS;

use crate::message::Message;

/// Extends the DWM frame into the client area by `margins`.
///
/// Negative margins produce the "sheet of glass" used by the custom frame;
/// zero margins undo any previous extension.
pub fn extend_into_client(hwnd: HWND, margins: FrameMargins) -> WindowResult<()> {
    let margins = MARGINS {
        cxLeftWidth: margins.left,
        cxRightWidth: margins.right,
        cyTopHeight: margins.top,
        cyBottomHeight: margins.bottom,
    };
    // SAFETY: the MARGINS struct outlives the call.
    unsafe { DwmExtendFrameIntoClientArea(hwnd, &margins)? };
    Ok(())
}

/// Lets DWM answer a message first (caption buttons drawn by DWM).
///
/// Returns the DWM result when DWM handled the message.
pub(crate) fn dwm_default_proc(message: &Message) -> Option<LRESULT> {
    let mut result = LRESULT(0);
    // SAFETY: DwmDefWindowProc writes only to `result`.
    let handled = unsafe {
        DwmDefWindowProc(
            message.hwnd,
            message.id,
            message.wparam,
            message.lparam,
            &mut result,
        )
    };
    handled.as_bool().then_some(result)
}
