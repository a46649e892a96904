use decor_core::{FrameMargins, Platform, ResizeEdge, WindowId, WindowResult, log_debug};
use windows::Win32::Foundation::{GetLastError, LPARAM, WPARAM};
use windows::Win32::UI::Input::KeyboardAndMouse::ReleaseCapture;
use windows::Win32::UI::WindowsAndMessaging::{
    GWLP_WNDPROC, HHOOK, HTCAPTION, SC_MOVE, SC_SIZE, SendMessageW, SetWindowLongPtrW,
    WM_SYSCOMMAND,
};

use crate::window::Window;
use crate::{frame, hook, wndproc};

/// The Win32 side of the frame manager.
///
/// Stateless; all per-window state lives in the manager's registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Platform;

impl Platform for Win32Platform {
    type Hook = HHOOK;

    fn subclass(&self, window: WindowId) -> WindowResult<usize> {
        let hwnd = Window::from_id(window).hwnd();
        // SAFETY: swaps the window procedure for ours; the previous one is
        // returned so messages can be forwarded and restored later.
        #[allow(clippy::fn_to_numeric_cast)]
        let previous = unsafe {
            SetWindowLongPtrW(hwnd, GWLP_WNDPROC, wndproc::frame_wnd_proc as isize)
        };
        if previous == 0 {
            // SAFETY: reads the calling thread's last-error value.
            let error = unsafe { GetLastError() };
            return Err(format!("SetWindowLongPtrW failed ({error:?})").into());
        }
        Ok(previous as usize)
    }

    fn restore_proc(&self, window: WindowId, original: usize) {
        let hwnd = Window::from_id(window).hwnd();
        // SAFETY: `original` was read from this window's GWLP_WNDPROC.
        unsafe {
            SetWindowLongPtrW(hwnd, GWLP_WNDPROC, original as isize);
        }
    }

    fn install_hook(&self, window: WindowId) -> Option<HHOOK> {
        hook::install(Window::from_id(window))
    }

    fn remove_hook(&self, handle: HHOOK) {
        hook::remove(handle);
    }

    fn extend_frame(&self, window: WindowId, margins: FrameMargins) {
        let hwnd = Window::from_id(window).hwnd();
        if let Err(e) = frame::extend_into_client(hwnd, margins) {
            log_debug!("DwmExtendFrameIntoClientArea failed for {window}: {e}");
        }
    }

    fn refresh_frame(&self, window: WindowId) {
        if let Err(e) = Window::from_id(window).refresh_frame() {
            log_debug!("frame refresh failed for {window}: {e}");
        }
    }

    fn is_maximized(&self, window: WindowId) -> bool {
        Window::from_id(window).is_maximized()
    }

    fn client_size(&self, window: WindowId) -> Option<(i32, i32)> {
        Window::from_id(window).client_size().ok()
    }

    fn parent(&self, window: WindowId) -> Option<WindowId> {
        Window::from_id(window).parent().map(|p| p.id())
    }

    fn begin_resize(&self, window: WindowId, edge: ResizeEdge) {
        let command = SC_SIZE as usize | edge.sizing_code() as usize;
        system_command(window, command);
    }

    fn begin_move(&self, window: WindowId) {
        system_command(window, SC_MOVE as usize | HTCAPTION as usize);
    }
}

/// Releases mouse capture and hands the window to the system's modal
/// move/size loop. Blocks until the user lets go.
fn system_command(window: WindowId, command: usize) {
    let hwnd = Window::from_id(window).hwnd();
    // SAFETY: WM_SYSCOMMAND is processed synchronously by the window's own
    // procedure on this thread.
    unsafe {
        let _ = ReleaseCapture();
        SendMessageW(
            hwnd,
            WM_SYSCOMMAND,
            Some(WPARAM(command)),
            Some(LPARAM(0)),
        );
    }
}
