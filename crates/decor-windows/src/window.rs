use decor_core::hit_test::{self, HitTestFrame};
use decor_core::{Point, Rect, Region, WindowId, WindowResult, WindowState, log_debug};
use windows::Win32::Foundation::{HWND, POINT, RECT};
use windows::Win32::Graphics::Gdi::ClientToScreen;
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{
    GetClientRect, GetParent, GetWindowRect, GetWindowThreadProcessId, IsZoomed, SWP_FRAMECHANGED,
    SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE, SWP_NOZORDER, SetWindowPos,
};

use crate::dpi;

/// A window on the Windows platform, wrapping a Win32 `HWND`.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    pub fn new(hwnd: HWND) -> Self {
        Self { hwnd }
    }

    /// Creates a `Window` from a platform-neutral identifier.
    pub fn from_id(id: WindowId) -> Self {
        Self {
            hwnd: HWND(id.raw() as *mut _),
        }
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    pub fn id(&self) -> WindowId {
        WindowId(self.hwnd.0 as usize)
    }

    /// Window bounds in screen coordinates, including the frame.
    pub fn rect(&self) -> WindowResult<Rect> {
        let mut rect = RECT::default();
        // SAFETY: GetWindowRect fills the RECT for a valid HWND.
        unsafe { GetWindowRect(self.hwnd, &mut rect)? };
        Ok(to_rect(rect))
    }

    /// Client area size in physical pixels.
    pub fn client_size(&self) -> WindowResult<(i32, i32)> {
        let mut rect = RECT::default();
        // SAFETY: GetClientRect fills the RECT for a valid HWND.
        unsafe { GetClientRect(self.hwnd, &mut rect)? };
        Ok((rect.right - rect.left, rect.bottom - rect.top))
    }

    /// Screen position of the client area's top-left corner.
    pub fn client_origin(&self) -> WindowResult<Point> {
        let mut origin = POINT::default();
        // SAFETY: ClientToScreen converts the point in place.
        if !unsafe { ClientToScreen(self.hwnd, &mut origin) }.as_bool() {
            return Err(format!("ClientToScreen failed for {}", self.id()).into());
        }
        Ok(Point::new(origin.x, origin.y))
    }

    pub fn is_maximized(&self) -> bool {
        // SAFETY: IsZoomed only reads window state.
        unsafe { IsZoomed(self.hwnd) }.as_bool()
    }

    /// The immediate parent (or owner) window, if any.
    pub fn parent(&self) -> Option<Window> {
        // SAFETY: GetParent only reads window state.
        let parent = unsafe { GetParent(self.hwnd) }.ok()?;
        (!parent.is_invalid()).then_some(Window::new(parent))
    }

    /// Identifier of the thread that created this window.
    pub fn thread_id(&self) -> u32 {
        // SAFETY: GetWindowThreadProcessId only reads window state.
        unsafe { GetWindowThreadProcessId(self.hwnd, None) }
    }

    /// Whether the calling thread created this window. False for
    /// destroyed or invalid handles.
    pub fn is_owned_by_current_thread(&self) -> bool {
        let owner = self.thread_id();
        // SAFETY: GetCurrentThreadId has no preconditions.
        owner != 0 && owner == unsafe { GetCurrentThreadId() }
    }

    /// Forces the system to recompute the non-client area
    /// (`WM_NCCALCSIZE`) without moving, sizing or activating the window.
    pub fn refresh_frame(&self) -> WindowResult<()> {
        // SAFETY: SetWindowPos with FRAMECHANGED only triggers a frame
        // recalculation; position, size and z-order are untouched.
        unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                0,
                0,
                0,
                0,
                SWP_FRAMECHANGED | SWP_NOMOVE | SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE,
            )?;
        }
        Ok(())
    }

    /// Snapshot of the geometry the hit-test engine needs, gathered fresh.
    pub fn hit_test_frame(&self, state: &WindowState) -> WindowResult<HitTestFrame> {
        let dpi = dpi::window_dpi(self.hwnd);
        Ok(HitTestFrame {
            window: self.rect()?,
            client_origin: self.client_origin()?,
            thickness: dpi::frame_thickness(self.hwnd, Some(dpi)),
            caption_height: decor_core::dpi::scaled_caption_height(state.caption_height, dpi),
            maximized: self.is_maximized(),
        })
    }

    /// Classifies a screen point against this window's frame.
    ///
    /// Returns [`Region::None`] when the window geometry can't be queried.
    pub fn classify(&self, state: &WindowState, point: Point) -> Region {
        match self.hit_test_frame(state) {
            Ok(frame) => hit_test::classify(state, &frame, point),
            Err(e) => {
                log_debug!("hit-test geometry unavailable for {}: {e}", self.id());
                Region::None
            }
        }
    }
}

pub(crate) fn to_rect(rect: RECT) -> Rect {
    Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom)
}

pub(crate) fn to_win32_rect(rect: Rect) -> RECT {
    RECT {
        left: rect.left(),
        top: rect.top(),
        right: rect.right(),
        bottom: rect.bottom(),
    }
}
