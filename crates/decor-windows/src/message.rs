use std::mem;

use decor_core::{Point, WindowId};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{CallWindowProcW, DefWindowProcW, WNDPROC};

/// One window message as received by the replacement procedure.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Message {
    pub hwnd: HWND,
    pub id: u32,
    pub wparam: WPARAM,
    pub lparam: LPARAM,
}

impl Message {
    pub fn window(&self) -> WindowId {
        WindowId(self.hwnd.0 as usize)
    }

    /// Signed screen coordinates packed in `lParam`.
    pub fn point(&self) -> Point {
        point_from_lparam(self.lparam)
    }

    pub fn with_lparam(self, lparam: LPARAM) -> Self {
        Self { lparam, ..self }
    }
}

/// The procedure a managed window had before it was subclassed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OriginalProc(usize);

impl OriginalProc {
    pub fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Forwards `message` to the original procedure, or to the system
    /// default when none was recorded.
    pub fn call(self, message: &Message) -> LRESULT {
        match self.0 {
            0 => default_proc(message),
            raw => {
                // SAFETY: `raw` came from GWLP_WNDPROC of this window, so it
                // is a valid window procedure pointer.
                let proc = unsafe { mem::transmute::<usize, WNDPROC>(raw) };
                unsafe {
                    CallWindowProcW(
                        proc,
                        message.hwnd,
                        message.id,
                        message.wparam,
                        message.lparam,
                    )
                }
            }
        }
    }
}

pub(crate) fn default_proc(message: &Message) -> LRESULT {
    // SAFETY: plain forwarding of a message we were handed.
    unsafe { DefWindowProcW(message.hwnd, message.id, message.wparam, message.lparam) }
}

/// Low word of `lParam` as a signed value.
pub(crate) fn low_word(lparam: LPARAM) -> i32 {
    (lparam.0 & 0xFFFF) as u16 as i16 as i32
}

/// High word of `lParam` as a signed value.
pub(crate) fn high_word(lparam: LPARAM) -> i32 {
    ((lparam.0 >> 16) & 0xFFFF) as u16 as i16 as i32
}

pub(crate) fn point_from_lparam(lparam: LPARAM) -> Point {
    Point::new(low_word(lparam), high_word(lparam))
}

/// Packs a point into an `lParam`, the inverse of [`point_from_lparam`].
pub(crate) fn lparam_from_point(point: Point) -> LPARAM {
    let packed = (point.x as u16 as u32) | ((point.y as u16 as u32) << 16);
    LPARAM(packed as isize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_coordinates_survive_packing() {
        // Arrange: a point on a monitor left of and above the primary.
        let point = Point::new(-1920, -40);

        // Act
        let unpacked = point_from_lparam(lparam_from_point(point));

        // Assert
        assert_eq!(unpacked, point);
    }

    #[test]
    fn words_are_extracted_as_signed() {
        let lparam = LPARAM(0x0020_FFF6);
        assert_eq!(low_word(lparam), -10);
        assert_eq!(high_word(lparam), 32);
    }
}
