use decor_core::FrameThickness;
use decor_core::dpi::{BASE_DPI, scale_thickness, scaled_caption_height};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::HiDpi::DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2;
use windows::Win32::UI::WindowsAndMessaging::{
    GetSystemMetrics, SM_CXPADDEDBORDER, SM_CXSIZEFRAME, SM_CYSIZEFRAME,
};

use crate::capabilities::{self, DpiApi};

/// Declares this process as per-monitor DPI aware (V2).
///
/// Host processes usually set this through their manifest; the call is
/// then rejected and the error ignored. Older systems without the API are
/// left as they are.
pub fn enable_dpi_awareness() {
    if let Some(set_awareness) = capabilities::get().set_dpi_awareness {
        // SAFETY: resolved from user32 with this exact signature.
        unsafe {
            set_awareness(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
        }
    }
}

/// Returns the DPI of the monitor hosting `hwnd`, or 96 on systems
/// without per-monitor DPI support.
pub fn window_dpi(hwnd: HWND) -> u32 {
    let Some(api) = capabilities::get().dpi_api else {
        return BASE_DPI;
    };
    // SAFETY: GetDpiForWindow returns 0 for an invalid handle.
    match unsafe { (api.dpi_for_window)(hwnd) } {
        0 => BASE_DPI,
        dpi => dpi,
    }
}

/// Resize frame thickness (frame plus padded border) for `hwnd`.
///
/// `dpi_override` replaces the window's current DPI, e.g. while a DPI
/// change is in flight.
pub fn frame_thickness(hwnd: HWND, dpi_override: Option<u32>) -> FrameThickness {
    let dpi = dpi_override.unwrap_or_else(|| window_dpi(hwnd));
    thickness_at(capabilities::get().dpi_api, dpi)
}

/// Without the per-DPI API the unscaled system values are scaled by
/// `dpi / 96`.
fn thickness_at(api: Option<DpiApi>, dpi: u32) -> FrameThickness {
    match api {
        // SAFETY: resolved from user32 with this exact signature; pure
        // metric queries.
        Some(api) => unsafe {
            FrameThickness::from_metrics(
                (api.metrics_for_dpi)(SM_CXSIZEFRAME.0, dpi),
                (api.metrics_for_dpi)(SM_CYSIZEFRAME.0, dpi),
                (api.metrics_for_dpi)(SM_CXPADDEDBORDER.0, dpi),
            )
        },
        None => scale_thickness(system_thickness(), dpi),
    }
}

fn system_thickness() -> FrameThickness {
    // SAFETY: pure metric queries.
    unsafe {
        FrameThickness::from_metrics(
            GetSystemMetrics(SM_CXSIZEFRAME),
            GetSystemMetrics(SM_CYSIZEFRAME),
            GetSystemMetrics(SM_CXPADDEDBORDER),
        )
    }
}

/// Converts a logical caption height to physical pixels for `hwnd`.
pub fn caption_height(hwnd: HWND, logical: i32) -> i32 {
    scaled_caption_height(logical, window_dpi(hwnd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_scales_system_metrics_by_dpi_ratio() {
        // Arrange
        let base = system_thickness();

        // Act
        let at_base = thickness_at(None, BASE_DPI);
        let doubled = thickness_at(None, 2 * BASE_DPI);

        // Assert
        assert_eq!(at_base, base);
        assert_eq!(doubled, FrameThickness::new(base.x * 2, base.y * 2));
    }

    #[test]
    fn per_dpi_api_grows_with_dpi_when_available() {
        let Some(api) = capabilities::get().dpi_api else {
            return;
        };

        let at_base = thickness_at(Some(api), BASE_DPI);
        let doubled = thickness_at(Some(api), 2 * BASE_DPI);

        assert!(doubled.x >= at_base.x);
        assert!(doubled.y >= at_base.y);
    }
}
