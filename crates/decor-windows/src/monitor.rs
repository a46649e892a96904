use std::mem;

use decor_core::{Rect, WindowResult};
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, HMONITOR, MONITOR_DEFAULTTONEAREST, MONITORINFO, MonitorFromWindow,
};

use crate::window::to_rect;

/// Full bounds and work area of one monitor.
///
/// The work area excludes the taskbar and any docked toolbars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorAreas {
    pub bounds: Rect,
    pub work: Rect,
}

/// Returns the areas of the monitor nearest to the given window.
pub fn areas_for_window(hwnd: HWND) -> WindowResult<MonitorAreas> {
    // SAFETY: MONITOR_DEFAULTTONEAREST always yields a monitor handle.
    let monitor = unsafe { MonitorFromWindow(hwnd, MONITOR_DEFAULTTONEAREST) };
    areas_for_monitor(monitor)
}

fn areas_for_monitor(monitor: HMONITOR) -> WindowResult<MonitorAreas> {
    let mut info = MONITORINFO {
        cbSize: mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    // SAFETY: GetMonitorInfoW fills the MONITORINFO struct; cbSize is set
    // as the API requires.
    let success = unsafe { GetMonitorInfoW(monitor, &mut info) };

    if !success.as_bool() {
        return Err("Failed to get monitor info".into());
    }

    Ok(MonitorAreas {
        bounds: to_rect(info.rcMonitor),
        work: to_rect(info.rcWork),
    })
}
