//! Detects which optional OS features are present.
//!
//! Detection runs once per process and the result is cached; every later
//! query reads the cached value. Functions newer than the oldest supported
//! user32 are resolved here at runtime and called through the stored
//! pointers, never through import-library bindings, so the library still
//! loads where they are missing.

use std::mem;
use std::sync::OnceLock;

use decor_core::dpi::is_windows11_build;
use decor_core::log_debug;
use windows::Win32::Foundation::HWND;
use windows::Win32::System::LibraryLoader::{GetModuleHandleW, GetProcAddress};
use windows::Win32::UI::HiDpi::DPI_AWARENESS_CONTEXT;
use windows::Win32::System::Registry::{
    HKEY, HKEY_LOCAL_MACHINE, KEY_QUERY_VALUE, RegCloseKey, RegOpenKeyExW, RegQueryValueExW,
};
use windows::core::{PCSTR, PCWSTR, s, w};

const VERSION_KEY: &str = r"SOFTWARE\Microsoft\Windows NT\CurrentVersion";
const BUILD_VALUE: &str = "CurrentBuildNumber";

static CAPABILITIES: OnceLock<Capabilities> = OnceLock::new();

/// `GetDpiForWindow`.
pub type GetDpiForWindowFn = unsafe extern "system" fn(HWND) -> u32;
/// `GetSystemMetricsForDpi`, taking the raw `SM_*` index.
pub type GetSystemMetricsForDpiFn = unsafe extern "system" fn(i32, u32) -> i32;
/// `SetProcessDpiAwarenessContext`; the result is a Win32 `BOOL`.
pub type SetDpiAwarenessContextFn = unsafe extern "system" fn(DPI_AWARENESS_CONTEXT) -> i32;

/// Per-monitor DPI entry points (Windows 10 1607 and later).
#[derive(Debug, Clone, Copy)]
pub struct DpiApi {
    pub dpi_for_window: GetDpiForWindowFn,
    pub metrics_for_dpi: GetSystemMetricsForDpiFn,
}

/// Optional OS features the frame engine adapts to.
#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
    /// Present when both per-DPI functions are exported by user32.
    pub dpi_api: Option<DpiApi>,
    /// `SetProcessDpiAwarenessContext`, when exported.
    pub set_dpi_awareness: Option<SetDpiAwarenessContextFn>,
    /// The OS build is Windows 11 or newer (snap layouts on caption buttons).
    pub windows11: bool,
    /// Raw OS build number, when it could be read.
    pub build: Option<u32>,
}

/// Returns the cached capabilities, probing on first use.
pub fn get() -> Capabilities {
    *CAPABILITIES.get_or_init(detect)
}

impl Capabilities {
    pub fn per_monitor_dpi(&self) -> bool {
        self.dpi_api.is_some()
    }
}

fn detect() -> Capabilities {
    let dpi_for_window = user32_export(s!("GetDpiForWindow"));
    let metrics_for_dpi = user32_export(s!("GetSystemMetricsForDpi"));
    // SAFETY: each pointer is reinterpreted as the documented signature of
    // the export it was resolved from.
    let dpi_api = match (dpi_for_window, metrics_for_dpi) {
        (Some(dpi), Some(metrics)) => Some(DpiApi {
            dpi_for_window: unsafe { mem::transmute::<usize, GetDpiForWindowFn>(dpi) },
            metrics_for_dpi: unsafe { mem::transmute::<usize, GetSystemMetricsForDpiFn>(metrics) },
        }),
        _ => None,
    };
    let set_dpi_awareness = user32_export(s!("SetProcessDpiAwarenessContext"))
        .map(|f| unsafe { mem::transmute::<usize, SetDpiAwarenessContextFn>(f) });
    let build = build_number();
    let capabilities = Capabilities {
        dpi_api,
        set_dpi_awareness,
        windows11: build.is_some_and(is_windows11_build),
        build,
    };
    log_debug!("detected capabilities: {capabilities:?}");
    capabilities
}

/// Address of a user32 export, if the running OS has it.
fn user32_export(name: PCSTR) -> Option<usize> {
    // SAFETY: user32 is loaded in every GUI process; only the export
    // address is looked up here.
    unsafe {
        let module = GetModuleHandleW(w!("user32.dll")).ok()?;
        GetProcAddress(module, name).map(|f| f as usize)
    }
}

/// Reads `CurrentBuildNumber` (a `REG_SZ`) from the OS version key.
fn build_number() -> Option<u32> {
    let wide_key = to_wide(VERSION_KEY);
    let wide_name = to_wide(BUILD_VALUE);
    let mut key = HKEY::default();
    // SAFETY: standard registry read; the key is closed below.
    let status = unsafe {
        RegOpenKeyExW(
            HKEY_LOCAL_MACHINE,
            PCWSTR(wide_key.as_ptr()),
            None,
            KEY_QUERY_VALUE,
            &mut key,
        )
    };
    if status.is_err() {
        log_debug!("could not open version key: {status:?}");
        return None;
    }

    let mut buffer = [0u16; 32];
    let mut size = (buffer.len() * 2) as u32;
    // SAFETY: the buffer is valid for `size` bytes and the call writes at
    // most that many.
    let status = unsafe {
        RegQueryValueExW(
            key,
            PCWSTR(wide_name.as_ptr()),
            None,
            None,
            Some(buffer.as_mut_ptr().cast()),
            Some(&mut size as *mut u32),
        )
    };
    // SAFETY: key was opened above.
    unsafe {
        let _ = RegCloseKey(key);
    }
    if status.is_err() {
        log_debug!("could not read build number: {status:?}");
        return None;
    }

    let chars = (size as usize / 2).min(buffer.len());
    let text = String::from_utf16_lossy(&buffer[..chars]);
    text.trim_end_matches('\0').trim().parse().ok()
}

fn to_wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}
