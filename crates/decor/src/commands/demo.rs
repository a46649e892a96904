use clap::{Args, ValueEnum};

/// Frame mode shown by the demo window.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoMode {
    /// DWM-drawn frame with a caption band owned by the app
    Custom,
    /// Legacy mode: title bar hidden, native borders kept
    Hidden,
}

/// Arguments for the `demo` subcommand.
#[derive(Args)]
pub struct DemoArgs {
    /// Frame mode to enable on the demo window
    #[arg(long, value_enum, default_value_t = DemoMode::Custom)]
    mode: DemoMode,
    /// Caption height in logical pixels
    #[arg(long, default_value_t = 32)]
    caption_height: i32,
    /// Register minimize/maximize/close zones at the right end of the caption
    #[arg(long)]
    buttons: bool,
}

#[cfg(not(windows))]
pub fn execute(_args: &DemoArgs) {
    println!("The demo window requires Windows.");
}

#[cfg(windows)]
pub fn execute(args: &DemoArgs) {
    win32::run(args);
}

#[cfg(windows)]
mod win32 {
    use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

    use decor_core::{Rect, WindowResult};
    use decor_windows::{Window, dpi, with_manager};
    use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
    use windows::Win32::UI::WindowsAndMessaging::{
        CW_USEDEFAULT, CreateWindowExW, DefWindowProcW, DispatchMessageW, GetMessageW,
        IDC_ARROW, LoadCursorW, MSG, PostQuitMessage, RegisterClassW, TranslateMessage,
        WINDOW_EX_STYLE, WM_DESTROY, WM_SIZE, WNDCLASSW, WS_OVERLAPPEDWINDOW, WS_VISIBLE,
    };
    use windows::core::w;

    use super::{DemoArgs, DemoMode};

    /// Width of each caption button zone in logical pixels.
    const BUTTON_WIDTH: i32 = 46;

    static SHOW_BUTTONS: AtomicBool = AtomicBool::new(false);
    static CAPTION_HEIGHT: AtomicI32 = AtomicI32::new(32);

    pub fn run(args: &DemoArgs) {
        dpi::enable_dpi_awareness();
        SHOW_BUTTONS.store(args.buttons, Ordering::Relaxed);
        CAPTION_HEIGHT.store(args.caption_height, Ordering::Relaxed);

        let window = match create_window() {
            Ok(w) => w,
            Err(e) => {
                eprintln!("Failed to create demo window: {e}");
                return;
            }
        };

        match args.mode {
            DemoMode::Custom => {
                with_manager(|m| m.enable_custom_frame_mode(window.id(), args.caption_height));
            }
            DemoMode::Hidden => with_manager(|m| m.enable_custom_frame(window.id(), true)),
        }
        place_buttons(window);

        println!("Demo window {} open. Close it to exit.", window.id());
        run_message_pump();
        println!("Done.");
    }

    fn create_window() -> WindowResult<Window> {
        unsafe {
            let class_name = w!("DecorDemoWindow");
            let wc = WNDCLASSW {
                lpfnWndProc: Some(demo_wnd_proc),
                lpszClassName: class_name,
                hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
                ..Default::default()
            };

            if RegisterClassW(&wc) == 0 {
                return Err("Failed to register DecorDemoWindow class".into());
            }

            let hwnd = CreateWindowExW(
                WINDOW_EX_STYLE::default(),
                class_name,
                w!("decor demo"),
                WS_OVERLAPPEDWINDOW | WS_VISIBLE,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                960,
                640,
                None,
                None,
                None,
                None,
            )?;
            Ok(Window::new(hwnd))
        }
    }

    /// Zones are dropped by the frame engine whenever the client size
    /// changes, so they are re-sent on every `WM_SIZE`.
    fn place_buttons(window: Window) {
        if !SHOW_BUTTONS.load(Ordering::Relaxed) {
            return;
        }
        let Ok((width, _)) = window.client_size() else {
            return;
        };
        let height = dpi::caption_height(window.hwnd(), CAPTION_HEIGHT.load(Ordering::Relaxed));
        let button = decor_core::dpi::scale(BUTTON_WIDTH, dpi::window_dpi(window.hwnd()));

        let close = Rect::from_ltrb(width - button, 0, width, height);
        let maximize = Rect::from_ltrb(width - 2 * button, 0, width - button, height);
        let minimize = Rect::from_ltrb(width - 3 * button, 0, width - 2 * button, height);
        with_manager(|m| m.set_caption_button_zones(window.id(), minimize, maximize, close));
    }

    unsafe extern "system" fn demo_wnd_proc(
        hwnd: HWND,
        msg: u32,
        wparam: WPARAM,
        lparam: LPARAM,
    ) -> LRESULT {
        match msg {
            WM_SIZE => {
                place_buttons(Window::new(hwnd));
                LRESULT(0)
            }
            WM_DESTROY => {
                unsafe { PostQuitMessage(0) };
                LRESULT(0)
            }
            _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
        }
    }

    fn run_message_pump() {
        let mut msg = MSG::default();

        while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
            unsafe {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }
    }
}
