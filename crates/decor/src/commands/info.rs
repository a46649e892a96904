use decor_core::config;
use decor_core::dpi::RESIZE_BORDER_WIDTH;

pub fn execute() {
    let config = config::load();

    println!("Resize border width: {RESIZE_BORDER_WIDTH} px");
    println!(
        "Default caption height: {} px (logical)",
        config.frame.caption_height
    );
    match config::config_path() {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: unavailable (no home directory)"),
    }
    print_platform();
}

#[cfg(windows)]
fn print_platform() {
    let caps = decor_windows::capabilities::get();
    let build = caps
        .build
        .map_or_else(|| "unknown".to_string(), |b| b.to_string());

    println!("OS build: {build}");
    println!("Per-monitor DPI metrics: {}", yes_no(caps.per_monitor_dpi()));
    println!("Windows 11: {}", yes_no(caps.windows11));
}

#[cfg(not(windows))]
fn print_platform() {
    println!("Platform: not Windows, frame engine unavailable");
}

#[cfg(windows)]
fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
