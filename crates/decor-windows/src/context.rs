use decor_core::{FrameManager, WindowId, config, log, log_debug, log_info};

use crate::platform::Win32Platform;
use crate::window::Window;

thread_local! {
    /// The frame manager for windows created on this thread.
    ///
    /// Window procedures and the message hook run on the thread that owns
    /// the window, so each UI thread gets its own registry.
    static MANAGER: FrameManager<Win32Platform> = new_manager();
}

fn new_manager() -> FrameManager<Win32Platform> {
    let config = config::load();
    log::init(&config.logging);
    log_info!(
        "frame manager ready (default caption height {})",
        config.frame.caption_height
    );
    FrameManager::new(Win32Platform, &config.frame)
}

/// Runs `f` with this thread's frame manager.
///
/// The manager only borrows its state for the duration of each method, so
/// `f` may trigger window messages that re-enter the manager.
pub fn with_manager<R>(f: impl FnOnce(&FrameManager<Win32Platform>) -> R) -> R {
    MANAGER.with(f)
}

/// Like [`with_manager`], but returns `None` once the thread's manager has
/// been torn down. Used from OS callbacks, which must never panic.
pub(crate) fn try_with_manager<R>(
    f: impl FnOnce(&FrameManager<Win32Platform>) -> R,
) -> Option<R> {
    MANAGER.try_with(f).ok()
}

/// Runs `f` only when called on the thread that owns `window`.
///
/// A window's messages are always handled by its owner thread's manager,
/// so registering it anywhere else would subclass it into a registry its
/// window procedure can't see.
pub(crate) fn with_owned_window<R>(
    window: WindowId,
    f: impl FnOnce(&FrameManager<Win32Platform>) -> R,
) -> Option<R> {
    if !Window::from_id(window).is_owned_by_current_thread() {
        log_debug!("ignoring call for {window} from a thread that does not own it");
        return None;
    }
    try_with_manager(f)
}
