//! Lifecycle manager: the entry points the host calls to change a
//! window's frame mode, plus the lookups the interception layer uses.

use std::cell::RefCell;

use crate::config::FrameConfig;
use crate::geometry::FrameMargins;
use crate::hook::SharedHook;
use crate::mode::FrameMode;
use crate::platform::Platform;
use crate::pointer::{CursorUpdate, PointerTracker};
use crate::rect::Rect;
use crate::region::{Region, ResizeEdge};
use crate::registry::Registry;
use crate::state::{WindowState, effective_caption_height};
use crate::window::WindowId;
use crate::{log_debug, log_info, log_warn};


/// Owns the window registry and the shared pre-dispatch hook.
///
/// All methods take `&self` and keep registry borrows short: platform
/// calls that re-enter the window procedure (frame refresh, native
/// resize/move) always run with no borrow held.
pub struct FrameManager<P: Platform> {
    platform: P,
    registry: RefCell<Registry>,
    hook: RefCell<SharedHook<P::Hook>>,
    pointer: RefCell<PointerTracker>,
    default_caption_height: i32,
}

impl<P: Platform> FrameManager<P> {
    pub fn new(platform: P, config: &FrameConfig) -> Self {
        Self {
            platform,
            registry: RefCell::new(Registry::new()),
            hook: RefCell::new(SharedHook::new()),
            pointer: RefCell::new(PointerTracker::new()),
            default_caption_height: effective_caption_height(
                config.caption_height,
                crate::state::DEFAULT_CAPTION_HEIGHT,
            ),
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Enables custom-frame mode with a caption height in logical pixels.
    ///
    /// Registers the window on first use. Repeating the call with the
    /// same height changes nothing but still refreshes the frame.
    pub fn enable_custom_frame_mode(&self, window: WindowId, caption_height: i32) {
        if !self.ensure_registered(window) {
            return;
        }
        let height = effective_caption_height(caption_height, self.default_caption_height);
        self.update(window, |state| {
            state.mode = FrameMode::CustomFrame;
            state.caption_height = height;
        });
        log_info!("custom frame enabled on {window} (caption {height}px)");
        self.apply_frame(window, FrameMode::CustomFrame);
    }

    /// Legacy toggle between hidden mode and normal mode.
    ///
    /// Disabling an unknown window does nothing.
    pub fn enable_custom_frame(&self, window: WindowId, enable: bool) {
        if enable {
            if !self.ensure_registered(window) {
                return;
            }
            self.update(window, |state| state.mode = FrameMode::Hidden);
            log_info!("hidden frame enabled on {window}");
            self.apply_frame(window, FrameMode::Hidden);
        } else {
            self.disable_custom_frame(window);
        }
    }

    /// Returns the window to normal mode without deregistering it.
    pub fn disable_custom_frame(&self, window: WindowId) {
        if self
            .update(window, |state| state.mode = FrameMode::Normal)
            .is_some()
        {
            log_info!("frame disabled on {window}");
            self.apply_frame(window, FrameMode::Normal);
        }
    }

    /// Stores caption button zones (client coordinates) and enables them.
    ///
    /// The current client size is recorded as the size the zones were laid
    /// out for.
    pub fn set_caption_button_zones(
        &self,
        window: WindowId,
        minimize: Rect,
        maximize: Rect,
        close: Rect,
    ) {
        let layout_size = self.platform.client_size(window);
        self.update(window, |state| {
            state.client_size = layout_size.or(state.client_size);
            state.buttons.minimize = minimize;
            state.buttons.maximize = maximize;
            state.buttons.close = close;
            state.buttons.enabled = true;
        });
    }

    /// Stops hit-testing caption buttons. The zones are kept.
    pub fn clear_caption_button_zones(&self, window: WindowId) {
        self.update(window, |state| state.buttons.enabled = false);
    }

    /// Records a new client size. Enabled caption button zones laid out
    /// for any other size (or an unknown one) become stale and stay
    /// disabled until the host sends fresh ones.
    pub fn client_resized(&self, window: WindowId, width: i32, height: i32) {
        let invalidated = self.update(window, |state| {
            let previous = state.client_size.replace((width, height));
            let invalidate = state.buttons.enabled && previous != Some((width, height));
            if invalidate {
                state.buttons.enabled = false;
            }
            invalidate
        });
        if invalidated == Some(true) {
            log_debug!("caption buttons on {window} invalidated by resize to {width}x{height}");
        }
    }

    /// Sets the caption height in logical pixels. Non-positive values
    /// reset it to the default.
    pub fn set_caption_height(&self, window: WindowId, caption_height: i32) {
        let height = effective_caption_height(caption_height, self.default_caption_height);
        self.update(window, |state| state.caption_height = height);
    }

    /// Current mode, or `Normal` for unknown windows.
    pub fn frame_mode(&self, window: WindowId) -> FrameMode {
        self.state(window).map(|s| s.mode).unwrap_or_default()
    }

    pub fn is_custom_frame_enabled(&self, window: WindowId) -> bool {
        self.frame_mode(window).is_managed()
    }

    /// Restores the original window procedure and forgets the window.
    ///
    /// Removing the last window removes the pre-dispatch hook.
    pub fn restore_window_proc(&self, window: WindowId) {
        let removed = self.registry.borrow_mut().remove(window);
        let Some(state) = removed else {
            return;
        };
        self.platform.restore_proc(window, state.original_proc);
        self.hook.borrow_mut().release(|hook| {
            self.platform.remove_hook(hook);
            log_info!("pre-dispatch hook removed");
        });
        if self.registry.borrow().is_empty() {
            *self.pointer.borrow_mut() = PointerTracker::new();
        }
        log_info!("{window} restored and deregistered");
    }

    /// Starts a native resize from an edge index (0-7).
    ///
    /// Invalid indices and maximized windows are ignored.
    pub fn start_resize(&self, window: WindowId, edge_index: i32) {
        let Some(edge) = ResizeEdge::from_index(edge_index) else {
            log_debug!("ignoring resize of {window} from invalid edge {edge_index}");
            return;
        };
        if self.platform.is_maximized(window) {
            log_debug!("ignoring resize of maximized {window}");
            return;
        }
        self.platform.begin_resize(window, edge);
    }

    /// Starts a native move.
    pub fn start_drag(&self, window: WindowId) {
        self.platform.begin_move(window);
    }

    /// Snapshot of a window's state.
    pub fn state(&self, window: WindowId) -> Option<WindowState> {
        self.registry.borrow().get(window).copied()
    }

    /// Resolves the managed window a message recipient belongs to: the
    /// recipient itself, or failing that its immediate parent.
    pub fn managed_window_for(&self, recipient: WindowId) -> Option<(WindowId, WindowState)> {
        if let Some(state) = self.registry.borrow().managed(recipient) {
            return Some((recipient, state));
        }
        let parent = self.platform.parent(recipient)?;
        let state = self.registry.borrow().managed(parent)?;
        Some((parent, state))
    }

    /// Feeds a pointer-move classification to the cursor tracker.
    pub fn pointer_moved(&self, region: Region) -> CursorUpdate {
        self.pointer.borrow_mut().moved(region)
    }

    /// Number of registered windows.
    pub fn window_count(&self) -> usize {
        self.registry.borrow().len()
    }

    pub fn hook_installed(&self) -> bool {
        self.hook.borrow().is_installed()
    }

    /// Subclasses and registers `window` if it is not registered yet.
    ///
    /// Returns `false` when the window procedure could not be substituted;
    /// such a window is left untouched and unregistered.
    fn ensure_registered(&self, window: WindowId) -> bool {
        if self.registry.borrow().contains(window) {
            return true;
        }
        let original = match self.platform.subclass(window) {
            Ok(original) => original,
            Err(e) => {
                log_warn!("could not subclass {window}: {e}");
                return false;
            }
        };
        self.registry
            .borrow_mut()
            .insert(window, WindowState::new(original));
        self.hook.borrow_mut().acquire(|| {
            let hook = self.platform.install_hook(window);
            if hook.is_some() {
                log_info!("pre-dispatch hook installed for {window}");
            }
            hook
        });
        log_info!("{window} registered");
        true
    }

    /// Mutates a registered window's state. Returns `None` for unknown
    /// windows.
    fn update<R>(&self, window: WindowId, f: impl FnOnce(&mut WindowState) -> R) -> Option<R> {
        self.registry.borrow_mut().get_mut(window).map(f)
    }

    /// Applies a mode's frame extension and forces a non-client refresh.
    fn apply_frame(&self, window: WindowId, mode: FrameMode) {
        self.platform
            .extend_frame(window, FrameMargins::for_mode(mode));
        self.platform.refresh_frame(window);
    }
}
