use crate::geometry::FrameMargins;
use crate::region::ResizeEdge;
use crate::window::{WindowId, WindowResult};

/// Window-manager operations the frame manager depends on.
///
/// Each platform crate (e.g. `decor-windows`) provides its own
/// implementation. Implementations must tolerate ids of windows that
/// have already been destroyed.
///
/// `refresh_frame`, `begin_resize` and `begin_move` re-enter the
/// window procedure synchronously, so callers must not hold any borrow
/// of shared state across them.
pub trait Platform {
    /// Handle of an installed pre-dispatch hook.
    type Hook;

    /// Substitutes the frame window procedure and returns the previous
    /// one as an opaque pointer value.
    fn subclass(&self, window: WindowId) -> WindowResult<usize>;

    /// Puts back a window procedure previously returned by `subclass`.
    fn restore_proc(&self, window: WindowId, original: usize);

    /// Installs the pre-dispatch hook on the thread that owns `window`.
    fn install_hook(&self, window: WindowId) -> Option<Self::Hook>;

    fn remove_hook(&self, hook: Self::Hook);

    /// Extends the compositor frame into the client area.
    fn extend_frame(&self, window: WindowId, margins: FrameMargins);

    /// Forces the window manager to renegotiate the non-client size.
    fn refresh_frame(&self, window: WindowId);

    fn is_maximized(&self, window: WindowId) -> bool;

    /// Current client area size in physical pixels.
    fn client_size(&self, window: WindowId) -> Option<(i32, i32)>;

    /// Returns the immediate parent (or owner) window, if any.
    fn parent(&self, window: WindowId) -> Option<WindowId>;

    /// Releases pointer capture and starts a native interactive resize.
    fn begin_resize(&self, window: WindowId, edge: ResizeEdge);

    /// Releases pointer capture and starts a native interactive move.
    fn begin_move(&self, window: WindowId);
}
