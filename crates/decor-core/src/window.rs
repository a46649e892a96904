/// A boxed error type for platform queries.
///
/// Any error type that implements the `Error` trait can be boxed into this.
/// Frame management never surfaces these to the host; they are logged and
/// replaced by a safe default at the call site.
pub type WindowResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Stable identity of a window, wrapping the raw pointer-sized handle.
///
/// Holding a `WindowId` does not keep the window alive. The host may
/// destroy the window while calls referencing it are still queued, so
/// every lookup through this id must tolerate a missing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub usize);

impl WindowId {
    /// Returns the raw handle value.
    pub fn raw(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}
