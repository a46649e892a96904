use crate::region::{CursorShape, Region};

/// What the pre-dispatch hook should do with the cursor after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorUpdate {
    /// Show a resize cursor.
    Set(CursorShape),
    /// The pointer just left a border: restore the arrow once.
    Reset,
    /// Leave the cursor alone.
    Keep,
}

/// Edge-triggered cursor feedback for pointer moves.
///
/// Resize cursors are set on every move over a border; the default cursor
/// is restored only on the transition from border to non-border.
#[derive(Debug, Default)]
pub struct PointerTracker {
    on_border: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moved(&mut self, region: Region) -> CursorUpdate {
        match CursorShape::for_region(region) {
            Some(shape) => {
                self.on_border = true;
                CursorUpdate::Set(shape)
            }
            None if self.on_border => {
                self.on_border = false;
                CursorUpdate::Reset
            }
            None => CursorUpdate::Keep,
        }
    }

    pub fn is_on_border(&self) -> bool {
        self.on_border
    }
}
