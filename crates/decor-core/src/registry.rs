use std::collections::HashMap;

use crate::state::WindowState;
use crate::window::WindowId;

/// Keyed store of per-window frame state.
///
/// Not synchronised: every access happens on the thread that owns the
/// windows, through message dispatch or the host's calls.
#[derive(Debug, Default)]
pub struct Registry {
    windows: HashMap<WindowId, WindowState>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowState> {
        self.windows.get(&id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowState> {
        self.windows.get_mut(&id)
    }

    /// Inserts or replaces the state for `id`.
    pub fn insert(&mut self, id: WindowId, state: WindowState) {
        self.windows.insert(id, state);
    }

    /// Removes and returns the state for `id`.
    pub fn remove(&mut self, id: WindowId) -> Option<WindowState> {
        self.windows.remove(&id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Returns `id`'s state if it is registered with a managed mode.
    pub fn managed(&self, id: WindowId) -> Option<WindowState> {
        self.get(id).filter(|s| s.mode.is_managed()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::FrameMode;

    #[test]
    fn managed_requires_non_normal_mode() {
        // Arrange
        let mut registry = Registry::new();
        registry.insert(WindowId(1), WindowState::new(0x10));
        registry.insert(
            WindowId(2),
            WindowState {
                mode: FrameMode::Hidden,
                ..WindowState::new(0x20)
            },
        );

        // Act / Assert
        assert!(registry.managed(WindowId(1)).is_none());
        assert_eq!(
            registry.managed(WindowId(2)).map(|s| s.mode),
            Some(FrameMode::Hidden)
        );
        assert!(registry.managed(WindowId(3)).is_none());
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let mut registry = Registry::new();
        registry.insert(WindowId(1), WindowState::new(4));
        registry.insert(WindowId(1), WindowState::new(5));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(WindowId(1)).map(|s| s.original_proc), Some(5));
    }
}
