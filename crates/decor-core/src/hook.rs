/// Reference-counted ownership of the thread's pre-dispatch hook.
///
/// The hook is installed on the first [`acquire`](Self::acquire) and
/// removed when the count returns to zero. It is never installed twice.
#[derive(Debug)]
pub struct SharedHook<H> {
    handle: Option<H>,
    count: usize,
}

impl<H> Default for SharedHook<H> {
    fn default() -> Self {
        Self {
            handle: None,
            count: 0,
        }
    }
}

impl<H> SharedHook<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes a reference, calling `install` if no hook is held yet.
    ///
    /// The reference is counted even if installation fails, so releases
    /// stay balanced with acquires; the next acquire retries.
    pub fn acquire(&mut self, install: impl FnOnce() -> Option<H>) {
        if self.handle.is_none() {
            self.handle = install();
        }
        self.count += 1;
    }

    /// Drops a reference. At zero the hook is handed to `remove`.
    ///
    /// Releasing with no outstanding references is a no-op.
    pub fn release(&mut self, remove: impl FnOnce(H)) {
        if self.count == 0 {
            return;
        }
        self.count -= 1;
        if self.count == 0
            && let Some(handle) = self.handle.take()
        {
            remove(handle);
        }
    }

    pub fn is_installed(&self) -> bool {
        self.handle.is_some()
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn installs_once_and_removes_at_zero() {
        // Arrange
        let mut hook = SharedHook::new();
        let mut installs = 0;
        let mut removals = 0;

        // Act
        for _ in 0..3 {
            hook.acquire(|| {
                installs += 1;
                Some(7u32)
            });
        }
        hook.release(|_| removals += 1);
        hook.release(|_| removals += 1);

        // Assert
        assert_eq!(installs, 1);
        assert_eq!(removals, 0);
        assert!(hook.is_installed());

        hook.release(|h| {
            assert_eq!(h, 7);
            removals += 1;
        });
        assert_eq!(removals, 1);
        assert!(!hook.is_installed());
    }

    #[test]
    fn release_without_acquire_is_ignored() {
        let mut hook: SharedHook<u32> = SharedHook::new();

        hook.release(|_| panic!("nothing to remove"));

        assert_eq!(hook.count(), 0);
    }

    #[test]
    fn failed_install_is_retried_on_next_acquire() {
        // Arrange
        let mut hook = SharedHook::new();

        // Act
        hook.acquire(|| None);
        hook.acquire(|| Some(1u32));

        // Assert
        assert!(hook.is_installed());
        assert_eq!(hook.count(), 2);
    }
}
