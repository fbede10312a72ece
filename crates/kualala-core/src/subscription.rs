//! Scoped ownership of a listener registration.
//!
//! A [`Subscription`] holds at most one live registration and releases it
//! when told to, when replaced, or when dropped, whichever happens first.

/// Handle that detaches a listener when consumed.
pub trait Unsubscribe {
    fn unsubscribe(self);
}

/// Slot for one listener registration.
#[derive(Debug)]
pub struct Subscription<H: Unsubscribe> {
    handle: Option<H>,
}

impl<H: Unsubscribe> Subscription<H> {
    pub fn new() -> Self {
        Self { handle: None }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Registers through `attach`, releasing any previous registration first.
    pub fn acquire(&mut self, attach: impl FnOnce() -> H) {
        self.release();
        self.handle = Some(attach());
    }

    /// Detaches the current registration. No-op when idle.
    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.unsubscribe();
        }
    }
}

impl<H: Unsubscribe> Default for Subscription<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Unsubscribe> Drop for Subscription<H> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counted(Rc<Cell<u32>>);

    impl Unsubscribe for Counted {
        fn unsubscribe(self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_release_once() {
        let released = Rc::new(Cell::new(0));
        let mut sub = Subscription::new();
        sub.acquire(|| Counted(released.clone()));
        assert!(sub.is_active());
        sub.release();
        sub.release();
        assert!(!sub.is_active());
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_reacquire_releases_previous() {
        let released = Rc::new(Cell::new(0));
        let mut sub = Subscription::new();
        sub.acquire(|| Counted(released.clone()));
        sub.acquire(|| Counted(released.clone()));
        assert_eq!(released.get(), 1);
        assert!(sub.is_active());
    }

    #[test]
    fn test_drop_releases() {
        let released = Rc::new(Cell::new(0));
        {
            let mut sub = Subscription::new();
            sub.acquire(|| Counted(released.clone()));
        }
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_idle_drop_is_silent() {
        let released = Rc::new(Cell::new(0));
        drop(Subscription::<Counted>::new());
        assert_eq!(released.get(), 0);
    }
}
