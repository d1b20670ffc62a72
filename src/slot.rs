// Shared holder for a callback that re-schedules itself; kept free of web_sys
// so host tests can include it.

use std::cell::RefCell;
use std::rc::Rc;

/// A callback that captures a clone of its own slot forms an `Rc` cycle.
/// The cycle lasts until [`CallbackSlot::release`] empties the slot.
pub struct CallbackSlot<T>(Rc<RefCell<Option<T>>>);

impl<T> Clone for CallbackSlot<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for CallbackSlot<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<T> CallbackSlot<T> {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn fill(&self, callback: T) {
        *self.0.borrow_mut() = Some(callback);
    }

    /// Runs `f` on the stored callback, if any.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.0.borrow().as_ref().map(f)
    }

    /// Empties the slot, breaking the cycle. Safe to call more than once.
    pub fn release(&self) -> Option<T> {
        self.0.borrow_mut().take()
    }

    #[inline]
    pub fn is_filled(&self) -> bool {
        self.0.borrow().is_some()
    }
}
