use std::cell::Cell;
use std::rc::Rc;

/// Single-threaded boolean shared between components that are built apart
/// from each other (the sphere writes "pointer is over me", the cursor reads it).
///
/// Clones observe the same value.
#[derive(Clone, Debug, Default)]
pub struct SharedFlag(Rc<Cell<bool>>);

impl SharedFlag {
    pub fn new(initial: bool) -> Self {
        Self(Rc::new(Cell::new(initial)))
    }

    #[inline]
    pub fn get(&self) -> bool {
        self.0.get()
    }

    #[inline]
    pub fn set(&self, value: bool) {
        self.0.set(value);
    }

    /// Stores `value` and reports whether it differs from the previous one.
    pub fn replace(&self, value: bool) -> bool {
        self.0.replace(value) != value
    }
}
