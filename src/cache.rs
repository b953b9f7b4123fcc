//! Compute-once memo slot for cover results.
//!
//! A [`Memo`] is either empty or holds one computed value. The value is produced
//! by the first [`get_or_compute`][Memo::get_or_compute] call and kept until
//! [`clear`][Memo::clear] is called; nothing else invalidates it.
//!
//! The slot is not thread-safe. Callers sharing one across threads must
//! serialize access themselves.

use std::cell::{Cell, OnceCell};
use std::fmt::{Debug, Formatter};

/// Covers produced by a minimizer: term groups, each a sequence of literal patterns.
pub type Covers = Vec<Vec<String>>;

/// Memo slot holding [`Covers`].
pub type CoversCache = Memo<Covers>;

/// A slot that is empty or holds one computed value.
pub struct Memo<T> {
    slot: OnceCell<T>,
    hits: Cell<usize>,
    misses: Cell<usize>,
}

impl<T> Memo<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            slot: OnceCell::new(),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    /// Get the number of reads served from the slot.
    pub fn hits(&self) -> usize {
        self.hits.get()
    }
    /// Get the number of reads that had to compute the value.
    pub fn misses(&self) -> usize {
        self.misses.get()
    }

    /// Check if a value is held.
    pub fn is_computed(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Get the held value, without computing it.
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Get the held value, computing it with `compute` if the slot is empty.
    pub fn get_or_compute(&self, compute: impl FnOnce() -> T) -> &T {
        if let Some(value) = self.slot.get() {
            self.hits.set(self.hits.get() + 1);
            return value;
        }
        self.misses.set(self.misses.get() + 1);
        self.slot.get_or_init(compute)
    }

    /// Reset the slot, returning the value it held.
    pub fn clear(&mut self) -> Option<T> {
        self.slot.take()
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Memo<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }
}

impl<T: Debug> Debug for Memo<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memo")
            .field("value", &self.slot.get())
            .field("hits", &self.hits.get())
            .field("misses", &self.misses.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_compute_once() {
        let memo = Memo::new();
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            42
        };

        assert!(!memo.is_computed());
        assert_eq!(memo.get(), None);
        assert_eq!(*memo.get_or_compute(compute), 42);
        assert_eq!(*memo.get_or_compute(compute), 42);
        assert_eq!(calls.get(), 1);
        assert_eq!(memo.misses(), 1);
        assert_eq!(memo.hits(), 1);
        assert_eq!(memo.get(), Some(&42));
    }

    #[test]
    fn test_clear_recomputes() {
        let mut memo = Memo::new();
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            vec![vec![calls.get().to_string()]]
        };

        assert_eq!(memo.get_or_compute(compute), &vec![vec!["1".to_string()]]);
        assert_eq!(memo.clear(), Some(vec![vec!["1".to_string()]]));
        assert!(!memo.is_computed());
        assert_eq!(memo.get_or_compute(compute), &vec![vec!["2".to_string()]]);
        assert_eq!(calls.get(), 2);
        assert_eq!(memo.misses(), 2);
    }

    #[test]
    fn test_clear_empty() {
        let mut memo: CoversCache = Memo::default();
        assert_eq!(memo.clear(), None);
    }

    #[test]
    fn test_clone_keeps_value() {
        let memo = Memo::new();
        memo.get_or_compute(|| 7);
        let copy = memo.clone();
        assert_eq!(copy.get(), Some(&7));
        assert_eq!(copy.hits(), 0);
    }
}
