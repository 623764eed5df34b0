//! Shared variable store

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Name-to-result store shared by the commands constructed with it.
///
/// Clones share the same underlying map, so a calculator session builds
/// one `Memory` and hands clones to each command that needs it. Entries
/// are created or overwritten by `set` and never removed. The store is
/// single-threaded state; a concurrent serving layer must give each
/// session its own.
pub struct Memory<R> {
    slots: Rc<RefCell<BTreeMap<String, R>>>,
}

impl<R: Clone> Memory<R> {
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(BTreeMap::new())),
        }
    }

    pub fn get(&self, name: &str) -> Option<R> {
        self.slots.borrow().get(name).cloned()
    }

    pub fn set(&self, name: &str, value: R) {
        self.slots.borrow_mut().insert(name.to_string(), value);
    }

    /// All entries in name order.
    pub fn entries(&self) -> Vec<(String, R)> {
        self.slots
            .borrow()
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}

impl<R> Clone for Memory<R> {
    fn clone(&self) -> Self {
        Self {
            slots: Rc::clone(&self.slots),
        }
    }
}

impl<R: Clone> Default for Memory<R> {
    fn default() -> Self {
        Self::new()
    }
}
