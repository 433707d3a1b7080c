//! Dense slot numbering for dictionary write targets.

use mang_ir::{LocalName, Name};
use rustc_hash::FxHashMap;

/// Assigns slot `0..k-1` to each distinct name of one dictionary literal, in
/// order of first occurrence.
#[derive(Default, Debug)]
pub struct SlotIndexer {
    slots: FxHashMap<Name, u32>,
    names: Vec<Name>,
}

impl SlotIndexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot for `name`, allocating the next one on first sight.
    pub fn bind(&mut self, name: Name) -> LocalName {
        let next = mang_ir::to_u32(self.names.len(), "dictionary slots");
        let slot = *self.slots.entry(name).or_insert_with(|| {
            self.names.push(name);
            next
        });
        LocalName { name, slot }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in slot order.
    pub fn into_names(self) -> Vec<Name> {
        self.names
    }
}
