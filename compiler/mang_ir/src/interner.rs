//! String interner for identifiers.
//!
//! Single-threaded: the arena that owns it has exactly one writer.

use rustc_hash::FxHashMap;

use crate::{to_u32, Name};

/// Maps identifier text to [`Name`] and back.
///
/// Lookup by name is an index into `strings`; interning goes through an
/// `FxHashMap` keyed by the text.
#[derive(Default, Clone, Debug)]
pub struct StringInterner {
    map: FxHashMap<Box<str>, Name>,
    strings: Vec<Box<str>>,
}

impl StringInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` distinct strings are interned.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&name) = self.map.get(s) {
            return name;
        }
        let name = Name::from_raw(to_u32(self.strings.len(), "interned names"));
        self.strings.push(s.into());
        self.map.insert(s.into(), name);
        name
    }

    /// Look up an already-interned string without interning it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.map.get(s).copied()
    }

    /// Look up the string for a Name.
    ///
    /// # Panics
    /// Panics if the name was not produced by this interner.
    pub fn lookup(&self, name: Name) -> &str {
        match self.strings.get(name.index()) {
            Some(s) => s,
            None => panic!(
                "Name {} out of range for interner of size {}",
                name.raw(),
                self.strings.len()
            ),
        }
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.strings.clear();
    }
}
