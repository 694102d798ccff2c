//! Canonical identifier interning
//!
//! Index keys are small integers instead of identifier strings that would
//! otherwise be repeated across three index trees and the quad map.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// Interned canonical identifier, local to one store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TermId(u32);

impl TermId {
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TermId({})", self.0)
    }
}

/// Bidirectional map between canonical identifiers and dense ids.
/// Ids are handed out in order and never reused.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    ids: FxHashMap<Arc<str>, TermId>,
    strings: Vec<Arc<str>>,
}

impl Interner {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            strings: Vec::with_capacity(capacity),
        }
    }

    /// Id for `value`, assigning the next one on first sight.
    /// `None` once the id space is used up.
    pub fn intern(&mut self, value: &str) -> Option<TermId> {
        if let Some(&id) = self.ids.get(value) {
            return Some(id);
        }
        let id = TermId(u32::try_from(self.strings.len()).ok()?);
        let shared: Arc<str> = Arc::from(value);
        self.ids.insert(Arc::clone(&shared), id);
        self.strings.push(shared);
        Some(id)
    }

    /// Id of an already interned identifier
    pub fn get(&self, value: &str) -> Option<TermId> {
        self.ids.get(value).copied()
    }

    /// Identifier behind an id
    pub fn resolve(&self, id: TermId) -> Option<&str> {
        self.strings.get(id.0 as usize).map(|s| &**s)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }
}
