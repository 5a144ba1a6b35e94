//! Generic id-keyed table of static game data
//!
//! Built-in records are seeded first; externally supplied records are
//! appended by `merge` and never replace or deduplicate earlier entries.
//! Lookups go through a lazily built id index in which the first occurrence
//! of an id wins, so later duplicates are silently shadowed.

use std::cell::RefCell;
use std::collections::HashMap;

/// A record stored in a [`Repository`], addressable by string id.
pub trait Record {
    fn id(&self) -> &str;
}

/// Ordered table of static game data (items, skills, enemies, events).
///
/// Populated once at startup and read-only afterwards except for explicit
/// `merge`. The id index is rebuilt lazily on the first lookup after a
/// merge; the simulation runs on a single update thread, so the rebuild is
/// guarded with a `RefCell` rather than a lock.
#[derive(Debug)]
pub struct Repository<T: Record> {
    records: Vec<T>,
    fallback_id: Option<&'static str>,
    index: RefCell<Option<HashMap<String, usize>>>,
}

impl<T: Record> Repository<T> {
    /// Create a repository seeded with the built-in records for this table.
    pub fn seeded(builtins: Vec<T>) -> Self {
        Self {
            records: builtins,
            fallback_id: None,
            index: RefCell::new(None),
        }
    }

    /// Like [`Repository::seeded`], with a well-known id tried before the
    /// first-record fallback when a lookup misses.
    pub fn seeded_with_fallback(builtins: Vec<T>, fallback_id: &'static str) -> Self {
        Self {
            records: builtins,
            fallback_id: Some(fallback_id),
            index: RefCell::new(None),
        }
    }

    /// Append externally supplied records after the built-ins and invalidate
    /// the cached id index.
    pub fn merge(&mut self, records: Vec<T>) {
        if records.is_empty() {
            return;
        }
        self.records.extend(records);
        *self.index.borrow_mut() = None;
    }

    /// Look up a record by id.
    ///
    /// A miss (including an empty id) falls back to the table's well-known
    /// default id when one is set, then to the first record. Returns `None`
    /// only when the table is empty.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.ensure_index();
        let slot = {
            let index = self.index.borrow();
            let index = index.as_ref().expect("index built by ensure_index");
            index
                .get(id)
                .or_else(|| self.fallback_id.and_then(|fallback| index.get(fallback)))
                .copied()
        };
        match slot {
            Some(i) => Some(&self.records[i]),
            None => self.records.first(),
        }
    }

    /// All records in insertion order (built-ins first).
    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Build the id index if it was never built or a merge invalidated it.
    /// Insertion stops at the first match per id: first occurrence wins.
    fn ensure_index(&self) {
        let mut index = self.index.borrow_mut();
        if index.is_some() {
            return;
        }
        let mut by_id = HashMap::with_capacity(self.records.len());
        for (i, record) in self.records.iter().enumerate() {
            by_id.entry(record.id().to_string()).or_insert(i);
        }
        *index = Some(by_id);
    }
}
