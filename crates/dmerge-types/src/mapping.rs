//! The keyed-container capability the merge engine works against.
//!
//! The engine never branches on a concrete map type. Anything that can be
//! iterated by key, looked up, inserted into, and can produce an empty
//! container of its own kind is mergeable at the root. Nested containers
//! inside a structure are always JSON objects.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::path::Key;

/// A keyed container of structure values.
pub trait Mapping {
    /// An empty container of the same kind as `self`.
    ///
    /// The merge result is built from this, so the base's concrete kind
    /// survives the merge.
    fn empty_like(&self) -> Self
    where
        Self: Sized;

    /// Entries in the container's own iteration order.
    fn entries(&self) -> impl Iterator<Item = (&Key, &Value)>;

    /// Look up the value stored under `key`.
    fn lookup(&self, key: &str) -> Option<&Value>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&mut self, key: Key, value: Value);

    /// Number of entries.
    fn entry_count(&self) -> usize;

    /// Returns `true` if `key` is present.
    fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }
}

impl Mapping for Map<String, Value> {
    fn empty_like(&self) -> Self {
        Map::new()
    }

    fn entries(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.iter()
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn put(&mut self, key: Key, value: Value) {
        self.insert(key, value);
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl Mapping for BTreeMap<String, Value> {
    fn empty_like(&self) -> Self {
        BTreeMap::new()
    }

    fn entries(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.iter()
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn put(&mut self, key: Key, value: Value) {
        self.insert(key, value);
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<S: BuildHasher + Clone> Mapping for IndexMap<String, Value, S> {
    fn empty_like(&self) -> Self {
        IndexMap::with_hasher(self.hasher().clone())
    }

    fn entries(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.iter()
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn put(&mut self, key: Key, value: Value) {
        self.insert(key, value);
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<S: BuildHasher + Clone> Mapping for HashMap<String, Value, S> {
    fn empty_like(&self) -> Self {
        HashMap::with_hasher(self.hasher().clone())
    }

    fn entries(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.iter()
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn put(&mut self, key: Key, value: Value) {
        self.insert(key, value);
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}
