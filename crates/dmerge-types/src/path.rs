use std::fmt;

use serde::{Deserialize, Serialize};

/// A single key inside an object.
pub type Key = String;

/// The location of a node, as the ordered keys leading to it from the root
/// of a merge.
///
/// The root itself is the empty path. `Display` joins the keys with `.`,
/// which is the form used in conflict messages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyPath(Vec<Key>);

impl KeyPath {
    /// The empty path, pointing at the merge root.
    pub fn root() -> Self {
        Self::default()
    }

    /// A new path one level below `self`.
    pub fn child(&self, key: impl Into<Key>) -> Self {
        let mut keys = Vec::with_capacity(self.0.len() + 1);
        keys.extend(self.0.iter().cloned());
        keys.push(key.into());
        Self(keys)
    }

    /// The keys, root first.
    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    /// The innermost key, or `None` at the root.
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Nesting depth (0 at the root).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the root path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the path is exactly `keys`.
    pub fn is(&self, keys: &[&str]) -> bool {
        self.0.len() == keys.len() && self.0.iter().zip(keys).all(|(a, b)| a == b)
    }

    /// Returns `true` if the path begins with `prefix`.
    pub fn starts_with(&self, prefix: &[&str]) -> bool {
        self.0.len() >= prefix.len() && self.0.iter().zip(prefix).all(|(a, b)| a == b)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(key)?;
        }
        Ok(())
    }
}

impl<'a, const N: usize> PartialEq<[&'a str; N]> for KeyPath {
    fn eq(&self, other: &[&'a str; N]) -> bool {
        self.is(other)
    }
}

impl<'a> PartialEq<[&'a str]> for KeyPath {
    fn eq(&self, other: &[&'a str]) -> bool {
        self.is(other)
    }
}

impl From<Vec<Key>> for KeyPath {
    fn from(keys: Vec<Key>) -> Self {
        Self(keys)
    }
}

impl From<&[&str]> for KeyPath {
    fn from(keys: &[&str]) -> Self {
        keys.iter().copied().collect()
    }
}

impl<const N: usize> From<[&str; N]> for KeyPath {
    fn from(keys: [&str; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Into<Key>> FromIterator<K> for KeyPath {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a KeyPath {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
