//! Ready-made resolvers.
//!
//! Each resolver exists both as a type implementing [`Resolver`] and as a
//! free function with the resolver signature, so it can go into a chain
//! directly or be called from inside a custom resolver.

use std::borrow::Cow;

use dmerge_types::{deep_eq, KeyPath, MergeResult};
use serde_json::Value;

use crate::resolution::Resolution;
use crate::resolver::Resolver;

/// Separator used by [`ConcatenateStrings::default`].
pub const DEFAULT_SEPARATOR: &str = " ";

/// Always keep the base value.
pub fn keep_first(_path: &KeyPath, first: &Value, _second: &Value) -> MergeResult<Resolution> {
    Ok(Resolution::Answer(first.clone()))
}

/// Always keep the incoming value.
pub fn keep_second(_path: &KeyPath, _first: &Value, second: &Value) -> MergeResult<Resolution> {
    Ok(Resolution::Answer(second.clone()))
}

/// Union of two arrays: every element of `first`, then the elements of
/// `second` not already present, in the order they first appear.
///
/// Membership uses [`deep_eq`], so arrays of objects work too and `1` already
/// covers `1.0`. Delegates unless both values are arrays.
pub fn unique_lists(_path: &KeyPath, first: &Value, second: &Value) -> MergeResult<Resolution> {
    let (Value::Array(a), Value::Array(b)) = (first, second) else {
        return Ok(Resolution::Delegate);
    };

    let mut merged = a.clone();
    for item in b {
        if !merged.iter().any(|seen| deep_eq(seen, item)) {
            merged.push(item.clone());
        }
    }
    Ok(Resolution::Answer(Value::Array(merged)))
}

/// Build a resolver joining two strings with `separator`.
pub fn concatenate_strings(separator: impl Into<Cow<'static, str>>) -> ConcatenateStrings {
    ConcatenateStrings::new(separator)
}

/// See [`keep_first`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeepFirst;

impl Resolver for KeepFirst {
    fn resolve(&self, path: &KeyPath, first: &Value, second: &Value) -> MergeResult<Resolution> {
        keep_first(path, first, second)
    }

    fn name(&self) -> &str {
        "keep_first"
    }
}

/// See [`keep_second`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeepSecond;

impl Resolver for KeepSecond {
    fn resolve(&self, path: &KeyPath, first: &Value, second: &Value) -> MergeResult<Resolution> {
        keep_second(path, first, second)
    }

    fn name(&self) -> &str {
        "keep_second"
    }
}

/// See [`unique_lists`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UniqueLists;

impl Resolver for UniqueLists {
    fn resolve(&self, path: &KeyPath, first: &Value, second: &Value) -> MergeResult<Resolution> {
        unique_lists(path, first, second)
    }

    fn name(&self) -> &str {
        "unique_lists"
    }
}

/// Joins two strings as `first + separator + second`.
///
/// Delegates unless both values are strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConcatenateStrings {
    separator: Cow<'static, str>,
}

impl ConcatenateStrings {
    pub fn new(separator: impl Into<Cow<'static, str>>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Default for ConcatenateStrings {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl Resolver for ConcatenateStrings {
    fn resolve(&self, _path: &KeyPath, first: &Value, second: &Value) -> MergeResult<Resolution> {
        match (first, second) {
            (Value::String(a), Value::String(b)) => {
                let mut joined = String::with_capacity(a.len() + self.separator.len() + b.len());
                joined.push_str(a);
                joined.push_str(&self.separator);
                joined.push_str(b);
                Ok(Resolution::Answer(Value::String(joined)))
            }
            _ => Ok(Resolution::Delegate),
        }
    }

    fn name(&self) -> &str {
        "concatenate_strings"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key() -> KeyPath {
        KeyPath::from(["key"])
    }

    #[test]
    fn unique_lists_merges_and_removes_duplicates() {
        let out = unique_lists(&key(), &json!([1, 2, 3]), &json!([3, 4, 5])).unwrap();
        assert_eq!(out, Resolution::Answer(json!([1, 2, 3, 4, 5])));
    }

    #[test]
    fn unique_lists_delegates_for_non_lists() {
        let out = unique_lists(&key(), &json!([1, 2, 3]), &json!("not a list")).unwrap();
        assert!(out.is_delegate());

        let out = UniqueLists.resolve(&key(), &json!({"a": 1}), &json!([1])).unwrap();
        assert!(out.is_delegate());
    }

    #[test]
    fn unique_lists_keeps_first_seen_order_of_new_items() {
        let out = unique_lists(&key(), &json!(["a"]), &json!(["c", "a", "b", "c"])).unwrap();
        assert_eq!(out, Resolution::Answer(json!(["a", "c", "b"])));
    }

    #[test]
    fn unique_lists_compares_objects_deeply() {
        let out = unique_lists(
            &key(),
            &json!([{"bar": "baz"}, {"baz": "qux"}]),
            &json!([{"qux": "foo"}, {"bar": "baz"}]),
        )
        .unwrap();
        assert_eq!(
            out,
            Resolution::Answer(json!([{"bar": "baz"}, {"baz": "qux"}, {"qux": "foo"}]))
        );
    }

    #[test]
    fn unique_lists_treats_equal_numbers_as_present() {
        let out = unique_lists(&key(), &json!([1, 2]), &json!([1.0, 2.5, 2])).unwrap();
        assert_eq!(out, Resolution::Answer(json!([1, 2, 2.5])));
    }

    #[test]
    fn concatenate_strings_with_default_separator() {
        let r = ConcatenateStrings::default();
        let out = r.resolve(&key(), &json!("hello"), &json!("world")).unwrap();
        assert_eq!(out, Resolution::Answer(json!("hello world")));
        assert_eq!(r.separator(), " ");
    }

    #[test]
    fn concatenate_strings_with_custom_separator() {
        let r = concatenate_strings("-");
        let out = r.resolve(&key(), &json!("hello"), &json!("world")).unwrap();
        assert_eq!(out, Resolution::Answer(json!("hello-world")));
    }

    #[test]
    fn concatenate_strings_delegates_for_non_strings() {
        let r = concatenate_strings(DEFAULT_SEPARATOR);
        let out = r.resolve(&key(), &json!("hello"), &json!(123)).unwrap();
        assert!(out.is_delegate());
    }

    #[test]
    fn keep_first_returns_first_value() {
        let out = KeepFirst.resolve(&key(), &json!("original"), &json!("new")).unwrap();
        assert_eq!(out, Resolution::Answer(json!("original")));
    }

    #[test]
    fn keep_second_returns_second_value() {
        let out = keep_second(&key(), &json!("original"), &json!("new")).unwrap();
        assert_eq!(out, Resolution::Answer(json!("new")));
    }

    #[test]
    fn keep_resolvers_never_delegate_on_null() {
        let out = keep_first(&key(), &Value::Null, &json!(1)).unwrap();
        assert_eq!(out, Resolution::Answer(Value::Null));
    }
}
