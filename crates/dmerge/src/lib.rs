//! Structural deep merge of nested maps.
//!
//! Two structures are walked in parallel. Objects on both sides merge key by
//! key, equal values stay as they are, and every other pair of values at the
//! same key is a conflict settled by an ordered chain of resolvers. A
//! resolver answers, delegates to the next one, or rejects the conflict.
//!
//! ```
//! use dmerge::{merge_values, ResolverChain, UniqueLists, ConcatenateStrings};
//! use serde_json::json;
//!
//! let chain = ResolverChain::new()
//!     .with(UniqueLists)
//!     .with(ConcatenateStrings::new(" & "));
//!
//! let merged = merge_values(
//!     &json!({"tags": ["a", "b"], "title": "one", "meta": {"x": 1}}),
//!     &json!({"tags": ["b", "c"], "title": "two", "meta": {"y": 2}}),
//!     &chain,
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     merged,
//!     json!({"tags": ["a", "b", "c"], "title": "one & two", "meta": {"x": 1, "y": 2}})
//! );
//! ```

pub use dmerge_config::{ConfigError, ConfigResult, MergeConfig, ResolverSpec};
pub use dmerge_engine::{merge, merge_values, MergeReport, Merger};
pub use dmerge_resolve::{
    builtin, concatenate_strings, from_fn, keep_first, keep_second, unique_lists,
    ConcatenateStrings, Delegate, FnResolver, KeepFirst, KeepSecond, Resolution, Resolved,
    Resolver, ResolverChain, UniqueLists, DEFAULT_SEPARATOR,
};
pub use dmerge_types::{
    deep_eq, kind_name, natural_string, ConflictError, Key, KeyPath, Map, Mapping, MergeResult,
    Value,
};
