//! Foundation types for dmerge.
//!
//! Every other dmerge crate depends on `dmerge-types`. Structures are plain
//! [`serde_json::Value`] trees with insertion-ordered objects; this crate adds
//! the vocabulary the merge engine and resolvers share.
//!
//! # Key Types
//!
//! - [`KeyPath`] -- Ordered keys from the merge root down to a conflicting position
//! - [`Mapping`] -- Capability trait for keyed containers the engine can merge
//! - [`ConflictError`] -- The single error raised for an unresolved conflict
//! - [`natural_string`] -- Plain, unquoted rendering of a value
//! - [`deep_eq`] -- Structural equality with numbers compared by value

pub mod error;
pub mod mapping;
pub mod path;
pub mod value;

pub use error::{ConflictError, MergeResult};
pub use mapping::Mapping;
pub use path::{Key, KeyPath};
pub use value::{deep_eq, kind_name, natural_string};

pub use serde_json::{Map, Value};
