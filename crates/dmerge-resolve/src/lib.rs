//! Conflict resolution for dmerge.
//!
//! A leaf conflict is handed to an ordered [`ResolverChain`]. Each
//! [`Resolver`] either answers with a merged value, delegates to the next
//! resolver, or rejects the conflict outright with a
//! [`ConflictError`](dmerge_types::ConflictError).
//!
//! # Key Types
//!
//! - [`Resolution`] / [`Delegate`] -- A resolver's outcome
//! - [`Resolver`] / [`FnResolver`] -- The resolver contract and its closure adapter
//! - [`ResolverChain`] -- Ordered chain-of-responsibility evaluation
//! - [`builtin`] -- Ready-made resolvers

pub mod builtin;
pub mod chain;
pub mod resolution;
pub mod resolver;

pub use builtin::{
    concatenate_strings, keep_first, keep_second, unique_lists, ConcatenateStrings, KeepFirst,
    KeepSecond, UniqueLists, DEFAULT_SEPARATOR,
};
pub use chain::{Resolved, ResolverChain};
pub use resolution::{Delegate, Resolution};
pub use resolver::{from_fn, FnResolver, Resolver};
