//! Merge engine for dmerge.
//!
//! Walks two structures in parallel. Objects present on both sides are
//! merged recursively, equal values are kept as they are, and every other
//! pair of values at the same key is a leaf conflict handed to the
//! [`ResolverChain`](dmerge_resolve::ResolverChain).
//!
//! # Key Types
//!
//! - [`merge`] / [`merge_values`] -- One-shot merges
//! - [`Merger`] -- Reusable engine owning its resolver chain
//! - [`MergeReport`] -- Counters collected while merging

pub mod merge;
pub mod merger;
pub mod report;

pub use merge::{merge, merge_values};
pub use merger::Merger;
pub use report::MergeReport;
