//! Declarative configuration for dmerge.
//!
//! A resolver chain can be described as data instead of code, then built
//! into a [`ResolverChain`](dmerge_resolve::ResolverChain):
//!
//! ```toml
//! [[resolvers]]
//! kind = "unique_lists"
//!
//! [[resolvers]]
//! kind = "concatenate_strings"
//! separator = ", "
//!
//! [[resolvers]]
//! kind = "keep_second"
//! ```

pub mod config;
pub mod error;

pub use config::{MergeConfig, ResolverSpec};
pub use error::{ConfigError, ConfigResult};
