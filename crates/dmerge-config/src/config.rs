use dmerge_engine::Merger;
use dmerge_resolve::{
    ConcatenateStrings, KeepFirst, KeepSecond, Resolver, ResolverChain, UniqueLists,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigResult;

fn default_separator() -> String {
    dmerge_resolve::DEFAULT_SEPARATOR.to_string()
}

/// One built-in resolver, described as data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolverSpec {
    /// Keep the base value.
    KeepFirst,
    /// Keep the incoming value.
    KeepSecond,
    /// Join two strings with `separator` (a single space by default).
    ConcatenateStrings {
        #[serde(default = "default_separator")]
        separator: String,
    },
    /// Union two arrays, base elements first.
    UniqueLists,
}

impl ResolverSpec {
    /// Instantiate the described resolver.
    pub fn build(&self) -> Box<dyn Resolver> {
        match self {
            Self::KeepFirst => Box::new(KeepFirst),
            Self::KeepSecond => Box::new(KeepSecond),
            Self::ConcatenateStrings { separator } => {
                Box::new(ConcatenateStrings::new(separator.clone()))
            }
            Self::UniqueLists => Box::new(UniqueLists),
        }
    }
}

/// Configuration for a merge: the resolver chain, in evaluation order.
///
/// The default is an empty chain, under which every leaf conflict fails.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    pub resolvers: Vec<ResolverSpec>,
}

impl MergeConfig {
    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json_str(s: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Append a resolver (builder style).
    pub fn with(mut self, spec: ResolverSpec) -> Self {
        self.resolvers.push(spec);
        self
    }

    /// Build the configured resolver chain.
    pub fn build_chain(&self) -> ResolverChain {
        let chain: ResolverChain = self.resolvers.iter().map(ResolverSpec::build).collect();
        debug!(resolvers = ?chain.names(), "built resolver chain");
        chain
    }

    /// Build a [`Merger`] over the configured chain.
    pub fn build_merger(&self) -> Merger {
        Merger::new(self.build_chain())
    }
}
