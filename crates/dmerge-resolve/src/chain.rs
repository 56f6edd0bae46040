use std::fmt;

use dmerge_types::{kind_name, ConflictError, KeyPath, MergeResult};
use serde_json::Value;
use tracing::{debug, trace};

use crate::resolution::Resolution;
use crate::resolver::{FnResolver, Resolver};

/// A settled leaf conflict.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved {
    /// The merged value.
    pub value: Value,
    /// Position in the chain of the resolver that answered.
    pub resolver_index: usize,
}

/// An ordered chain of resolvers, evaluated left to right per conflict.
///
/// Evaluation stops at the first resolver that answers or errors. A chain
/// that is empty, or whose resolvers all delegate, fails with the default
/// [`ConflictError`] for the position.
#[derive(Default)]
pub struct ResolverChain {
    resolvers: Vec<Box<dyn Resolver>>,
}

impl ResolverChain {
    /// An empty chain. Every conflict fails against it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resolver (builder style).
    pub fn with<R: Resolver + 'static>(mut self, resolver: R) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    /// Append a function or closure resolver (builder style).
    pub fn with_fn<F>(self, f: F) -> Self
    where
        F: Fn(&KeyPath, &Value, &Value) -> MergeResult<Resolution> + Send + Sync + 'static,
    {
        self.with(FnResolver::new(f))
    }

    /// Append a resolver to the end of the chain.
    pub fn push(&mut self, resolver: Box<dyn Resolver>) {
        self.resolvers.push(resolver);
    }

    /// Number of resolvers.
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    /// Returns `true` if the chain has no resolvers.
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Resolver names in evaluation order.
    pub fn names(&self) -> Vec<&str> {
        self.resolvers.iter().map(|r| r.name()).collect()
    }

    /// Resolve a leaf conflict to its merged value.
    pub fn resolve(&self, path: &KeyPath, first: &Value, second: &Value) -> MergeResult<Value> {
        self.resolve_traced(path, first, second).map(|r| r.value)
    }

    /// Resolve a leaf conflict, also reporting which resolver answered.
    pub fn resolve_traced(
        &self,
        path: &KeyPath,
        first: &Value,
        second: &Value,
    ) -> MergeResult<Resolved> {
        for (index, resolver) in self.resolvers.iter().enumerate() {
            match resolver.resolve(path, first, second)? {
                Resolution::Answer(value) => {
                    debug!(
                        path = %path,
                        resolver = resolver.name(),
                        index,
                        "conflict resolved"
                    );
                    return Ok(Resolved {
                        value,
                        resolver_index: index,
                    });
                }
                Resolution::Delegate => {
                    trace!(path = %path, resolver = resolver.name(), index, "resolver delegated");
                }
            }
        }

        debug!(
            path = %path,
            first = kind_name(first),
            second = kind_name(second),
            resolvers = self.resolvers.len(),
            "conflict left unresolved"
        );
        Err(ConflictError::new(path.clone(), first.clone(), second.clone()))
    }
}

impl fmt::Debug for ResolverChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverChain")
            .field("resolvers", &self.names())
            .finish()
    }
}

impl FromIterator<Box<dyn Resolver>> for ResolverChain {
    fn from_iter<I: IntoIterator<Item = Box<dyn Resolver>>>(iter: I) -> Self {
        Self {
            resolvers: iter.into_iter().collect(),
        }
    }
}

impl Extend<Box<dyn Resolver>> for ResolverChain {
    fn extend<I: IntoIterator<Item = Box<dyn Resolver>>>(&mut self, iter: I) {
        self.resolvers.extend(iter);
    }
}
