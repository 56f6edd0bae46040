use std::borrow::Cow;
use std::sync::Arc;

use dmerge_types::{KeyPath, MergeResult};
use serde_json::Value;

use crate::resolution::Resolution;

/// Decides the merged value for one leaf conflict.
///
/// `first` comes from the base structure and `second` from the incoming
/// one. Return [`Resolution::Delegate`] to pass, an answer to settle the
/// conflict, or an error to abort the whole merge.
///
/// The trait is object-safe and `Send + Sync` so resolvers can be stored in
/// a `Vec<Box<dyn Resolver>>` and a chain can be shared across threads.
pub trait Resolver: Send + Sync {
    /// Resolve the conflict at `path`.
    fn resolve(&self, path: &KeyPath, first: &Value, second: &Value) -> MergeResult<Resolution>;

    /// Name used in log output.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<R: Resolver + ?Sized> Resolver for Box<R> {
    fn resolve(&self, path: &KeyPath, first: &Value, second: &Value) -> MergeResult<Resolution> {
        (**self).resolve(path, first, second)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<R: Resolver + ?Sized> Resolver for Arc<R> {
    fn resolve(&self, path: &KeyPath, first: &Value, second: &Value) -> MergeResult<Resolution> {
        (**self).resolve(path, first, second)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A resolver backed by a plain function or closure.
pub struct FnResolver<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> FnResolver<F>
where
    F: Fn(&KeyPath, &Value, &Value) -> MergeResult<Resolution> + Send + Sync,
{
    /// Wrap `f` under the default name.
    pub fn new(f: F) -> Self {
        Self {
            name: Cow::Borrowed("custom"),
            f,
        }
    }

    /// Wrap `f` under `name`.
    pub fn named(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Resolver for FnResolver<F>
where
    F: Fn(&KeyPath, &Value, &Value) -> MergeResult<Resolution> + Send + Sync,
{
    fn resolve(&self, path: &KeyPath, first: &Value, second: &Value) -> MergeResult<Resolution> {
        (self.f)(path, first, second)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Turn a function or closure into a [`Resolver`].
pub fn from_fn<F>(f: F) -> FnResolver<F>
where
    F: Fn(&KeyPath, &Value, &Value) -> MergeResult<Resolution> + Send + Sync,
{
    FnResolver::new(f)
}
