//! The recursive merge walk.
//!
//! At every level, keys are visited in the base's order first, then the
//! incoming side's exclusive keys in its own order. For a key on both sides:
//!
//! - two objects are merged recursively one level down,
//! - equal values are kept without consulting any resolver (equality is
//!   [`deep_eq`], so `1` and `1.0` count as equal),
//! - anything else is a leaf conflict for the resolver chain.
//!
//! Arrays and scalars are never looked into. An error from the chain aborts
//! the whole merge; no partial result is returned.

use dmerge_resolve::ResolverChain;
use dmerge_types::{deep_eq, KeyPath, Mapping, MergeResult};
use serde_json::{Map, Value};

use crate::report::MergeReport;

/// Deep-merge two keyed containers.
///
/// The two sides may be different container kinds; the result has the same
/// concrete kind as `base`. Keys are ordered as `base`'s keys followed by
/// keys only `incoming` has.
pub fn merge<M, N>(base: &M, incoming: &N, chain: &ResolverChain) -> MergeResult<M>
where
    M: Mapping,
    N: Mapping,
{
    Walk::new(chain).maps(base, incoming, &KeyPath::root())
}

/// Deep-merge two arbitrary structures.
///
/// Two objects merge as in [`merge`]. Any other pair is treated like a
/// single key: kept when equal, otherwise resolved at the root path.
pub fn merge_values(base: &Value, incoming: &Value, chain: &ResolverChain) -> MergeResult<Value> {
    Walk::new(chain).values(base, incoming, KeyPath::root())
}

/// State for one merge call.
pub(crate) struct Walk<'a> {
    chain: &'a ResolverChain,
    pub(crate) report: MergeReport,
}

impl<'a> Walk<'a> {
    pub(crate) fn new(chain: &'a ResolverChain) -> Self {
        Self {
            chain,
            report: MergeReport::new(),
        }
    }

    pub(crate) fn maps<M: Mapping, N: Mapping>(
        &mut self,
        base: &M,
        incoming: &N,
        path: &KeyPath,
    ) -> MergeResult<M> {
        self.report.containers += 1;
        let mut out = base.empty_like();

        for (key, left) in base.entries() {
            let merged = match incoming.lookup(key) {
                Some(right) => self.values(left, right, path.child(key.as_str()))?,
                None => {
                    self.report.passed_through += 1;
                    left.clone()
                }
            };
            out.put(key.clone(), merged);
        }

        for (key, right) in incoming.entries() {
            if !base.contains(key) {
                self.report.passed_through += 1;
                out.put(key.clone(), right.clone());
            }
        }

        Ok(out)
    }

    pub(crate) fn values(
        &mut self,
        left: &Value,
        right: &Value,
        path: KeyPath,
    ) -> MergeResult<Value> {
        match (left, right) {
            (Value::Object(a), Value::Object(b)) => {
                let merged: Map<String, Value> = self.maps(a, b, &path)?;
                Ok(Value::Object(merged))
            }
            _ if deep_eq(left, right) => {
                self.report.unchanged += 1;
                Ok(left.clone())
            }
            _ => {
                let value = self.chain.resolve(&path, left, right)?;
                self.report.resolved += 1;
                Ok(value)
            }
        }
    }
}
