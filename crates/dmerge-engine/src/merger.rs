use dmerge_resolve::ResolverChain;
use dmerge_types::{KeyPath, Mapping, MergeResult};
use serde_json::Value;
use tracing::debug;

use crate::merge::Walk;
use crate::report::MergeReport;

/// A merge engine that owns its resolver chain.
///
/// Holds no per-merge state, so one `Merger` can serve any number of
/// merges, including from several threads at once.
#[derive(Debug, Default)]
pub struct Merger {
    chain: ResolverChain,
}

impl Merger {
    /// Create a merger over `chain`.
    pub fn new(chain: ResolverChain) -> Self {
        Self { chain }
    }

    /// The resolver chain applied to leaf conflicts.
    pub fn chain(&self) -> &ResolverChain {
        &self.chain
    }

    /// Deep-merge two keyed containers. See [`crate::merge()`].
    pub fn merge<M: Mapping, N: Mapping>(&self, base: &M, incoming: &N) -> MergeResult<M> {
        self.merge_with_report(base, incoming).map(|(merged, _)| merged)
    }

    /// Deep-merge two keyed containers and report what happened.
    pub fn merge_with_report<M: Mapping, N: Mapping>(
        &self,
        base: &M,
        incoming: &N,
    ) -> MergeResult<(M, MergeReport)> {
        let mut walk = Walk::new(&self.chain);
        let merged = walk.maps(base, incoming, &KeyPath::root())?;
        let report = walk.report;
        debug!(
            containers = report.containers,
            unchanged = report.unchanged,
            passed_through = report.passed_through,
            resolved = report.resolved,
            "merge complete"
        );
        Ok((merged, report))
    }

    /// Deep-merge two arbitrary structures. See [`crate::merge_values`].
    pub fn merge_values(&self, base: &Value, incoming: &Value) -> MergeResult<Value> {
        Walk::new(&self.chain).values(base, incoming, KeyPath::root())
    }

    /// Fold any number of containers into one, left to right.
    ///
    /// Each step merges the accumulated result (as base) with the next
    /// container. No containers yields an empty one.
    pub fn merge_all<'a, M, I>(&self, items: I) -> MergeResult<M>
    where
        M: Mapping + Clone + Default + 'a,
        I: IntoIterator<Item = &'a M>,
    {
        let mut items = items.into_iter();
        let Some(first) = items.next() else {
            return Ok(M::default());
        };

        let mut acc = first.clone();
        for (step, next) in items.enumerate() {
            acc = self.merge(&acc, next)?;
            debug!(step = step + 1, keys = acc.entry_count(), "merged layer");
        }
        Ok(acc)
    }
}

impl From<ResolverChain> for Merger {
    fn from(chain: ResolverChain) -> Self {
        Self::new(chain)
    }
}
