use serde::{Deserialize, Serialize};

/// Counters collected during a single merge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    /// Containers merged key by key, the root included.
    pub containers: usize,
    /// Keys present on both sides with equal values.
    pub unchanged: usize,
    /// Keys present on one side only, copied as they were.
    pub passed_through: usize,
    /// Leaf conflicts settled by a resolver.
    pub resolved: usize,
}

impl MergeReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no resolver was needed.
    pub fn is_conflict_free(&self) -> bool {
        self.resolved == 0
    }
}
