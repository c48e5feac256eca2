use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Counters collected over one listing run.
///
/// Every discovered file is either processed or skipped, so
/// `processed + skipped == discovered`. Failed files were processed but left
/// no entry in the output.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSummary {
    /// Files (not directories) found under the root.
    pub discovered: usize,
    /// Files that passed both filters.
    pub processed: usize,
    /// Files rejected by a filter.
    pub skipped: usize,
    /// Processed files that could not be read, decoded or encoded.
    pub failed: usize,
    /// Paths of the files counted in `failed`, in traversal order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub failures: Vec<PathBuf>,
}

impl ListingSummary {
    /// Number of entries actually appended to the output.
    pub fn written(&self) -> usize {
        self.processed - self.failed
    }
}
