//! Per-target monotonic sequence numbers
//!
//! Every optimistic mutation of a target takes a fresh ticket; the matching
//! reconciliation or rollback reuses that ticket. A write whose ticket is
//! older than the last committed one lost the race to a newer click and is
//! discarded, so responses that arrive out of order can never clobber
//! fresher local state.

use agora_core::TargetRef;
use dashmap::DashMap;

/// Issues and commits per-target sequence tickets
#[derive(Debug, Default)]
pub struct SequenceMap {
    issued: DashMap<TargetRef, u64>,
    committed: DashMap<TargetRef, u64>,
}

impl SequenceMap {
    /// Create an empty sequence map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next ticket for a target (tickets start at 1)
    pub fn issue(&self, target: TargetRef) -> u64 {
        let mut entry = self.issued.entry(target).or_insert(0);
        *entry += 1;
        *entry
    }

    /// Commit a write tagged with `seq`
    ///
    /// Returns `false` when a newer ticket has already been committed for
    /// this target, in which case the caller must discard its write. A
    /// ticket may commit more than once (the optimistic apply and its own
    /// reconciliation share one ticket).
    pub fn try_commit(&self, target: TargetRef, seq: u64) -> bool {
        let mut entry = self.committed.entry(target).or_insert(0);
        if seq < *entry {
            return false;
        }
        *entry = seq;
        true
    }

    /// The last committed ticket for a target, if any write happened
    #[must_use]
    pub fn committed(&self, target: TargetRef) -> Option<u64> {
        self.committed.get(&target).map(|e| *e)
    }
}
