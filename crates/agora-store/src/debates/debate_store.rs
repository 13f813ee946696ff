//! In-memory store of hydrated debates
//!
//! Owns vote state, debate-level reaction state, country statistics, and
//! comment counts. Reaction and vote writes are sequence-checked so a late
//! response can never overwrite the result of a newer click; votes and
//! reactions mutate disjoint fields and carry independent sequences.

use std::collections::HashMap;

use agora_core::{CountryStat, Debate, ReactionSnapshot, TargetRef, VoteSnapshot};
use parking_lot::RwLock;

use crate::sequence::SequenceMap;

/// Store of all debates hydrated during this session
#[derive(Debug, Default)]
pub struct DebateStore {
    inner: RwLock<HashMap<i64, Debate>>,
    reaction_seq: SequenceMap,
    vote_seq: SequenceMap,
}

impl DebateStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a hydrated debate
    pub fn hydrate(&self, debate: Debate) {
        tracing::debug!(debate_id = debate.id, "Hydrated debate");
        self.inner.write().insert(debate.id, debate);
    }

    /// Remove a debate from the store
    pub fn remove(&self, debate_id: i64) -> Option<Debate> {
        self.inner.write().remove(&debate_id)
    }

    /// Get a cloned snapshot of a debate
    #[must_use]
    pub fn get(&self, debate_id: i64) -> Option<Debate> {
        self.inner.read().get(&debate_id).cloned()
    }

    /// Whether a debate is hydrated
    #[must_use]
    pub fn contains(&self, debate_id: i64) -> bool {
        self.inner.read().contains_key(&debate_id)
    }

    // === Reactions ===

    /// Take a sequence ticket for a reaction mutation on a debate
    pub fn issue_reaction_seq(&self, debate_id: i64) -> u64 {
        self.reaction_seq.issue(TargetRef::debate(debate_id))
    }

    /// The debate's current reaction snapshot
    #[must_use]
    pub fn reaction_snapshot(&self, debate_id: i64) -> Option<ReactionSnapshot> {
        self.inner.read().get(&debate_id).map(|d| d.reactions)
    }

    /// Write a reaction snapshot, rejecting stale tickets
    ///
    /// Returns `false` when the debate is unknown or `seq` lost to a newer
    /// write.
    pub fn apply_reactions(&self, debate_id: i64, snapshot: ReactionSnapshot, seq: u64) -> bool {
        let mut inner = self.inner.write();
        let Some(debate) = inner.get_mut(&debate_id) else {
            return false;
        };
        if !self.reaction_seq.try_commit(TargetRef::debate(debate_id), seq) {
            tracing::debug!(debate_id, seq, "Discarded stale reaction write");
            return false;
        }
        debate.reactions = snapshot;
        true
    }

    // === Votes ===

    /// Take a sequence ticket for a vote mutation on a debate
    pub fn issue_vote_seq(&self, debate_id: i64) -> u64 {
        self.vote_seq.issue(TargetRef::debate(debate_id))
    }

    /// The debate's current vote snapshot
    #[must_use]
    pub fn vote_snapshot(&self, debate_id: i64) -> Option<VoteSnapshot> {
        self.inner.read().get(&debate_id).map(|d| d.vote)
    }

    /// Write a vote snapshot, rejecting stale tickets
    pub fn apply_vote(&self, debate_id: i64, snapshot: VoteSnapshot, seq: u64) -> bool {
        let mut inner = self.inner.write();
        let Some(debate) = inner.get_mut(&debate_id) else {
            return false;
        };
        if !self.vote_seq.try_commit(TargetRef::debate(debate_id), seq) {
            tracing::debug!(debate_id, seq, "Discarded stale vote write");
            return false;
        }
        debate.vote = snapshot;
        true
    }

    /// Replace a debate's derived country statistics
    pub fn set_country_stats(&self, debate_id: i64, stats: Vec<CountryStat>) {
        if let Some(debate) = self.inner.write().get_mut(&debate_id) {
            debate.country_stats = stats;
        }
    }

    // === Comment counts ===

    /// Set a debate's comment count
    pub fn set_comment_count(&self, debate_id: i64, count: u32) {
        if let Some(debate) = self.inner.write().get_mut(&debate_id) {
            debate.comment_count = count;
        }
    }

    /// Adjust a debate's comment count by a delta, flooring at zero
    pub fn adjust_comment_count(&self, debate_id: i64, delta: i32) {
        if let Some(debate) = self.inner.write().get_mut(&debate_id) {
            debate.comment_count = if delta.is_negative() {
                debate.comment_count.saturating_sub(delta.unsigned_abs())
            } else {
                debate.comment_count.saturating_add(delta.unsigned_abs())
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_core::{ReactionKind, Stance, VoteTally};

    fn debate(id: i64) -> Debate {
        Debate::new(id, "Title".into(), "Body".into(), 100, "writer".into())
    }

    #[test]
    fn test_hydrate_and_get() {
        let store = DebateStore::new();
        store.hydrate(debate(1));
        assert!(store.contains(1));
        assert_eq!(store.get(1).unwrap().id, 1);
        assert!(store.get(2).is_none());
    }

    #[test]
    fn test_apply_reactions_checks_sequence() {
        let store = DebateStore::new();
        store.hydrate(debate(1));

        let first = store.issue_reaction_seq(1);
        let second = store.issue_reaction_seq(1);

        let mut snap = ReactionSnapshot::default();
        snap.counts.bump(ReactionKind::Like);
        snap.mine = Some(ReactionKind::Like);
        assert!(store.apply_reactions(1, snap, second));

        // The older ticket arrives late and is discarded
        assert!(!store.apply_reactions(1, ReactionSnapshot::default(), first));
        assert_eq!(
            store.reaction_snapshot(1).unwrap().mine,
            Some(ReactionKind::Like)
        );
    }

    #[test]
    fn test_vote_and_reaction_sequences_are_independent() {
        let store = DebateStore::new();
        store.hydrate(debate(1));

        let reaction_seq = store.issue_reaction_seq(1);
        let vote_seq = store.issue_vote_seq(1);
        assert_eq!(reaction_seq, 1);
        assert_eq!(vote_seq, 1);

        let vote = VoteSnapshot::new(VoteTally::new(1, 0), Some(Stance::Pro));
        assert!(store.apply_vote(1, vote, vote_seq));
        assert!(store.apply_reactions(1, ReactionSnapshot::default(), reaction_seq));
    }

    #[test]
    fn test_apply_to_unknown_debate_is_rejected() {
        let store = DebateStore::new();
        let seq = store.issue_vote_seq(9);
        assert!(!store.apply_vote(9, VoteSnapshot::default(), seq));
    }

    #[test]
    fn test_comment_count_adjustment_floors_at_zero() {
        let store = DebateStore::new();
        store.hydrate(debate(1));
        store.adjust_comment_count(1, -5);
        assert_eq!(store.get(1).unwrap().comment_count, 0);
        store.adjust_comment_count(1, 2);
        assert_eq!(store.get(1).unwrap().comment_count, 2);
    }

    #[test]
    fn test_set_country_stats() {
        let store = DebateStore::new();
        store.hydrate(debate(1));
        store.set_country_stats(
            1,
            vec![CountryStat {
                code: "KR".into(),
                name: "South Korea".into(),
                count: 6,
                percentage: 60.0,
            }],
        );
        assert_eq!(store.get(1).unwrap().country_stats.len(), 1);
    }
}
