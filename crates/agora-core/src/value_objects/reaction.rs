//! Reaction state - per-target counters and the user's active reaction
//!
//! A user holds at most one active reaction per target. Toggling the active
//! reaction cancels it, toggling the opposite member of the like/dislike
//! pair switches sides, and anything else adds on top of whatever was
//! active before (the previous selection is cleared, its counter is settled
//! by server reconciliation).

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six reaction types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
    Happy,
    Angry,
    Sad,
    Unsure,
}

impl ReactionKind {
    /// All reaction kinds, in display order
    pub const ALL: [Self; 6] = [
        Self::Like,
        Self::Dislike,
        Self::Happy,
        Self::Angry,
        Self::Sad,
        Self::Unsure,
    ];

    /// Wire name used by the remote API
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
            Self::Happy => "happy",
            Self::Angry => "angry",
            Self::Sad => "sad",
            Self::Unsure => "unsure",
        }
    }

    /// Whether this kind and `other` form the mutually exclusive
    /// like/dislike pair
    #[inline]
    #[must_use]
    pub const fn is_opposite(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Like, Self::Dislike) | (Self::Dislike, Self::Like)
        )
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate reaction counters for a single target
///
/// Counters never go below zero; decrements saturate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub like: u32,
    pub dislike: u32,
    pub happy: u32,
    pub angry: u32,
    pub sad: u32,
    pub unsure: u32,
}

impl ReactionCounts {
    /// Counters with only like/dislike populated (comment and reply targets)
    #[must_use]
    pub const fn with_likes(like: u32, dislike: u32) -> Self {
        Self {
            like,
            dislike,
            happy: 0,
            angry: 0,
            sad: 0,
            unsure: 0,
        }
    }

    /// Get the counter for a reaction kind
    #[must_use]
    pub const fn get(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::Like => self.like,
            ReactionKind::Dislike => self.dislike,
            ReactionKind::Happy => self.happy,
            ReactionKind::Angry => self.angry,
            ReactionKind::Sad => self.sad,
            ReactionKind::Unsure => self.unsure,
        }
    }

    /// Increment the counter for a reaction kind
    pub fn bump(&mut self, kind: ReactionKind) {
        let slot = self.slot(kind);
        *slot = slot.saturating_add(1);
    }

    /// Decrement the counter for a reaction kind, flooring at zero
    pub fn drop_one(&mut self, kind: ReactionKind) {
        let slot = self.slot(kind);
        *slot = slot.saturating_sub(1);
    }

    /// Total across all six counters
    #[must_use]
    pub fn total(&self) -> u64 {
        ReactionKind::ALL
            .iter()
            .map(|&k| u64::from(self.get(k)))
            .sum()
    }

    fn slot(&mut self, kind: ReactionKind) -> &mut u32 {
        match kind {
            ReactionKind::Like => &mut self.like,
            ReactionKind::Dislike => &mut self.dislike,
            ReactionKind::Happy => &mut self.happy,
            ReactionKind::Angry => &mut self.angry,
            ReactionKind::Sad => &mut self.sad,
            ReactionKind::Unsure => &mut self.unsure,
        }
    }
}

/// How a toggle request was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionTransition {
    /// A new reaction became active
    Added(ReactionKind),
    /// The active member of the like/dislike pair flipped to the other
    Switched {
        from: ReactionKind,
        to: ReactionKind,
    },
    /// The active reaction was toggled off
    Cancelled(ReactionKind),
}

/// A target's reaction state as seen by the current user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReactionSnapshot {
    pub counts: ReactionCounts,
    /// The current user's active reaction, if any
    pub mine: Option<ReactionKind>,
}

impl ReactionSnapshot {
    /// Create a snapshot from counters and the user's active reaction
    #[must_use]
    pub const fn new(counts: ReactionCounts, mine: Option<ReactionKind>) -> Self {
        Self { counts, mine }
    }

    /// Whether `kind` is the user's active reaction
    #[inline]
    #[must_use]
    pub fn is_active(&self, kind: ReactionKind) -> bool {
        self.mine == Some(kind)
    }

    /// Whether the opposite member of the like/dislike pair is active,
    /// which blocks `kind` at the presentation layer
    #[must_use]
    pub fn is_blocked(&self, kind: ReactionKind) -> bool {
        self.mine.is_some_and(|active| active.is_opposite(kind))
    }

    /// Compute the snapshot resulting from a toggle of `requested`
    ///
    /// Returns the next snapshot and the transition that produced it. The
    /// caller keeps `self` around as the rollback state.
    #[must_use]
    pub fn toggle(&self, requested: ReactionKind) -> (Self, ReactionTransition) {
        let mut next = *self;

        match self.mine {
            // Same reaction again: cancel
            Some(current) if current == requested => {
                next.counts.drop_one(requested);
                next.mine = None;
                (next, ReactionTransition::Cancelled(requested))
            }
            // Opposite member of the like/dislike pair: switch sides
            Some(current) if current.is_opposite(requested) => {
                next.counts.drop_one(current);
                next.counts.bump(requested);
                next.mine = Some(requested);
                (
                    next,
                    ReactionTransition::Switched {
                        from: current,
                        to: requested,
                    },
                )
            }
            // No prior reaction, or a different category: add
            _ => {
                next.counts.bump(requested);
                next.mine = Some(requested);
                (next, ReactionTransition::Added(requested))
            }
        }
    }
}
