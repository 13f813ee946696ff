//! Vote state - pro/con tally and the user's ballot for a debate
//!
//! A user holds at most one ballot per debate (pro XOR con). Toggling the
//! held stance withdraws it; toggling the other stance is a conflict and
//! must be preceded by an explicit withdraw.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A pro/con position on a debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    Pro,
    Con,
}

impl Stance {
    /// Wire name used by the remote API
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pro => "pro",
            Self::Con => "con",
        }
    }

    /// The other side
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Pro => Self::Con,
            Self::Con => Self::Pro,
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pro/con vote totals for a debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoteTally {
    pub pro: u32,
    pub con: u32,
}

impl VoteTally {
    /// Create a tally
    #[must_use]
    pub const fn new(pro: u32, con: u32) -> Self {
        Self { pro, con }
    }

    /// Total number of ballots
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.pro + self.con
    }

    /// Get the counter for a stance
    #[must_use]
    pub const fn get(&self, stance: Stance) -> u32 {
        match stance {
            Stance::Pro => self.pro,
            Stance::Con => self.con,
        }
    }

    /// Percentage split for display
    ///
    /// An empty tally reads as an even 50/50 split. Otherwise the agree
    /// share is rounded to the nearest integer and disagree is its
    /// complement, so the two always sum to 100.
    #[must_use]
    pub fn ratio(&self) -> VoteRatio {
        let total = self.total();
        if total == 0 {
            return VoteRatio {
                agree: 50,
                disagree: 50,
            };
        }
        let agree = ((f64::from(self.pro) / f64::from(total)) * 100.0).round() as u8;
        VoteRatio {
            agree,
            disagree: 100 - agree,
        }
    }

    fn bump(&mut self, stance: Stance) {
        match stance {
            Stance::Pro => self.pro = self.pro.saturating_add(1),
            Stance::Con => self.con = self.con.saturating_add(1),
        }
    }

    fn drop_one(&mut self, stance: Stance) {
        match stance {
            Stance::Pro => self.pro = self.pro.saturating_sub(1),
            Stance::Con => self.con = self.con.saturating_sub(1),
        }
    }
}

/// Rounded agree/disagree percentages, summing to 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRatio {
    pub agree: u8,
    pub disagree: u8,
}

/// How a vote toggle was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTransition {
    /// A ballot was cast for the given stance
    Cast(Stance),
    /// The held ballot was withdrawn
    Withdrawn(Stance),
}

/// A debate's vote state as seen by the current user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoteSnapshot {
    pub tally: VoteTally,
    /// The current user's ballot, if one is held
    pub ballot: Option<Stance>,
}

impl VoteSnapshot {
    /// Create a snapshot from a tally and the user's ballot
    #[must_use]
    pub const fn new(tally: VoteTally, ballot: Option<Stance>) -> Self {
        Self { tally, ballot }
    }

    /// Compute the snapshot resulting from a toggle of `stance`
    ///
    /// Toggling the held stance withdraws it. Toggling while the opposite
    /// stance is held is rejected with [`DomainError::VoteConflict`] before
    /// any network dispatch; the caller must withdraw first.
    pub fn toggle(&self, stance: Stance) -> Result<(Self, VoteTransition), DomainError> {
        let mut next = *self;

        match self.ballot {
            Some(held) if held == stance => {
                next.tally.drop_one(stance);
                next.ballot = None;
                Ok((next, VoteTransition::Withdrawn(stance)))
            }
            Some(held) => Err(DomainError::VoteConflict { held }),
            None => {
                next.tally.bump(stance);
                next.ballot = Some(stance);
                Ok((next, VoteTransition::Cast(stance)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_from_none() {
        let start = VoteSnapshot::new(VoteTally::new(3, 1), None);
        let (next, transition) = start.toggle(Stance::Pro).unwrap();
        assert_eq!(next.tally.pro, 4);
        assert_eq!(next.ballot, Some(Stance::Pro));
        assert_eq!(transition, VoteTransition::Cast(Stance::Pro));
    }

    #[test]
    fn test_withdraw_held_ballot() {
        let start = VoteSnapshot::new(VoteTally::new(4, 1), Some(Stance::Pro));
        let (next, transition) = start.toggle(Stance::Pro).unwrap();
        assert_eq!(next.tally.pro, 3);
        assert_eq!(next.ballot, None);
        assert_eq!(transition, VoteTransition::Withdrawn(Stance::Pro));
    }

    #[test]
    fn test_switch_is_a_conflict() {
        let start = VoteSnapshot::new(VoteTally::new(4, 1), Some(Stance::Pro));
        let err = start.toggle(Stance::Con).unwrap_err();
        assert!(matches!(err, DomainError::VoteConflict { held: Stance::Pro }));
    }

    #[test]
    fn test_withdraw_then_recast_other_side() {
        let start = VoteSnapshot::new(VoteTally::new(4, 1), Some(Stance::Pro));
        let (withdrawn, _) = start.toggle(Stance::Pro).unwrap();
        let (recast, _) = withdrawn.toggle(Stance::Con).unwrap();
        assert_eq!(recast.tally, VoteTally::new(3, 2));
        assert_eq!(recast.ballot, Some(Stance::Con));
    }

    #[test]
    fn test_withdraw_floors_at_zero() {
        let start = VoteSnapshot::new(VoteTally::new(0, 0), Some(Stance::Con));
        let (next, _) = start.toggle(Stance::Con).unwrap();
        assert_eq!(next.tally.con, 0);
    }

    #[test]
    fn test_ratio_empty_tally_is_even() {
        assert_eq!(
            VoteTally::new(0, 0).ratio(),
            VoteRatio {
                agree: 50,
                disagree: 50
            }
        );
    }

    #[test]
    fn test_ratio_three_to_one() {
        assert_eq!(
            VoteTally::new(3, 1).ratio(),
            VoteRatio {
                agree: 75,
                disagree: 25
            }
        );
    }

    #[test]
    fn test_ratio_always_sums_to_hundred() {
        for (pro, con) in [(1, 2), (2, 1), (1, 6), (7, 3), (1, 0)] {
            let ratio = VoteTally::new(pro, con).ratio();
            assert_eq!(u16::from(ratio.agree) + u16::from(ratio.disagree), 100);
        }
    }

    #[test]
    fn test_stance_opposite() {
        assert_eq!(Stance::Pro.opposite(), Stance::Con);
        assert_eq!(Stance::Con.opposite(), Stance::Pro);
    }
}
