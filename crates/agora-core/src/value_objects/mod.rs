//! Value objects - immutable types that represent domain concepts

mod reaction;
mod target;
mod vote;

pub use reaction::{ReactionCounts, ReactionKind, ReactionSnapshot, ReactionTransition};
pub use target::{TargetKind, TargetRef};
pub use vote::{Stance, VoteRatio, VoteSnapshot, VoteTally, VoteTransition};
