//! Reaction service
//!
//! Handles reaction toggles on debates, comments, and replies with
//! optimistic local updates.

use agora_core::{ReactionKind, ReactionSnapshot, TargetKind, TargetRef};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::optimistic;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle a reaction on a target
    ///
    /// Classifies the click against the target's current state (cancel,
    /// like/dislike switch, or add), applies the result locally before the
    /// network call, then settles against the server's authoritative
    /// aggregate - or rolls back if the call fails. Nothing is retried.
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        target: TargetRef,
        kind: ReactionKind,
    ) -> ServiceResult<ReactionSnapshot> {
        let current = self
            .snapshot(target)
            .ok_or_else(|| ServiceError::not_found("Target", target.to_string()))?;

        let (next, transition) = current.toggle(kind);
        let seq = self.issue_seq(target);

        info!(target = %target, ?transition, seq, "Toggling reaction");

        let ctx = self.ctx;
        let response = optimistic::execute(
            "reaction",
            seq,
            next,
            current,
            move |snapshot, seq| match target.kind {
                TargetKind::Debate => ctx.debates().apply_reactions(target.id, snapshot, seq),
                TargetKind::Comment | TargetKind::Reply => {
                    ctx.comments().apply_reactions(target, snapshot, seq)
                }
            },
            self.ctx.reaction_gateway().send(target, kind),
            |authoritative: &ReactionSnapshot| Some(*authoritative),
        )
        .await?;

        Ok(response)
    }

    /// The target's current reaction state, if it is cached
    #[must_use]
    pub fn snapshot(&self, target: TargetRef) -> Option<ReactionSnapshot> {
        match target.kind {
            TargetKind::Debate => self.ctx.debates().reaction_snapshot(target.id),
            TargetKind::Comment | TargetKind::Reply => {
                self.ctx.comments().reaction_snapshot(target)
            }
        }
    }

    /// Whether `kind` is blocked for the target at the presentation layer
    /// (the opposite member of the like/dislike pair is active)
    #[must_use]
    pub fn is_blocked(&self, target: TargetRef, kind: ReactionKind) -> bool {
        self.snapshot(target)
            .map(|snapshot| snapshot.is_blocked(kind))
            .unwrap_or(false)
    }

    fn issue_seq(&self, target: TargetRef) -> u64 {
        match target.kind {
            TargetKind::Debate => self.ctx.debates().issue_reaction_seq(target.id),
            TargetKind::Comment | TargetKind::Reply => {
                self.ctx.comments().issue_reaction_seq(target)
            }
        }
    }
}
