//! Vote service
//!
//! Handles pro/con vote toggles on debates with optimistic local updates
//! and country statistic refresh.

use std::sync::Arc;

use agora_core::traits::VoteGateway;
use agora_core::{CountryStat, Stance, VoteSnapshot};
use agora_store::DebateStore;
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::optimistic;

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle the user's vote on a debate
    ///
    /// Casting while no ballot is held and withdrawing the held stance are
    /// applied optimistically. Toggling the opposite stance while a ballot
    /// is held is a conflict and is rejected before any network dispatch;
    /// the caller must withdraw first. When the vote response carries the
    /// country percentage map the debate's country statistics are
    /// recomputed from it; otherwise a fire-and-forget summary fetch
    /// refreshes them.
    #[instrument(skip(self))]
    pub async fn toggle(&self, debate_id: i64, stance: Stance) -> ServiceResult<VoteSnapshot> {
        let current = self
            .ctx
            .debates()
            .vote_snapshot(debate_id)
            .ok_or_else(|| ServiceError::not_found("Debate", debate_id.to_string()))?;

        // Conflicts surface here, before the optimistic write
        let (next, transition) = current.toggle(stance)?;
        let seq = self.ctx.debates().issue_vote_seq(debate_id);

        info!(debate_id, ?transition, seq, "Toggling vote");

        let ctx = self.ctx;
        let outcome = optimistic::execute(
            "vote",
            seq,
            next,
            current,
            move |snapshot, seq| ctx.debates().apply_vote(debate_id, snapshot, seq),
            self.ctx.vote_gateway().cast(debate_id, stance),
            // The vote endpoint returns no pro/con split, so the optimistic
            // tally stands until the next summary fetch
            |_| None,
        )
        .await?;

        match outcome.nation_percent {
            Some(map) => {
                let stats = CountryStat::from_percent_map(&map, outcome.total_votes);
                self.ctx.debates().set_country_stats(debate_id, stats);
            }
            None => {
                // Backend omitted the percentages; refresh them off-path
                tokio::spawn(refresh_country_stats(
                    self.ctx.vote_gateway_arc(),
                    self.ctx.debates_arc(),
                    debate_id,
                ));
            }
        }

        Ok(next)
    }

    /// Fetch the debate's vote summary and overwrite local vote state
    ///
    /// Used to hydrate a freshly opened debate and to re-sync after the
    /// backend omitted country percentages.
    #[instrument(skip(self))]
    pub async fn refresh_summary(&self, debate_id: i64) -> ServiceResult<VoteSnapshot> {
        let summary = self.ctx.vote_gateway().summary(debate_id).await?;
        let snapshot = VoteSnapshot::new(summary.tally, summary.ballot);

        let seq = self.ctx.debates().issue_vote_seq(debate_id);
        if !self.ctx.debates().apply_vote(debate_id, snapshot, seq) {
            return Err(ServiceError::not_found("Debate", debate_id.to_string()));
        }
        self.ctx.debates().set_country_stats(
            debate_id,
            CountryStat::from_percent_map(&summary.nation_percent, summary.tally.total()),
        );

        Ok(snapshot)
    }
}

/// Fire-and-forget country statistics refresh
///
/// Failures are logged, never surfaced; there is no loading indicator for
/// this path.
async fn refresh_country_stats(
    gateway: Arc<dyn VoteGateway>,
    debates: Arc<DebateStore>,
    debate_id: i64,
) {
    match gateway.summary(debate_id).await {
        Ok(summary) => {
            let stats =
                CountryStat::from_percent_map(&summary.nation_percent, summary.tally.total());
            debates.set_country_stats(debate_id, stats);
        }
        Err(err) => {
            warn!(debate_id, error = %err, "Country statistics refresh failed");
        }
    }
}
