//! Test helpers for integration tests
//!
//! Wires a [`ServiceContext`] over a shared [`MockBackend`] and exposes the
//! command services plus seeding shortcuts.

use std::sync::Arc;

use agora_api::MockBackend;
use agora_common::SessionStore;
use agora_core::{
    Debate, ReactionCounts, ReactionSnapshot, Stance, TargetRef, VoteSnapshot, VoteTally,
};
use agora_service::{
    ActivityService, CommentService, IssueService, ReactionService, ServiceContext,
    ServiceContextBuilder, VoteService,
};
use anyhow::Result;

/// Full client stack over the mock backend
pub struct TestHarness {
    pub ctx: ServiceContext,
    pub backend: Arc<MockBackend>,
    pub session: Arc<SessionStore>,
}

impl TestHarness {
    /// Build a harness with a signed-in session
    pub fn new() -> Result<Self> {
        let backend = Arc::new(MockBackend::new().with_user(1, "tester"));
        let session = Arc::new(SessionStore::in_memory());
        session.set_auth_token(Some("test-token".to_string()))?;
        session.set_user_name("debater")?;

        let ctx = ServiceContextBuilder::new()
            .session(Arc::clone(&session))
            .reaction_gateway(backend.clone())
            .vote_gateway(backend.clone())
            .comment_gateway(backend.clone())
            .issue_gateway(backend.clone())
            .activity_gateway(backend.clone())
            .build()
            .map_err(|err| anyhow::anyhow!(err.to_string()))?;

        Ok(Self {
            ctx,
            backend,
            session,
        })
    }

    // === Services ===

    pub fn reactions(&self) -> ReactionService<'_> {
        ReactionService::new(&self.ctx)
    }

    pub fn votes(&self) -> VoteService<'_> {
        VoteService::new(&self.ctx)
    }

    pub fn comments(&self) -> CommentService<'_> {
        CommentService::new(&self.ctx)
    }

    pub fn issues(&self) -> IssueService<'_> {
        IssueService::new(&self.ctx)
    }

    pub fn activity(&self) -> ActivityService<'_> {
        ActivityService::new(&self.ctx)
    }

    // === Seeding ===

    /// Hydrate a debate locally and seed the backend with matching state
    pub fn seed_debate(&self, debate_id: i64, reactions: ReactionSnapshot, vote: VoteSnapshot) {
        let mut debate = Debate::new(
            debate_id,
            format!("debate {debate_id}"),
            "body".to_string(),
            100,
            "writer".to_string(),
        );
        debate.reactions = reactions;
        debate.vote = vote;
        self.ctx.debates().hydrate(debate);

        self.backend
            .seed_reactions(TargetRef::debate(debate_id), reactions);
        self.backend.seed_vote(debate_id, vote, None);
    }

    /// Shorthand for a debate with given like/dislike and pro/con counts
    pub fn seed_simple_debate(
        &self,
        debate_id: i64,
        (like, dislike): (u32, u32),
        (pro, con): (u32, u32),
    ) {
        self.seed_debate(
            debate_id,
            ReactionSnapshot::new(ReactionCounts::with_likes(like, dislike), None),
            VoteSnapshot::new(VoteTally::new(pro, con), None),
        );
    }

    /// The debate's current reaction snapshot, panicking when unknown
    pub fn reaction_state(&self, debate_id: i64) -> ReactionSnapshot {
        self.ctx
            .debates()
            .reaction_snapshot(debate_id)
            .expect("debate not hydrated")
    }

    /// The debate's current vote snapshot, panicking when unknown
    pub fn vote_state(&self, debate_id: i64) -> VoteSnapshot {
        self.ctx
            .debates()
            .vote_snapshot(debate_id)
            .expect("debate not hydrated")
    }

    /// Cast a vote the long way: withdraw the held ballot, then cast
    pub async fn switch_vote(&self, debate_id: i64, to: Stance) -> Result<()> {
        self.votes().toggle(debate_id, to.opposite()).await?;
        self.votes().toggle(debate_id, to).await?;
        Ok(())
    }
}
