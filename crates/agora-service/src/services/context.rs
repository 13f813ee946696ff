//! Service context - dependency container for services
//!
//! Holds the gateway implementations, the in-memory stores, and the session
//! store. Gateways are injected as trait objects so the same services run
//! against the HTTP adapter or the in-memory mock.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use agora_common::{AppConfig, SessionStore};
use agora_core::traits::{
    ActivityGateway, CommentGateway, IssueGateway, ReactionGateway, VoteGateway,
};
use agora_store::{CommentStore, DebateStore, IssueStore};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    config: AppConfig,
    session: Arc<SessionStore>,

    // Gateways
    reaction_gateway: Arc<dyn ReactionGateway>,
    vote_gateway: Arc<dyn VoteGateway>,
    comment_gateway: Arc<dyn CommentGateway>,
    issue_gateway: Arc<dyn IssueGateway>,
    activity_gateway: Arc<dyn ActivityGateway>,

    // Stores
    debates: Arc<DebateStore>,
    comments: Arc<CommentStore>,
    issues: Arc<IssueStore>,

    // Placeholder ids for optimistic comment inserts, always negative
    next_temp_id: Arc<AtomicI64>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: AppConfig,
        session: Arc<SessionStore>,
        reaction_gateway: Arc<dyn ReactionGateway>,
        vote_gateway: Arc<dyn VoteGateway>,
        comment_gateway: Arc<dyn CommentGateway>,
        issue_gateway: Arc<dyn IssueGateway>,
        activity_gateway: Arc<dyn ActivityGateway>,
    ) -> Self {
        Self {
            config,
            session,
            reaction_gateway,
            vote_gateway,
            comment_gateway,
            issue_gateway,
            activity_gateway,
            debates: Arc::new(DebateStore::new()),
            comments: Arc::new(CommentStore::new()),
            issues: Arc::new(IssueStore::new()),
            next_temp_id: Arc::new(AtomicI64::new(-1)),
        }
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the session store
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    // === Gateways ===

    /// Get the reaction gateway
    pub fn reaction_gateway(&self) -> &dyn ReactionGateway {
        self.reaction_gateway.as_ref()
    }

    /// Get the vote gateway
    pub fn vote_gateway(&self) -> &dyn VoteGateway {
        self.vote_gateway.as_ref()
    }

    /// Get an owned handle to the vote gateway (for spawned follow-ups)
    pub fn vote_gateway_arc(&self) -> Arc<dyn VoteGateway> {
        Arc::clone(&self.vote_gateway)
    }

    /// Get the comment gateway
    pub fn comment_gateway(&self) -> &dyn CommentGateway {
        self.comment_gateway.as_ref()
    }

    /// Get the issue gateway
    pub fn issue_gateway(&self) -> &dyn IssueGateway {
        self.issue_gateway.as_ref()
    }

    /// Get an owned handle to the activity gateway (for spawned sends)
    pub fn activity_gateway_arc(&self) -> Arc<dyn ActivityGateway> {
        Arc::clone(&self.activity_gateway)
    }

    // === Stores ===

    /// Get the debate store
    pub fn debates(&self) -> &DebateStore {
        &self.debates
    }

    /// Get an owned handle to the debate store (for spawned follow-ups)
    pub fn debates_arc(&self) -> Arc<DebateStore> {
        Arc::clone(&self.debates)
    }

    /// Get the comment store
    pub fn comments(&self) -> &CommentStore {
        &self.comments
    }

    /// Get the issue store
    pub fn issues(&self) -> &IssueStore {
        &self.issues
    }

    /// Allocate the next negative placeholder id
    pub fn next_temp_id(&self) -> i64 {
        self.next_temp_id.fetch_sub(1, Ordering::Relaxed)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("config", &self.config)
            .field("gateways", &"...")
            .field("stores", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    config: Option<AppConfig>,
    session: Option<Arc<SessionStore>>,
    reaction_gateway: Option<Arc<dyn ReactionGateway>>,
    vote_gateway: Option<Arc<dyn VoteGateway>>,
    comment_gateway: Option<Arc<dyn CommentGateway>>,
    issue_gateway: Option<Arc<dyn IssueGateway>>,
    activity_gateway: Option<Arc<dyn ActivityGateway>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn session(mut self, session: Arc<SessionStore>) -> Self {
        self.session = Some(session);
        self
    }

    pub fn reaction_gateway(mut self, gateway: Arc<dyn ReactionGateway>) -> Self {
        self.reaction_gateway = Some(gateway);
        self
    }

    pub fn vote_gateway(mut self, gateway: Arc<dyn VoteGateway>) -> Self {
        self.vote_gateway = Some(gateway);
        self
    }

    pub fn comment_gateway(mut self, gateway: Arc<dyn CommentGateway>) -> Self {
        self.comment_gateway = Some(gateway);
        self
    }

    pub fn issue_gateway(mut self, gateway: Arc<dyn IssueGateway>) -> Self {
        self.issue_gateway = Some(gateway);
        self
    }

    pub fn activity_gateway(mut self, gateway: Arc<dyn ActivityGateway>) -> Self {
        self.activity_gateway = Some(gateway);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.config.unwrap_or_default(),
            self.session
                .ok_or_else(|| ServiceError::validation("session is required"))?,
            self.reaction_gateway
                .ok_or_else(|| ServiceError::validation("reaction_gateway is required"))?,
            self.vote_gateway
                .ok_or_else(|| ServiceError::validation("vote_gateway is required"))?,
            self.comment_gateway
                .ok_or_else(|| ServiceError::validation("comment_gateway is required"))?,
            self.issue_gateway
                .ok_or_else(|| ServiceError::validation("issue_gateway is required"))?,
            self.activity_gateway
                .ok_or_else(|| ServiceError::validation("activity_gateway is required"))?,
        ))
    }
}
