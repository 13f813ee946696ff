//! Gateway traits (ports) - define the interface to the remote backend
//!
//! The domain layer defines what it needs from the REST backend; the
//! adapter layer provides the implementations (HTTP client, in-memory
//! mock). Reaction and vote calls model a *click*, not an absolute write:
//! the server derives the resulting state from the caller's current one and
//! returns the authoritative aggregate.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Comment, CommentDraft, Reply, SpecialIssue};
use crate::error::DomainError;
use crate::value_objects::{ReactionKind, ReactionSnapshot, Stance, TargetRef, VoteTally};

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, DomainError>;

// ============================================================================
// Reaction Gateway
// ============================================================================

#[async_trait]
pub trait ReactionGateway: Send + Sync {
    /// Send one reaction click for a target
    ///
    /// Returns the authoritative counters and the caller's resulting
    /// reaction after the server has applied the click.
    async fn send(&self, target: TargetRef, kind: ReactionKind) -> GatewayResult<ReactionSnapshot>;
}

// ============================================================================
// Vote Gateway
// ============================================================================

/// Server response to a vote click
#[derive(Debug, Clone, PartialEq)]
pub struct VoteOutcome {
    /// Total ballots after the click
    pub total_votes: u32,
    /// Country percentage map, when the endpoint includes it
    pub nation_percent: Option<HashMap<String, f64>>,
}

/// Read model of a debate's current vote aggregates
#[derive(Debug, Clone, PartialEq)]
pub struct VoteSummary {
    pub tally: VoteTally,
    /// The caller's ballot as known by the server
    pub ballot: Option<Stance>,
    pub nation_percent: HashMap<String, f64>,
}

#[async_trait]
pub trait VoteGateway: Send + Sync {
    /// Send one vote click (cast or withdraw) for a debate
    async fn cast(&self, debate_id: i64, stance: Stance) -> GatewayResult<VoteOutcome>;

    /// Fetch current vote aggregates for a debate
    async fn summary(&self, debate_id: i64) -> GatewayResult<VoteSummary>;
}

// ============================================================================
// Comment Gateway
// ============================================================================

/// One page of comments plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentPage {
    pub items: Vec<Comment>,
    pub total: u64,
    pub total_pages: u32,
    pub page: u32,
}

#[async_trait]
pub trait CommentGateway: Send + Sync {
    /// Fetch one page of comments for a debate
    async fn list(&self, debate_id: i64, page: u32, size: u32) -> GatewayResult<CommentPage>;

    /// Create a comment, returning the authoritative row
    async fn create(&self, debate_id: i64, draft: &CommentDraft) -> GatewayResult<Comment>;

    /// Update a comment's content
    async fn update(&self, comment_id: i64, content: &str) -> GatewayResult<Comment>;

    /// Delete a comment
    async fn delete(&self, comment_id: i64) -> GatewayResult<()>;

    /// Fetch all replies for a comment
    async fn list_replies(&self, comment_id: i64) -> GatewayResult<Vec<Reply>>;

    /// Create a reply, returning the authoritative row
    async fn create_reply(&self, comment_id: i64, content: &str) -> GatewayResult<Reply>;

    /// Update a reply's content
    async fn update_reply(&self, reply_id: i64, content: &str) -> GatewayResult<Reply>;

    /// Delete a reply
    async fn delete_reply(&self, reply_id: i64) -> GatewayResult<()>;
}

// ============================================================================
// Issue Gateway
// ============================================================================

/// All three special issue slots fetched through the aggregate endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecialIssueSet {
    pub today: Vec<SpecialIssue>,
    pub hot: Option<SpecialIssue>,
    pub balanced: Option<SpecialIssue>,
}

#[async_trait]
pub trait IssueGateway: Send + Sync {
    /// Fetch all three slots in one call
    async fn home(&self) -> GatewayResult<SpecialIssueSet>;

    /// Fetch today's issues
    async fn today(&self) -> GatewayResult<Vec<SpecialIssue>>;

    /// Fetch the hot issue
    async fn hot(&self) -> GatewayResult<Option<SpecialIssue>>;

    /// Fetch the most evenly split issue
    async fn balanced(&self) -> GatewayResult<Option<SpecialIssue>>;
}

// ============================================================================
// Activity Gateway
// ============================================================================

/// Kind of analytics event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Click,
    Navigation,
}

/// A click/navigation analytics event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub kind: ActivityKind,
    /// Page or route the event happened on
    pub page: String,
    /// Element identifier for click events
    pub element: Option<String>,
    /// Stable per-installation client id
    pub client_id: String,
    pub occurred_at: DateTime<Utc>,
}

impl ActivityEvent {
    /// Create a click event
    pub fn click(page: impl Into<String>, element: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            kind: ActivityKind::Click,
            page: page.into(),
            element: Some(element.into()),
            client_id: client_id.into(),
            occurred_at: Utc::now(),
        }
    }

    /// Create a navigation event
    pub fn navigation(page: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            kind: ActivityKind::Navigation,
            page: page.into(),
            element: None,
            client_id: client_id.into(),
            occurred_at: Utc::now(),
        }
    }
}

#[async_trait]
pub trait ActivityGateway: Send + Sync {
    /// Record one analytics event
    ///
    /// Requires an auth token; fails with
    /// [`DomainError::MissingAuthToken`] when none is stored.
    async fn record(&self, event: &ActivityEvent) -> GatewayResult<()>;
}
