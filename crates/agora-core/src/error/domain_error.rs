//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{Stance, TargetRef};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Debate not found: {0}")]
    DebateNotFound(i64),

    #[error("Comment not found: {0}")]
    CommentNotFound(i64),

    #[error("Reply not found: {0}")]
    ReplyNotFound(i64),

    #[error("Target not found: {0}")]
    TargetNotFound(TargetRef),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Content is empty")]
    EmptyContent,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Vote already cast for {held}; withdraw it before voting again")]
    VoteConflict { held: Stance },

    // =========================================================================
    // Auth Errors
    // =========================================================================
    #[error("Missing auth token")]
    MissingAuthToken,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Remote rejected request ({status}): {message}")]
    Remote { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for logs and callers
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::DebateNotFound(_) => "UNKNOWN_DEBATE",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::ReplyNotFound(_) => "UNKNOWN_REPLY",
            Self::TargetNotFound(_) => "UNKNOWN_TARGET",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptyContent => "EMPTY_CONTENT",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Conflict
            Self::VoteConflict { .. } => "VOTE_CONFLICT",

            // Auth
            Self::MissingAuthToken => "MISSING_AUTH_TOKEN",

            // Infrastructure
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Remote { .. } => "REMOTE_ERROR",
            Self::MalformedResponse(_) => "MALFORMED_RESPONSE",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::DebateNotFound(_)
                | Self::CommentNotFound(_)
                | Self::ReplyNotFound(_)
                | Self::TargetNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::EmptyContent | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::VoteConflict { .. })
    }

    /// Check if this error came from the transport or the remote endpoint
    ///
    /// These are the failures that trigger rollback of an optimistic update.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Remote { .. } | Self::MalformedResponse(_)
        )
    }
}
