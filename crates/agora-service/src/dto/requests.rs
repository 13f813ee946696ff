//! Request DTOs with validation
//!
//! Content limits match the backend's: 1000 characters for comments, 500
//! for replies. Validation failures never reach the gateway.

use agora_core::Stance;
use serde::Deserialize;
use validator::Validate;

/// Maximum comment length in characters
pub const COMMENT_MAX_CHARS: u64 = 1000;

/// Maximum reply length in characters
pub const REPLY_MAX_CHARS: u64 = 500;

/// Request to create a comment on a debate
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(max = 1000, message = "content must be at most 1000 characters"))]
    pub content: String,
    pub stance: Option<Stance>,
}

/// Request to edit a comment
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(max = 1000, message = "content must be at most 1000 characters"))]
    pub content: String,
}

/// Request to create a reply on a comment
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReplyRequest {
    #[validate(length(max = 500, message = "content must be at most 500 characters"))]
    pub content: String,
}

/// Request to edit a reply
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReplyRequest {
    #[validate(length(max = 500, message = "content must be at most 500 characters"))]
    pub content: String,
}

/// Run derive-based validation plus the whitespace-only content check
pub(crate) fn validate_content<T: Validate>(request: &T, content: &str) -> Result<(), String> {
    if content.trim().is_empty() {
        return Err("content is empty".to_string());
    }
    request.validate().map_err(|err| err.to_string())
}

impl CreateCommentRequest {
    /// Validate the request, returning a message suitable for inline display
    pub fn validated(&self) -> Result<(), String> {
        validate_content(self, &self.content)
    }
}

impl UpdateCommentRequest {
    /// Validate the request, returning a message suitable for inline display
    pub fn validated(&self) -> Result<(), String> {
        validate_content(self, &self.content)
    }
}

impl CreateReplyRequest {
    /// Validate the request, returning a message suitable for inline display
    pub fn validated(&self) -> Result<(), String> {
        validate_content(self, &self.content)
    }
}

impl UpdateReplyRequest {
    /// Validate the request, returning a message suitable for inline display
    pub fn validated(&self) -> Result<(), String> {
        validate_content(self, &self.content)
    }
}
