//! # agora-service
//!
//! Application layer exposing the client's command surface: reaction and
//! vote toggles with optimistic updates, comment/reply CRUD over the page
//! cache, special issue loading, and fire-and-forget activity logging.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{CreateCommentRequest, CreateReplyRequest, UpdateCommentRequest, UpdateReplyRequest};
pub use services::{
    ActivityService, CommentService, IssueService, ReactionService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, VoteService,
};
