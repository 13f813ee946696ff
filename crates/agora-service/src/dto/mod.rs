//! Request DTOs for the command surface

mod requests;

pub use requests::{
    CreateCommentRequest, CreateReplyRequest, UpdateCommentRequest, UpdateReplyRequest,
    COMMENT_MAX_CHARS, REPLY_MAX_CHARS,
};
