//! Comment and reply page cache

mod comment_store;

pub use comment_store::{CommentPageState, CommentStore};
