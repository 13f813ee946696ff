//! # agora-store
//!
//! State layer - the single in-memory owner of all debate, comment/reply,
//! and special-issue state for a session. Components hold no copies; they
//! read cloned snapshots and mutate through the application services.

pub mod comments;
pub mod debates;
pub mod issues;
pub mod sequence;

// Re-export commonly used types at crate root
pub use comments::{CommentPageState, CommentStore};
pub use debates::DebateStore;
pub use issues::{IssueSlot, IssueStore};
pub use sequence::SequenceMap;
