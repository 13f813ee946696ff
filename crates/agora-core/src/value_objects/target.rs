//! Reaction target - identifies what a reaction is attached to

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of entity a reaction can be attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Debate,
    Comment,
    Reply,
}

impl TargetKind {
    /// Wire name used by the remote API
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debate => "debate",
            Self::Comment => "comment",
            Self::Reply => "reply",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a reaction target (debate, comment, or reply)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetRef {
    pub id: i64,
    pub kind: TargetKind,
}

impl TargetRef {
    /// Create a new target reference
    #[inline]
    pub const fn new(id: i64, kind: TargetKind) -> Self {
        Self { id, kind }
    }

    /// Reference a debate
    #[inline]
    pub const fn debate(id: i64) -> Self {
        Self::new(id, TargetKind::Debate)
    }

    /// Reference a comment
    #[inline]
    pub const fn comment(id: i64) -> Self {
        Self::new(id, TargetKind::Comment)
    }

    /// Reference a reply
    #[inline]
    pub const fn reply(id: i64) -> Self {
        Self::new(id, TargetKind::Reply)
    }
}

impl fmt::Display for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}
