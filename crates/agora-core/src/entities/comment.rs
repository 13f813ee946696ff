//! Comment and Reply entities

use chrono::{DateTime, Utc};

use crate::value_objects::{ReactionSnapshot, Stance};

/// Comment entity - a top-level response to a debate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub debate_id: i64,
    pub author_id: i64,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub reactions: ReactionSnapshot,
    /// The author's pro/con position at posting time, if they had one
    pub stance: Option<Stance>,
    pub reply_count: u32,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(
        id: i64,
        debate_id: i64,
        author_id: i64,
        author_name: String,
        content: String,
        stance: Option<Stance>,
    ) -> Self {
        Self {
            id,
            debate_id,
            author_id,
            author_name,
            content,
            created_at: Utc::now(),
            updated_at: None,
            reactions: ReactionSnapshot::default(),
            stance,
            reply_count: 0,
            country_code: None,
            country_name: None,
        }
    }

    /// Create an optimistic placeholder that has not been confirmed yet
    ///
    /// Placeholders carry a negative temporary id; the authoritative row
    /// replaces them once the remote call confirms.
    pub fn pending(
        temp_id: i64,
        debate_id: i64,
        author_id: i64,
        author_name: String,
        content: String,
        stance: Option<Stance>,
    ) -> Self {
        debug_assert!(temp_id < 0, "placeholder ids are negative");
        Self::new(temp_id, debate_id, author_id, author_name, content, stance)
    }

    /// Whether this row is an unconfirmed optimistic placeholder
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.id < 0
    }

    /// Check if the comment has been edited
    #[inline]
    pub fn is_edited(&self) -> bool {
        self.updated_at.is_some()
    }

    /// Edit the comment content
    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.updated_at = Some(Utc::now());
    }
}

/// Draft submitted when creating a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub content: String,
    pub stance: Option<Stance>,
}

/// Reply entity - a response to a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: i64,
    pub comment_id: i64,
    pub author_id: i64,
    pub author_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub reactions: ReactionSnapshot,
}

impl Reply {
    /// Create a new Reply
    pub fn new(
        id: i64,
        comment_id: i64,
        author_id: i64,
        author_name: String,
        content: String,
    ) -> Self {
        Self {
            id,
            comment_id,
            author_id,
            author_name,
            content,
            created_at: Utc::now(),
            updated_at: None,
            reactions: ReactionSnapshot::default(),
        }
    }

    /// Check if the reply has been edited
    #[inline]
    pub fn is_edited(&self) -> bool {
        self.updated_at.is_some()
    }

    /// Edit the reply content
    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.updated_at = Some(Utc::now());
    }
}
