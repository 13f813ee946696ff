//! Shared fixtures for integration tests

use agora_core::{Comment, Reply, SpecialIssue, SpecialIssueSet, VoteTally};

/// A comment row owned by the mock backend's user
pub fn comment(id: i64, debate_id: i64, content: &str) -> Comment {
    Comment::new(id, debate_id, 1, "tester".to_string(), content.to_string(), None)
}

/// A sequence of comments with ids `1..=count`, newest first
pub fn comments(debate_id: i64, count: i64) -> Vec<Comment> {
    (1..=count)
        .rev()
        .map(|id| comment(id, debate_id, &format!("comment {id}")))
        .collect()
}

/// A reply row owned by the mock backend's user
pub fn reply(id: i64, comment_id: i64, content: &str) -> Reply {
    Reply::new(id, comment_id, 1, "tester".to_string(), content.to_string())
}

/// A featured issue with a 3:1 split
pub fn issue(debate_id: i64, title: &str) -> SpecialIssue {
    SpecialIssue {
        debate_id,
        title: title.to_string(),
        summary: format!("summary of {title}"),
        tally: VoteTally::new(3, 1),
        comment_count: 4,
    }
}

/// All three slots populated
pub fn issue_set() -> SpecialIssueSet {
    SpecialIssueSet {
        today: vec![issue(1, "today a"), issue(2, "today b")],
        hot: Some(issue(3, "hot")),
        balanced: Some(issue(4, "balanced")),
    }
}
