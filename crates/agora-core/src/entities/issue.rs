//! Special issue entity - a debate featured on the home feed

use crate::value_objects::{VoteRatio, VoteTally};

/// A debate featured as a special issue (today / hot / balanced slots)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialIssue {
    pub debate_id: i64,
    pub title: String,
    pub summary: String,
    pub tally: VoteTally,
    pub comment_count: u32,
}

impl SpecialIssue {
    /// Create a new SpecialIssue
    pub fn new(debate_id: i64, title: String, summary: String) -> Self {
        Self {
            debate_id,
            title,
            summary,
            tally: VoteTally::default(),
            comment_count: 0,
        }
    }

    /// Agree/disagree split for the featured card
    #[must_use]
    pub fn ratio(&self) -> VoteRatio {
        self.tally.ratio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_ratio_defaults_even() {
        let issue = SpecialIssue::new(1, "Title".into(), "Summary".into());
        let ratio = issue.ratio();
        assert_eq!(ratio.agree, 50);
        assert_eq!(ratio.disagree, 50);
    }
}
