//! Reaction endpoint DTOs

use agora_core::{ReactionCounts, ReactionKind, ReactionSnapshot, TargetRef};
use serde::{Deserialize, Serialize};

use super::label::parse_reaction_label;

/// Body of `POST /debate/reaction`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionRequest {
    pub target_id: i64,
    pub target_type: &'static str,
    pub reaction_type: &'static str,
}

impl ReactionRequest {
    /// Build the request body for one reaction click
    #[must_use]
    pub fn new(target: TargetRef, kind: ReactionKind) -> Self {
        Self {
            target_id: target.id,
            target_type: target.kind.as_str(),
            reaction_type: kind.as_str(),
        }
    }
}

/// Response of the reaction endpoint
///
/// The emotion counters are only present for debate targets; comment and
/// reply targets carry like/dislike alone.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionEnvelope {
    pub like: u32,
    pub dislike: u32,
    #[serde(default)]
    pub happy: u32,
    #[serde(default)]
    pub angry: u32,
    #[serde(default)]
    pub sad: u32,
    #[serde(default)]
    pub unsure: u32,
    /// Display label of the caller's resulting reaction, absent when none
    #[serde(default)]
    pub is_state: Option<String>,
}

impl From<ReactionEnvelope> for ReactionSnapshot {
    fn from(envelope: ReactionEnvelope) -> Self {
        ReactionSnapshot {
            counts: ReactionCounts {
                like: envelope.like,
                dislike: envelope.dislike,
                happy: envelope.happy,
                angry: envelope.angry,
                sad: envelope.sad,
                unsure: envelope.unsure,
            },
            mine: envelope
                .is_state
                .as_deref()
                .and_then(parse_reaction_label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = ReactionRequest::new(TargetRef::debate(1), ReactionKind::Like);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["targetId"], 1);
        assert_eq!(json["targetType"], "debate");
        assert_eq!(json["reactionType"], "like");
    }

    #[test]
    fn test_envelope_maps_label_to_enum() {
        let envelope: ReactionEnvelope =
            serde_json::from_str(r#"{"like":11,"dislike":2,"isState":"좋아요"}"#).unwrap();
        let snapshot = ReactionSnapshot::from(envelope);
        assert_eq!(snapshot.counts.like, 11);
        assert_eq!(snapshot.counts.happy, 0);
        assert_eq!(snapshot.mine, Some(ReactionKind::Like));
    }

    #[test]
    fn test_envelope_absent_label_is_none() {
        let envelope: ReactionEnvelope =
            serde_json::from_str(r#"{"like":10,"dislike":2}"#).unwrap();
        let snapshot = ReactionSnapshot::from(envelope);
        assert_eq!(snapshot.mine, None);
    }

    #[test]
    fn test_envelope_null_label_is_none() {
        let envelope: ReactionEnvelope =
            serde_json::from_str(r#"{"like":10,"dislike":2,"isState":null}"#).unwrap();
        assert_eq!(ReactionSnapshot::from(envelope).mine, None);
    }
}
