//! Reaction state label translation
//!
//! The backend reports the caller's resulting reaction as a display label,
//! not a code. This table is the only place those labels exist; the domain
//! layer works with [`ReactionKind`] exclusively.

use agora_core::ReactionKind;

/// The label the backend uses for a reaction kind
#[must_use]
pub const fn reaction_label(kind: ReactionKind) -> &'static str {
    match kind {
        ReactionKind::Like => "좋아요",
        ReactionKind::Dislike => "싫어요",
        ReactionKind::Happy => "행복해요",
        ReactionKind::Angry => "화나요",
        ReactionKind::Sad => "슬퍼요",
        ReactionKind::Unsure => "글쎄요",
    }
}

/// Parse a backend label into a reaction kind
///
/// Unknown or absent labels read as "no active reaction".
#[must_use]
pub fn parse_reaction_label(label: &str) -> Option<ReactionKind> {
    match label {
        "좋아요" => Some(ReactionKind::Like),
        "싫어요" => Some(ReactionKind::Dislike),
        "행복해요" => Some(ReactionKind::Happy),
        "화나요" => Some(ReactionKind::Angry),
        "슬퍼요" => Some(ReactionKind::Sad),
        "글쎄요" => Some(ReactionKind::Unsure),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for kind in ReactionKind::ALL {
            assert_eq!(parse_reaction_label(reaction_label(kind)), Some(kind));
        }
    }

    #[test]
    fn test_unknown_label_is_none() {
        assert_eq!(parse_reaction_label("??"), None);
        assert_eq!(parse_reaction_label(""), None);
    }
}
