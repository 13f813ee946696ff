//! Vote endpoint DTOs

use std::collections::HashMap;

use agora_core::{Stance, VoteOutcome, VoteSummary, VoteTally};
use serde::{Deserialize, Serialize};

/// Body of `POST /debate/{id}/vote`
#[derive(Debug, Clone, Serialize)]
pub struct VoteRequest {
    pub stance: Stance,
}

/// Response of the vote endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteEnvelope {
    /// Server-side rejection message, when the click was refused
    #[serde(default)]
    pub error: Option<String>,
    /// Country percentage map; some backend versions omit it
    #[serde(default)]
    pub nation_percent: Option<HashMap<String, f64>>,
    #[serde(default)]
    pub vote_cnt: u32,
}

impl From<VoteEnvelope> for VoteOutcome {
    fn from(envelope: VoteEnvelope) -> Self {
        VoteOutcome {
            total_votes: envelope.vote_cnt,
            nation_percent: envelope.nation_percent,
        }
    }
}

/// Response of `GET /debate/{id}/vote`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteSummaryEnvelope {
    pub pro_cnt: u32,
    pub con_cnt: u32,
    #[serde(default)]
    pub my_stance: Option<Stance>,
    #[serde(default)]
    pub nation_percent: HashMap<String, f64>,
}

impl From<VoteSummaryEnvelope> for VoteSummary {
    fn from(envelope: VoteSummaryEnvelope) -> Self {
        VoteSummary {
            tally: VoteTally::new(envelope.pro_cnt, envelope.con_cnt),
            ballot: envelope.my_stance,
            nation_percent: envelope.nation_percent,
        }
    }
}
