//! HTTP implementation of VoteGateway

use async_trait::async_trait;
use tracing::instrument;

use agora_core::{DomainError, GatewayResult, Stance, VoteGateway, VoteOutcome, VoteSummary};

use crate::wire::{VoteEnvelope, VoteRequest, VoteSummaryEnvelope};

use super::client::{map_not_found, HttpClient};

/// HTTP implementation of VoteGateway
#[derive(Debug, Clone)]
pub struct HttpVoteGateway {
    client: HttpClient,
}

impl HttpVoteGateway {
    /// Create a new HttpVoteGateway
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl VoteGateway for HttpVoteGateway {
    #[instrument(skip(self))]
    async fn cast(&self, debate_id: i64, stance: Stance) -> GatewayResult<VoteOutcome> {
        let envelope: VoteEnvelope = self
            .client
            .post_json(&format!("/debate/{debate_id}/vote"), &VoteRequest { stance })
            .await
            .map_err(|err| map_not_found(err, DomainError::DebateNotFound(debate_id)))?;

        // The endpoint reports application-level refusals inside a 200 body
        if let Some(message) = envelope.error {
            return Err(DomainError::Remote {
                status: 400,
                message,
            });
        }

        Ok(VoteOutcome::from(envelope))
    }

    #[instrument(skip(self))]
    async fn summary(&self, debate_id: i64) -> GatewayResult<VoteSummary> {
        let envelope: VoteSummaryEnvelope = self
            .client
            .get_json(&format!("/debate/{debate_id}/vote"))
            .await
            .map_err(|err| map_not_found(err, DomainError::DebateNotFound(debate_id)))?;

        Ok(VoteSummary::from(envelope))
    }
}
