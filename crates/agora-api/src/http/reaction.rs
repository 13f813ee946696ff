//! HTTP implementation of ReactionGateway

use async_trait::async_trait;
use tracing::instrument;

use agora_core::{
    DomainError, GatewayResult, ReactionGateway, ReactionKind, ReactionSnapshot, TargetRef,
};

use crate::wire::{ReactionEnvelope, ReactionRequest};

use super::client::{map_not_found, HttpClient};

/// HTTP implementation of ReactionGateway
#[derive(Debug, Clone)]
pub struct HttpReactionGateway {
    client: HttpClient,
}

impl HttpReactionGateway {
    /// Create a new HttpReactionGateway
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReactionGateway for HttpReactionGateway {
    #[instrument(skip(self))]
    async fn send(&self, target: TargetRef, kind: ReactionKind) -> GatewayResult<ReactionSnapshot> {
        let body = ReactionRequest::new(target, kind);
        let envelope: ReactionEnvelope = self
            .client
            .post_json("/debate/reaction", &body)
            .await
            .map_err(|err| map_not_found(err, DomainError::TargetNotFound(target)))?;

        Ok(ReactionSnapshot::from(envelope))
    }
}
