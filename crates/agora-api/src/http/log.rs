//! HTTP implementation of ActivityGateway

use async_trait::async_trait;
use tracing::instrument;

use agora_core::{ActivityEvent, ActivityGateway, GatewayResult};

use crate::wire::LogBody;

use super::client::HttpClient;

/// HTTP implementation of ActivityGateway
#[derive(Debug, Clone)]
pub struct HttpActivityGateway {
    client: HttpClient,
}

impl HttpActivityGateway {
    /// Create a new HttpActivityGateway
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ActivityGateway for HttpActivityGateway {
    #[instrument(skip(self, event))]
    async fn record(&self, event: &ActivityEvent) -> GatewayResult<()> {
        // The log endpoint refuses anonymous events; fail before dispatch
        self.client.require_token()?;
        self.client.post_unit("/logs", &LogBody::from(event)).await
    }
}
