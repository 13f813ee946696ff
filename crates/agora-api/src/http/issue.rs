//! HTTP implementation of IssueGateway

use async_trait::async_trait;
use tracing::instrument;

use agora_core::{GatewayResult, IssueGateway, SpecialIssue, SpecialIssueSet};

use crate::wire::{IssueDto, SpecialHomeDto};

use super::client::HttpClient;

/// HTTP implementation of IssueGateway
#[derive(Debug, Clone)]
pub struct HttpIssueGateway {
    client: HttpClient,
}

impl HttpIssueGateway {
    /// Create a new HttpIssueGateway
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IssueGateway for HttpIssueGateway {
    #[instrument(skip(self))]
    async fn home(&self) -> GatewayResult<SpecialIssueSet> {
        let dto: SpecialHomeDto = self.client.get_json("/special/home").await?;
        Ok(SpecialIssueSet::from(dto))
    }

    #[instrument(skip(self))]
    async fn today(&self) -> GatewayResult<Vec<SpecialIssue>> {
        let dtos: Vec<IssueDto> = self.client.get_json("/special/today").await?;
        Ok(dtos.into_iter().map(SpecialIssue::from).collect())
    }

    #[instrument(skip(self))]
    async fn hot(&self) -> GatewayResult<Option<SpecialIssue>> {
        let dto: Option<IssueDto> = self.client.get_json("/special/hot").await?;
        Ok(dto.map(SpecialIssue::from))
    }

    #[instrument(skip(self))]
    async fn balanced(&self) -> GatewayResult<Option<SpecialIssue>> {
        let dto: Option<IssueDto> = self.client.get_json("/special/balanced").await?;
        Ok(dto.map(SpecialIssue::from))
    }
}
