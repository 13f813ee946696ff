//! HTTP implementation of CommentGateway

use async_trait::async_trait;
use tracing::instrument;

use agora_core::{
    Comment, CommentDraft, CommentGateway, CommentPage, DomainError, GatewayResult, Reply,
};

use crate::wire::{
    CommentDto, CommentPageDto, CreateCommentBody, CreateReplyBody, ReplyDto, UpdateContentBody,
};

use super::client::{map_not_found, HttpClient};

/// HTTP implementation of CommentGateway
#[derive(Debug, Clone)]
pub struct HttpCommentGateway {
    client: HttpClient,
}

impl HttpCommentGateway {
    /// Create a new HttpCommentGateway
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CommentGateway for HttpCommentGateway {
    #[instrument(skip(self))]
    async fn list(&self, debate_id: i64, page: u32, size: u32) -> GatewayResult<CommentPage> {
        let dto: CommentPageDto = self
            .client
            .get_json(&format!(
                "/debate/{debate_id}/comments?page={page}&size={size}"
            ))
            .await
            .map_err(|err| map_not_found(err, DomainError::DebateNotFound(debate_id)))?;

        Ok(CommentPage::from(dto))
    }

    #[instrument(skip(self, draft))]
    async fn create(&self, debate_id: i64, draft: &CommentDraft) -> GatewayResult<Comment> {
        let body = CreateCommentBody {
            content: &draft.content,
            stance: draft.stance,
        };
        let dto: CommentDto = self
            .client
            .post_json(&format!("/debate/{debate_id}/comments"), &body)
            .await
            .map_err(|err| map_not_found(err, DomainError::DebateNotFound(debate_id)))?;

        Ok(Comment::from(dto))
    }

    #[instrument(skip(self, content))]
    async fn update(&self, comment_id: i64, content: &str) -> GatewayResult<Comment> {
        let dto: CommentDto = self
            .client
            .put_json(&format!("/comment/{comment_id}"), &UpdateContentBody { content })
            .await
            .map_err(|err| map_not_found(err, DomainError::CommentNotFound(comment_id)))?;

        Ok(Comment::from(dto))
    }

    #[instrument(skip(self))]
    async fn delete(&self, comment_id: i64) -> GatewayResult<()> {
        self.client
            .delete(&format!("/comment/{comment_id}"))
            .await
            .map_err(|err| map_not_found(err, DomainError::CommentNotFound(comment_id)))
    }

    #[instrument(skip(self))]
    async fn list_replies(&self, comment_id: i64) -> GatewayResult<Vec<Reply>> {
        let dtos: Vec<ReplyDto> = self
            .client
            .get_json(&format!("/comment/{comment_id}/replies"))
            .await
            .map_err(|err| map_not_found(err, DomainError::CommentNotFound(comment_id)))?;

        Ok(dtos.into_iter().map(Reply::from).collect())
    }

    #[instrument(skip(self, content))]
    async fn create_reply(&self, comment_id: i64, content: &str) -> GatewayResult<Reply> {
        let dto: ReplyDto = self
            .client
            .post_json(
                &format!("/comment/{comment_id}/replies"),
                &CreateReplyBody { content },
            )
            .await
            .map_err(|err| map_not_found(err, DomainError::CommentNotFound(comment_id)))?;

        Ok(Reply::from(dto))
    }

    #[instrument(skip(self, content))]
    async fn update_reply(&self, reply_id: i64, content: &str) -> GatewayResult<Reply> {
        let dto: ReplyDto = self
            .client
            .put_json(&format!("/reply/{reply_id}"), &UpdateContentBody { content })
            .await
            .map_err(|err| map_not_found(err, DomainError::ReplyNotFound(reply_id)))?;

        Ok(Reply::from(dto))
    }

    #[instrument(skip(self))]
    async fn delete_reply(&self, reply_id: i64) -> GatewayResult<()> {
        self.client
            .delete(&format!("/reply/{reply_id}"))
            .await
            .map_err(|err| map_not_found(err, DomainError::ReplyNotFound(reply_id)))
    }
}
