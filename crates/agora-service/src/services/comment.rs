//! Comment service
//!
//! CRUD over the paginated comment/reply cache. Creates are optimistic
//! (negative-id placeholder replaced by the authoritative row), edits are
//! optimistic with rollback, deletes apply only after the backend
//! confirms.

use agora_core::{Comment, CommentDraft, Reply};
use agora_store::CommentPageState;
use tracing::{debug, info, instrument};

use crate::dto::{
    CreateCommentRequest, CreateReplyRequest, UpdateCommentRequest, UpdateReplyRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // === Comments ===

    /// Fetch one page of comments and replace the debate's cached page
    ///
    /// The previous page's items are discarded; there is no merge.
    #[instrument(skip(self))]
    pub async fn load_page(&self, debate_id: i64, page: u32) -> ServiceResult<CommentPageState> {
        let size = self.ctx.config().pagination.comment_page_size;
        let fetched = self.ctx.comment_gateway().list(debate_id, page, size).await?;

        let total = fetched.total;
        self.ctx.comments().replace_page(debate_id, fetched);
        self.ctx
            .debates()
            .set_comment_count(debate_id, total.min(u64::from(u32::MAX)) as u32);

        self.ctx
            .comments()
            .page(debate_id)
            .ok_or_else(|| ServiceError::internal("page vanished after replace"))
    }

    /// Create a comment with an optimistic placeholder
    ///
    /// The placeholder appears at the head of the page immediately and is
    /// replaced by the authoritative row when the backend confirms, or
    /// removed when it refuses.
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        debate_id: i64,
        request: &CreateCommentRequest,
    ) -> ServiceResult<Comment> {
        request.validated().map_err(ServiceError::validation)?;

        let author_name = self
            .ctx
            .session()
            .user_name()
            .unwrap_or_else(|| "anonymous".to_string());
        let temp_id = self.ctx.next_temp_id();
        let placeholder = Comment::pending(
            temp_id,
            debate_id,
            0,
            author_name,
            request.content.clone(),
            request.stance,
        );
        self.ctx.comments().insert_pending(placeholder);

        let draft = CommentDraft {
            content: request.content.clone(),
            stance: request.stance,
        };
        match self.ctx.comment_gateway().create(debate_id, &draft).await {
            Ok(authoritative) => {
                if !self
                    .ctx
                    .comments()
                    .confirm_pending(debate_id, temp_id, authoritative.clone())
                {
                    // The page was replaced while the call was in flight;
                    // the row will come back with the next page load
                    debug!(debate_id, temp_id, "Placeholder gone before confirmation");
                }
                self.ctx.debates().adjust_comment_count(debate_id, 1);
                info!(debate_id, comment_id = authoritative.id, "Comment created");
                Ok(authoritative)
            }
            Err(err) => {
                self.ctx.comments().discard_pending(debate_id, temp_id);
                Err(err.into())
            }
        }
    }

    /// Edit a comment optimistically, rolling back if the backend refuses
    #[instrument(skip(self, request))]
    pub async fn edit(
        &self,
        comment_id: i64,
        request: &UpdateCommentRequest,
    ) -> ServiceResult<Comment> {
        request.validated().map_err(ServiceError::validation)?;

        let previous = self
            .ctx
            .comments()
            .edit_comment(comment_id, &request.content)
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        match self
            .ctx
            .comment_gateway()
            .update(comment_id, &request.content)
            .await
        {
            Ok(authoritative) => {
                self.ctx.comments().apply_comment(authoritative.clone());
                Ok(authoritative)
            }
            Err(err) => {
                self.ctx.comments().apply_comment(previous);
                Err(err.into())
            }
        }
    }

    /// Delete a comment after the backend confirms
    ///
    /// Removal cascades to the comment's cached replies and decrements the
    /// page total and the debate's comment count.
    #[instrument(skip(self))]
    pub async fn delete(&self, comment_id: i64) -> ServiceResult<()> {
        self.ctx.comment_gateway().delete(comment_id).await?;

        if let Some(removed) = self.ctx.comments().remove_comment(comment_id) {
            self.ctx.debates().adjust_comment_count(removed.debate_id, -1);
            info!(comment_id, debate_id = removed.debate_id, "Comment deleted");
        }
        Ok(())
    }

    // === Replies ===

    /// Fetch a comment's replies and replace the cached list
    #[instrument(skip(self))]
    pub async fn load_replies(&self, comment_id: i64) -> ServiceResult<Vec<Reply>> {
        let replies = self.ctx.comment_gateway().list_replies(comment_id).await?;
        self.ctx.comments().replace_replies(comment_id, replies.clone());
        Ok(replies)
    }

    /// Create a reply; the row is inserted once the backend confirms
    #[instrument(skip(self, request))]
    pub async fn create_reply(
        &self,
        comment_id: i64,
        request: &CreateReplyRequest,
    ) -> ServiceResult<Reply> {
        request.validated().map_err(ServiceError::validation)?;

        let reply = self
            .ctx
            .comment_gateway()
            .create_reply(comment_id, &request.content)
            .await?;
        self.ctx.comments().insert_reply(reply.clone());
        info!(comment_id, reply_id = reply.id, "Reply created");
        Ok(reply)
    }

    /// Edit a reply optimistically, rolling back if the backend refuses
    #[instrument(skip(self, request))]
    pub async fn edit_reply(
        &self,
        reply_id: i64,
        request: &UpdateReplyRequest,
    ) -> ServiceResult<Reply> {
        request.validated().map_err(ServiceError::validation)?;

        let previous = self
            .ctx
            .comments()
            .edit_reply(reply_id, &request.content)
            .ok_or_else(|| ServiceError::not_found("Reply", reply_id.to_string()))?;

        match self
            .ctx
            .comment_gateway()
            .update_reply(reply_id, &request.content)
            .await
        {
            Ok(authoritative) => {
                self.ctx.comments().apply_reply(authoritative.clone());
                Ok(authoritative)
            }
            Err(err) => {
                self.ctx.comments().apply_reply(previous);
                Err(err.into())
            }
        }
    }

    /// Delete a reply after the backend confirms
    #[instrument(skip(self))]
    pub async fn delete_reply(&self, reply_id: i64) -> ServiceResult<()> {
        self.ctx.comment_gateway().delete_reply(reply_id).await?;
        self.ctx.comments().remove_reply(reply_id);
        Ok(())
    }
}
