//! Comment and reply endpoint DTOs

use agora_core::{
    Comment, CommentPage, ReactionCounts, ReactionSnapshot, Reply, Stance,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::label::parse_reaction_label;

/// One comment row as the backend sends it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub debate_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    pub like: u32,
    pub dislike: u32,
    #[serde(default)]
    pub is_state: Option<String>,
    #[serde(default)]
    pub stance: Option<Stance>,
    #[serde(default)]
    pub reply_count: u32,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
}

impl From<CommentDto> for Comment {
    fn from(dto: CommentDto) -> Self {
        Comment {
            id: dto.id,
            debate_id: dto.debate_id,
            author_id: dto.user_id,
            author_name: dto.user_name,
            content: dto.content,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
            reactions: ReactionSnapshot {
                counts: ReactionCounts::with_likes(dto.like, dto.dislike),
                mine: dto.is_state.as_deref().and_then(parse_reaction_label),
            },
            stance: dto.stance,
            reply_count: dto.reply_count,
            country_code: dto.country_code,
            country_name: dto.country_name,
        }
    }
}

/// One reply row as the backend sends it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyDto {
    pub id: i64,
    pub comment_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    pub like: u32,
    pub dislike: u32,
    #[serde(default)]
    pub is_state: Option<String>,
}

impl From<ReplyDto> for Reply {
    fn from(dto: ReplyDto) -> Self {
        Reply {
            id: dto.id,
            comment_id: dto.comment_id,
            author_id: dto.user_id,
            author_name: dto.user_name,
            content: dto.content,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
            reactions: ReactionSnapshot {
                counts: ReactionCounts::with_likes(dto.like, dto.dislike),
                mine: dto.is_state.as_deref().and_then(parse_reaction_label),
            },
        }
    }
}

/// Response of `GET /debate/{id}/comments`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPageDto {
    pub items: Vec<CommentDto>,
    pub total: u64,
    pub total_pages: u32,
    pub page: u32,
}

impl From<CommentPageDto> for CommentPage {
    fn from(dto: CommentPageDto) -> Self {
        CommentPage {
            items: dto.items.into_iter().map(Comment::from).collect(),
            total: dto.total,
            total_pages: dto.total_pages,
            page: dto.page,
        }
    }
}

/// Body of `POST /debate/{id}/comments`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentBody<'a> {
    pub content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stance: Option<Stance>,
}

/// Body of `POST /comment/{id}/replies`
#[derive(Debug, Clone, Serialize)]
pub struct CreateReplyBody<'a> {
    pub content: &'a str,
}

/// Body of `PUT /comment/{id}` and `PUT /reply/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateContentBody<'a> {
    pub content: &'a str,
}
