//! Activity log endpoint DTOs

use agora_core::{ActivityEvent, ActivityKind};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Body of `POST /logs`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogBody<'a> {
    pub event_type: ActivityKind,
    pub page: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<&'a str>,
    pub client_id: &'a str,
    pub occurred_at: DateTime<Utc>,
}

impl<'a> From<&'a ActivityEvent> for LogBody<'a> {
    fn from(event: &'a ActivityEvent) -> Self {
        Self {
            event_type: event.kind,
            page: &event.page,
            element: event.element.as_deref(),
            client_id: &event.client_id,
            occurred_at: event.occurred_at,
        }
    }
}
