//! Activity service
//!
//! Fire-and-forget click/navigation analytics. Sends never block a user
//! action and their failures (including a missing auth token) are logged,
//! never surfaced.

use std::sync::Arc;

use agora_core::traits::ActivityGateway;
use agora_core::ActivityEvent;
use tracing::warn;

use super::context::ServiceContext;

/// Activity service
pub struct ActivityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ActivityService<'a> {
    /// Create a new ActivityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a click event
    pub fn record_click(&self, page: impl Into<String>, element: impl Into<String>) {
        let event = ActivityEvent::click(page, element, self.ctx.session().client_id());
        self.dispatch(event);
    }

    /// Record a navigation event
    pub fn record_navigation(&self, page: impl Into<String>) {
        let event = ActivityEvent::navigation(page, self.ctx.session().client_id());
        self.dispatch(event);
    }

    fn dispatch(&self, event: ActivityEvent) {
        tokio::spawn(send(self.ctx.activity_gateway_arc(), event));
    }
}

async fn send(gateway: Arc<dyn ActivityGateway>, event: ActivityEvent) {
    if let Err(err) = gateway.record(&event).await {
        warn!(kind = ?event.kind, page = %event.page, error = %err, "Activity event dropped");
    }
}
