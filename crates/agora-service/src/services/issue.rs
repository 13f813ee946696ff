//! Issue service
//!
//! Loads the three special issue slots. Failures land in each slot's error
//! flag rather than propagating; the home feed renders whatever loaded.

use tracing::{instrument, warn};

use super::context::ServiceContext;

/// Issue service
pub struct IssueService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> IssueService<'a> {
    /// Create a new IssueService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load all three slots through the aggregate endpoint
    #[instrument(skip(self))]
    pub async fn load_all(&self) {
        let issues = self.ctx.issues();
        issues.begin_today();
        issues.begin_hot();
        issues.begin_balanced();

        match self.ctx.issue_gateway().home().await {
            Ok(set) => {
                issues.finish_today(Ok(set.today));
                issues.finish_hot(Ok(set.hot));
                issues.finish_balanced(Ok(set.balanced));
            }
            Err(err) => {
                warn!(error = %err, "Special issue aggregate fetch failed");
                let message = err.to_string();
                issues.finish_today(Err(message.clone()));
                issues.finish_hot(Err(message.clone()));
                issues.finish_balanced(Err(message));
            }
        }
    }

    /// Load the three slots through their individual endpoints, in parallel
    #[instrument(skip(self))]
    pub async fn load_each(&self) {
        futures::join!(self.load_today(), self.load_hot(), self.load_balanced());
    }

    /// Load today's issues
    #[instrument(skip(self))]
    pub async fn load_today(&self) {
        self.ctx.issues().begin_today();
        let result = self
            .ctx
            .issue_gateway()
            .today()
            .await
            .map_err(|err| err.to_string());
        if let Err(message) = &result {
            warn!(error = %message, "Today issues fetch failed");
        }
        self.ctx.issues().finish_today(result);
    }

    /// Load the hot issue
    #[instrument(skip(self))]
    pub async fn load_hot(&self) {
        self.ctx.issues().begin_hot();
        let result = self
            .ctx
            .issue_gateway()
            .hot()
            .await
            .map_err(|err| err.to_string());
        if let Err(message) = &result {
            warn!(error = %message, "Hot issue fetch failed");
        }
        self.ctx.issues().finish_hot(result);
    }

    /// Load the most evenly split issue
    #[instrument(skip(self))]
    pub async fn load_balanced(&self) {
        self.ctx.issues().begin_balanced();
        let result = self
            .ctx
            .issue_gateway()
            .balanced()
            .await
            .map_err(|err| err.to_string());
        if let Err(message) = &result {
            warn!(error = %message, "Balanced issue fetch failed");
        }
        self.ctx.issues().finish_balanced(result);
    }
}
