//! Home-feed special issue slots
//!
//! Three independent slots (today / hot / balanced), each with its own
//! loading and error flags. There is no shared invalidation; a slot changes
//! only when it is explicitly loaded again.

use agora_core::SpecialIssue;
use parking_lot::RwLock;

/// One slot's data plus its loading/error flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSlot<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for IssueSlot<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> IssueSlot<T> {
    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn finish(&mut self, result: Result<T, String>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }
}

#[derive(Debug, Default)]
struct IssueSlots {
    today: IssueSlot<Vec<SpecialIssue>>,
    hot: IssueSlot<Option<SpecialIssue>>,
    balanced: IssueSlot<Option<SpecialIssue>>,
}

/// Store of the three special issue slots
#[derive(Debug, Default)]
pub struct IssueStore {
    inner: RwLock<IssueSlots>,
}

impl IssueStore {
    /// Create a store with all slots empty
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Today ===

    /// Flag the today slot as loading
    pub fn begin_today(&self) {
        self.inner.write().today.begin();
    }

    /// Finish the today slot with fetched data or an error message
    pub fn finish_today(&self, result: Result<Vec<SpecialIssue>, String>) {
        self.inner.write().today.finish(result);
    }

    /// The today slot's current state
    #[must_use]
    pub fn today(&self) -> IssueSlot<Vec<SpecialIssue>> {
        self.inner.read().today.clone()
    }

    // === Hot ===

    /// Flag the hot slot as loading
    pub fn begin_hot(&self) {
        self.inner.write().hot.begin();
    }

    /// Finish the hot slot with fetched data or an error message
    pub fn finish_hot(&self, result: Result<Option<SpecialIssue>, String>) {
        self.inner.write().hot.finish(result);
    }

    /// The hot slot's current state
    #[must_use]
    pub fn hot(&self) -> IssueSlot<Option<SpecialIssue>> {
        self.inner.read().hot.clone()
    }

    // === Balanced ===

    /// Flag the balanced slot as loading
    pub fn begin_balanced(&self) {
        self.inner.write().balanced.begin();
    }

    /// Finish the balanced slot with fetched data or an error message
    pub fn finish_balanced(&self, result: Result<Option<SpecialIssue>, String>) {
        self.inner.write().balanced.finish(result);
    }

    /// The balanced slot's current state
    #[must_use]
    pub fn balanced(&self) -> IssueSlot<Option<SpecialIssue>> {
        self.inner.read().balanced.clone()
    }
}
