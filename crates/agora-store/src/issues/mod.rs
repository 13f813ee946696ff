//! Special issue slots

mod issue_store;

pub use issue_store::{IssueSlot, IssueStore};
