//! Session persistence

mod session_store;

pub use session_store::{SessionData, SessionStore};
