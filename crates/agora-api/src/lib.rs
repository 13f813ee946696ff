//! # agora-api
//!
//! Gateway adapters implementing the ports defined in `agora-core`.
//!
//! ## Overview
//!
//! Two adapters ship with the client:
//!
//! - `http` - a `reqwest`-based client speaking the REST contract of the
//!   remote backend, with bearer auth sourced from the session store
//! - `mock` - an in-memory backend with failure injection, used by tests
//!   and by builds that run without a real server
//!
//! Wire DTOs and the reaction label translation table live in `wire`; the
//! rest of the stack only ever sees domain enums.

pub mod http;
pub mod mock;
pub mod wire;

// Re-export commonly used types
pub use http::{
    HttpActivityGateway, HttpClient, HttpCommentGateway, HttpIssueGateway, HttpReactionGateway,
    HttpVoteGateway,
};
pub use mock::MockBackend;
