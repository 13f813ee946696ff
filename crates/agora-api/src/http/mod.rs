//! HTTP adapter - `reqwest` implementations of the gateway traits

mod client;
mod comment;
mod issue;
mod log;
mod reaction;
mod vote;

pub use client::HttpClient;
pub use comment::HttpCommentGateway;
pub use issue::HttpIssueGateway;
pub use log::HttpActivityGateway;
pub use reaction::HttpReactionGateway;
pub use vote::HttpVoteGateway;
