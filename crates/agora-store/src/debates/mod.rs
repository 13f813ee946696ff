//! Debate state store

mod debate_store;

pub use debate_store::DebateStore;
