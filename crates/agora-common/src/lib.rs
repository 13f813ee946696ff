//! # agora-common
//!
//! Shared utilities including configuration, error handling, session
//! persistence, and telemetry.

pub mod config;
pub mod error;
pub mod session;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    ApiConfig, AppConfig, AppSettings, ConfigError, Environment, PaginationConfig, SessionConfig,
};
pub use error::{AppError, AppResult};
pub use session::{SessionData, SessionStore};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
