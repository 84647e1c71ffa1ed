//! # club-common
//!
//! Shared utilities including configuration, error handling, bearer-token
//! verification, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Claims, TokenVerifier};
pub use config::{
    AppConfig, AppSettings, AuthConfig, CalendarConfig, ConfigError, CorsConfig, DatabaseConfig,
    Environment, RateLimitConfig, ServerConfig, MAX_HORIZON_MONTHS,
};
pub use error::{AppError, AppResult};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
