//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, AuthConfig, CalendarConfig, ConfigError, CorsConfig, DatabaseConfig,
    Environment, RateLimitConfig, ServerConfig, MAX_HORIZON_MONTHS,
};
