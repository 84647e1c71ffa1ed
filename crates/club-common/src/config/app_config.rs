//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub calendar: CalendarConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations on startup
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

/// Bearer token configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 secret shared with the identity provider
    pub jwt_secret: String,
    #[serde(default = "default_audience")]
    pub audience: String,
}

/// Largest expansion horizon accepted from the environment or a request
pub const MAX_HORIZON_MONTHS: u32 = 36;

/// Calendar and RSVP store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// How far ahead recurring events are expanded
    #[serde(default = "default_horizon_months")]
    pub horizon_months: u32,
    /// Load events from this JSON file instead of the `events` table
    #[serde(default)]
    pub event_catalog_path: Option<String>,
    /// Upper bound on any single store call
    #[serde(default = "default_store_timeout_ms")]
    pub store_timeout_ms: u64,
}

impl CalendarConfig {
    #[must_use]
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            horizon_months: default_horizon_months(),
            event_catalog_path: None,
            store_timeout_ms: default_store_timeout_ms(),
        }
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "club-calendar".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_run_migrations() -> bool {
    true
}

fn default_audience() -> String {
    "authenticated".to_string()
}

fn default_horizon_months() -> u32 {
    3
}

fn default_store_timeout_ms() -> u64 {
    5000
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

/// Read an optional variable, falling back to `default` when unset
fn parse_var<T: FromStr>(name: &'static str, default: impl FnOnce() -> T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(default()),
    }
}

/// Like [`parse_var`], but rejects values above `max`
fn parse_capped_var(
    name: &'static str,
    max: u32,
    default: impl FnOnce() -> u32,
) -> Result<u32, ConfigError> {
    let value = parse_var(name, default)?;
    if value > max {
        return Err(ConfigError::InvalidValue(name, value.to_string()));
    }
    Ok(value)
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let env_name = env::var("APP_ENV").ok();
        let app_env = match env_name.as_deref() {
            Some(raw) => Environment::parse(raw)
                .ok_or_else(|| ConfigError::InvalidValue("APP_ENV", raw.to_string()))?,
            None => Environment::default(),
        };

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: app_env,
            },
            api: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: {
                    let raw = required_var("API_PORT")?;
                    raw.parse()
                        .map_err(|_| ConfigError::InvalidValue("API_PORT", raw))?
                },
            },
            database: DatabaseConfig {
                url: required_var("DATABASE_URL")?,
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS", default_max_connections)?,
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS", default_min_connections)?,
                run_migrations: parse_var("DATABASE_RUN_MIGRATIONS", default_run_migrations)?,
            },
            auth: AuthConfig {
                jwt_secret: required_var("SUPABASE_JWT_SECRET")?,
                audience: env::var("AUTH_AUDIENCE").unwrap_or_else(|_| default_audience()),
            },
            calendar: CalendarConfig {
                horizon_months: parse_capped_var(
                    "CALENDAR_HORIZON_MONTHS",
                    MAX_HORIZON_MONTHS,
                    default_horizon_months,
                )?,
                event_catalog_path: env::var("EVENT_CATALOG_PATH")
                    .ok()
                    .filter(|s| !s.trim().is_empty()),
                store_timeout_ms: parse_var("STORE_TIMEOUT_MS", default_store_timeout_ms)?,
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_var(
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    default_requests_per_second,
                )?,
                burst: parse_var("RATE_LIMIT_BURST", default_burst)?,
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
