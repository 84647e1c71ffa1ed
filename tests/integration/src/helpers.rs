//! Test helpers for integration tests
//!
//! Spawns the API on an ephemeral port with a file-backed event catalog and
//! the real PostgreSQL RSVP store.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use club_api::{create_app, create_app_state};
use club_common::AppConfig;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{catalog_json, member_token};

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub config: AppConfig,
    _catalog_dir: TempDir,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()?).await
    }

    /// Start a test server with custom config
    ///
    /// The event catalog path is always replaced with a temp file holding
    /// `catalog_events()`.
    pub async fn start_with_config(mut config: AppConfig) -> Result<Self> {
        let catalog_dir = tempfile::tempdir()?;
        let catalog_path = catalog_dir.path().join("events.json");
        tokio::fs::write(&catalog_path, catalog_json()).await?;
        config.calendar.event_catalog_path = Some(catalog_path.to_string_lossy().into_owned());
        config.database.run_migrations = true;

        let state = create_app_state(config.clone()).await?;
        let app = create_app(state)?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            config,
            _catalog_dir: catalog_dir,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Bearer token for `member_id`
    pub fn token_for(&self, member_id: uuid::Uuid) -> String {
        member_token(&self.config, member_id)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    async fn send(request: RequestBuilder) -> Result<Response> {
        Ok(request.send().await?)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Self::send(self.client.get(self.url(path))).await
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Self::send(self.client.get(self.url(path)).bearer_auth(token)).await
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Self::send(self.client.post(self.url(path)).bearer_auth(token).json(body)).await
    }

    /// Make a POST request without auth
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Self::send(self.client.post(self.url(path)).json(body)).await
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Self::send(self.client.patch(self.url(path)).bearer_auth(token).json(body)).await
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Self::send(self.client.delete(self.url(path)).bearer_auth(token)).await
    }
}

/// Create a test configuration from the environment (and `.env`)
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    // The listener binds an ephemeral port; API_PORT only has to parse
    if std::env::var("API_PORT").is_err() {
        std::env::set_var("API_PORT", "0");
    }

    AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    for var in ["DATABASE_URL", "SUPABASE_JWT_SECRET"] {
        if std::env::var(var).is_err() {
            eprintln!("Skipping test: {var} not set");
            return false;
        }
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
