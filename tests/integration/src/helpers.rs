//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! and seeding founder/startup rows.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use meet_api::{create_app, create_app_state};
use meet_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, GoogleConfig, JwtConfig,
    JwtService, OutboundConfig, RateLimitConfig, SendGridConfig, ServerConfig,
};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Shared secret for test tokens
pub const TEST_JWT_SECRET: &str = "integration-test-secret-key";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub pool: PgPool,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on an ephemeral port
    pub async fn start() -> Result<Self> {
        let config = test_config()?;

        let state = create_app_state(config).await?;
        let pool = state.db_pool().clone();
        let app = create_app(state);

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
            pool,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .patch(&url)
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await?)
    }

    /// Mint a bearer token for a founder
    pub fn token_for(&self, founder_id: Uuid) -> String {
        JwtService::new(TEST_JWT_SECRET, 3600)
            .issue_token(founder_id)
            .expect("token")
    }

    /// Seed a startup and a founder with a complete profile, returning the
    /// founder id
    pub async fn seed_founder(&self, first_name: &str) -> Result<Uuid> {
        let startup_id = Uuid::new_v4();
        let founder_id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO startups (id, name, created_at, updated_at) VALUES ($1, $2, $3, $3)",
        )
        .bind(startup_id)
        .bind(format!("{first_name} Ventures"))
        .bind(now)
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO founders (id, first_name, last_name, email, startup_id,
                                  profile_complete, created_at, updated_at)
            VALUES ($1, $2, 'Tester', $3, $4, TRUE, $5, $5)
            "#,
        )
        .bind(founder_id)
        .bind(first_name)
        .bind(format!("{}@test.example", Uuid::new_v4()))
        .bind(startup_id)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(founder_id)
    }

    /// Seed a pending invite between two founders with both slots in the
    /// future, returning the invite id
    pub async fn seed_pending_invite(&self, inviter_id: Uuid, invitee_id: Uuid) -> Result<Uuid> {
        let invite_id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO invites (id, inviter_id, invitee_id, purpose_of_meeting,
                                 slot_a_starts_at, slot_b_starts_at,
                                 proposed_duration_minutes, status, created_at, updated_at)
            VALUES ($1, $2, $3, 'Exploring a joint pilot program',
                    $4, $5, 30, 'pending', $6, $6)
            "#,
        )
        .bind(invite_id)
        .bind(inviter_id)
        .bind(invitee_id)
        .bind(now + chrono::Duration::hours(2))
        .bind(now + chrono::Duration::hours(4))
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(invite_id)
    }
}

/// Create a test configuration
///
/// Mail and calendar credentials are dummies; no test exercises the
/// external providers.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL is required for integration tests"))?;

    Ok(AppConfig {
        app: AppSettings {
            name: "foundermeet-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 5,
            min_connections: 1,
        },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            token_expiry: 3600,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 1000,
        },
        cors: CorsConfig {
            allowed_origins: vec![],
        },
        sendgrid: SendGridConfig {
            api_key: "test-key".to_string(),
            from_email: "noreply@test.example".to_string(),
        },
        google: GoogleConfig {
            client_id: "test-client".to_string(),
            client_secret: "test-secret".to_string(),
            redirect_uri: "http://localhost/callback".to_string(),
        },
        outbound: OutboundConfig {
            request_timeout_secs: 5,
        },
        frontend_url: "http://localhost:3000".to_string(),
    })
}

/// Helper to check if the test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
