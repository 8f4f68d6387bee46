//! Common test utilities for E2E tests

use chirp::{AppState, config};
use std::sync::Once;
use tempfile::TempDir;
use tokio::net::TcpListener;

static METRICS_INIT: Once = Once::new();

/// Test server instance
pub struct TestServer {
    pub addr: String,
    pub state: AppState,
    pub _temp_dir: TempDir,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Create a new test server instance
    pub async fn new() -> Self {
        // Register metrics once per test binary
        METRICS_INIT.call_once(chirp::metrics::init_metrics);

        // Create temporary directory for test database
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        // Create test configuration
        let config = config::AppConfig {
            server: config::ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Let OS assign port
            },
            database: config::DatabaseConfig {
                path: db_path.clone(),
            },
            auth: config::AuthConfig {
                session_secret: "test-secret-key-32-bytes-long!!!".to_string(),
                session_max_age: 604800,
            },
            tweets: config::TweetConfig { max_chars: 240 },
            logging: config::LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        };

        // Initialize app state
        let state = AppState::new(config).await.unwrap();

        // Create HTTP client
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap();

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let addr_str = format!("http://{}", addr);

        // Build router
        let app = chirp::build_router(state.clone());

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait a bit for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Self {
            addr: addr_str,
            state,
            _temp_dir: temp_dir,
            client,
        }
    }

    /// Get base URL for API requests
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.addr, path)
    }

    /// Create a test user in the database
    pub async fn create_user(&self, username: &str) -> chirp::data::User {
        self.state.db.create_user(username, None).await.unwrap()
    }

    /// Mint a session token for a user
    pub fn token_for(&self, user: &chirp::data::User) -> String {
        use chirp::auth::{Session, create_session_token};
        use chrono::{Duration, Utc};

        let now = Utc::now();
        let session = Session {
            user_id: user.id.clone(),
            username: user.username.clone(),
            created_at: now,
            expires_at: now + Duration::seconds(self.state.config.auth.session_max_age),
        };

        create_session_token(&session, &self.state.config.auth.session_secret).unwrap()
    }
}
