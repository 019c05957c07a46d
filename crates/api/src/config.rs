use std::path::PathBuf;
use std::time::Duration;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have sensible defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Payment gateway credentials.
    pub gateway: GatewayConfig,
    /// Legal assistant service settings.
    pub assistant: AssistantConfig,
    /// Email of the reserved legal-assistant bot account, provisioned at
    /// startup (default: `legalbot@casebridge.com`).
    pub bot_email: String,
    /// Directory for uploaded media files (default: `media`).
    pub media_dir: PathBuf,
}

/// Payment gateway credentials (`GATEWAY_KEY_ID` / `GATEWAY_KEY_SECRET`).
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub key_id: String,
    pub key_secret: String,
    /// Request timeout for gateway calls in seconds (default: `10`).
    pub timeout: Duration,
}

/// Legal assistant service settings (`ASSISTANT_URL`, `ASSISTANT_TIMEOUT_SECS`).
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub url: String,
    /// Request timeout for assistant calls in seconds (default: `20`).
    pub timeout: Duration,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                       |
    /// |--------------------------|-------------------------------|
    /// | `HOST`                   | `0.0.0.0`                     |
    /// | `PORT`                   | `3000`                        |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`       |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                          |
    /// | `GATEWAY_KEY_ID`         | **required**                  |
    /// | `GATEWAY_KEY_SECRET`     | **required**                  |
    /// | `GATEWAY_TIMEOUT_SECS`   | `10`                          |
    /// | `ASSISTANT_URL`          | `http://localhost:8001/ask`   |
    /// | `ASSISTANT_TIMEOUT_SECS` | `20`                          |
    /// | `BOT_EMAIL`              | `legalbot@casebridge.com`     |
    /// | `MEDIA_DIR`              | `media`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();
        let gateway = GatewayConfig::from_env();
        let assistant = AssistantConfig::from_env();

        let bot_email =
            std::env::var("BOT_EMAIL").unwrap_or_else(|_| "legalbot@casebridge.com".into());

        let media_dir = PathBuf::from(std::env::var("MEDIA_DIR").unwrap_or_else(|_| "media".into()));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            gateway,
            assistant,
            bot_email,
            media_dir,
        }
    }
}

impl GatewayConfig {
    /// # Panics
    ///
    /// Panics if `GATEWAY_KEY_ID` or `GATEWAY_KEY_SECRET` is not set.
    pub fn from_env() -> Self {
        let key_id =
            std::env::var("GATEWAY_KEY_ID").expect("GATEWAY_KEY_ID must be set in the environment");
        let key_secret = std::env::var("GATEWAY_KEY_SECRET")
            .expect("GATEWAY_KEY_SECRET must be set in the environment");

        let timeout_secs: u64 = std::env::var("GATEWAY_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("GATEWAY_TIMEOUT_SECS must be a valid u64");

        Self {
            key_id,
            key_secret,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl AssistantConfig {
    pub fn from_env() -> Self {
        let url =
            std::env::var("ASSISTANT_URL").unwrap_or_else(|_| "http://localhost:8001/ask".into());

        let timeout_secs: u64 = std::env::var("ASSISTANT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("ASSISTANT_TIMEOUT_SECS must be a valid u64");

        Self {
            url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
