//! Application configuration loaded from environment variables.
//!
//! The same `Config` drives both the reference API server (port, signing key,
//! seed data) and the client SDK (API base URL, durable storage location).

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Server ---
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// JWT signing key for session tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
    /// Populate the in-memory database with demo records at startup
    pub seed_demo_data: bool,

    // --- Client ---
    /// Base URL of the REST API consumed by the client SDK
    pub api_base_url: String,
    /// JSON file backing the client's durable key/value storage
    pub storage_path: PathBuf,
}

impl Config {
    /// Config for tests only.
    pub fn test_default() -> Self {
        Self {
            port: 0,
            frontend_url: "http://localhost:5173".to_string(),
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
            seed_demo_data: true,
            api_base_url: "http://127.0.0.1:8080".to_string(),
            storage_path: PathBuf::from(".ironpulse/test-storage.json"),
        }
    }

    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => 8080,
        };

        let seed_demo_data = match env::var("SEED_DEMO_DATA") {
            Ok(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid("SEED_DEMO_DATA", raw))?,
            Err(_) => true,
        };

        Ok(Self {
            port,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            jwt_signing_key: env::var("JWT_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?
                .trim()
                .as_bytes()
                .to_vec(),
            seed_demo_data,
            api_base_url: env::var("API_BASE_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|_| format!("http://localhost:{}", port)),
            storage_path: env::var("IRONPULSE_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".ironpulse/storage.json")),
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        // Set required env vars for test
        env::set_var("JWT_SIGNING_KEY", "test_jwt_key_32_bytes_minimum!!");
        env::set_var("API_BASE_URL", "http://gym.local:9000/");
        env::remove_var("PORT");
        env::remove_var("SEED_DEMO_DATA");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.port, 8080);
        assert_eq!(config.api_base_url, "http://gym.local:9000");
        assert!(config.seed_demo_data);
        assert_eq!(config.jwt_signing_key, b"test_jwt_key_32_bytes_minimum!!");
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool(" Yes "), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
