//! API server configuration.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// HTTP server configuration
    pub http: HttpConfig,

    /// Profile-summary endpoint configuration
    pub profile: ProfileConfig,

    /// CORS configuration
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Bind address
    pub bind_addr: SocketAddr,

    /// Request timeout (seconds)
    pub timeout_secs: u64,

    /// Maximum request body size (bytes)
    pub max_body_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Minimum response latency (milliseconds) for the profile-summary
    /// endpoints. The handler always holds the response this long to keep
    /// the onboarding UI honest about the real backend's pacing.
    pub min_latency_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows any
    pub allowed_origins: Vec<String>,

    /// Allowed methods
    pub allowed_methods: Vec<String>,

    /// Allowed headers
    pub allowed_headers: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig {
                bind_addr: "0.0.0.0:8080".parse().unwrap(),
                timeout_secs: 30,
                max_body_size: 1024 * 1024, // 1MB
            },
            profile: ProfileConfig { min_latency_ms: 450 },
            cors: CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
                allowed_methods: vec!["GET".to_string(), "POST".to_string(), "OPTIONS".to_string()],
                allowed_headers: vec!["Content-Type".to_string(), "Authorization".to_string()],
            },
        }
    }
}

impl ApiConfig {
    /// Load configuration from file
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("OMNI"))
            .build()?;

        settings.try_deserialize()
    }

    /// Load from environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("OMNI"))
            .build()?;

        settings.try_deserialize()
    }
}
