use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_cors() -> bool {
    true
}

/// Server-side settings. Everything here has a usable default so
/// `ServerConfig::default()` runs out of the box.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Allow-any CORS; disable when fronted by a proxy that handles it.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,

    /// Per-request timeout covering the whole check.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Where completed checks are stored. `None` disables persistence.
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Shared bearer token enabling the static verifier. `None` means all
    /// requests are anonymous.
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.bind.parse()?)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            enable_cors: default_cors(),
            timeout_secs: default_timeout(),
            database_path: None,
            auth_token: None,
        }
    }
}
