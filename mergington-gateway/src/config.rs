//! Runtime configuration for the gateway binary.

use std::path::PathBuf;

/// Environment variable naming the socket address to listen on.
pub const LISTEN_ADDR_VAR: &str = "MERGINGTON_LISTEN_ADDR";
/// Environment variable naming the directory served under `/static`.
pub const STATIC_DIR_VAR: &str = "MERGINGTON_STATIC_DIR";

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_STATIC_DIR: &str = "static";

/// Where the gateway listens and which files it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// Socket address passed to `TcpListener::bind`, e.g. `"0.0.0.0:8000"`.
    pub listen_addr: String,
    /// Directory holding `index.html` and its assets.
    pub static_dir: PathBuf,
}

impl GatewayConfig {
    #[must_use]
    pub fn new(listen_addr: impl Into<String>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            listen_addr: listen_addr.into(),
            static_dir: static_dir.into(),
        }
    }

    /// Read the configuration from the process environment, falling back to
    /// `127.0.0.1:8000` and `./static` for unset variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::new(
            lookup(LISTEN_ADDR_VAR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned()),
            lookup(STATIC_DIR_VAR).unwrap_or_else(|| DEFAULT_STATIC_DIR.to_owned()),
        )
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LISTEN_ADDR, DEFAULT_STATIC_DIR)
    }
}
