use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use cookbook_resolver::config::DEFAULT_MAX_DEPTH;
use cookbook_resolver::ResolverConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};
use crate::router::DEFAULT_BODY_LIMIT;

/// Server settings, loadable from TOML. Missing keys take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Deepest level a required item may sit at during a summary.
    pub max_depth: usize,
    /// Largest accepted request body.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 8080)),
            max_depth: DEFAULT_MAX_DEPTH,
            max_body_bytes: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded server config");
        Ok(config)
    }

    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig::with_max_depth(self.max_depth)
    }
}
