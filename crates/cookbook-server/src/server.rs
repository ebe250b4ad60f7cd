use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router_with_limit;
use crate::state::AppState;

/// The cookbook HTTP server.
pub struct CookbookServer {
    config: ServerConfig,
    state: AppState,
}

impl CookbookServer {
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState::new(config.resolver_config());
        Self { config, state }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router_with_limit(self.state.clone(), self.config.max_body_bytes)
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            addr = %self.config.bind_addr,
            max_depth = self.config.max_depth,
            "cookbook server listening"
        );
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use cookbook_store::EntryStore;

    use super::*;

    #[test]
    fn server_construction() {
        let mut config = ServerConfig::default();
        config.max_depth = 5;
        let server = CookbookServer::new(config);
        assert_eq!(server.config().bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(server.state().resolver_config.max_depth, 5);
        assert!(server.state().store.is_empty().unwrap());
    }

    #[test]
    fn router_builds() {
        let server = CookbookServer::new(ServerConfig::default());
        let _router = server.router();
    }
}
