use std::sync::Arc;

use tokio::net::TcpListener;

use abook_store::{AddressStore, InMemoryAddressStore};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::AppState;

/// Address-book API server.
pub struct ApiServer {
    config: ServerConfig,
    state: AppState,
}

impl ApiServer {
    /// Create a server around an explicitly owned store handle.
    pub fn new(config: ServerConfig, store: Arc<dyn AddressStore>) -> Self {
        Self {
            config,
            state: AppState { store },
        }
    }

    /// Create a server with a fresh, empty in-memory store.
    pub fn with_in_memory_store(config: ServerConfig) -> Self {
        Self::new(config, Arc::new(InMemoryAddressStore::new()))
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        tracing::info!("address-book server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = ApiServer::with_in_memory_store(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:9090".parse().unwrap());
    }

    #[test]
    fn router_builds() {
        let server = ApiServer::with_in_memory_store(ServerConfig::default());
        let _router = server.router();
    }
}
