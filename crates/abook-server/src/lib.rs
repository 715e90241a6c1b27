//! HTTP server for the address-book service.
//!
//! Exposes the record store as a JSON REST API: decode the request into a
//! candidate record, validate it, apply it to the store, and encode the
//! result (or the error) back to the caller.

use std::sync::Arc;

use abook_store::AddressStore;

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use router::build_router;
pub use server::ApiServer;

/// Shared handler state: the owning store handle, constructed once at
/// startup and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AddressStore>,
}
