use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::AppState;

/// Build the axum router with all address-book endpoints.
///
/// `/api/address/export` is registered alongside the `{id}` routes; the
/// static segment wins the match, so `export` is never parsed as an id.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/address",
            get(handler::list_addresses).post(handler::create_address),
        )
        .route("/api/address/export", get(handler::export_addresses))
        .route(
            "/api/address/:id",
            get(handler::read_address)
                .put(handler::update_address)
                .delete(handler::delete_address),
        )
        .fallback(handler::invalid_path)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
