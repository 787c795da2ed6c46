//! HTTP surface: `POST /api/sign` issues result tokens and
//! `GET /result/<code>` renders share pages whose OGP asset depends on them.

pub mod config;
pub mod routes;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use sopo_core::SigningKey;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use crate::config::{ConfigError, ServerConfig};

/// Read-only state shared by every request.
#[derive(Debug)]
pub struct AppState {
    pub key: SigningKey,
    pub base_url: String,
}

impl From<ServerConfig> for AppState {
    fn from(config: ServerConfig) -> Self {
        Self {
            key: config.key,
            base_url: config.base_url,
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/sign", post(routes::route_sign))
        .route("/result/*path", get(routes::route_result))
        .fallback(routes::route_not_found)
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
