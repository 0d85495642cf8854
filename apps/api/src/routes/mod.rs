//! # HTTP Routes
//!
//! | Method | Path         | Handler                  |
//! |--------|--------------|--------------------------|
//! | GET    | `/ping`      | [`health::ping`]         |
//! | GET    | `/health`    | [`health::health`]       |
//! | POST   | `/teste`     | [`health::echo`]         |
//! | POST   | `/cadastrar` | [`register::register`]   |

pub mod health;
pub mod register;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the router with every route and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(health::ping))
        .route("/health", get(health::health))
        .route("/teste", post(health::echo))
        .route("/cadastrar", post(register::register))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
