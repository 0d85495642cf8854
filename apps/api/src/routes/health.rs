//! Liveness, readiness and the echo endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;
use tracing::info;

use crate::error::ApiResult;
use crate::routes::register::MessageBody;
use crate::state::SharedState;

/// `GET /ping`
pub async fn ping() -> &'static str {
    "pong"
}

/// `GET /health`: 200 when the database answers, 503 otherwise.
pub async fn health(State(state): State<SharedState>) -> impl IntoResponse {
    if state.store.health_check().await {
        (StatusCode::OK, "OK")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE")
    }
}

/// `POST /teste`: logs the JSON body and acknowledges it.
pub async fn echo(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<Json<MessageBody>> {
    let Json(body) = payload?;
    info!(body = %body, "Corpo da requisição recebido");
    Ok(Json(MessageBody::new("Teste recebido!")))
}
