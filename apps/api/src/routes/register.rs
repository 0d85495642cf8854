//! # POST /cadastrar
//!
//! ## Request Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  JSON body ──► RegistrationRequest                                      │
//! │       │                                                                 │
//! │       ▼  validate_registration (sync, cadastro-core)                    │
//! │  required → CPF → CNPJ → mobile → landline → email ── fail ──► 400      │
//! │       │                                                                 │
//! │       ▼  await #1: AddressVerifier (bounded by timeout)                 │
//! │  Enforce:  failure ──► 400                                              │
//! │  Advisory: failure ──► warn!, continue                                  │
//! │       │                                                                 │
//! │       ▼  await #2: RegistrationStore::insert                            │
//! │  failure ──► 500 (generic message, detail logged)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  200 {"message": "Dados Cadastrados com sucesso!"}                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two awaits run strictly in sequence: nothing is inserted until the
//! lookup has finished.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use cadastro_address::AddressQuery;
use cadastro_core::document::mask;
use cadastro_core::{validate_registration, RegistrationRequest};

use crate::config::AddressCheckMode;
use crate::error::ApiResult;
use crate::state::SharedState;

/// Message returned after a successful insert.
pub const REGISTERED: &str = "Dados Cadastrados com sucesso!";

/// Body of every success response: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        MessageBody {
            message: message.into(),
        }
    }
}

/// Validates, verifies the address, and stores one registration.
pub async fn register(
    State(state): State<SharedState>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> ApiResult<Json<MessageBody>> {
    let Json(request) = payload?;

    let record = validate_registration(&request).inspect_err(|e| {
        info!(code = e.code(), cpf = %mask(&request.cpf), "Registration rejected");
    })?;

    let query = AddressQuery::from_request(&request);
    if let Err(e) = state.verifier.verify(&query).await {
        match state.address_mode {
            AddressCheckMode::Enforce => {
                info!(
                    code = e.code(),
                    upstream = e.is_upstream(),
                    cep = %request.cep,
                    error = ?e,
                    "Address rejected"
                );
                return Err(e.into());
            }
            AddressCheckMode::Advisory => {
                warn!(
                    code = e.code(),
                    upstream = e.is_upstream(),
                    cep = %request.cep,
                    error = ?e,
                    "Address verification failed; storing registration anyway"
                );
            }
        }
    }

    let inserted = state.store.insert(&record).await?;

    info!(
        id = %inserted.id,
        cnpj = %mask(&record.cnpj),
        "Registration stored"
    );

    Ok(Json(MessageBody::new(REGISTERED)))
}
