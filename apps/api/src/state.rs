//! Shared application state.

use std::sync::Arc;

use cadastro_address::AddressVerifier;
use cadastro_db::RegistrationStore;

use crate::config::AddressCheckMode;

/// Everything a request needs, built once at startup.
///
/// Holds only shared handles; no per-request data is ever stored here.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RegistrationStore>,
    pub verifier: AddressVerifier,
    pub address_mode: AddressCheckMode,
}

impl AppState {
    pub fn new(
        store: Arc<dyn RegistrationStore>,
        verifier: AddressVerifier,
        address_mode: AddressCheckMode,
    ) -> Self {
        AppState {
            store,
            verifier,
            address_mode,
        }
    }
}

/// State as handed to axum.
pub type SharedState = Arc<AppState>;
