//! # Cadastro API
//!
//! HTTP surface of the registration service.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cadastro API Server                              │
//! │                                                                         │
//! │  Client ───► axum (4568) ───► cadastro-core ───► cadastro-address      │
//! │                                (validate)         (ViaCEP lookup)       │
//! │                                                        │                │
//! │                                                        ▼                │
//! │                                                   cadastro-db           │
//! │                                                    (SQLite)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Environment configuration
//! - [`error`] - `ApiError` and its HTTP mapping
//! - [`routes`] - Router and handlers
//! - [`state`] - Shared handles given to every handler

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::{AddressCheckMode, ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult};
pub use routes::build_router;
pub use state::{AppState, SharedState};
