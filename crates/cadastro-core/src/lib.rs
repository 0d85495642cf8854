//! # cadastro-core: Pure Registration Logic
//!
//! Checksums, field validators and request types for the registration
//! service. This crate has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Registration Service                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              apps/api (axum): POST /cadastrar                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ cadastro-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ document  │  │validation │  │   types   │  │   error   │  │   │
//! │  │   │ CPF, CNPJ │  │ phone,    │  │ Request,  │  │Validation │  │   │
//! │  │   │ mod-11    │  │ email,CEP │  │ Record    │  │  Error    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌──────────────────────┐   ┌──▼───────────────────────────────────┐   │
//! │  │ cadastro-address     │   │ cadastro-db                           │   │
//! │  │ ViaCEP lookup        │   │ SQLite, migrations, repository        │   │
//! │  └──────────────────────┘   └───────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`document`] - CPF and CNPJ check digits
//! - [`validation`] - Phone, email and CEP checks plus the registration pipeline
//! - [`types`] - `RegistrationRequest`, `NewRegistration` and the stored `Registration`
//! - [`error`] - `ValidationError`
//!
//! ## Example Usage
//!
//! ```rust
//! use cadastro_core::document::{validate_cnpj, validate_cpf};
//! use cadastro_core::validation::validate_cep_format;
//!
//! assert!(validate_cpf("529.982.247-25"));
//! assert!(validate_cnpj("11.222.333/0001-81"));
//! assert!(validate_cep_format("01310-100"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod document;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::{NewRegistration, Registration, RegistrationRequest};
pub use validation::validate_registration;
