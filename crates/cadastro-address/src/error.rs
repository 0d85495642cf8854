//! # Address Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Address Verification Failures                          │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │     Input       │  │     Lookup      │  │       Mismatch          │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  MissingFields  │  │  LookupFailed   │  │  StateMismatch          │ │
//! │  │  InvalidCep     │  │  InvalidResponse│  │  CityMismatch           │ │
//! │  │                 │  │  NotFound       │  │  StreetMismatch         │ │
//! │  │                 │  │                 │  │  NeighborhoodMismatch   │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Display` is the client-facing message. Details useful for operators
//! (network errors, what ViaCEP actually returned) ride along in fields and
//! only reach the logs.

use thiserror::Error;

/// Result type alias for address verification.
pub type AddressResult<T> = Result<T, AddressError>;

/// Why an address failed verification. Variants are in check order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Campos de endereço obrigatorios!")]
    MissingFields,

    /// CEP is not in `NNNNN-NNN` form.
    #[error("Cep inválido")]
    InvalidCep,

    /// Network error, timeout, non-2xx status or a body that is not JSON.
    #[error("Erro ao consultar CEP!")]
    LookupFailed { reason: String },

    /// JSON without the five string fields.
    #[error("A resposta do ViaCEP é inválida!")]
    InvalidResponse { reason: String },

    #[error("CEP não encontrado!")]
    NotFound,

    #[error("Estado não corresponde ao CEP informado!")]
    StateMismatch { expected: String },

    #[error("Cidade não corresponde ao CEP informado!")]
    CityMismatch { expected: String },

    /// Also returned when ViaCEP simply doesn't know the street yet.
    #[error("O logradouro informado não corresponde ao CEP informado ou não consta ainda na base de dados.")]
    StreetMismatch { expected: String },

    #[error("O bairro informado não corresponde ao CEP. ou não consta ainda na base de dados.")]
    NeighborhoodMismatch { expected: String },
}

impl AddressError {
    /// Stable machine-readable code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            AddressError::MissingFields => "missing_address_fields",
            AddressError::InvalidCep => "invalid_cep",
            AddressError::LookupFailed { .. } => "lookup_failed",
            AddressError::InvalidResponse { .. } => "invalid_lookup_response",
            AddressError::NotFound => "cep_not_found",
            AddressError::StateMismatch { .. } => "state_mismatch",
            AddressError::CityMismatch { .. } => "city_mismatch",
            AddressError::StreetMismatch { .. } => "street_mismatch",
            AddressError::NeighborhoodMismatch { .. } => "neighborhood_mismatch",
        }
    }

    /// Whether the failure came from the lookup service rather than the
    /// submitted data.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            AddressError::LookupFailed { .. } | AddressError::InvalidResponse { .. }
        )
    }
}
