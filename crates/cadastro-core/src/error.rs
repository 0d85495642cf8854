//! # Error Types
//!
//! Validation errors produced by the synchronous registration stages.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cadastro-core errors (this file)                                      │
//! │  └── ValidationError  - Missing or malformed request fields            │
//! │                                                                         │
//! │  cadastro-address errors (separate crate)                              │
//! │  └── AddressError     - CEP lookup failures and mismatches             │
//! │                                                                         │
//! │  cadastro-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  HTTP errors (in apps/api)                                             │
//! │  └── ApiError         - What the client sees: {"error": "..."}         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `Display` text of every variant is the exact message returned to the
//! client, so changing one of these strings changes the HTTP contract.

use thiserror::Error;

/// Input validation errors, one per stage of the registration pipeline.
///
/// Ordered the same way the pipeline runs them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One of the mandatory fields is missing or empty.
    #[error("Todos os campos obrigatórios devem ser preenchidos.")]
    MissingRequiredFields,

    /// CPF failed the mod-11 checksum (or has the wrong length).
    #[error("CPF inválido")]
    InvalidCpf,

    /// CNPJ failed the mod-11 checksum (or has the wrong length).
    #[error("CNPJ inválido")]
    InvalidCnpj,

    /// Mobile number does not normalize to 11 digits.
    #[error("Formato de celular inválido")]
    InvalidMobilePhone,

    /// Landline number does not normalize to 10 digits.
    #[error("Formato do telefone fixo inválido")]
    InvalidLandlinePhone,

    #[error("Campo email obrigatório!")]
    MissingEmail,

    #[error("Campo de confirmação de email obrigatório!")]
    MissingEmailConfirmation,

    #[error("Formato de email inválido!")]
    InvalidEmail,

    /// Confirmation is compared byte-for-byte with the email.
    #[error("Confirmação de email deve ser igual ao campo email!")]
    EmailConfirmationMismatch,
}

impl ValidationError {
    /// Stable machine-readable code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingRequiredFields => "missing_required_fields",
            ValidationError::InvalidCpf => "invalid_cpf",
            ValidationError::InvalidCnpj => "invalid_cnpj",
            ValidationError::InvalidMobilePhone => "invalid_mobile_phone",
            ValidationError::InvalidLandlinePhone => "invalid_landline_phone",
            ValidationError::MissingEmail => "missing_email",
            ValidationError::MissingEmailConfirmation => "missing_email_confirmation",
            ValidationError::InvalidEmail => "invalid_email",
            ValidationError::EmailConfirmationMismatch => "email_confirmation_mismatch",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::InvalidCpf.to_string(), "CPF inválido");
        assert_eq!(ValidationError::InvalidCnpj.to_string(), "CNPJ inválido");
        assert_eq!(
            ValidationError::MissingRequiredFields.to_string(),
            "Todos os campos obrigatórios devem ser preenchidos."
        );
    }

    #[test]
    fn test_codes_are_snake_case() {
        let all = [
            ValidationError::MissingRequiredFields,
            ValidationError::InvalidCpf,
            ValidationError::InvalidCnpj,
            ValidationError::InvalidMobilePhone,
            ValidationError::InvalidLandlinePhone,
            ValidationError::MissingEmail,
            ValidationError::MissingEmailConfirmation,
            ValidationError::InvalidEmail,
            ValidationError::EmailConfirmationMismatch,
        ];
        for err in all {
            assert!(err
                .code()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }
}
