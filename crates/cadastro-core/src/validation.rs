//! # Validation Module
//!
//! Field validators and the synchronous part of the registration pipeline.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   validate_registration (THIS MODULE)                   │
//! │                                                                         │
//! │  REQUIRED_FIELDS ──► CPF ──► CNPJ ──► MOBILE ──► LANDLINE ──► EMAIL     │
//! │        │              │       │         │           │           │       │
//! │        └──────────────┴───────┴─────────┴───────────┴───────────┘       │
//! │                                  │ first failure                        │
//! │                                  ▼                                      │
//! │                          ValidationError → 400                          │
//! │                                                                         │
//! │  All stages pass → NewRegistration (normalized) → address check         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The address check and the insert are I/O and live in `cadastro-address`
//! and `cadastro-db`. Nothing here touches the network.

use std::sync::LazyLock;

use regex::Regex;

use crate::document::{only_digits, validate_cnpj, validate_cpf};
use crate::error::ValidationError;
use crate::types::{NewRegistration, RegistrationRequest};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Digits in a normalized mobile number (area code + 9 digits).
pub const MOBILE_DIGITS: usize = 11;

/// Digits in a normalized landline number (area code + 8 digits).
pub const LANDLINE_DIGITS: usize = 10;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

static CEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}-[0-9]{3}$").expect("cep pattern compiles"));

// =============================================================================
// Field Validators
// =============================================================================

/// Checks a mobile number: exactly 11 digits after normalization.
///
/// ```rust
/// use cadastro_core::validation::is_mobile_phone;
///
/// assert!(is_mobile_phone("(11) 98765-4321"));
/// assert!(!is_mobile_phone("(11) 8765-4321"));
/// ```
pub fn is_mobile_phone(raw: &str) -> bool {
    only_digits(raw).len() == MOBILE_DIGITS
}

/// Checks a landline number: exactly 10 digits after normalization.
pub fn is_landline_phone(raw: &str) -> bool {
    only_digits(raw).len() == LANDLINE_DIGITS
}

/// Checks the `local@domain.tld` shape.
///
/// ## Rules
/// - local part: letters, digits, `._%+-`
/// - domain: at least one dot
/// - TLD: two or more letters
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_RE.is_match(raw)
}

/// Checks the CEP syntax on the ORIGINAL string: `NNNNN-NNN`.
///
/// An unhyphenated CEP is rejected, so this must run before [`strip_cep`].
///
/// ```rust
/// use cadastro_core::validation::validate_cep_format;
///
/// assert!(validate_cep_format("01310-100"));
/// assert!(!validate_cep_format("01310100"));
/// assert!(!validate_cep_format("1310-100"));
/// ```
pub fn validate_cep_format(raw: &str) -> bool {
    CEP_RE.is_match(raw)
}

/// Removes the CEP hyphen for lookup URLs and storage.
pub fn strip_cep(raw: &str) -> String {
    raw.replacen('-', "", 1)
}

// =============================================================================
// Registration Pipeline
// =============================================================================

/// Runs every synchronous stage and returns the normalized record.
///
/// Stages short-circuit on the first failure, in this order:
/// required fields, CPF, CNPJ, mobile, landline, email presence,
/// email format, email confirmation.
pub fn validate_registration(request: &RegistrationRequest) -> ValidationResult<NewRegistration> {
    if !request.missing_fields().is_empty() {
        return Err(ValidationError::MissingRequiredFields);
    }

    if !validate_cpf(&request.cpf) {
        return Err(ValidationError::InvalidCpf);
    }

    let cnpj = only_digits(&request.cnpj);
    if !validate_cnpj(&cnpj) {
        return Err(ValidationError::InvalidCnpj);
    }

    let cell_phone = only_digits(&request.cell_phone);
    let telephone = only_digits(&request.telephone);
    if !is_mobile_phone(&cell_phone) {
        return Err(ValidationError::InvalidMobilePhone);
    }
    if !is_landline_phone(&telephone) {
        return Err(ValidationError::InvalidLandlinePhone);
    }

    validate_email_pair(&request.email, &request.confirm_email)?;

    Ok(NewRegistration {
        name: request.name.clone(),
        email: request.email.clone(),
        cell_phone,
        telephone,
        cpf: only_digits(&request.cpf),
        cnpj,
        cep: strip_cep(&request.cep),
        state: request.state.clone(),
        city: request.city.clone(),
        public_place: request.public_place.clone(),
        neighborhood: request.neighborhood.clone(),
        number: request.number.clone(),
        complement: request.complement.clone(),
    })
}

/// Email stage: presence of both fields, format, then exact equality.
pub fn validate_email_pair(email: &str, confirmation: &str) -> ValidationResult<()> {
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if confirmation.is_empty() {
        return Err(ValidationError::MissingEmailConfirmation);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if confirmation != email {
        return Err(ValidationError::EmailConfirmationMismatch);
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
