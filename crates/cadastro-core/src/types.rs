//! # Domain Types
//!
//! Request and record types for a registration.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  POST /cadastrar body                                                   │
//! │       │  serde                                                          │
//! │       ▼                                                                 │
//! │  ┌─────────────────────┐  validate_registration  ┌─────────────────┐   │
//! │  │ RegistrationRequest │ ──────────────────────► │ NewRegistration │   │
//! │  │  raw, as submitted  │                         │  normalized     │   │
//! │  └─────────────────────┘                         └────────┬────────┘   │
//! │                                                           │ insert     │
//! │                                                           ▼            │
//! │                                                   registrations table  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `RegistrationRequest` lives for one HTTP call. `NewRegistration` is the
//! normalized row that gets inserted exactly once; it is never updated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Registration Request
// =============================================================================

/// A registration exactly as the client submitted it.
///
/// Every field defaults to the empty string when absent or `null` so that a
/// missing field surfaces as a validation error instead of a deserialization
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationRequest {
    /// Business taxpayer ID, formatted or not.
    #[serde(deserialize_with = "null_as_empty")]
    pub cnpj: String,

    /// Individual taxpayer ID, formatted or not.
    #[serde(deserialize_with = "null_as_empty")]
    pub cpf: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,

    /// Mobile number, 11 digits once normalized.
    #[serde(deserialize_with = "null_as_empty")]
    pub cell_phone: String,

    /// Landline number, 10 digits once normalized.
    #[serde(deserialize_with = "null_as_empty")]
    pub telephone: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub confirm_email: String,

    /// Postal code in `NNNNN-NNN` form.
    #[serde(deserialize_with = "null_as_empty")]
    pub cep: String,

    /// Street name ("logradouro").
    #[serde(deserialize_with = "null_as_empty")]
    pub public_place: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub neighborhood: String,

    /// Street number. Optional.
    #[serde(deserialize_with = "null_as_empty")]
    pub number: String,

    /// Apartment, suite, etc. Optional.
    #[serde(deserialize_with = "null_as_empty")]
    pub complement: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub city: String,

    /// Two-letter state code (UF).
    #[serde(deserialize_with = "null_as_empty")]
    pub state: String,
}

/// Reads a string field, mapping `null` to `""`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl RegistrationRequest {
    /// Returns the names of mandatory fields that are empty.
    ///
    /// `number` and `complement` are optional and never reported.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let required: [(&'static str, &str); 12] = [
            ("cnpj", &self.cnpj),
            ("cpf", &self.cpf),
            ("name", &self.name),
            ("cell_phone", &self.cell_phone),
            ("telephone", &self.telephone),
            ("email", &self.email),
            ("confirm_email", &self.confirm_email),
            ("cep", &self.cep),
            ("public_place", &self.public_place),
            ("neighborhood", &self.neighborhood),
            ("city", &self.city),
            ("state", &self.state),
        ];

        required
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect()
    }
}

// =============================================================================
// New Registration
// =============================================================================

/// A validated, normalized registration ready for insertion.
///
/// ## Normalization
/// - `cpf`, `cnpj`, `cell_phone`, `telephone`: digits only
/// - `cep`: hyphen removed
/// - everything else: as submitted, optional fields default to `""`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRegistration {
    pub name: String,
    pub email: String,
    pub cell_phone: String,
    pub telephone: String,
    pub cpf: String,
    pub cnpj: String,
    pub cep: String,
    pub state: String,
    pub city: String,
    pub public_place: String,
    pub neighborhood: String,
    pub number: String,
    pub complement: String,
}

// =============================================================================
// Registration (persisted row)
// =============================================================================

/// A row of the `registrations` table.
///
/// Created once per successful request and never mutated by this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Registration {
    /// UUID v4 assigned at insert time.
    pub id: String,
    pub name: String,
    pub email: String,
    pub cell_phone: String,
    pub telephone: String,
    pub cpf: String,
    pub cnpj: String,
    pub cep: String,
    pub state: String,
    pub city: String,
    pub public_place: String,
    pub neighborhood: String,
    pub number: String,
    pub complement: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================
