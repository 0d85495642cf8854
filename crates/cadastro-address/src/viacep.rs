//! # ViaCEP Client
//!
//! HTTP client for the public ViaCEP postal code service.
//!
//! ## Request / Response
//! ```text
//! GET {base_url}/01310100/json/
//!
//! 200 {"cep": "01310-100", "logradouro": "Avenida Paulista",
//!      "bairro": "Bela Vista", "localidade": "São Paulo", "uf": "SP", ...}
//!
//! 200 {"erro": true}          ← unknown CEP
//! 400 <html>...               ← malformed CEP
//! ```
//!
//! The client only fetches and decodes JSON. Shape checks and address
//! comparison belong to [`crate::verifier`].

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Production ViaCEP endpoint.
pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br/ws";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

// =============================================================================
// Lookup Seam
// =============================================================================

/// Transport-level lookup failure.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Connection error or client-side timeout.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx HTTP status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Body is not JSON.
    #[error("response is not JSON: {0}")]
    Decode(String),

    /// Client could not be built or the base URL is invalid.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

/// Fetches the raw JSON document for a digits-only CEP.
#[async_trait]
pub trait PostalLookup: Send + Sync {
    async fn lookup(&self, cep_digits: &str) -> Result<Value, LookupError>;
}

// =============================================================================
// Lookup Result
// =============================================================================

/// A well-formed ViaCEP answer.
///
/// All five string fields are required; a document missing any of them (or
/// carrying a non-string value) does not deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CepLookup {
    pub cep: String,

    #[serde(rename = "logradouro")]
    pub street: String,

    #[serde(rename = "bairro")]
    pub neighborhood: String,

    #[serde(rename = "localidade")]
    pub city: String,

    #[serde(rename = "uf")]
    pub state: String,

    /// ViaCEP's not-found marker. Seen as `true` and as `"true"` in the wild.
    #[serde(rename = "erro", default, skip_serializing_if = "Option::is_none")]
    pub not_found_flag: Option<Value>,
}

impl CepLookup {
    /// Parses a raw lookup document.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Whether the not-found flag is set (truthy).
    pub fn is_not_found(&self) -> bool {
        match &self.not_found_flag {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }
}

// =============================================================================
// ViaCEP Client
// =============================================================================

/// reqwest-backed [`PostalLookup`] for ViaCEP.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    client: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    /// Creates a client for `base_url` (e.g. [`DEFAULT_BASE_URL`]).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let parsed = Url::parse(base_url).map_err(|e| LookupError::Config(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(LookupError::Config(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("cadastro/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LookupError::Config(e.to_string()))?;

        Ok(ViaCepClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Client for the production endpoint with the default timeout.
    pub fn production() -> Result<Self, LookupError> {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// URL queried for a digits-only CEP.
    pub fn url_for(&self, cep_digits: &str) -> String {
        format!("{}/{}/json/", self.base_url, cep_digits)
    }
}

#[async_trait]
impl PostalLookup for ViaCepClient {
    async fn lookup(&self, cep_digits: &str) -> Result<Value, LookupError> {
        let url = self.url_for(cep_digits);
        debug!(url = %url, "Querying ViaCEP");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| LookupError::Decode(e.to_string()))
    }
}
