//! # Address Verifier
//!
//! Checks a submitted address against the CEP lookup service.
//!
//! ## Verification Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  AddressQuery { cep: "01310-100", state, city, street, neighborhood }   │
//! │       │                                                                 │
//! │       ├── any field empty?        → MissingFields                       │
//! │       ├── cep not NNNNN-NNN?      → InvalidCep                          │
//! │       │                                                                 │
//! │       ▼  strip hyphen, timeout(lookup("01310100"))                      │
//! │  PostalLookup                                                           │
//! │       ├── network / timeout / not JSON → LookupFailed                   │
//! │       ├── missing string fields         → InvalidResponse               │
//! │       ├── erro flag                     → NotFound                      │
//! │       │                                                                 │
//! │       ▼  exact comparisons                                              │
//! │  uf ≠ state → StateMismatch      localidade ≠ city → CityMismatch       │
//! │  logradouro ≠ street → StreetMismatch                                   │
//! │  bairro non-empty and ≠ neighborhood → NeighborhoodMismatch             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(CepLookup)                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure is returned as an `Err`; nothing panics and nothing is
//! retried.

use std::sync::Arc;
use std::time::Duration;

use cadastro_core::validation::{strip_cep, validate_cep_format};
use cadastro_core::RegistrationRequest;
use tracing::{debug, warn};

use crate::error::{AddressError, AddressResult};
use crate::viacep::{CepLookup, PostalLookup, DEFAULT_TIMEOUT};

/// The address fields being verified, borrowed from the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressQuery<'a> {
    /// CEP as submitted, hyphen included.
    pub cep: &'a str,
    pub state: &'a str,
    pub city: &'a str,
    pub street: &'a str,
    pub neighborhood: &'a str,
}

impl<'a> AddressQuery<'a> {
    /// Takes the address fields of a registration.
    pub fn from_request(request: &'a RegistrationRequest) -> Self {
        AddressQuery {
            cep: &request.cep,
            state: &request.state,
            city: &request.city,
            street: &request.public_place,
            neighborhood: &request.neighborhood,
        }
    }

    fn has_empty_field(&self) -> bool {
        [
            self.cep,
            self.state,
            self.city,
            self.street,
            self.neighborhood,
        ]
        .iter()
        .any(|field| field.is_empty())
    }
}

/// Cross-checks addresses against a [`PostalLookup`].
#[derive(Clone)]
pub struct AddressVerifier {
    lookup: Arc<dyn PostalLookup>,
    timeout: Duration,
}

impl std::fmt::Debug for AddressVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressVerifier")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl AddressVerifier {
    /// Creates a verifier with the default lookup timeout.
    pub fn new(lookup: Arc<dyn PostalLookup>) -> Self {
        AddressVerifier {
            lookup,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the upper bound on a single lookup.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Runs every check in order and stops at the first failure.
    pub async fn verify(&self, query: &AddressQuery<'_>) -> AddressResult<CepLookup> {
        if query.has_empty_field() {
            return Err(AddressError::MissingFields);
        }

        if !validate_cep_format(query.cep) {
            return Err(AddressError::InvalidCep);
        }

        let digits = strip_cep(query.cep);

        let raw = match tokio::time::timeout(self.timeout, self.lookup.lookup(&digits)).await {
            Ok(Ok(raw)) => raw,
            Ok(Err(e)) => {
                warn!(cep = %digits, error = %e, "CEP lookup failed");
                return Err(AddressError::LookupFailed {
                    reason: e.to_string(),
                });
            }
            Err(_) => {
                warn!(cep = %digits, timeout_ms = self.timeout.as_millis() as u64, "CEP lookup timed out");
                return Err(AddressError::LookupFailed {
                    reason: format!("timed out after {:?}", self.timeout),
                });
            }
        };

        let found = CepLookup::from_value(raw).map_err(|e| AddressError::InvalidResponse {
            reason: e.to_string(),
        })?;

        if found.is_not_found() {
            return Err(AddressError::NotFound);
        }

        if found.state != query.state {
            return Err(AddressError::StateMismatch {
                expected: found.state,
            });
        }

        if found.city != query.city {
            return Err(AddressError::CityMismatch {
                expected: found.city,
            });
        }

        if found.street != query.street {
            return Err(AddressError::StreetMismatch {
                expected: found.street,
            });
        }

        if !found.neighborhood.is_empty() && found.neighborhood != query.neighborhood {
            return Err(AddressError::NeighborhoodMismatch {
                expected: found.neighborhood,
            });
        }

        debug!(cep = %digits, "Address matches CEP");
        Ok(found)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viacep::LookupError;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Returns a canned answer and records every CEP it was asked for.
    struct StubLookup {
        answer: Result<Value, String>,
        delay: Option<Duration>,
        calls: Mutex<Vec<String>>,
    }

    impl StubLookup {
        fn ok(value: Value) -> Arc<Self> {
            Arc::new(StubLookup {
                answer: Ok(value),
                delay: None,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn failing(reason: &str) -> Arc<Self> {
            Arc::new(StubLookup {
                answer: Err(reason.to_string()),
                delay: None,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn slow(delay: Duration) -> Arc<Self> {
            Arc::new(StubLookup {
                answer: Ok(paulista()),
                delay: Some(delay),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PostalLookup for StubLookup {
        async fn lookup(&self, cep_digits: &str) -> Result<Value, LookupError> {
            self.calls.lock().unwrap().push(cep_digits.to_string());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.answer.clone().map_err(LookupError::Network)
        }
    }

    fn paulista() -> Value {
        json!({
            "cep": "01310-100",
            "logradouro": "Avenida Paulista",
            "bairro": "Bela Vista",
            "localidade": "São Paulo",
            "uf": "SP"
        })
    }

    fn query() -> AddressQuery<'static> {
        AddressQuery {
            cep: "01310-100",
            state: "SP",
            city: "São Paulo",
            street: "Avenida Paulista",
            neighborhood: "Bela Vista",
        }
    }

    #[tokio::test]
    async fn test_matching_address() {
        let stub = StubLookup::ok(paulista());
        let verifier = AddressVerifier::new(stub.clone());

        let found = verifier.verify(&query()).await.unwrap();
        assert_eq!(found.city, "São Paulo");
        assert_eq!(stub.calls(), vec!["01310100".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_field_short_circuits() {
        let stub = StubLookup::ok(paulista());
        let verifier = AddressVerifier::new(stub.clone());

        let q = AddressQuery {
            neighborhood: "",
            ..query()
        };
        assert_eq!(verifier.verify(&q).await, Err(AddressError::MissingFields));
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unhyphenated_cep_rejected_before_lookup() {
        let stub = StubLookup::ok(paulista());
        let verifier = AddressVerifier::new(stub.clone());

        let q = AddressQuery {
            cep: "01310100",
            ..query()
        };
        assert_eq!(verifier.verify(&q).await, Err(AddressError::InvalidCep));
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn test_lookup_failure_is_reported() {
        let verifier = AddressVerifier::new(StubLookup::failing("connection refused"));
        let err = verifier.verify(&query()).await.unwrap_err();
        assert!(matches!(err, AddressError::LookupFailed { .. }));
        assert_eq!(err.to_string(), "Erro ao consultar CEP!");
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_timeout() {
        let verifier = AddressVerifier::new(StubLookup::slow(Duration::from_secs(60)))
            .with_timeout(Duration::from_secs(2));
        assert_eq!(verifier.timeout(), Duration::from_secs(2));
        let err = verifier.verify(&query()).await.unwrap_err();
        assert!(matches!(err, AddressError::LookupFailed { .. }));
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let verifier = AddressVerifier::new(StubLookup::ok(json!({"erro": true})));
        assert!(matches!(
            verifier.verify(&query()).await,
            Err(AddressError::InvalidResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_not_found_flag() {
        let mut value = paulista();
        value["erro"] = json!(true);
        let verifier = AddressVerifier::new(StubLookup::ok(value));
        assert_eq!(verifier.verify(&query()).await, Err(AddressError::NotFound));
    }

    #[tokio::test]
    async fn test_state_checked_before_city() {
        let mut value = paulista();
        value["uf"] = json!("RJ");
        value["localidade"] = json!("Rio de Janeiro");
        let verifier = AddressVerifier::new(StubLookup::ok(value));
        assert_eq!(
            verifier.verify(&query()).await,
            Err(AddressError::StateMismatch {
                expected: "RJ".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_city_mismatch() {
        let mut value = paulista();
        value["localidade"] = json!("Campinas");
        let verifier = AddressVerifier::new(StubLookup::ok(value));
        assert!(matches!(
            verifier.verify(&query()).await,
            Err(AddressError::CityMismatch { .. })
        ));
    }

    #[tokio::test]
    async fn test_comparison_is_exact() {
        let verifier = AddressVerifier::new(StubLookup::ok(paulista()));
        let q = AddressQuery {
            street: "avenida paulista",
            ..query()
        };
        assert!(matches!(
            verifier.verify(&q).await,
            Err(AddressError::StreetMismatch { .. })
        ));
    }

    #[tokio::test]
    async fn test_neighborhood_mismatch() {
        let verifier = AddressVerifier::new(StubLookup::ok(paulista()));
        let q = AddressQuery {
            neighborhood: "Jardins",
            ..query()
        };
        assert!(matches!(
            verifier.verify(&q).await,
            Err(AddressError::NeighborhoodMismatch { .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_lookup_neighborhood_is_accepted() {
        // Single-CEP towns come back without a bairro
        let mut value = paulista();
        value["bairro"] = json!("");
        let verifier = AddressVerifier::new(StubLookup::ok(value));
        let q = AddressQuery {
            neighborhood: "Centro",
            ..query()
        };
        assert!(verifier.verify(&q).await.is_ok());
    }

    #[test]
    fn test_query_from_request() {
        let request = RegistrationRequest {
            cep: "01310-100".to_string(),
            public_place: "Avenida Paulista".to_string(),
            neighborhood: "Bela Vista".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            ..Default::default()
        };
        assert_eq!(AddressQuery::from_request(&request), query());
    }
}
