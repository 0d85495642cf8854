//! # cadastro-address: CEP Lookup and Address Verification
//!
//! ## Modules
//!
//! - [`viacep`] - `PostalLookup` trait and the reqwest ViaCEP client
//! - [`verifier`] - `AddressVerifier`, the ordered address checks
//! - [`error`] - `AddressError`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cadastro_address::{AddressQuery, AddressVerifier, ViaCepClient};
//!
//! let verifier = AddressVerifier::new(Arc::new(ViaCepClient::production()?));
//! match verifier.verify(&AddressQuery::from_request(&request)).await {
//!     Ok(found) => println!("{} / {}", found.city, found.state),
//!     Err(e) => println!("rejected: {e}"),
//! }
//! ```

pub mod error;
pub mod verifier;
pub mod viacep;

pub use error::{AddressError, AddressResult};
pub use verifier::{AddressQuery, AddressVerifier};
pub use viacep::{CepLookup, LookupError, PostalLookup, ViaCepClient};
