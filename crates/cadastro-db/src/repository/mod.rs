//! # Repository Module
//!
//! Database repository implementations.
//!
//! ## Store Seam
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  POST /cadastrar handler                                                │
//! │       │                                                                 │
//! │       │  state.store.insert(&record)                                    │
//! │       ▼                                                                 │
//! │  Arc<dyn RegistrationStore>                                             │
//! │       │                                                                 │
//! │       ├── RegistrationRepository  (SQLite, production)                  │
//! │       └── test doubles            (failing / recording stores)          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`registration::RegistrationRepository`] - Registration inserts and reads

pub mod registration;

use async_trait::async_trait;
use cadastro_core::NewRegistration;

use crate::error::DbResult;
use registration::InsertedRegistration;

/// Persistence operations the registration handler depends on.
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    /// Inserts one normalized registration. Single statement, atomic.
    async fn insert(&self, record: &NewRegistration) -> DbResult<InsertedRegistration>;

    /// Whether the backing store currently answers queries.
    async fn health_check(&self) -> bool;
}
