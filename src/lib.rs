//! Clearbit Enrichment API Client
//!
//! This library wraps the Clearbit person and combined (person + company)
//! lookups: it builds authenticated requests, decodes responses into typed
//! records and turns error responses into a typed error.
//!
//! # Modules
//!
//! - `client`: Request construction, Basic auth, response classification.
//! - `config`: Transport settings for building a `Client`.
//! - `enrichment`: Lookups by email address.
//! - `errors`: Error types.
//! - `models`: Response records.
//!
//! # Example
//!
//! ```no_run
//! # async fn run() -> Result<(), clearbit_client::ClearbitError> {
//! let client = clearbit_client::Client::new("sk_live_...", None);
//! let person = client.enrichment().get_person("alex@clearbit.com").await?;
//! println!("{:?}", person.name);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod enrichment;
pub mod errors;
pub mod models;

pub use client::{Client, LIBRARY_VERSION, USER_AGENT};
pub use config::ClientConfig;
pub use enrichment::EnrichmentService;
pub use errors::{ApiErrorDetail, ClearbitError, ErrorResponse};
pub use models::{Company, EnrichmentResult, Person};
