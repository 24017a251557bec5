//! # vultr-dns-provider
//!
//! A Vultr DNS provider adapter: manages DNS records over the
//! [Vultr v2 API](https://www.vultr.com/api/#tag/dns) through a
//! provider-neutral, typed record model.
//!
//! The adapter translates between Vultr's flat record shape (a single `data`
//! string blob plus an optional numeric priority) and [`RecordData`], a
//! tagged union with one variant per DNS record type. Structured types
//! (MX, SRV, CAA) are unpacked on read and repacked on write; record types
//! the adapter does not model pass through as [`RecordData::Raw`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vultr_dns_provider::{DnsProvider, VultrProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = VultrProvider::new("your-api-token".to_string());
//!
//!     for zone in provider.list_zones().await? {
//!         println!("{}", zone.name);
//!     }
//!
//!     for record in provider.list_records("example.com").await? {
//!         println!(
//!             "{} {} -> {}",
//!             record.name,
//!             record.data.record_type(),
//!             record.data.display_value()
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Creating Records
//!
//! ```rust,no_run
//! # use vultr_dns_provider::*;
//! # async fn example(provider: VultrProvider) -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let record = Record {
//!     id: None,
//!     name: "www".to_string(),
//!     ttl: 300,
//!     data: RecordData::A { address: "192.0.2.1".parse()? },
//! };
//! let created = provider
//!     .append_records("example.com", &[record])
//!     .await
//!     .map_err(|e| e.error)?;
//! println!("created with id {:?}", created[0].id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Batch Semantics
//!
//! `append_records`, `set_records`, and `delete_records` apply their input
//! strictly in order and stop at the first failure. The error side of
//! [`BatchResult`] is a [`BatchError`] carrying both the failure and the
//! records applied before it; applied records are never rolled back.
//!
//! Records without an embedded [`RecordId`] are resolved against a freshly
//! fetched zone listing: deletes match by name, updates by record data.
//!
//! ## Encoding Profiles
//!
//! Vultr's API revisions disagree about where MX/SRV priority lives (a
//! dedicated field vs. the first token of `data`) and whether TXT data is
//! quoted. Both shapes are handled by one codec behind
//! [`EncodingProfile`]; the default is the current v2 behavior:
//!
//! ```rust,no_run
//! use vultr_dns_provider::{EncodingProfile, VultrProvider};
//!
//! let provider = VultrProvider::builder("your-api-token".to_string())
//!     .encoding_profile(EncodingProfile::V1)
//!     .build();
//! ```
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::MalformedRecord`] — vendor data the codec cannot parse
//! - [`ProviderError::MissingRecordId`] — update/delete without an ID
//! - [`ProviderError::NoMatchingRecord`] — ID recovery found no candidate
//! - [`ProviderError::RateLimited`] / [`ProviderError::NetworkError`] /
//!   [`ProviderError::Timeout`] — transient transport failures, retried
//!   automatically with exponential backoff
//!
//! A malformed record encountered while listing aborts the whole listing;
//! it signals a codec/vendor mismatch the caller must not silently ignore.

mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{BatchError, BatchResult, ProviderError, Result};

// Re-export core trait
pub use traits::DnsProvider;

// Re-export types
pub use types::{Record, RecordData, RecordId, Zone};

// Re-export the provider and its configuration surface
pub use providers::{EncodingProfile, VultrProvider, VultrProviderBuilder};

// Re-export utils module
pub use utils::datetime;
