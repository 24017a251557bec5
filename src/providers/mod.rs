//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub(crate) mod common;

mod vultr;

pub use vultr::{EncodingProfile, VultrProvider, VultrProviderBuilder};
