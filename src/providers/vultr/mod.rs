//! Vultr DNS Provider

mod codec;
mod error;
mod http;
mod provider;
/// Vultr API-specific request/response types.
pub(crate) mod types;

use reqwest::Client;

use crate::providers::common::create_http_client;

pub use codec::EncodingProfile;

/// Vultr v2 API base URL.
pub(crate) const VULTR_API_BASE: &str = "https://api.vultr.com/v2";
/// Maximum number of items on a single page of the Vultr list APIs.
pub(crate) const MAX_PAGE_SIZE: u32 = 500;

/// Vultr DNS provider implementation.
///
/// Authenticates with a bearer API token
/// (see <https://my.vultr.com/settings/#settingsapi>).
///
/// # Construction
///
/// ```rust,no_run
/// use vultr_dns_provider::VultrProvider;
///
/// let provider = VultrProvider::new("your-api-token".to_string());
/// ```
///
/// Use [`VultrProvider::builder`] to select a legacy encoding profile or
/// tune retry behavior.
pub struct VultrProvider {
    pub(crate) client: Client,
    pub(crate) api_token: String,
    pub(crate) profile: EncodingProfile,
    pub(crate) max_retries: u32,
    pub(crate) api_base: String,
}

/// Builder for [`VultrProvider`] with configurable encoding and retries.
pub struct VultrProviderBuilder {
    api_token: String,
    profile: EncodingProfile,
    max_retries: u32,
    api_base: String,
}

impl VultrProviderBuilder {
    fn new(api_token: String) -> Self {
        Self {
            api_token,
            profile: EncodingProfile::default(),
            max_retries: 2,
            api_base: VULTR_API_BASE.to_string(),
        }
    }

    /// Select the record encoding profile (default: [`EncodingProfile::V2`]).
    #[must_use]
    pub fn encoding_profile(mut self, profile: EncodingProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the maximum number of automatic retries for transient errors
    /// (default: 2).
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Override the API base URL (e.g. to route through a proxy).
    #[must_use]
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Build the provider.
    pub fn build(self) -> VultrProvider {
        VultrProvider {
            client: create_http_client(),
            api_token: self.api_token,
            profile: self.profile,
            max_retries: self.max_retries,
            api_base: self.api_base,
        }
    }
}

impl VultrProvider {
    /// Create a provider with the default encoding profile and retry policy.
    pub fn new(api_token: String) -> Self {
        Self::builder(api_token).build()
    }

    /// Start building a provider with custom settings.
    pub fn builder(api_token: String) -> VultrProviderBuilder {
        VultrProviderBuilder::new(api_token)
    }
}
