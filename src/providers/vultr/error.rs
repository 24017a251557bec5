//! Vultr error mapping
//!
//! The Vultr API reports failures with an HTTP status and a bare
//! `{"error": "...", "status": ...}` body; there is no error-code catalogue,
//! so mapping keys on the status code plus request context.

use crate::error::ProviderError;

/// Request context carried into error mapping, so 404s can name the thing
/// that was missing.
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Zone the request addressed.
    pub zone: Option<String>,
    /// Record ID the request addressed (update/delete).
    pub record_id: Option<String>,
}

impl ErrorContext {
    pub fn zone(zone: &str) -> Self {
        Self {
            zone: Some(zone.to_string()),
            record_id: None,
        }
    }

    pub fn record(zone: &str, record_id: &str) -> Self {
        Self {
            zone: Some(zone.to_string()),
            record_id: Some(record_id.to_string()),
        }
    }
}

/// Map a non-2xx API response to a [`ProviderError`].
///
/// 429 and 502-504 never reach this point; the HTTP layer converts them to
/// retryable errors before parsing the body.
pub(crate) fn map_api_error(status: u16, message: String, context: &ErrorContext) -> ProviderError {
    match status {
        401 => ProviderError::InvalidCredentials {
            raw_message: Some(message),
        },
        403 => ProviderError::PermissionDenied {
            raw_message: Some(message),
        },
        404 => {
            if let Some(record_id) = &context.record_id {
                ProviderError::RecordNotFound {
                    record_id: record_id.clone(),
                    raw_message: Some(message),
                }
            } else {
                ProviderError::ZoneNotFound {
                    zone: context.zone.clone().unwrap_or_else(|| "<unknown>".to_string()),
                    raw_message: Some(message),
                }
            }
        }
        429 => ProviderError::RateLimited {
            retry_after: None,
            raw_message: Some(message),
        },
        _ => ProviderError::Unknown {
            status: Some(status),
            raw_message: message,
        },
    }
}
