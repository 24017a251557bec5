use serde::{Deserialize, Serialize};

use crate::types::Record;

/// Unified error type for all Vultr DNS operations.
///
/// Translation failures (`MalformedRecord`, `MissingRecordId`,
/// `NoMatchingRecord`) are produced locally by the codec and the identity
/// resolver; the remaining variants wrap transport and API failures. All
/// variants are serializable for structured error reporting.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on
/// retry:
/// - [`NetworkError`](Self::NetworkError) — network connectivity issues
/// - [`Timeout`](Self::Timeout) — request timed out
/// - [`RateLimited`](Self::RateLimited) — API rate limit exceeded
///
/// The built-in HTTP client automatically retries these with exponential
/// backoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// The vendor returned record data that cannot be parsed for a
    /// structured record type (bad IP literal, wrong field count, etc.).
    MalformedRecord {
        /// Vendor record type (e.g. `"SRV"`).
        record_type: String,
        /// Vendor record name, as returned by the API.
        name: String,
        /// Details about what failed to parse.
        detail: String,
    },

    /// The record carries no vendor-assigned ID.
    ///
    /// Update and delete need an ID; callers can recover one with a
    /// name/data lookup against a fresh record listing.
    MissingRecordId {
        /// Name of the record lacking an ID.
        name: String,
    },

    /// An ID-recovery lookup found no candidate in the zone's records.
    NoMatchingRecord {
        /// Zone that was searched.
        zone: String,
        /// Name of the record that could not be matched.
        name: String,
    },

    /// The API token is invalid or expired (HTTP 401).
    InvalidCredentials {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The token lacks permission for the requested operation (HTTP 403).
    PermissionDenied {
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The requested zone does not exist in the account.
    ZoneNotFound {
        /// Zone name that was not found.
        zone: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The record ID used for update/delete does not exist.
    RecordNotFound {
        /// ID of the record that was not found.
        record_id: String,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    ///
    /// This is a transient error; the request should succeed after waiting.
    RateLimited {
        /// Suggested wait time in seconds before retrying, if provided.
        retry_after: Option<u64>,
        /// Original error message from the API, if available.
        raw_message: Option<String>,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, upstream 5xx, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// Failed to parse the API response body.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// An unrecognized error from the API.
    Unknown {
        /// HTTP status code, if the failure came from a response.
        status: Option<u16>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::MalformedRecord { .. }
                | Self::MissingRecordId { .. }
                | Self::NoMatchingRecord { .. }
                | Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::ZoneNotFound { .. }
                | Self::RecordNotFound { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedRecord {
                record_type,
                name,
                detail,
            } => {
                write!(f, "Malformed {record_type} record '{name}': {detail}")
            }
            Self::MissingRecordId { name } => {
                write!(f, "Record '{name}' has no provider record ID")
            }
            Self::NoMatchingRecord { zone, name } => {
                write!(f, "No record matching '{name}' in zone '{zone}'")
            }
            Self::InvalidCredentials { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Invalid credentials: {msg}")
                } else {
                    write!(f, "Invalid credentials")
                }
            }
            Self::PermissionDenied { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Permission denied: {msg}")
                } else {
                    write!(f, "Permission denied")
                }
            }
            Self::ZoneNotFound { zone, raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Zone '{zone}' not found: {msg}")
                } else {
                    write!(f, "Zone '{zone}' not found")
                }
            }
            Self::RecordNotFound {
                record_id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "Record '{record_id}' not found: {msg}")
                } else {
                    write!(f, "Record '{record_id}' not found")
                }
            }
            Self::RateLimited { retry_after, .. } => {
                if let Some(secs) = retry_after {
                    write!(f, "Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "Rate limited")
                }
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::NetworkError { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::ParseError { detail } => {
                write!(f, "Parse error: {detail}")
            }
            Self::SerializationError { detail } => {
                write!(f, "Serialization error: {detail}")
            }
            Self::Unknown {
                status,
                raw_message,
            } => {
                if let Some(status) = status {
                    write!(f, "API error (HTTP {status}): {raw_message}")
                } else {
                    write!(f, "API error: {raw_message}")
                }
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Error of a batch operation that aborted partway through.
///
/// Batch operations apply records strictly in order and stop at the first
/// failure. The entries applied before the failure are carried here so the
/// caller can see what already took effect; they are never rolled back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchError {
    /// Records successfully applied before the failure, in input order.
    pub applied: Vec<Record>,
    /// The error that aborted the batch.
    pub error: ProviderError,
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Batch aborted after {} record(s): {}",
            self.applied.len(),
            self.error
        )
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<ProviderError> for BatchError {
    fn from(error: ProviderError) -> Self {
        Self {
            applied: Vec::new(),
            error,
        }
    }
}

/// Result of a batch operation: the full set of applied records on success,
/// or a [`BatchError`] carrying the partial set on failure.
pub type BatchResult = std::result::Result<Vec<Record>, BatchError>;
