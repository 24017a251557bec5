//! Generic HTTP client tools
//!
//! Reusable request execution shared by the provider's HTTP methods: sending
//! requests, logging, reading responses, and retrying transient failures.
//! The caller constructs the `RequestBuilder` (URL, headers, body) itself and
//! keeps full control over response parsing.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// Log tag for all HTTP traffic.
const LOG_TAG: &str = "vultr";

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and body text.
    ///
    /// # Errors
    ///
    /// * `ProviderError::Timeout` — the request timed out
    /// * `ProviderError::NetworkError` — connection failure or upstream 5xx
    /// * `ProviderError::RateLimited` — HTTP 429, with `Retry-After` if sent
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{LOG_TAG}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{LOG_TAG}] Response Status: {status_code}");

        // Extract Retry-After header (before consuming response body)
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{LOG_TAG}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ProviderError::RateLimited {
                retry_after,
                raw_message: Some(body),
            });
        }

        // 502/503/504 are treated as transient network failures
        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[{LOG_TAG}] Server error (HTTP {status_code})");
            return Err(ProviderError::NetworkError {
                detail: format!("HTTP {status_code}: {body}"),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{LOG_TAG}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(response_text: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{LOG_TAG}] JSON parse failed: {e}");
            log::error!(
                "[{LOG_TAG}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                detail: e.to_string(),
            }
        })
    }

    /// Performs an HTTP request with automatic retries for transient errors.
    ///
    /// Only network errors, timeouts, and rate limiting are retried; API
    /// errors (bad credentials, missing records, etc.) are returned
    /// immediately. `max_retries == 0` disables retrying.
    ///
    /// # Retry strategy
    /// - Exponential backoff: 100ms, 200ms, 400ms, ... capped at 10 seconds
    /// - A `Retry-After` value from the API is honored, capped at 30 seconds
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
        max_retries: u32,
    ) -> Result<(u16, String), ProviderError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, method_name, url).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder can only be consumed once
            let Some(req) = request_builder.try_clone() else {
                // Unable to clone (streaming body), fall back to no retries
                log::warn!("[{LOG_TAG}] Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, method_name, url).await;
            };

            match Self::execute_request(req, method_name, url).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < max_retries && is_retryable(&e) => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "[{}] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        LOG_TAG,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ProviderError::NetworkError {
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Determine whether the error can be retried.
fn is_retryable(error: &ProviderError) -> bool {
    matches!(
        error,
        ProviderError::NetworkError { .. }
            | ProviderError::Timeout { .. }
            | ProviderError::RateLimited { .. }
    )
}

/// Calculate retry delay.
///
/// Uses the API's `Retry-After` value (capped at 30s) when present on a
/// `RateLimited` error; otherwise exponential backoff.
fn retry_delay(error: &ProviderError, attempt: u32) -> Duration {
    if let ProviderError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// Exponential backoff delay: 100ms, 200ms, 400ms, ... capped at 10 seconds.
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20); // Prevent 2^attempt from overflowing
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    let delay_ms = delay_ms.min(10_000);
    Duration::from_millis(delay_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use std::time::Duration;

    // ---- is_retryable ----

    #[test]
    fn retryable_network_error() {
        let e = ProviderError::NetworkError { detail: "err".into() };
        assert!(is_retryable(&e));
    }

    #[test]
    fn retryable_timeout() {
        let e = ProviderError::Timeout { detail: "err".into() };
        assert!(is_retryable(&e));
    }

    #[test]
    fn retryable_rate_limited() {
        let e = ProviderError::RateLimited {
            retry_after: None,
            raw_message: None,
        };
        assert!(is_retryable(&e));
    }

    #[test]
    fn not_retryable_auth_error() {
        let e = ProviderError::InvalidCredentials { raw_message: None };
        assert!(!is_retryable(&e));
    }

    #[test]
    fn not_retryable_malformed_record() {
        let e = ProviderError::MalformedRecord {
            record_type: "A".into(),
            name: "www".into(),
            detail: "bad IP".into(),
        };
        assert!(!is_retryable(&e));
    }

    #[test]
    fn not_retryable_record_not_found() {
        let e = ProviderError::RecordNotFound {
            record_id: "1".into(),
            raw_message: None,
        };
        assert!(!is_retryable(&e));
    }

    // ---- retry_delay ----

    #[test]
    fn retry_after_honored() {
        let e = ProviderError::RateLimited {
            retry_after: Some(5),
            raw_message: None,
        };
        assert_eq!(retry_delay(&e, 0), Duration::from_secs(5));
    }

    #[test]
    fn retry_after_capped_at_30s() {
        let e = ProviderError::RateLimited {
            retry_after: Some(3600),
            raw_message: None,
        };
        assert_eq!(retry_delay(&e, 0), Duration::from_secs(30));
    }

    // ---- backoff_delay ----

    #[test]
    fn backoff_attempt_0() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
    }

    #[test]
    fn backoff_attempt_3() {
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
    }

    #[test]
    fn backoff_capped_at_10s() {
        // attempt 7: 100 * 2^7 = 12800ms, capped to 10000ms
        assert_eq!(backoff_delay(7), Duration::from_millis(10_000));
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ProviderError> = HttpUtils::parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ProviderError> = HttpUtils::parse_json("not json");
        assert!(
            matches!(&result, Err(ProviderError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
