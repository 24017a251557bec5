//! Vultr HTTP 请求方法
//!
//! Thin wrappers over [`HttpUtils`]: bearer auth, the v2 error envelope, and
//! cursor pagination (follow `meta.links.next` until it comes back empty).

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;

use super::error::{ErrorContext, map_api_error};
use super::types::{DomainsResponse, RecordsResponse, VultrApiError, VultrDnsRecord, VultrDomain, VultrMeta};
use super::{MAX_PAGE_SIZE, VultrProvider};

/// A list envelope that can be split into its items and pagination metadata.
pub(crate) trait Paginated {
    type Item;

    fn into_parts(self) -> (Vec<Self::Item>, Option<VultrMeta>);
}

impl Paginated for DomainsResponse {
    type Item = VultrDomain;

    fn into_parts(self) -> (Vec<VultrDomain>, Option<VultrMeta>) {
        (self.domains, self.meta)
    }
}

impl Paginated for RecordsResponse {
    type Item = VultrDnsRecord;

    fn into_parts(self) -> (Vec<VultrDnsRecord>, Option<VultrMeta>) {
        (self.records, self.meta)
    }
}

/// Turn a non-2xx response into a mapped error, passing 2xx bodies through.
fn check_status(status: u16, body: String, ctx: &ErrorContext) -> Result<String> {
    if (200..300).contains(&status) {
        return Ok(body);
    }
    let message = serde_json::from_str::<VultrApiError>(&body).map_or(body, |e| e.error);
    log::error!("API 错误 (HTTP {status}): {message}");
    Err(map_api_error(status, message, ctx))
}

impl VultrProvider {
    /// 执行 GET 请求
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        ctx: &ErrorContext,
    ) -> Result<T> {
        let url = format!("{}{path}", self.api_base);
        let request = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_token));

        let (status, body) =
            HttpUtils::execute_request_with_retry(request, "GET", &url, self.max_retries).await?;
        let body = check_status(status, body, ctx)?;

        HttpUtils::parse_json(&body)
    }

    /// 执行 GET 请求（跟随游标分页直到结束）
    pub(crate) async fn get_all_pages<P>(
        &self,
        path: &str,
        ctx: &ErrorContext,
    ) -> Result<Vec<P::Item>>
    where
        P: Paginated + DeserializeOwned,
    {
        let mut items = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let page_path = match &cursor {
                Some(c) => format!(
                    "{path}?per_page={MAX_PAGE_SIZE}&cursor={}",
                    urlencoding::encode(c)
                ),
                None => format!("{path}?per_page={MAX_PAGE_SIZE}"),
            };

            let page: P = self.get(&page_path, ctx).await?;
            let (page_items, meta) = page.into_parts();
            items.extend(page_items);

            let next = meta
                .and_then(|m| m.links)
                .map(|links| links.next)
                .unwrap_or_default();
            if next.is_empty() {
                break;
            }
            cursor = Some(next);
        }

        Ok(items)
    }

    /// 执行 POST 请求
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        ctx: &ErrorContext,
    ) -> Result<T> {
        let url = format!("{}{path}", self.api_base);
        log::debug!(
            "Request Body: {}",
            serde_json::to_string(body).unwrap_or_else(|_| "<unserializable>".to_string())
        );

        let request = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(body);

        let (status, body) =
            HttpUtils::execute_request_with_retry(request, "POST", &url, self.max_retries).await?;
        let body = check_status(status, body, ctx)?;

        HttpUtils::parse_json(&body)
    }

    /// 执行 PATCH 请求（成功时无响应体）
    pub(crate) async fn patch_no_content<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        ctx: &ErrorContext,
    ) -> Result<()> {
        let url = format!("{}{path}", self.api_base);
        log::debug!(
            "Request Body: {}",
            serde_json::to_string(body).unwrap_or_else(|_| "<unserializable>".to_string())
        );

        let request = self
            .client
            .patch(&url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(body);

        let (status, body) =
            HttpUtils::execute_request_with_retry(request, "PATCH", &url, self.max_retries).await?;
        check_status(status, body, ctx)?;

        Ok(())
    }

    /// 执行 DELETE 请求（成功时无响应体）
    pub(crate) async fn delete(&self, path: &str, ctx: &ErrorContext) -> Result<()> {
        let url = format!("{}{path}", self.api_base);
        let request = self
            .client
            .delete(&url)
            .header("Authorization", format!("Bearer {}", self.api_token));

        let (status, body) =
            HttpUtils::execute_request_with_retry(request, "DELETE", &url, self.max_retries)
                .await?;
        check_status(status, body, ctx)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;

    #[test]
    fn check_status_passes_2xx_body_through() {
        let result = check_status(200, "{}".to_string(), &ErrorContext::default());
        assert!(matches!(&result, Ok(body) if body == "{}"));
    }

    #[test]
    fn check_status_maps_error_envelope() {
        let result = check_status(
            401,
            r#"{"error":"Invalid API token.","status":401}"#.to_string(),
            &ErrorContext::default(),
        );
        assert!(matches!(
            result,
            Err(ProviderError::InvalidCredentials { raw_message: Some(msg) })
                if msg == "Invalid API token."
        ));
    }

    #[test]
    fn check_status_falls_back_to_raw_body() {
        let result = check_status(500, "internal error".to_string(), &ErrorContext::default());
        assert!(matches!(
            result,
            Err(ProviderError::Unknown { status: Some(500), raw_message })
                if raw_message == "internal error"
        ));
    }
}
