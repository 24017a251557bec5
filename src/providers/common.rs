//! Provider 公共工具函数

use std::time::Duration;

use reqwest::Client;

// ============ HTTP Client ============

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
pub(crate) fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

// ============ 域名名称处理 ============

/// Strips the trailing dot from an FQDN-form zone name.
///
/// `"example.com."` -> `"example.com"`
pub(crate) fn normalize_zone_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// Converts a vendor record name to its zone-relative form.
///
/// `"www.example.com"` + `"example.com"` -> `"www"`; an already-relative name
/// passes through unchanged; the zone apex (or an empty vendor name) becomes
/// `"@"`.
pub(crate) fn full_name_to_relative(full_name: &str, zone_name: &str) -> String {
    let full = normalize_zone_name(full_name);
    let zone = normalize_zone_name(zone_name);

    if full.is_empty() || full == zone {
        "@".to_string()
    } else if let Some(subdomain) = full.strip_suffix(&format!(".{zone}")) {
        subdomain.to_string()
    } else {
        full
    }
}

/// Converts a zone-relative name to the form the vendor expects on writes:
/// the bare label, with the apex encoded as an empty string.
///
/// `"www"` -> `"www"`; `"@"` -> `""`
pub(crate) fn relative_to_vendor_name(relative_name: &str) -> String {
    if relative_name == "@" {
        String::new()
    } else {
        relative_name.to_string()
    }
}
