//! Vultr API 类型定义

use serde::{Deserialize, Serialize};

/// Pagination metadata attached to list responses.
#[derive(Debug, Deserialize)]
pub struct VultrMeta {
    #[allow(dead_code)]
    pub total: Option<u32>,
    pub links: Option<VultrLinks>,
}

/// Cursor links for list continuation.
///
/// `next` is an opaque cursor token; an empty string means the last page.
#[derive(Debug, Deserialize)]
pub struct VultrLinks {
    #[serde(default)]
    pub next: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub prev: String,
}

/// Vultr DNS 域名（zone）结构
#[derive(Debug, Deserialize)]
pub struct VultrDomain {
    pub domain: String,
    #[serde(with = "crate::utils::datetime")]
    #[serde(default)]
    pub date_created: Option<chrono::DateTime<chrono::Utc>>,
}

/// Vultr DNS Record 结构（响应）
///
/// `data` is a single string blob; structured types (MX, SRV, CAA) pack
/// their fields into it per vendor convention. `priority` is meaningful
/// only for MX/SRV and is `-1` or `0` elsewhere.
#[derive(Debug, Clone, Deserialize)]
pub struct VultrDnsRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub data: String,
    pub ttl: u32,
    #[serde(default)]
    pub priority: Option<i32>,
}

/// Write payload for record create/update.
///
/// `priority` is omitted from the request body entirely when `None`, so
/// record types that don't use it never send a spurious zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VultrRecordReq {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub data: String,
    pub ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

/// List envelope: `GET /domains`
#[derive(Debug, Deserialize)]
pub struct DomainsResponse {
    pub domains: Vec<VultrDomain>,
    pub meta: Option<VultrMeta>,
}

/// List envelope: `GET /domains/{domain}/records`
#[derive(Debug, Deserialize)]
pub struct RecordsResponse {
    pub records: Vec<VultrDnsRecord>,
    pub meta: Option<VultrMeta>,
}

/// Single-record envelope: `POST /domains/{domain}/records`
#[derive(Debug, Deserialize)]
pub struct RecordResponse {
    pub record: VultrDnsRecord,
}

/// Error body returned on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct VultrApiError {
    pub error: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub status: Option<u16>,
}
