//! Record translation between the neutral model and the Vultr wire shape.
//!
//! Decoding parses the vendor's single `data` string blob into typed record
//! data; encoding builds the write payload back. The two directions are kept
//! in one module so every packing rule has its unpacking rule next to it.

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};
use crate::providers::common::{
    full_name_to_relative, normalize_zone_name, relative_to_vendor_name,
};
use crate::types::{Record, RecordData, RecordId};

use super::types::{VultrDnsRecord, VultrRecordReq};

/// Wire encoding profile, selecting between incompatible API revisions.
///
/// The revisions differ in where MX/SRV priority lives and in how TXT data
/// is quoted; both are handled by this one codec rather than by forked
/// implementations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingProfile {
    /// v2 API: MX/SRV priority in a dedicated field, TXT data quoted.
    #[default]
    V2,
    /// Legacy API: priority embedded as the first token of `data`, raw TXT.
    V1,
}

impl EncodingProfile {
    /// Whether MX/SRV priority is embedded in the `data` string.
    fn inline_priority(self) -> bool {
        matches!(self, Self::V1)
    }

    /// Whether TXT data is wrapped in double quotes on the wire.
    fn quoted_txt(self) -> bool {
        matches!(self, Self::V2)
    }
}

fn malformed(raw: &VultrDnsRecord, detail: impl Into<String>) -> ProviderError {
    ProviderError::MalformedRecord {
        record_type: raw.record_type.clone(),
        name: raw.name.clone(),
        detail: detail.into(),
    }
}

/// Vendor priority as `u16`. Out-of-range values (the API uses `-1` for
/// "not applicable") degrade to 0.
fn vendor_priority(raw: &VultrDnsRecord) -> u16 {
    raw.priority
        .and_then(|p| u16::try_from(p).ok())
        .unwrap_or(0)
}

fn parse_u16(raw: &VultrDnsRecord, field: &str, value: &str) -> Result<u16> {
    value
        .parse()
        .map_err(|_| malformed(raw, format!("invalid value for {field}: '{value}'")))
}

/// Decodes a vendor record into the neutral model.
///
/// # Errors
///
/// Fails with [`ProviderError::MalformedRecord`] when a structured type's
/// `data` (or, for SRV, its name) does not match the vendor convention.
/// Unrecognized record types are passed through as [`RecordData::Raw`]
/// without validation.
pub(crate) fn decode_record(
    raw: &VultrDnsRecord,
    zone: &str,
    profile: EncodingProfile,
) -> Result<Record> {
    let zone = normalize_zone_name(zone);
    let mut name = full_name_to_relative(&raw.name, &zone);

    let data = match raw.record_type.as_str() {
        "A" | "AAAA" => {
            let address: IpAddr = raw.data.parse().map_err(|e| {
                malformed(raw, format!("invalid IP address '{}': {e}", raw.data))
            })?;
            if raw.record_type == "A" {
                RecordData::A { address }
            } else {
                RecordData::AAAA { address }
            }
        }
        "CNAME" => RecordData::CNAME {
            target: raw.data.clone(),
        },
        "NS" => RecordData::NS {
            nameserver: raw.data.clone(),
        },
        "MX" => {
            if profile.inline_priority() {
                let parts: Vec<&str> = raw.data.splitn(2, ' ').collect();
                if parts.len() < 2 {
                    return Err(malformed(
                        raw,
                        "not enough data fields; expected format: '<preference> <exchange>'",
                    ));
                }
                RecordData::MX {
                    preference: parse_u16(raw, "preference", parts[0])?,
                    exchange: parts[1].to_string(),
                }
            } else {
                RecordData::MX {
                    preference: vendor_priority(raw),
                    exchange: raw.data.clone(),
                }
            }
        }
        "SRV" => {
            // The vendor omits the zone from SRV names, so the service and
            // protocol labels are parsed from the raw name, not the
            // zone-relative one.
            let labels: Vec<&str> = raw.name.splitn(3, '.').collect();
            if labels.len() < 2 {
                return Err(malformed(
                    raw,
                    "not enough name fields; expected format: '_service._proto'",
                ));
            }
            let service = labels[0].strip_prefix('_').ok_or_else(|| {
                malformed(raw, format!("service label '{}' missing '_' prefix", labels[0]))
            })?;
            let transport = labels[1].strip_prefix('_').ok_or_else(|| {
                malformed(raw, format!("proto label '{}' missing '_' prefix", labels[1]))
            })?;

            let (priority, rest) = if profile.inline_priority() {
                let parts: Vec<&str> = raw.data.splitn(2, ' ').collect();
                if parts.len() < 2 {
                    return Err(malformed(
                        raw,
                        "not enough data fields; expected format: 'priority weight port target'",
                    ));
                }
                (parse_u16(raw, "priority", parts[0])?, parts[1])
            } else {
                (vendor_priority(raw), raw.data.as_str())
            };

            let parts: Vec<&str> = rest.splitn(3, ' ').collect();
            if parts.len() < 3 {
                return Err(malformed(
                    raw,
                    "not enough data fields; expected format: 'weight port target'",
                ));
            }

            // SRV ownership names already encode service/proto, so the
            // neutral record is anchored at the zone itself.
            name = zone.clone();

            RecordData::SRV {
                service: service.to_string(),
                transport: transport.to_string(),
                priority,
                weight: parse_u16(raw, "weight", parts[0])?,
                port: parse_u16(raw, "port", parts[1])?,
                target: parts[2].to_string(),
            }
        }
        "CAA" => {
            let parts: Vec<&str> = raw.data.splitn(3, ' ').collect();
            if parts.len() < 3 {
                return Err(malformed(
                    raw,
                    "not enough data fields; expected format: '<flags> <tag> <value>'",
                ));
            }
            let flags = parts[0].parse().map_err(|_| {
                malformed(raw, format!("invalid value for flags: '{}'", parts[0]))
            })?;
            RecordData::CAA {
                flags,
                tag: parts[1].to_string(),
                value: parts[2].trim_matches('"').to_string(),
            }
        }
        "TXT" => {
            let text = if profile.quoted_txt() {
                raw.data
                    .strip_prefix('"')
                    .and_then(|s| s.strip_suffix('"'))
                    .unwrap_or(&raw.data)
            } else {
                raw.data.as_str()
            };
            RecordData::TXT {
                text: text.to_string(),
            }
        }
        _ => RecordData::Raw {
            record_type: raw.record_type.clone(),
            data: raw.data.clone(),
        },
    };

    Ok(Record {
        id: if raw.id.is_empty() {
            None
        } else {
            Some(RecordId::from(raw.id.clone()))
        },
        name,
        ttl: raw.ttl,
        data,
    })
}

/// Builds the vendor write payload from a neutral record.
///
/// Pure construction, no I/O. The `priority` field is populated only for the
/// types (and profile) that use it; otherwise it is omitted from the request
/// body entirely so the vendor's defaults are left alone.
pub(crate) fn encode_record(record: &Record, profile: EncodingProfile) -> VultrRecordReq {
    let (data, priority) = match &record.data {
        RecordData::A { address } | RecordData::AAAA { address } => (address.to_string(), None),
        RecordData::CNAME { target } => (target.clone(), None),
        RecordData::NS { nameserver } => (nameserver.clone(), None),
        RecordData::MX {
            preference,
            exchange,
        } => {
            if profile.inline_priority() {
                (format!("{preference} {exchange}"), None)
            } else {
                (exchange.clone(), Some(*preference))
            }
        }
        RecordData::SRV {
            priority,
            weight,
            port,
            target,
            ..
        } => {
            if profile.inline_priority() {
                (format!("{priority} {weight} {port} {target}"), None)
            } else {
                (format!("{weight} {port} {target}"), Some(*priority))
            }
        }
        RecordData::CAA { flags, tag, value } => (format!("{flags} {tag} {value}"), None),
        RecordData::TXT { text } => {
            if profile.quoted_txt() {
                (format!("\"{text}\""), None)
            } else {
                (text.clone(), None)
            }
        }
        RecordData::Raw { data, .. } => (data.clone(), None),
    };

    // SRV write names carry the service/proto labels and no zone.
    let name = match &record.data {
        RecordData::SRV {
            service, transport, ..
        } => format!("_{service}._{transport}"),
        _ => relative_to_vendor_name(&record.name),
    };

    VultrRecordReq {
        name,
        record_type: record.data.record_type().to_string(),
        data,
        ttl: record.ttl,
        priority,
    }
}
