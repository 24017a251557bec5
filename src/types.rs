use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};

// ============ Record Identity ============

/// Vendor-assigned opaque record identifier.
///
/// Present on records read from the API; absent on records that have not
/// been created yet. Update and delete operations address records by this
/// ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Returns the raw ID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// ============ Record Data ============

/// Type-safe representation of DNS record data.
///
/// Each variant carries the fields specific to that record type; matching is
/// exhaustive, so adding a record kind is a compile-time-checked change.
/// Record types the adapter does not model are carried through unparsed in
/// [`Raw`](Self::Raw).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum RecordData {
    /// A record — maps a hostname to an IPv4 address.
    A {
        /// IPv4 address.
        address: IpAddr,
    },

    /// AAAA record — maps a hostname to an IPv6 address.
    AAAA {
        /// IPv6 address.
        address: IpAddr,
    },

    /// CNAME record — alias from one name to another.
    CNAME {
        /// Target hostname.
        target: String,
    },

    /// MX record — mail exchange server.
    MX {
        /// Preference (lower = preferred).
        preference: u16,
        /// Mail server hostname.
        exchange: String,
    },

    /// NS record — authoritative name server.
    NS {
        /// Name server hostname.
        nameserver: String,
    },

    /// SRV record — service locator.
    SRV {
        /// Service name, without the leading underscore (e.g. `"sip"`).
        service: String,
        /// Transport protocol, without the leading underscore (e.g. `"tcp"`).
        transport: String,
        /// Priority (lower = preferred).
        priority: u16,
        /// Weight for load balancing among same-priority targets.
        weight: u16,
        /// TCP/UDP port number.
        port: u16,
        /// Target hostname providing the service.
        target: String,
    },

    /// CAA record — Certificate Authority Authorization.
    CAA {
        /// Issuer critical flag (0 or 128).
        flags: u8,
        /// Property tag (`"issue"`, `"issuewild"`, or `"iodef"`).
        tag: String,
        /// CA domain or reporting URI.
        value: String,
    },

    /// TXT record — arbitrary text data.
    TXT {
        /// Text content.
        text: String,
    },

    /// Pass-through for record types the adapter does not model.
    Raw {
        /// Vendor record type string (e.g. `"SSHFP"`).
        record_type: String,
        /// Unparsed vendor data.
        data: String,
    },
}

impl RecordData {
    /// Returns the uppercase vendor type string for this record data.
    pub fn record_type(&self) -> &str {
        match self {
            Self::A { .. } => "A",
            Self::AAAA { .. } => "AAAA",
            Self::CNAME { .. } => "CNAME",
            Self::MX { .. } => "MX",
            Self::NS { .. } => "NS",
            Self::SRV { .. } => "SRV",
            Self::CAA { .. } => "CAA",
            Self::TXT { .. } => "TXT",
            Self::Raw { record_type, .. } => record_type,
        }
    }

    /// Returns the primary value for display (e.g. the IP address for
    /// A/AAAA, the target for CNAME/SRV, the exchange for MX).
    pub fn display_value(&self) -> String {
        match self {
            Self::A { address } | Self::AAAA { address } => address.to_string(),
            Self::CNAME { target } | Self::SRV { target, .. } => target.clone(),
            Self::MX { exchange, .. } => exchange.clone(),
            Self::NS { nameserver } => nameserver.clone(),
            Self::CAA { value, .. } => value.clone(),
            Self::TXT { text } => text.clone(),
            Self::Raw { data, .. } => data.clone(),
        }
    }
}

// ============ Records & Zones ============

/// A provider-neutral DNS record.
///
/// `name` is always zone-relative (`"www"`, or `"@"` for the apex) on
/// records read from the API; SRV records are zone-anchored, with the
/// service and protocol labels carried in [`RecordData::SRV`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Vendor-assigned record ID; `None` for records not yet created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Zone-relative record name.
    pub name: String,
    /// Time to live in seconds.
    pub ttl: u32,
    /// Type-specific record data.
    pub data: RecordData,
}

impl Record {
    /// Returns the vendor-assigned record ID.
    ///
    /// # Errors
    ///
    /// Fails with [`ProviderError::MissingRecordId`] when the record was
    /// never read back from the API; callers can recover an ID with a
    /// name/data lookup against a fresh record listing.
    pub fn provider_id(&self) -> Result<&RecordId> {
        self.id.as_ref().ok_or_else(|| ProviderError::MissingRecordId {
            name: self.name.clone(),
        })
    }
}

/// A DNS zone (domain) managed by the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Zone name, without trailing dot (e.g. `"example.com"`).
    pub name: String,
    /// When the zone was created, if known.
    #[serde(with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_roundtrip() {
        let id = RecordId::from("cb676a46-66fd-4dfb-b839-443f2e6c0b60");
        assert_eq!(id.as_str(), "cb676a46-66fd-4dfb-b839-443f2e6c0b60");
        assert_eq!(id.to_string(), "cb676a46-66fd-4dfb-b839-443f2e6c0b60");

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"cb676a46-66fd-4dfb-b839-443f2e6c0b60\"");
        let back: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn record_type_strings() {
        assert_eq!(
            RecordData::A {
                address: "192.0.2.1".parse().unwrap()
            }
            .record_type(),
            "A"
        );
        assert_eq!(
            RecordData::SRV {
                service: "sip".into(),
                transport: "tcp".into(),
                priority: 0,
                weight: 0,
                port: 0,
                target: ".".into(),
            }
            .record_type(),
            "SRV"
        );
        assert_eq!(
            RecordData::Raw {
                record_type: "SSHFP".into(),
                data: "1 1 deadbeef".into(),
            }
            .record_type(),
            "SSHFP"
        );
    }

    #[test]
    fn display_values() {
        assert_eq!(
            RecordData::A {
                address: "192.0.2.1".parse().unwrap()
            }
            .display_value(),
            "192.0.2.1"
        );
        assert_eq!(
            RecordData::MX {
                preference: 10,
                exchange: "mail.example.com".into(),
            }
            .display_value(),
            "mail.example.com"
        );
        assert_eq!(
            RecordData::CAA {
                flags: 0,
                tag: "issue".into(),
                value: "letsencrypt.org".into(),
            }
            .display_value(),
            "letsencrypt.org"
        );
    }

    #[test]
    fn record_data_serde_roundtrip() {
        let data = RecordData::SRV {
            service: "sip".to_string(),
            transport: "tcp".to_string(),
            priority: 10,
            weight: 20,
            port: 5060,
            target: "sipserver.example.com".to_string(),
        };
        let json = serde_json::to_string(&data).unwrap();
        let back: RecordData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn provider_id_present() {
        let record = Record {
            id: Some(RecordId::from("abc-123")),
            name: "www".to_string(),
            ttl: 300,
            data: RecordData::TXT {
                text: "hello".to_string(),
            },
        };
        let id = record.provider_id();
        assert!(matches!(id, Ok(id) if id.as_str() == "abc-123"));
    }

    #[test]
    fn provider_id_missing() {
        let record = Record {
            id: None,
            name: "www".to_string(),
            ttl: 300,
            data: RecordData::TXT {
                text: "hello".to_string(),
            },
        };
        assert!(matches!(
            record.provider_id(),
            Err(ProviderError::MissingRecordId { name }) if name == "www"
        ));
    }

    #[test]
    fn zone_deserialize_without_created_at() {
        let zone: Zone = serde_json::from_str(r#"{"name":"example.com"}"#).unwrap();
        assert_eq!(zone.name, "example.com");
        assert!(zone.created_at.is_none());
    }
}
