//! Vultr DnsProvider trait 实现

use async_trait::async_trait;

use crate::error::{BatchError, BatchResult, ProviderError, Result};
use crate::providers::common::normalize_zone_name;
use crate::traits::DnsProvider;
use crate::types::{Record, RecordId, Zone};

use super::VultrProvider;
use super::codec::{decode_record, encode_record};
use super::error::ErrorContext;
use super::types::{DomainsResponse, RecordResponse, RecordsResponse};

/// Which key an ID-recovery lookup matches on.
///
/// The vendor has no secondary index, so the caller must pick the key that
/// fits its operation: deletes address records by name, updates by content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchKey {
    /// Delete semantics: match candidates by zone-relative name.
    Name,
    /// Update semantics: match candidates by record data.
    Data,
}

/// Recover a vendor record ID for `record`.
///
/// An embedded ID always wins; the candidate list is only consulted when the
/// record carries none. When several candidates match, the last one in
/// iteration order wins; the vendor API documents no tie-break, so don't
/// read "most recently changed" into that.
pub(crate) fn resolve_record_id(
    record: &Record,
    candidates: &[Record],
    key: MatchKey,
    zone: &str,
) -> Result<RecordId> {
    if let Some(id) = &record.id {
        return Ok(id.clone());
    }

    let mut found = None;
    for candidate in candidates {
        let matched = match key {
            MatchKey::Name => candidate.name == record.name,
            MatchKey::Data => candidate.data == record.data,
        };
        if matched {
            if let Some(id) = &candidate.id {
                found = Some(id.clone());
            }
        }
    }

    found.ok_or_else(|| ProviderError::NoMatchingRecord {
        zone: zone.to_string(),
        name: record.name.clone(),
    })
}

impl VultrProvider {
    /// Fetch and decode every record in the zone.
    ///
    /// Strict: the first record the codec rejects fails the whole call; a
    /// malformed remote record means a codec/vendor mismatch, not something
    /// to skip over.
    async fn fetch_records(&self, zone: &str) -> Result<Vec<Record>> {
        let ctx = ErrorContext::zone(zone);
        let raw_records = self
            .get_all_pages::<RecordsResponse>(&format!("/domains/{zone}/records"), &ctx)
            .await?;

        raw_records
            .iter()
            .map(|raw| decode_record(raw, zone, self.profile))
            .collect()
    }

    async fn create_record(&self, zone: &str, record: &Record) -> Result<Record> {
        let req = encode_record(record, self.profile);
        let ctx = ErrorContext::zone(zone);
        let resp: RecordResponse = self
            .post(&format!("/domains/{zone}/records"), &req, &ctx)
            .await?;

        let mut created = record.clone();
        created.id = Some(RecordId::from(resp.record.id));
        Ok(created)
    }

    async fn update_record(&self, zone: &str, record: &Record) -> Result<Record> {
        let id = self.recover_record_id(zone, record, MatchKey::Data).await?;
        let req = encode_record(record, self.profile);
        let ctx = ErrorContext::record(zone, id.as_str());
        self.patch_no_content(&format!("/domains/{zone}/records/{id}"), &req, &ctx)
            .await?;

        let mut updated = record.clone();
        updated.id = Some(id);
        Ok(updated)
    }

    async fn remove_record(&self, zone: &str, record: &Record) -> Result<Record> {
        let id = self.recover_record_id(zone, record, MatchKey::Name).await?;
        let ctx = ErrorContext::record(zone, id.as_str());
        self.delete(&format!("/domains/{zone}/records/{id}"), &ctx)
            .await?;

        let mut removed = record.clone();
        removed.id = Some(id);
        Ok(removed)
    }

    /// Resolve the record's ID, fetching the zone listing only when the
    /// record carries none.
    async fn recover_record_id(
        &self,
        zone: &str,
        record: &Record,
        key: MatchKey,
    ) -> Result<RecordId> {
        if let Some(id) = &record.id {
            return Ok(id.clone());
        }

        log::debug!(
            "record '{}' carries no ID, recovering via {key:?} lookup",
            record.name
        );
        let existing = self.fetch_records(zone).await?;
        resolve_record_id(record, &existing, key, zone)
    }
}

#[async_trait]
impl DnsProvider for VultrProvider {
    fn id(&self) -> &'static str {
        "vultr"
    }

    async fn list_zones(&self) -> Result<Vec<Zone>> {
        let domains = self
            .get_all_pages::<DomainsResponse>("/domains", &ErrorContext::default())
            .await?;

        Ok(domains
            .into_iter()
            .map(|d| Zone {
                name: d.domain,
                created_at: d.date_created,
            })
            .collect())
    }

    async fn list_records(&self, zone: &str) -> Result<Vec<Record>> {
        let zone = normalize_zone_name(zone);
        self.fetch_records(&zone).await
    }

    async fn append_records(&self, zone: &str, records: &[Record]) -> BatchResult {
        let zone = normalize_zone_name(zone);
        let mut applied = Vec::with_capacity(records.len());

        for record in records {
            match self.create_record(&zone, record).await {
                Ok(created) => applied.push(created),
                Err(error) => return Err(BatchError { applied, error }),
            }
        }

        Ok(applied)
    }

    async fn set_records(&self, zone: &str, records: &[Record]) -> BatchResult {
        let zone = normalize_zone_name(zone);
        let mut applied = Vec::with_capacity(records.len());

        for record in records {
            match self.update_record(&zone, record).await {
                Ok(updated) => applied.push(updated),
                Err(error) => return Err(BatchError { applied, error }),
            }
        }

        Ok(applied)
    }

    async fn delete_records(&self, zone: &str, records: &[Record]) -> BatchResult {
        let zone = normalize_zone_name(zone);
        let mut applied = Vec::with_capacity(records.len());

        for record in records {
            match self.remove_record(&zone, record).await {
                Ok(removed) => applied.push(removed),
                Err(error) => return Err(BatchError { applied, error }),
            }
        }

        Ok(applied)
    }
}
