use async_trait::async_trait;

use crate::error::{BatchResult, Result};
use crate::types::{Record, Zone};

/// DNS 提供商 Trait
///
/// The plugin boundary exposed to host frameworks. Zone names may be passed
/// with or without a trailing dot; implementations normalize before use.
///
/// Batch operations (`append_records`, `set_records`, `delete_records`)
/// process their input strictly in order and stop at the first failure; the
/// [`BatchResult`] error side carries the records applied before the abort.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// Lists all zones in the account, following pagination to the end.
    async fn list_zones(&self) -> Result<Vec<Zone>>;

    /// Lists all records in the zone, following pagination to the end.
    ///
    /// A record the codec cannot decode aborts the whole listing: a
    /// malformed remote record indicates a codec/vendor mismatch the caller
    /// must not silently ignore.
    async fn list_records(&self, zone: &str) -> Result<Vec<Record>>;

    /// Creates the given records in the zone.
    ///
    /// Returns the input records with their vendor-assigned IDs attached.
    async fn append_records(&self, zone: &str, records: &[Record]) -> BatchResult;

    /// Updates existing records by ID.
    ///
    /// Records without an embedded ID are matched by record data against a
    /// freshly fetched listing of the zone.
    async fn set_records(&self, zone: &str, records: &[Record]) -> BatchResult;

    /// Deletes records by ID.
    ///
    /// Records without an embedded ID are matched by name against a freshly
    /// fetched listing of the zone.
    async fn delete_records(&self, zone: &str, records: &[Record]) -> BatchResult;
}
