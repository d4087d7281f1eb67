use crate::error::StoreError;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One location record as the external data-management process maintains
/// it. The core reads these fields and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: String,
    pub name: String,
    pub short_description: String,
    #[serde(default)]
    pub detailed_description: String,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

/// Read-only access to the external record store. Each call is expected to
/// manage its own connection scope; implementations must not leak
/// connections across calls.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetches the records for the given ids. Order is not guaranteed and
    /// unknown ids are simply absent from the result.
    async fn fetch_by_ids(&self, ids: &[String]) -> Result<Vec<LocationRecord>, StoreError>;

    /// Returns the ids of records matching the province (case-insensitive
    /// on the normalized name) and/or region filter.
    async fn fetch_by_filter(
        &self,
        province: Option<&str>,
        region: Option<&str>,
    ) -> Result<Vec<String>, StoreError>;

    async fn fetch_one_by_id(&self, id: &str) -> Result<Option<LocationRecord>, StoreError>;
}
