use super::records::{LocationRecord, RecordStore};
use crate::error::StoreError;
use crate::location::normalize_name;

use async_trait::async_trait;
use dashmap::DashMap;
use std::path::Path;

/// In-memory record store, seeded once from a JSON array of records.
///
/// Stands in for the external relational store during local runs and in
/// tests. Filter queries return ids in id order so repeated searches over
/// fixed content stay deterministic.
pub struct MemoryStore {
    records: DashMap<String, LocationRecord>,
}

impl MemoryStore {
    pub fn from_records(records: Vec<LocationRecord>) -> Self {
        let map = DashMap::new();
        for record in records {
            map.insert(record.id.clone(), record);
        }
        Self { records: map }
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| StoreError::Unavailable(format!("seed file {:?}: {}", path, err)))?;
        let records: Vec<LocationRecord> = serde_json::from_str(&raw)
            .map_err(|err| StoreError::Unavailable(format!("seed file {:?}: {}", path, err)))?;

        tracing::info!("Record store seeded with {} locations from {:?}", records.len(), path);
        Ok(Self::from_records(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn fetch_by_ids(&self, ids: &[String]) -> Result<Vec<LocationRecord>, StoreError> {
        Ok(ids
            .iter()
            .filter_map(|id| self.records.get(id).map(|entry| entry.value().clone()))
            .collect())
    }

    async fn fetch_by_filter(
        &self,
        province: Option<&str>,
        region: Option<&str>,
    ) -> Result<Vec<String>, StoreError> {
        let province_wanted = province.map(normalize_name);
        let region_wanted = region.map(|r| r.to_lowercase());

        let mut ids: Vec<String> = self
            .records
            .iter()
            .filter(|entry| {
                let record = entry.value();
                let province_ok = match &province_wanted {
                    Some(wanted) => record
                        .province
                        .as_deref()
                        .map(normalize_name)
                        .as_deref()
                        == Some(wanted.as_str()),
                    None => true,
                };
                let region_ok = match &region_wanted {
                    Some(wanted) => record
                        .region
                        .as_deref()
                        .map(str::to_lowercase)
                        .as_deref()
                        == Some(wanted.as_str()),
                    None => true,
                };
                province_ok && region_ok
            })
            .map(|entry| entry.key().clone())
            .collect();

        ids.sort();
        Ok(ids)
    }

    async fn fetch_one_by_id(&self, id: &str) -> Result<Option<LocationRecord>, StoreError> {
        Ok(self.records.get(id).map(|entry| entry.value().clone()))
    }
}
