use super::types::{Bucket, ProvinceBucket, QueryDetails, RankedLocation, SearchResponse};
use crate::error::StoreError;
use crate::location::{self, normalize_name};
use crate::preprocess::Preprocessor;
use crate::ranking::TfidfEngine;
use crate::store::{LocationRecord, RecordStore};

use std::collections::HashMap;
use std::sync::Arc;

/// Textual matches scoring below this never appear in a bucket.
pub const MIN_RELEVANCE_SCORE: f64 = 0.1;

/// Score assigned when results come from a pure province/region filter and
/// no textual relevance was computed. Small but nonzero so it is visually
/// distinct from "no score" yet sorts below any threshold-eligible match.
pub const FILTER_ONLY_SCORE: f64 = 0.01;

/// Detail fetches are chunked to respect typical query-parameter limits.
const DETAIL_FETCH_BATCH: usize = 500;

pub const TITLE_MORE_SPECIFIC: &str = "Vui lòng nhập truy vấn cụ thể hơn.";
pub const TITLE_ANALYSIS_FAILED: &str =
    "Không thể phân tích truy vấn lúc này, vui lòng thử lại sau.";
pub const TITLE_ENGINE_NOT_READY: &str =
    "Hệ thống xếp hạng chưa sẵn sàng, vui lòng thử lại sau.";
pub const TITLE_NO_OTHER_RESULTS: &str = "Không có kết quả nào khác.";
pub const TITLE_NO_PROVINCE: &str = "Truy vấn không chỉ định tỉnh/thành nào.";

#[derive(Debug, PartialEq)]
enum RankingMode {
    /// Cosine scores over the full record set.
    Textual,
    /// Province/region filter with sentinel scores; no threshold applies.
    FilterOnly,
}

/// The search orchestrator. Constructed once at process start and shared;
/// all mutable state is per-call.
pub struct SearchService {
    preprocessor: Preprocessor,
    engine: Arc<TfidfEngine>,
    store: Arc<dyn RecordStore>,
    detail_batch: usize,
}

impl SearchService {
    pub fn new(
        preprocessor: Preprocessor,
        engine: Arc<TfidfEngine>,
        store: Arc<dyn RecordStore>,
    ) -> Self {
        Self {
            preprocessor,
            engine,
            store,
            detail_batch: DETAIL_FETCH_BATCH,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_detail_batch(mut self, batch: usize) -> Self {
        self.detail_batch = batch;
        self
    }

    /// Runs one search end to end. Infrastructure failures come back as
    /// error-titled empty responses, never as an `Err` to the caller.
    pub async fn search(&self, query_text: &str, num_results: usize) -> SearchResponse {
        tracing::info!("Search request: '{}' (limit {})", query_text, num_results);

        let keywords = match self.preprocessor.preprocess(query_text).await {
            Ok(keywords) => keywords,
            Err(err) => {
                tracing::error!("Query analysis failed: {}", err);
                return titled_empty(
                    QueryDetails {
                        original_query: query_text.to_string(),
                        ..QueryDetails::default()
                    },
                    TITLE_ANALYSIS_FAILED,
                );
            }
        };

        let target = location::resolve(&keywords.location_keywords);
        let details = QueryDetails {
            original_query: query_text.to_string(),
            general_keywords: keywords.general_keywords.clone(),
            negative_keywords: keywords.negative_keywords.clone(),
            location_keywords: keywords.location_keywords.clone(),
            resolved_province: target.province.clone(),
            resolved_region: target.region.clone(),
        };

        let ranking_query = keywords.general_keywords.join(" ");
        let has_location = target.province.is_some() || target.region.is_some();

        // Ranking-mode decision. Textual ranking covers the full record set
        // because the province partition happens later; truncating here
        // could leave a named province with no candidates at all.
        let (candidates, mode) = if !ranking_query.is_empty() && self.engine.is_ready() {
            match self
                .engine
                .score_all(&ranking_query, self.engine.record_count())
            {
                Ok(scored) => (scored, RankingMode::Textual),
                Err(err) => {
                    tracing::error!("Ranking failed: {}", err);
                    return titled_empty(details, TITLE_ENGINE_NOT_READY);
                }
            }
        } else if ranking_query.is_empty() && has_location {
            // A resolved province is the more specific filter; the region
            // only drives the store query when no province resolved.
            let region_filter = if target.province.is_some() {
                None
            } else {
                target.region.as_deref()
            };
            let ids = match self
                .store
                .fetch_by_filter(target.province.as_deref(), region_filter)
                .await
            {
                Ok(ids) => ids,
                Err(err) => {
                    tracing::error!("Store filter query failed: {}", err);
                    Vec::new()
                }
            };
            let scored = ids
                .into_iter()
                .map(|id| (id, FILTER_ONLY_SCORE))
                .collect();
            (scored, RankingMode::FilterOnly)
        } else if !ranking_query.is_empty() {
            tracing::warn!("Refusing textual query: ranking engine not ready");
            return titled_empty(details, TITLE_ENGINE_NOT_READY);
        } else {
            return titled_empty(details, TITLE_MORE_SPECIFIC);
        };

        let pool = self.fetch_ranked_details(&candidates).await;
        let pool = apply_negation_filter(pool, &keywords.negative_keywords);

        let (mut province_pool, mut other_pool): (
            Vec<(LocationRecord, f64)>,
            Vec<(LocationRecord, f64)>,
        ) = match &target.province {
            Some(province) => pool.into_iter().partition(|(record, _)| {
                record.province.as_deref().map(normalize_name).as_deref()
                    == Some(province.as_str())
            }),
            None => (Vec::new(), pool),
        };

        if mode == RankingMode::Textual {
            province_pool.retain(|(_, score)| *score >= MIN_RELEVANCE_SCORE);
            other_pool.retain(|(_, score)| *score >= MIN_RELEVANCE_SCORE);
        }

        province_pool.truncate(num_results);
        other_pool.truncate(num_results);

        tracing::info!(
            "Search done: {} province matches, {} other matches ({:?})",
            province_pool.len(),
            other_pool.len(),
            mode
        );

        let province_results = ProvinceBucket {
            province_name: target.province.clone(),
            title: match (&target.province, province_pool.is_empty()) {
                (Some(province), false) => format!("Địa điểm phù hợp tại {}", province),
                (Some(province), true) => {
                    format!("Chưa tìm thấy địa điểm phù hợp tại {}", province)
                }
                (None, _) => TITLE_NO_PROVINCE.to_string(),
            },
            locations: into_ranked(province_pool),
        };
        let other_results = Bucket {
            title: if other_pool.is_empty() {
                TITLE_NO_OTHER_RESULTS.to_string()
            } else if target.province.is_some() {
                "Các địa điểm tương tự ở nơi khác".to_string()
            } else {
                "Các địa điểm phù hợp với truy vấn".to_string()
            },
            locations: into_ranked(other_pool),
        };

        SearchResponse {
            query_details: details,
            province_results,
            other_results,
        }
    }

    /// Detail lookup for one record; `None` is a normal outcome.
    pub async fn get_details(&self, id: &str) -> Result<Option<LocationRecord>, StoreError> {
        self.store.fetch_one_by_id(id).await
    }

    /// Joins candidate scores with record details, preserving score order.
    /// A failed batch only loses its own ids; everything else proceeds.
    async fn fetch_ranked_details(
        &self,
        candidates: &[(String, f64)],
    ) -> Vec<(LocationRecord, f64)> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let ids: Vec<String> = candidates.iter().map(|(id, _)| id.clone()).collect();
        let mut by_id: HashMap<String, LocationRecord> = HashMap::new();
        for batch in ids.chunks(self.detail_batch) {
            match self.store.fetch_by_ids(batch).await {
                Ok(records) => {
                    for record in records {
                        by_id.insert(record.id.clone(), record);
                    }
                }
                Err(err) => {
                    tracing::error!(
                        "Detail fetch failed for a batch of {} ids: {}",
                        batch.len(),
                        err
                    );
                }
            }
        }

        candidates
            .iter()
            .filter_map(|(id, score)| by_id.remove(id).map(|record| (record, *score)))
            .collect()
    }
}

/// Drops records whose name + short description contains any negated
/// keyword, case-insensitively. Substring containment can over-match
/// common substrings; a negated keyword loses its underscore joiner
/// before the check so it matches the prose form in record text.
fn apply_negation_filter(
    pool: Vec<(LocationRecord, f64)>,
    negative_keywords: &[String],
) -> Vec<(LocationRecord, f64)> {
    if negative_keywords.is_empty() {
        return pool;
    }

    let needles: Vec<String> = negative_keywords
        .iter()
        .map(|kw| kw.replace('_', " ").to_lowercase())
        .collect();

    pool.into_iter()
        .filter(|(record, _)| {
            let haystack =
                format!("{} {}", record.name, record.short_description).to_lowercase();
            !needles.iter().any(|needle| haystack.contains(needle))
        })
        .collect()
}

fn into_ranked(pool: Vec<(LocationRecord, f64)>) -> Vec<RankedLocation> {
    pool.into_iter()
        .map(|(record, score)| RankedLocation {
            id: record.id,
            name: record.name,
            short_description: record.short_description,
            province: record.province,
            score: (score * 10_000.0).round() / 10_000.0,
        })
        .collect()
}

fn titled_empty(details: QueryDetails, title: &str) -> SearchResponse {
    SearchResponse {
        province_results: ProvinceBucket {
            province_name: details.resolved_province.clone(),
            title: String::new(),
            locations: Vec::new(),
        },
        other_results: Bucket {
            title: title.to_string(),
            locations: Vec::new(),
        },
        query_details: details,
    }
}
