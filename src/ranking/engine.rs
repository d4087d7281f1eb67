use super::artifacts::ArtifactBundle;
use crate::config::Config;
use crate::error::RankingError;

use std::cmp::Ordering;
use std::collections::HashMap;

struct LoadedArtifacts {
    bundle: ArtifactBundle,
    /// L2 norm per matrix row, precomputed once.
    row_norms: Vec<f64>,
    /// Record id -> matrix row.
    id_rows: HashMap<String, usize>,
}

/// TF-IDF cosine ranking engine with an explicit ready state.
///
/// Construction never panics: a bundle that fails to load leaves the engine
/// not-ready, and every scoring call then fails with `EngineNotReady` until
/// the process is restarted with a valid bundle.
pub struct TfidfEngine {
    inner: Option<LoadedArtifacts>,
}

impl TfidfEngine {
    /// Loads the artifact bundle from the configured model directory.
    pub fn load(config: &Config) -> Self {
        match ArtifactBundle::load(config) {
            Ok(bundle) => {
                tracing::info!(
                    "Ranking engine ready: {} records, {} vocabulary terms",
                    bundle.location_ids.len(),
                    bundle.vectorizer.vocabulary.len()
                );
                Self::from_bundle(bundle)
            }
            Err(err) => {
                tracing::error!("Ranking artifacts failed to load: {}", err);
                Self::not_ready()
            }
        }
    }

    /// Builds a ready engine from an already-validated bundle.
    pub fn from_bundle(bundle: ArtifactBundle) -> Self {
        let row_norms = (0..bundle.matrix.rows)
            .map(|i| bundle.matrix.row(i).map(|(_, w)| w * w).sum::<f64>().sqrt())
            .collect();
        let id_rows = bundle
            .location_ids
            .iter()
            .enumerate()
            .map(|(row, id)| (id.clone(), row))
            .collect();

        Self {
            inner: Some(LoadedArtifacts {
                bundle,
                row_norms,
                id_rows,
            }),
        }
    }

    pub fn not_ready() -> Self {
        Self { inner: None }
    }

    pub fn is_ready(&self) -> bool {
        self.inner.is_some()
    }

    /// Number of records the loaded matrix covers; zero when not ready.
    pub fn record_count(&self) -> usize {
        self.inner
            .as_ref()
            .map(|loaded| loaded.bundle.location_ids.len())
            .unwrap_or(0)
    }

    /// Scores every record against the query string and returns up to
    /// `top_k` `(id, score)` pairs, descending, strictly positive scores
    /// only. Query terms outside the vocabulary contribute nothing.
    pub fn score_all(
        &self,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<(String, f64)>, RankingError> {
        let loaded = self.inner.as_ref().ok_or(RankingError::EngineNotReady)?;

        let query_vector = query_vector(loaded, query);
        if query_vector.is_empty() {
            return Ok(Vec::new());
        }
        let query_norm = l2_norm(&query_vector);

        let mut scored: Vec<(String, f64)> = (0..loaded.bundle.matrix.rows)
            .filter_map(|row| {
                let score = cosine(loaded, &query_vector, query_norm, row);
                if score > 0.0 {
                    Some((loaded.bundle.location_ids[row].clone(), score))
                } else {
                    None
                }
            })
            .collect();

        sort_descending(&mut scored);
        scored.truncate(top_k);
        Ok(scored)
    }

    /// Same scoring restricted to the given ids. Unknown ids are skipped.
    pub fn score_subset(
        &self,
        query: &str,
        ids: &[String],
    ) -> Result<Vec<(String, f64)>, RankingError> {
        let loaded = self.inner.as_ref().ok_or(RankingError::EngineNotReady)?;

        let query_vector = query_vector(loaded, query);
        if query_vector.is_empty() {
            return Ok(Vec::new());
        }
        let query_norm = l2_norm(&query_vector);

        let mut scored: Vec<(String, f64)> = ids
            .iter()
            .filter_map(|id| loaded.id_rows.get(id).map(|&row| (id, row)))
            .filter_map(|(id, row)| {
                let score = cosine(loaded, &query_vector, query_norm, row);
                if score > 0.0 {
                    Some((id.clone(), score))
                } else {
                    None
                }
            })
            .collect();

        sort_descending(&mut scored);
        Ok(scored)
    }
}

/// Transforms the query into the bundle's vector space: term counts times
/// idf, as a column-sorted sparse vector.
fn query_vector(loaded: &LoadedArtifacts, query: &str) -> Vec<(usize, f64)> {
    let vectorizer = &loaded.bundle.vectorizer;

    let mut counts: HashMap<usize, usize> = HashMap::new();
    for term in query.split_whitespace() {
        if let Some(&col) = vectorizer.vocabulary.get(term) {
            *counts.entry(col).or_insert(0) += 1;
        }
    }

    let mut vector: Vec<(usize, f64)> = counts
        .into_iter()
        .map(|(col, count)| (col, count as f64 * vectorizer.idf[col]))
        .collect();
    vector.sort_by_key(|&(col, _)| col);
    vector
}

fn l2_norm(vector: &[(usize, f64)]) -> f64 {
    vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
}

/// Sparse cosine between the query vector and one matrix row, merge-joining
/// the two column-sorted sequences.
fn cosine(loaded: &LoadedArtifacts, query: &[(usize, f64)], query_norm: f64, row: usize) -> f64 {
    let row_norm = loaded.row_norms[row];
    if query_norm == 0.0 || row_norm == 0.0 {
        return 0.0;
    }

    let mut dot = 0.0;
    let mut q = query.iter().peekable();
    let mut r = loaded.bundle.matrix.row(row).peekable();

    while let (Some(&&(qc, qw)), Some(&(rc, rw))) = (q.peek(), r.peek()) {
        match qc.cmp(&rc) {
            Ordering::Equal => {
                dot += qw * rw;
                q.next();
                r.next();
            }
            Ordering::Less => {
                q.next();
            }
            Ordering::Greater => {
                r.next();
            }
        }
    }

    dot / (query_norm * row_norm)
}

/// Descending by score; ties keep row order (scores are never NaN since
/// zero norms are filtered above).
fn sort_descending(scored: &mut [(String, f64)]) {
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
}
