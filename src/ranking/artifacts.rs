use crate::config::Config;
use crate::error::ArtifactError;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// The fitted term vectorizer: a fixed vocabulary mapping terms to matrix
/// columns, plus the per-column inverse-document-frequency weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vectorizer {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
}

/// Sparse term-weight matrix in CSR layout. Row `i` holds the weighted
/// terms of the record at position `i` of the bundle's id list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermMatrix {
    pub rows: usize,
    pub cols: usize,
    pub indptr: Vec<usize>,
    pub indices: Vec<usize>,
    pub data: Vec<f64>,
}

impl TermMatrix {
    /// Iterates the `(column, weight)` entries of one row.
    pub fn row(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let start = self.indptr[i];
        let end = self.indptr[i + 1];
        self.indices[start..end]
            .iter()
            .copied()
            .zip(self.data[start..end].iter().copied())
    }
}

/// The three co-versioned structures the engine runs on, immutable for the
/// process lifetime. Swapping in a fresh bundle requires a restart.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    pub vectorizer: Vectorizer,
    pub matrix: TermMatrix,
    pub location_ids: Vec<String>,
}

impl ArtifactBundle {
    /// Loads and validates the bundle from the configured model directory.
    /// Any missing file or structural mismatch is fatal here; the caller
    /// decides whether the process can live without a ready engine.
    pub fn load(config: &Config) -> Result<Self, ArtifactError> {
        let vectorizer: Vectorizer = read_json(&config.vectorizer_path())?;
        let matrix: TermMatrix = read_json(&config.matrix_path())?;
        let location_ids: Vec<String> = read_json(&config.location_ids_path())?;

        let bundle = Self {
            vectorizer,
            matrix,
            location_ids,
        };
        bundle.validate()?;
        Ok(bundle)
    }

    /// The structural invariant: matrix rows match the id list, matrix
    /// columns match the vocabulary, the CSR layout is internally
    /// consistent, and every row's column indices are strictly increasing
    /// (the scoring merge-join depends on sorted, duplicate-free rows).
    pub fn validate(&self) -> Result<(), ArtifactError> {
        let matrix = &self.matrix;

        if matrix.rows != self.location_ids.len() {
            return Err(ArtifactError::Corrupt(format!(
                "matrix has {} rows but the id list has {} entries",
                matrix.rows,
                self.location_ids.len()
            )));
        }
        if matrix.cols != self.vectorizer.vocabulary.len() {
            return Err(ArtifactError::Corrupt(format!(
                "matrix has {} columns but the vocabulary has {} terms",
                matrix.cols,
                self.vectorizer.vocabulary.len()
            )));
        }
        if self.vectorizer.idf.len() != matrix.cols {
            return Err(ArtifactError::Corrupt(format!(
                "idf table has {} entries for {} columns",
                self.vectorizer.idf.len(),
                matrix.cols
            )));
        }
        if matrix.indptr.len() != matrix.rows + 1 {
            return Err(ArtifactError::Corrupt(format!(
                "indptr has {} entries for {} rows",
                matrix.indptr.len(),
                matrix.rows
            )));
        }
        if matrix.indices.len() != matrix.data.len() {
            return Err(ArtifactError::Corrupt(format!(
                "indices/data length mismatch: {} vs {}",
                matrix.indices.len(),
                matrix.data.len()
            )));
        }
        if matrix.indptr.windows(2).any(|w| w[0] > w[1]) {
            return Err(ArtifactError::Corrupt(
                "indptr is not non-decreasing".to_string(),
            ));
        }
        if matrix.indptr.last().copied().unwrap_or(0) != matrix.data.len() {
            return Err(ArtifactError::Corrupt(
                "indptr does not cover the data array".to_string(),
            ));
        }
        if matrix.indices.iter().any(|&col| col >= matrix.cols) {
            return Err(ArtifactError::Corrupt(
                "column index out of range".to_string(),
            ));
        }
        if self
            .vectorizer
            .vocabulary
            .values()
            .any(|&col| col >= matrix.cols)
        {
            return Err(ArtifactError::Corrupt(
                "vocabulary maps a term outside the matrix columns".to_string(),
            ));
        }
        for row in 0..matrix.rows {
            let cols = &matrix.indices[matrix.indptr[row]..matrix.indptr[row + 1]];
            if cols.windows(2).any(|w| w[0] >= w[1]) {
                return Err(ArtifactError::Corrupt(format!(
                    "row {} has unsorted or duplicate column indices",
                    row
                )));
            }
        }

        Ok(())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::Missing(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
