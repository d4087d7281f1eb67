//! Process configuration.
//!
//! Paths and endpoints are read from the environment with development
//! defaults, so a local run works out of the box while deployments override
//! everything via `DIADIEM_*` variables.

use std::env;
use std::path::PathBuf;

/// Resolved configuration for one process lifetime.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the three co-versioned ranking artifacts.
    pub model_dir: PathBuf,
    /// Synonym dictionary (JSON, keyword -> list of equivalents).
    pub synonyms_path: PathBuf,
    /// Seed file for the in-memory record store.
    pub seed_data_path: PathBuf,
    /// Endpoint of the tagging annotator sidecar.
    pub annotator_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            model_dir: env_path("DIADIEM_MODEL_DIR", "data/models"),
            synonyms_path: env_path("DIADIEM_SYNONYMS_PATH", "data/dictionaries/synonyms.json"),
            seed_data_path: env_path("DIADIEM_SEED_PATH", "data/locations.json"),
            annotator_url: env::var("DIADIEM_ANNOTATOR_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:9000/annotate".to_string()),
        }
    }

    pub fn vectorizer_path(&self) -> PathBuf {
        self.model_dir.join("vectorizer.json")
    }

    pub fn matrix_path(&self) -> PathBuf {
        self.model_dir.join("tfidf_matrix.json")
    }

    pub fn location_ids_path(&self) -> PathBuf {
        self.model_dir.join("location_ids.json")
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    env::var(key).map(PathBuf::from).unwrap_or_else(|_| PathBuf::from(default))
}
