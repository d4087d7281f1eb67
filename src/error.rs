//! Typed error taxonomy shared across the search subsystems.
//!
//! Infrastructure failures (annotator, artifact bundle, record store) carry
//! their own enums so callers can recover per policy: preprocessing and
//! ranking failures are turned into structured error responses at the
//! orchestrator boundary, store failures degrade per-id, and artifact
//! failures keep the ranking engine in a not-ready state until restart.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the external tagging annotator.
#[derive(Debug, Error)]
pub enum AnnotateError {
    /// The annotator endpoint is missing or unparsable. Raised at
    /// construction time, before any query is served.
    #[error("annotator misconfigured: {0}")]
    Misconfigured(String),

    /// The annotator could not be reached or returned garbage. Fatal for
    /// the current query, not retried.
    #[error("annotator unavailable: {0}")]
    Unavailable(String),
}

/// Failures loading the ranking artifact bundle. All of these are fatal at
/// startup: the engine stays not-ready and textual searches are refused.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact file missing: {0}")]
    Missing(PathBuf),

    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Structural invariant violation between the three co-versioned files.
    #[error("corrupt artifact bundle: {0}")]
    Corrupt(String),
}

/// Failures of the ranking engine at request time.
#[derive(Debug, Error)]
pub enum RankingError {
    #[error("ranking engine is not ready (artifact bundle failed to load)")]
    EngineNotReady,
}

/// Failures of the external record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}
