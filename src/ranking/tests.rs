//! Ranking Engine Tests
//!
//! Covers artifact loading (including the structural invariant that makes a
//! bundle fatal at startup) and the cosine scoring contract.

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::error::ArtifactError;
    use crate::ranking::artifacts::{ArtifactBundle, TermMatrix, Vectorizer};
    use crate::ranking::TfidfEngine;

    use std::collections::HashMap;
    use std::path::Path;
    use tempfile::TempDir;

    /// Four-term vocabulary, three records:
    /// row 0 = pure "biển", row 1 = pure "núi",
    /// row 2 = "biển" + "yên_tĩnh" (norm exactly 1.0).
    fn sample_bundle() -> ArtifactBundle {
        let vocabulary: HashMap<String, usize> = [
            ("biển".to_string(), 0),
            ("núi".to_string(), 1),
            ("chùa".to_string(), 2),
            ("yên_tĩnh".to_string(), 3),
        ]
        .into_iter()
        .collect();

        ArtifactBundle {
            vectorizer: Vectorizer {
                vocabulary,
                idf: vec![1.0, 1.0, 1.0, 2.0],
            },
            matrix: TermMatrix {
                rows: 3,
                cols: 4,
                indptr: vec![0, 1, 2, 4],
                indices: vec![0, 1, 0, 3],
                data: vec![1.0, 1.0, 0.6, 0.8],
            },
            location_ids: vec!["loc1".to_string(), "loc2".to_string(), "loc3".to_string()],
        }
    }

    fn write_bundle_files(dir: &Path, bundle: &ArtifactBundle) {
        std::fs::write(
            dir.join("vectorizer.json"),
            serde_json::to_string(&bundle.vectorizer).unwrap(),
        )
        .unwrap();
        std::fs::write(
            dir.join("tfidf_matrix.json"),
            serde_json::to_string(&bundle.matrix).unwrap(),
        )
        .unwrap();
        std::fs::write(
            dir.join("location_ids.json"),
            serde_json::to_string(&bundle.location_ids).unwrap(),
        )
        .unwrap();
    }

    fn config_for(dir: &Path) -> Config {
        Config {
            model_dir: dir.to_path_buf(),
            synonyms_path: dir.join("synonyms.json"),
            seed_data_path: dir.join("locations.json"),
            annotator_url: "http://127.0.0.1:9000/annotate".to_string(),
        }
    }

    // ============================================================
    // ARTIFACT LOADING
    // ============================================================

    #[test]
    fn test_load_round_trips_a_valid_bundle() {
        let dir = TempDir::new().unwrap();
        write_bundle_files(dir.path(), &sample_bundle());

        let engine = TfidfEngine::load(&config_for(dir.path()));
        assert!(engine.is_ready());
        assert_eq!(engine.record_count(), 3);
    }

    #[test]
    fn test_missing_file_is_fatal_for_the_bundle() {
        let dir = TempDir::new().unwrap();
        let bundle = sample_bundle();
        write_bundle_files(dir.path(), &bundle);
        std::fs::remove_file(dir.path().join("location_ids.json")).unwrap();

        let loaded = ArtifactBundle::load(&config_for(dir.path()));
        assert!(matches!(loaded, Err(ArtifactError::Missing(_))));
    }

    #[test]
    fn test_row_count_mismatch_is_corrupt() {
        let mut bundle = sample_bundle();
        bundle.location_ids.pop();

        assert!(matches!(
            bundle.validate(),
            Err(ArtifactError::Corrupt(_))
        ));
    }

    #[test]
    fn test_column_vocabulary_mismatch_is_corrupt() {
        let mut bundle = sample_bundle();
        bundle.vectorizer.vocabulary.insert("thác".to_string(), 4);

        assert!(matches!(
            bundle.validate(),
            Err(ArtifactError::Corrupt(_))
        ));
    }

    #[test]
    fn test_csr_overflow_is_corrupt() {
        let mut bundle = sample_bundle();
        bundle.matrix.indices[0] = 99;

        assert!(matches!(
            bundle.validate(),
            Err(ArtifactError::Corrupt(_))
        ));
    }

    #[test]
    fn test_unsorted_row_indices_are_corrupt() {
        // An unsorted row would make the scoring merge-join skip entries
        // and silently under-score, so it must be fatal at load instead.
        let mut bundle = sample_bundle();
        bundle.matrix.indices = vec![0, 1, 3, 0];

        assert!(matches!(
            bundle.validate(),
            Err(ArtifactError::Corrupt(_))
        ));
    }

    #[test]
    fn test_duplicate_row_columns_are_corrupt() {
        let mut bundle = sample_bundle();
        bundle.matrix.indices = vec![0, 1, 0, 0];

        assert!(matches!(
            bundle.validate(),
            Err(ArtifactError::Corrupt(_))
        ));
    }

    #[test]
    fn test_corrupt_bundle_leaves_engine_not_ready() {
        let dir = TempDir::new().unwrap();
        let mut bundle = sample_bundle();
        bundle.location_ids.pop();
        write_bundle_files(dir.path(), &bundle);

        let engine = TfidfEngine::load(&config_for(dir.path()));
        assert!(!engine.is_ready());
        assert!(engine.score_all("biển", 5).is_err());
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        write_bundle_files(dir.path(), &sample_bundle());
        std::fs::write(dir.path().join("tfidf_matrix.json"), "{broken").unwrap();

        let loaded = ArtifactBundle::load(&config_for(dir.path()));
        assert!(matches!(loaded, Err(ArtifactError::Parse { .. })));
    }

    // ============================================================
    // SCORING
    // ============================================================

    #[test]
    fn test_score_all_ranks_by_cosine_descending() {
        let engine = TfidfEngine::from_bundle(sample_bundle());

        let scored = engine.score_all("biển", 10).unwrap();
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].0, "loc1");
        assert!((scored[0].1 - 1.0).abs() < 1e-9);
        assert_eq!(scored[1].0, "loc3");
        assert!((scored[1].1 - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_idf_weights_the_query_terms() {
        let engine = TfidfEngine::from_bundle(sample_bundle());

        let scored = engine.score_all("yên_tĩnh", 10).unwrap();
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].0, "loc3");
        assert!((scored[0].1 - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_terms_are_silently_dropped() {
        let engine = TfidfEngine::from_bundle(sample_bundle());

        // A mixed query still scores on the known term alone.
        let mixed = engine.score_all("biển xyzzy", 10).unwrap();
        assert_eq!(mixed[0].0, "loc1");

        // A fully unknown query matches nothing.
        let unknown = engine.score_all("xyzzy plugh", 10).unwrap();
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_zero_scores_are_excluded() {
        let engine = TfidfEngine::from_bundle(sample_bundle());

        let scored = engine.score_all("chùa", 10).unwrap();
        assert!(scored.is_empty());
    }

    #[test]
    fn test_top_k_truncates() {
        let engine = TfidfEngine::from_bundle(sample_bundle());

        let scored = engine.score_all("biển", 1).unwrap();
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].0, "loc1");
    }

    #[test]
    fn test_score_subset_restricts_to_given_ids() {
        let engine = TfidfEngine::from_bundle(sample_bundle());

        let scored = engine
            .score_subset("biển", &["loc3".to_string(), "ghost".to_string()])
            .unwrap();
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].0, "loc3");
    }

    #[test]
    fn test_not_ready_engine_refuses_to_score() {
        let engine = TfidfEngine::not_ready();
        assert!(!engine.is_ready());
        assert_eq!(engine.record_count(), 0);
        assert!(engine.score_all("biển", 5).is_err());
        assert!(engine.score_subset("biển", &["loc1".to_string()]).is_err());
    }
}
