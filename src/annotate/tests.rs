//! Annotator Interface Tests
//!
//! Covers construction-time validation of the HTTP client and the wire
//! shape of the sidecar payload. Live-transport behavior is exercised via
//! the scripted annotators used by the preprocessor and search tests.

#[cfg(test)]
mod tests {
    use crate::annotate::types::TaggedToken;
    use crate::annotate::HttpAnnotator;
    use crate::config::Config;
    use std::path::PathBuf;

    fn config_with_endpoint(endpoint: &str) -> Config {
        Config {
            model_dir: PathBuf::from("data/models"),
            synonyms_path: PathBuf::from("data/dictionaries/synonyms.json"),
            seed_data_path: PathBuf::from("data/locations.json"),
            annotator_url: endpoint.to_string(),
        }
    }

    // ============================================================
    // CONSTRUCTION
    // ============================================================

    #[test]
    fn test_from_config_accepts_http_endpoint() {
        let config = config_with_endpoint("http://127.0.0.1:9000/annotate");
        assert!(HttpAnnotator::from_config(&config).is_ok());
    }

    #[test]
    fn test_from_config_rejects_empty_endpoint() {
        let config = config_with_endpoint("   ");
        assert!(HttpAnnotator::from_config(&config).is_err());
    }

    #[test]
    fn test_from_config_rejects_unparsable_endpoint() {
        let config = config_with_endpoint("not a url");
        assert!(HttpAnnotator::from_config(&config).is_err());
    }

    // ============================================================
    // TOKEN CLASSIFICATION
    // ============================================================

    #[test]
    fn test_loc_labels() {
        assert!(TaggedToken::new("quảng_nam", "Np", "B-LOC").is_loc_begin());
        assert!(TaggedToken::new("nam", "Np", "I-LOC").is_loc());
        assert!(!TaggedToken::new("biển", "N", "O").is_loc());
    }

    #[test]
    fn test_noun_and_adjective_classes() {
        assert!(TaggedToken::new("biển", "N", "O").is_noun_or_adjective());
        assert!(TaggedToken::new("hà_nội", "Np", "O").is_noun_or_adjective());
        assert!(TaggedToken::new("đẹp", "A", "O").is_noun_or_adjective());
        assert!(!TaggedToken::new("ở", "E", "O").is_noun_or_adjective());
        assert!(!TaggedToken::new("không", "R", "O").is_noun_or_adjective());
    }

    // ============================================================
    // WIRE SHAPE
    // ============================================================

    #[test]
    fn test_tagged_token_deserializes_from_sidecar_json() {
        let raw = r#"{"form":"đà_nẵng","pos":"Np","ner":"B-LOC"}"#;
        let token: TaggedToken = serde_json::from_str(raw).unwrap();
        assert_eq!(token.form, "đà_nẵng");
        assert!(token.is_loc_begin());
    }
}
