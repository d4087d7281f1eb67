use serde::Serialize;

/// The three disjoint, first-seen-order deduplicated keyword sets produced
/// for one query. Immutable once produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KeywordSets {
    /// Candidate ranking terms: nouns/adjectives and travel-domain keywords,
    /// minus anything claimed by negation or location capture.
    pub general_keywords: Vec<String>,
    /// Terms the user wants excluded, in joined surface form.
    pub negative_keywords: Vec<String>,
    /// Raw surface forms naming places, joined with the word joiner.
    pub location_keywords: Vec<String>,
}

/// Output of the simpler synonym-expansion contract: a TF-IDF-ready token
/// string plus the expanded keyword list for tag matching.
#[derive(Debug, Clone, Default)]
pub struct ExpandedQuery {
    pub tokens_for_tfidf: String,
    pub keywords_for_tags: Vec<String>,
}
