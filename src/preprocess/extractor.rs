use super::synonyms::SynonymTable;
use super::types::{ExpandedQuery, KeywordSets};
use crate::annotate::Annotator;
use crate::error::AnnotateError;

use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;

/// Joiner used by the Vietnamese tokenizer for multi-word units
/// (`quảng_nam`, `đông_đúc`).
pub const WORD_JOINER: char = '_';

/// Tokens that open a negation scope.
const NEGATION_TRIGGERS: &[&str] = &[
    "không",
    "không_có",
    "chẳng",
    "đừng",
    "tránh",
    "tránh_xa",
    "hạn_chế",
];

/// A scope runs until the coordinating conjunction "but" or sentence end.
const CLAUSE_BOUNDARIES: &[&str] = &["nhưng", "mà"];

/// Quantifiers, intensifiers and punctuation skipped while scanning a
/// negation scope ("không quá ồn ào" negates "ồn ào", not "quá").
const FILLER_TOKENS: &[&str] = &[
    "quá", "rất", "lắm", "hơi", "khá", "những", "các", "một", "nhiều", ",",
];

/// Domain terms treated as keyword-eligible regardless of POS class.
const TRAVEL_KEYWORDS: &[&str] = &[
    "biển",
    "bãi_biển",
    "núi",
    "leo_núi",
    "chùa",
    "chùa_chiền",
    "đảo",
    "thác",
    "hang_động",
    "resort",
    "phượt",
    "cắm_trại",
    "đông_đúc",
    "ồn_ào",
    "yên_tĩnh",
    "vắng_người",
    "sang_trọng",
    "văn_hóa",
    "lịch_sử",
    "kiến_trúc",
    "di_tích",
    "ẩm_thực",
];

/// Safety net for place names the tagger misses: well-known destinations and
/// region phrases, scanned as whole phrases over the normalized query text.
const COMMON_LOCATIONS: &[&str] = &[
    "hà nội",
    "hồ chí minh",
    "sài gòn",
    "đà nẵng",
    "đà lạt",
    "nha trang",
    "hạ long",
    "phú quốc",
    "sa pa",
    "hội an",
    "huế",
    "vũng tàu",
    "quảng nam",
    "điện biên",
    "miền bắc",
    "miền trung",
    "miền nam",
    "tây bắc",
    "tây nguyên",
];

/// Generic query-phrasing nouns ("place", "spot", "suggestion") that carry
/// no ranking signal. A query naming only a province through these words
/// must stay a pure filter query.
const GENERIC_TERMS: &[&str] = &[
    "địa_điểm",
    "địa_danh",
    "nơi",
    "chỗ",
    "khu_vực",
    "gợi_ý",
    "du_khách",
];

/// Administrative prefixes stripped from the front of a location mention.
const ADMIN_PREFIXES: &[&str] = &["tỉnh", "thành_phố", "tp"];

/// Extracts the keyword sets driving ranking, exclusion and location
/// filtering from raw query text. Holds the annotator seam and the synonym
/// table for the process lifetime.
pub struct Preprocessor {
    annotator: Arc<dyn Annotator>,
    synonyms: SynonymTable,
    punctuation: Regex,
}

impl Preprocessor {
    pub fn new(annotator: Arc<dyn Annotator>, synonyms: SynonymTable) -> Self {
        Self {
            annotator,
            synonyms,
            punctuation: Regex::new(r"[^\w\s]").expect("hardcoded pattern"),
        }
    }

    /// Lowercase, strip punctuation, collapse whitespace.
    fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = self.punctuation.replace_all(&lowered, " ");
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// The full extraction contract: general, negated and location keywords.
    ///
    /// Empty or whitespace-only input yields empty sets without touching the
    /// annotator. A query where nothing survives filtering is valid too.
    pub async fn preprocess(&self, query_text: &str) -> Result<KeywordSets, AnnotateError> {
        let normalized = self.normalize(query_text);
        if normalized.is_empty() {
            return Ok(KeywordSets::default());
        }

        let sentences = self.annotator.annotate(&normalized).await?;

        // Location spans: a maximal run starting at B-LOC.
        let mut location_keywords: Vec<String> = Vec::new();
        let mut location_tokens: Vec<HashSet<usize>> =
            sentences.iter().map(|_| HashSet::new()).collect();

        for (si, sentence) in sentences.iter().enumerate() {
            let mut i = 0;
            while i < sentence.len() {
                if sentence[i].is_loc_begin() {
                    let mut j = i;
                    while j < sentence.len() && sentence[j].is_loc() {
                        location_tokens[si].insert(j);
                        j += 1;
                    }
                    let joined = sentence[i..j]
                        .iter()
                        .map(|t| t.form.as_str())
                        .collect::<Vec<_>>()
                        .join("_");
                    location_keywords.push(strip_admin_prefix(&joined));
                    i = j;
                } else {
                    i += 1;
                }
            }
        }

        // Fallback: known place names the tagger missed.
        for place in COMMON_LOCATIONS {
            if !contains_phrase(&normalized, place) {
                continue;
            }
            let already_captured = location_keywords
                .iter()
                .any(|kw| kw.replace(WORD_JOINER, " ") == *place);
            if !already_captured {
                location_keywords.push(place.replace(' ', "_"));
            }
        }

        // Negation scoping: trigger to clause boundary, per sentence.
        let mut negative_keywords: Vec<String> = Vec::new();
        let mut negated_tokens: Vec<HashSet<usize>> =
            sentences.iter().map(|_| HashSet::new()).collect();

        for (si, sentence) in sentences.iter().enumerate() {
            for t in 0..sentence.len() {
                if location_tokens[si].contains(&t) {
                    continue;
                }
                if !NEGATION_TRIGGERS.contains(&sentence[t].form.as_str()) {
                    continue;
                }

                let mut k = t + 1;
                while k < sentence.len() {
                    let token = &sentence[k];
                    let form = token.form.as_str();
                    if CLAUSE_BOUNDARIES.contains(&form) || NEGATION_TRIGGERS.contains(&form) {
                        break;
                    }
                    if location_tokens[si].contains(&k)
                        || FILLER_TOKENS.contains(&form)
                        || GENERIC_TERMS.contains(&form)
                    {
                        k += 1;
                        continue;
                    }
                    if token.is_noun_or_adjective() || TRAVEL_KEYWORDS.contains(&form) {
                        negated_tokens[si].insert(k);
                        negative_keywords.push(token.form.clone());
                    }
                    k += 1;
                }
            }
        }

        // General keywords: what is left once negation and locations claimed
        // their tokens.
        let mut general_keywords: Vec<String> = Vec::new();
        for (si, sentence) in sentences.iter().enumerate() {
            for (ti, token) in sentence.iter().enumerate() {
                if location_tokens[si].contains(&ti) || negated_tokens[si].contains(&ti) {
                    continue;
                }
                let form = token.form.as_str();
                if NEGATION_TRIGGERS.contains(&form) || GENERIC_TERMS.contains(&form) {
                    continue;
                }
                if token.is_noun_or_adjective() || TRAVEL_KEYWORDS.contains(&form) {
                    general_keywords.push(token.form.clone());
                }
            }
        }

        // Synonym expansion feeds the ranking term set.
        let mut expanded: Vec<String> = Vec::new();
        for keyword in &general_keywords {
            if let Some(synonyms) = self.synonyms.expand(keyword) {
                for synonym in synonyms {
                    expanded.push(synonym.replace(' ', "_"));
                }
            }
        }
        general_keywords.extend(expanded);

        Ok(KeywordSets {
            general_keywords: dedup_keep_order(general_keywords),
            negative_keywords: dedup_keep_order(negative_keywords),
            location_keywords: dedup_keep_order(location_keywords),
        })
    }

    /// The simpler contract: tokenize, expand every token against the
    /// synonym table, and hand back a TF-IDF-ready string plus the expanded
    /// keyword list. No negation or location structure.
    pub async fn expand_for_tfidf(&self, query_text: &str) -> Result<ExpandedQuery, AnnotateError> {
        let normalized = self.normalize(query_text);
        if normalized.is_empty() {
            return Ok(ExpandedQuery::default());
        }

        let sentences = self.annotator.annotate(&normalized).await?;

        let mut expanded: Vec<String> = Vec::new();
        for token in sentences.iter().flatten() {
            expanded.push(token.form.clone());
            if let Some(synonyms) = self.synonyms.expand(&token.form) {
                for synonym in synonyms {
                    expanded.push(synonym.replace(' ', "_"));
                }
            }
        }
        let expanded = dedup_keep_order(expanded);

        Ok(ExpandedQuery {
            tokens_for_tfidf: expanded.join(" "),
            keywords_for_tags: expanded,
        })
    }
}

fn strip_admin_prefix(mention: &str) -> String {
    for prefix in ADMIN_PREFIXES {
        let with_joiner = format!("{}{}", prefix, WORD_JOINER);
        if let Some(rest) = mention.strip_prefix(&with_joiner) {
            if !rest.is_empty() {
                return rest.to_string();
            }
        }
    }
    mention.to_string()
}

/// Whole-phrase containment over space-separated text.
fn contains_phrase(text: &str, phrase: &str) -> bool {
    format!(" {} ", text).contains(&format!(" {} ", phrase))
}

fn dedup_keep_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
