use super::tables;
use serde::Serialize;

/// The canonical location target derived once per query. Both fields are
/// optional; a query may name neither, either, or both.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocationTarget {
    pub province: Option<String>,
    pub region: Option<String>,
}

/// Normalizes a surface form for table lookup and comparison: lowercase,
/// word joiner to space, non-word characters dropped, whitespace collapsed.
pub fn normalize_name(raw: &str) -> String {
    let lowered = raw.to_lowercase().replace('_', " ");
    let cleaned: String = lowered
        .chars()
        .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolves the extracted location keywords to at most one canonical
/// province and one canonical region.
///
/// Candidates are tried longest-first so multi-word province names beat
/// their substrings; the first viable match wins. A province's mapped
/// region overrides any independently detected region keyword.
pub fn resolve(location_keywords: &[String]) -> LocationTarget {
    let mut candidates: Vec<String> = location_keywords
        .iter()
        .map(|kw| normalize_name(kw))
        .filter(|kw| !kw.is_empty())
        .collect();
    candidates.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

    let mut province = None;
    let mut region = None;

    for candidate in &candidates {
        if let Some(mapped) = tables::province_region(candidate) {
            province = Some(candidate.clone());
            region = Some(mapped.to_string());
            break;
        }
    }

    if region.is_none() && !candidates.is_empty() {
        let haystack = format!(" {} ", candidates.join(" "));
        for (keyword, canonical) in tables::REGION_KEYWORDS {
            if haystack.contains(&format!(" {} ", keyword)) {
                region = Some((*canonical).to_string());
                break;
            }
        }
    }

    LocationTarget { province, region }
}
