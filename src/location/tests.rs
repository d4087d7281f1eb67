//! Location Normalizer Tests

#[cfg(test)]
mod tests {
    use crate::location::tables::{REGION_CENTRAL, REGION_NORTH};
    use crate::location::{normalize_name, resolve};

    fn kws(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    // ============================================================
    // NAME NORMALIZATION
    // ============================================================

    #[test]
    fn test_normalize_name_replaces_joiner_and_case() {
        assert_eq!(normalize_name("Quảng_Nam"), "quảng nam");
    }

    #[test]
    fn test_normalize_name_strips_non_word_characters() {
        assert_eq!(normalize_name("đà nẵng!"), "đà nẵng");
        assert_eq!(normalize_name("  hà   nội  "), "hà nội");
    }

    // ============================================================
    // PROVINCE RESOLUTION
    // ============================================================

    #[test]
    fn test_resolves_province_and_its_region() {
        let target = resolve(&kws(&["quảng_nam"]));
        assert_eq!(target.province.as_deref(), Some("quảng nam"));
        assert_eq!(target.region.as_deref(), Some(REGION_CENTRAL));
    }

    #[test]
    fn test_longest_candidate_is_tried_first() {
        // "nam" alone matches nothing; "quảng nam" must win even when the
        // shorter candidate comes first in the list.
        let target = resolve(&kws(&["nam", "quảng_nam"]));
        assert_eq!(target.province.as_deref(), Some("quảng nam"));
    }

    #[test]
    fn test_first_viable_match_wins_after_length_sort() {
        // Two known provinces of equal specificity: the earlier candidate
        // (after the stable length sort) is the one that resolves.
        let target = resolve(&kws(&["hà nội", "hà nam"]));
        assert_eq!(target.province.as_deref(), Some("hà nội"));
    }

    #[test]
    fn test_province_region_overrides_region_keyword() {
        // "miền nam" appears among the keywords, but Hà Nội maps north.
        let target = resolve(&kws(&["hà_nội", "miền nam"]));
        assert_eq!(target.province.as_deref(), Some("hà nội"));
        assert_eq!(target.region.as_deref(), Some(REGION_NORTH));
    }

    // ============================================================
    // REGION FALLBACK
    // ============================================================

    #[test]
    fn test_region_keyword_resolves_without_province() {
        let target = resolve(&kws(&["miền_bắc"]));
        assert_eq!(target.province, None);
        assert_eq!(target.region.as_deref(), Some(REGION_NORTH));
    }

    #[test]
    fn test_sub_region_keyword_maps_to_canonical_region() {
        let target = resolve(&kws(&["tây_bắc"]));
        assert_eq!(target.region.as_deref(), Some(REGION_NORTH));
    }

    #[test]
    fn test_region_keyword_requires_word_boundary() {
        // "đông bắc ninh" contains "bắc ninh" textually, but this input is a
        // single unknown candidate; only whole-phrase region keywords match.
        let target = resolve(&kws(&["vùng đông bắc"]));
        assert_eq!(target.province, None);
        assert_eq!(target.region.as_deref(), Some(REGION_NORTH));
    }

    #[test]
    fn test_empty_keywords_resolve_to_nothing() {
        let target = resolve(&[]);
        assert_eq!(target.province, None);
        assert_eq!(target.region, None);
    }

    #[test]
    fn test_unknown_place_resolves_to_nothing() {
        let target = resolve(&kws(&["bãi_đá_ông_địa"]));
        assert_eq!(target.province, None);
        assert_eq!(target.region, None);
    }
}
