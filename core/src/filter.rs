use crate::models::Deal;

/// Keep the deals whose title contains `keyword`, ignoring case.
///
/// The result preserves input order. An empty keyword keeps everything.
pub fn filter(deals: &[Deal], keyword: &str) -> Vec<Deal> {
    if keyword.is_empty() {
        return deals.to_vec();
    }
    let needle = keyword.to_lowercase();
    deals
        .iter()
        .filter(|deal| title_matches(deal, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercased
fn title_matches(deal: &Deal, needle: &str) -> bool {
    deal.title.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deals() -> Vec<Deal> {
        vec![
            Deal::new("Half-Life 3", 9.99, 19.99, "1"),
            Deal::new("Portal 2", 1.99, 9.99, "1"),
            Deal::new("HALF-LIFE: Alyx", 29.99, 59.99, "7"),
            Deal::new("Stardew Valley", 8.99, 14.99, "25"),
        ]
    }

    fn titles(deals: &[Deal]) -> Vec<&str> {
        deals.iter().map(|d| d.title.as_str()).collect()
    }

    #[test]
    fn empty_keyword_is_identity() {
        let all = deals();
        assert_eq!(filter(&all, ""), all);
    }

    #[test]
    fn matches_substring_in_original_order() {
        let all = deals();
        let found = filter(&all, "half");
        assert_eq!(titles(&found), vec!["Half-Life 3", "HALF-LIFE: Alyx"]);
    }

    #[test]
    fn case_of_keyword_does_not_matter() {
        let all = deals();
        for keyword in ["life", "port", "VALLEY", "a"] {
            assert_eq!(
                filter(&all, &keyword.to_uppercase()),
                filter(&all, &keyword.to_lowercase()),
                "keyword {keyword}"
            );
        }
    }

    #[test]
    fn result_is_subsequence_of_input() {
        let all = deals();
        for keyword in ["", "a", "l", "2", "zzz", " "] {
            let found = filter(&all, keyword);
            let mut rest = all.iter();
            for deal in &found {
                assert!(rest.any(|d| d == deal), "keyword {keyword:?} reordered {}", deal.title);
            }
        }
    }

    #[test]
    fn no_match_is_empty() {
        assert!(filter(&deals(), "portal 3").is_empty());
        assert!(filter(&[], "anything").is_empty());
    }

    #[test]
    fn input_is_untouched() {
        let all = deals();
        let before = all.clone();
        let _ = filter(&all, "half");
        assert_eq!(all, before);
    }
}
