//! Identical vs. similar classification for grocery entries

use serde::{Deserialize, Serialize};

use larder_core::ItemKey;

use crate::normalize::{base_name, normalize};

/// How two entries relate. Exact implies safe to merge (sum quantities);
/// Similar implies display together but keep separate records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Similar,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResult {
    pub match_type: MatchKind,
}

/// True when two entries are the same item: equal normalized names, equal
/// normalized units (absent and empty are the same thing), equal categories
/// (both absent counts as equal).
pub fn identical(a: &ItemKey<'_>, b: &ItemKey<'_>) -> bool {
    normalize(a.name) == normalize(b.name)
        && normalize_unit(a.unit) == normalize_unit(b.unit)
        && a.category == b.category
}

/// True when two entries share a base ingredient: identical, or equal
/// non-empty base names, or substring containment backed by a shared word
/// longer than two characters (so "corn" never pairs with "cornstarch").
pub fn similar(a: &ItemKey<'_>, b: &ItemKey<'_>) -> bool {
    if identical(a, b) {
        return true;
    }

    let base_a = base_name(a.name);
    let base_b = base_name(b.name);
    if !base_a.is_empty() && base_a == base_b {
        return true;
    }

    let na = normalize(a.name);
    let nb = normalize(b.name);
    if na.is_empty() || nb.is_empty() {
        return false;
    }
    (na.contains(&nb) || nb.contains(&na)) && shares_long_word(&na, &nb)
}

/// Classify the relation in one pass
pub fn classify(a: &ItemKey<'_>, b: &ItemKey<'_>) -> SimilarityResult {
    let match_type = if identical(a, b) {
        MatchKind::Exact
    } else if similar(a, b) {
        MatchKind::Similar
    } else {
        MatchKind::None
    };
    SimilarityResult { match_type }
}

fn normalize_unit(unit: &str) -> String {
    unit.trim().to_lowercase()
}

fn shares_long_word(a: &str, b: &str) -> bool {
    a.split_whitespace()
        .filter(|w| w.len() > 2)
        .any(|w| b.split_whitespace().any(|other| other == w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::Category;

    fn key<'a>(name: &'a str, unit: &'a str, category: Option<Category>) -> ItemKey<'a> {
        ItemKey {
            name,
            unit,
            category,
        }
    }

    #[test]
    fn test_identical_ignores_case_and_spacing() {
        assert!(identical(
            &key("Salt", "", None),
            &key("salt ", "", None)
        ));
    }

    #[test]
    fn test_identical_requires_same_unit() {
        assert!(!identical(&key("salt", "tsp", None), &key("salt", "g", None)));
        // empty and empty are the same unit
        assert!(identical(&key("salt", "", None), &key("salt", "", None)));
    }

    #[test]
    fn test_identical_requires_same_category() {
        assert!(!identical(
            &key("salt", "", Some(Category::Pantry)),
            &key("salt", "", None)
        ));
        assert!(identical(
            &key("salt", "", Some(Category::Pantry)),
            &key("salt", "", Some(Category::Pantry))
        ));
    }

    #[test]
    fn test_kosher_and_sea_salt_are_similar_not_identical() {
        let a = key("Kosher salt", "", None);
        let b = key("Sea salt", "", None);
        assert!(!identical(&a, &b));
        assert!(similar(&a, &b));
        assert_eq!(classify(&a, &b).match_type, MatchKind::Similar);
    }

    #[test]
    fn test_containment_needs_shared_long_word() {
        // "chicken" is contained in "chicken breast" and shares the word
        assert!(similar(
            &key("chicken", "", None),
            &key("chicken breast", "", None)
        ));
        // "corn" is a substring of "cornstarch" but shares no whole word
        assert!(!similar(&key("corn", "", None), &key("cornstarch", "", None)));
    }

    #[test]
    fn test_unrelated_items() {
        let r = classify(&key("tomato puree", "", None), &key("chicken breast", "", None));
        assert_eq!(r.match_type, MatchKind::None);
    }

    #[test]
    fn test_exact_classification() {
        let r = classify(&key("salt", "", None), &key("Salt", "", None));
        assert_eq!(r.match_type, MatchKind::Exact);
    }
}
