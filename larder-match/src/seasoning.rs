//! Seasoning keyword detection
//!
//! The display layer reserves a "seasonings" bucket detected from item
//! names, independent of any stored category.

use crate::normalize::normalize;

/// Keyword list for the reserved seasonings bucket. Matched against the
/// normalized name by containment.
static SEASONING_KEYWORDS: [&str; 28] = [
    "salt",
    "pepper",
    "peppercorn",
    "cumin",
    "paprika",
    "turmeric",
    "oregano",
    "basil",
    "thyme",
    "rosemary",
    "sage",
    "cinnamon",
    "nutmeg",
    "cayenne",
    "coriander",
    "cardamom",
    "allspice",
    "bay leaf",
    "bay leaves",
    "chili powder",
    "curry powder",
    "garam masala",
    "onion powder",
    "garlic powder",
    "vanilla extract",
    "red pepper flakes",
    "seasoning",
    "spice",
];

/// True when the item name reads as a seasoning
pub fn is_seasoning(name: &str) -> bool {
    let normalized = normalize(name);
    if normalized.is_empty() {
        return false;
    }
    SEASONING_KEYWORDS
        .iter()
        .any(|keyword| normalized.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_seasonings() {
        assert!(is_seasoning("Salt"));
        assert!(is_seasoning("black pepper"));
        assert!(is_seasoning("Garam Masala"));
        assert!(is_seasoning("smoked paprika"));
    }

    #[test]
    fn test_modified_names_still_match() {
        assert!(is_seasoning("Kosher salt"));
        assert!(is_seasoning("Italian seasoning blend"));
        assert!(is_seasoning("pumpkin spice mix"));
    }

    #[test]
    fn test_non_seasonings() {
        assert!(!is_seasoning("chicken breast"));
        assert!(!is_seasoning("tomato puree"));
        assert!(!is_seasoning("garlic"));
        assert!(!is_seasoning(""));
    }
}
