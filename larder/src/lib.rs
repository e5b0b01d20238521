//! Larder - Ingredient and Grocery Domain Engine
//!
//! The pure, host-independent core of a recipe-discovery app:
//! - Parse free-text ingredient lines into structured quantity/unit/name
//! - Rewrite a line for a different serving count, with unit-appropriate
//!   rounding and cup -> tbsp -> tsp downgrades
//! - Decide whether grocery entries are identical (mergeable) or merely
//!   similar (groupable)
//! - Group a list for display and reconcile it against a pantry
//!
//! Everything is a pure function over values the caller supplies; storage,
//! networking and presentation belong to the host. Same input, same
//! output, on every platform.
//!
//! ```
//! let parsed = larder::parse_ingredient_line("500g chicken breast");
//! assert_eq!(parsed.unit, "g");
//! assert_eq!(parsed.name, "chicken breast");
//!
//! let doubled = larder::scale_ingredient_line("500g chicken breast", 4.0, 8.0);
//! assert_eq!(doubled, "1000 g chicken breast");
//! ```

mod nutrition;
mod scale;

pub use larder_core::{
    CandidateItem, Category, GroceryItem, ItemKey, MeasureError, PantryItem, ParsedIngredient,
};
pub use larder_list::{DisplayGroup, DuplicateScan, GroupedResult, MergeTarget};
pub use larder_match::{
    base_name, classify, identical, is_seasoning, normalize, similar, MatchKind, PantryMatch,
    PantryMatchKind, SimilarityResult,
};
pub use larder_units::{Unit, UnitClass};
pub use nutrition::{scale_nutrition, NutritionFacts};

/// Parse one free-text ingredient line. Total: always returns a value.
pub fn parse_ingredient_line(text: &str) -> ParsedIngredient {
    larder_parse::parse_line(text)
}

/// Parse a batch of ingredient lines; empty in, empty out.
pub fn parse_ingredient_lines(texts: &[String]) -> Vec<ParsedIngredient> {
    larder_parse::parse_lines(texts)
}

/// Rewrite an ingredient line for a new serving count. Lines that cannot
/// be scaled (no quantity, bad portion counts) come back unchanged.
pub fn scale_ingredient_line(text: &str, from_portions: f64, to_portions: f64) -> String {
    scale::scale_line(text, from_portions, to_portions)
}

/// Collapse identical entries on a list, summing quantities.
pub fn merge_identical_grocery_items(items: Vec<GroceryItem>) -> Vec<GroceryItem> {
    larder_list::merge_identical(items)
}

/// Derive the display view: category buckets with similarity clusters.
pub fn group_grocery_items_for_display(items: &[GroceryItem]) -> GroupedResult {
    larder_list::group_for_display(items)
}

/// Split incoming candidates into merge targets and fresh inserts.
pub fn find_duplicate_grocery_items(
    existing: &[GroceryItem],
    incoming: Vec<CandidateItem>,
) -> DuplicateScan {
    larder_list::find_duplicates(existing, incoming)
}

/// Check whether a grocery item is already in the pantry.
pub fn match_against_pantry(name: &str, pantry: &[PantryItem]) -> PantryMatch {
    larder_match::find_pantry_match(name, pantry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, quantity: f64, unit: &str) -> GroceryItem {
        GroceryItem {
            id: id.to_string(),
            name: name.to_string(),
            quantity,
            unit: unit.to_string(),
            category: None,
            notes: String::new(),
            completed: false,
            owner_id: "u1".to_string(),
            list_id: "l1".to_string(),
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_parser_correctness() {
        let p = parse_ingredient_line("500g chicken breast");
        assert_eq!(p.quantity, 500.0);
        assert_eq!(p.unit, "g");
        assert_eq!(p.name, "chicken breast");
        assert_eq!(p.notes, "");
    }

    #[test]
    fn test_parse_quantity_positive_when_line_has_number_or_unit() {
        for line in [
            "2 tbsp oil",
            "500g chicken",
            "1/2 cup sugar",
            "3 apples",
            "½ cup rice",
        ] {
            assert!(parse_ingredient_line(line).quantity > 0.0, "line: {}", line);
        }
    }

    #[test]
    fn test_scale_idempotence() {
        for n in [1.0, 2.0, 4.0, 7.5] {
            assert_eq!(scale_ingredient_line("2 tbsp oil", n, n), "2 tbsp oil");
        }
    }

    #[test]
    fn test_scale_correctness_triples() {
        assert!(scale_ingredient_line("500g chicken breast", 4.0, 8.0).contains("1000 g"));
        assert!(scale_ingredient_line("200ml tomato puree", 4.0, 8.0).contains("400 ml"));
        assert!(scale_ingredient_line("2 tbsp garam masala", 4.0, 8.0).contains("4 tbsp"));
    }

    #[test]
    fn test_no_zero_on_scale_down() {
        for line in ["1 tsp vanilla", "1 cup stock", "100 g sugar", "1 can beans"] {
            for to in [1.0, 2.0, 3.0] {
                let out = scale_ingredient_line(line, 12.0, to);
                assert!(
                    !out.starts_with("0 ") && !out.starts_with("0.0"),
                    "scaled to zero: {} -> {}",
                    line,
                    out
                );
            }
        }
    }

    #[test]
    fn test_merge_correctness() {
        let merged = merge_identical_grocery_items(vec![
            item("a", "Salt", 1.0, ""),
            item("b", "salt", 2.0, ""),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].quantity, 3.0);
    }

    #[test]
    fn test_pantry_matching() {
        let pantry = vec![PantryItem {
            name: "chicken breast".to_string(),
            quantity: None,
            unit: None,
            owner_id: "u1".to_string(),
        }];
        assert_eq!(
            match_against_pantry("chicken breast", &pantry).match_type,
            Some(PantryMatchKind::Exact)
        );
        assert_eq!(match_against_pantry("tomato puree", &pantry).match_type, None);
    }

    #[test]
    fn test_similarity_clustering_contract() {
        let a = item("a", "Kosher salt", 1.0, "");
        let b = item("b", "Sea salt", 1.0, "");
        assert!(!identical(&a.key(), &b.key()));
        assert!(similar(&a.key(), &b.key()));
        assert_eq!(classify(&a.key(), &b.key()).match_type, MatchKind::Similar);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(parse_ingredient_lines(&[]).is_empty());
        assert!(merge_identical_grocery_items(vec![]).is_empty());
        assert!(group_grocery_items_for_display(&[]).groups.is_empty());
        let scan = find_duplicate_grocery_items(&[], vec![]);
        assert!(scan.to_merge.is_empty() && scan.to_add.is_empty());
        assert_eq!(match_against_pantry("rice", &[]).match_type, None);
    }

    #[test]
    fn test_grouped_result_serializes_for_the_host() {
        let items = vec![item("a", "sea salt", 1.0, "")];
        let grouped = group_grocery_items_for_display(&items);
        let json = serde_json::to_string(&grouped).unwrap();
        assert!(json.contains("\"seasonings\""));
        assert!(json.contains("\"clusters\""));
    }

    #[test]
    fn test_duplicate_scan_roundtrip() {
        let existing = vec![item("a", "milk", 1.0, "l")];
        let incoming = vec![CandidateItem {
            name: "Milk".to_string(),
            quantity: 2.0,
            unit: "l".to_string(),
            category: None,
            notes: String::new(),
        }];
        let scan = find_duplicate_grocery_items(&existing, incoming);
        assert_eq!(scan.to_merge.len(), 1);
        let json = serde_json::to_string(&scan).unwrap();
        let back: DuplicateScan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scan);
    }
}
