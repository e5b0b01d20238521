//! The ordered unit-pattern list
//!
//! Priority order is a behavioral contract: most specific and longest unit
//! names first, single-letter shorthands last. The first pattern whose
//! quantity parses positive wins, so a bare "t"/"T" reads as a tablespoon
//! purely because the tablespoon entry for it precedes anything else that
//! could claim the letter.

use regex::Regex;
use std::sync::LazyLock;

use larder_units::Unit;

/// One quantity token: mixed number, Unicode fraction (optionally with a
/// whole part), simple fraction, decimal, or integer
const QTY: &str = r"\d+\s+\d+\s*/\s*\d+|\d+\s*[¼½¾⅓⅔⅛⅜⅝⅞]|\d+\s*/\s*\d+|\d*\.\d+|\d+|[¼½¾⅓⅔⅛⅜⅝⅞]";

pub(crate) struct UnitPattern {
    pub regex: Regex,
    pub unit: Unit,
}

/// Compiled `(quantity, unit-token)` patterns in priority order
pub(crate) static UNIT_PATTERNS: LazyLock<Vec<UnitPattern>> = LazyLock::new(|| {
    let table: &[(Unit, &str)] = &[
        (Unit::Tbsp, "tablespoons|tablespoon|tbsps|tbsp|tbs"),
        (Unit::Tsp, "teaspoons|teaspoon|tsps|tsp"),
        (Unit::FlOz, r"fluid\s+ounces|fluid\s+ounce|fl\.?\s*oz"),
        (Unit::Cup, "cups|cup"),
        (Unit::Oz, "ounces|ounce|oz"),
        (Unit::Lb, "pounds|pound|lbs|lb"),
        (Unit::Kg, "kilograms|kilogram|kilos|kilo|kgs|kg"),
        (Unit::G, "grams|gram|gr|g"),
        (
            Unit::Ml,
            "millilitres|milliliters|millilitre|milliliter|mls|ml",
        ),
        (Unit::L, "litres|liters|litre|liter|l"),
        (Unit::Egg, "eggs|egg"),
        (Unit::Clove, "cloves|clove"),
        (Unit::Can, "cans|can"),
        (Unit::Box, "boxes|box"),
        (Unit::Bunch, "bunches|bunch"),
        (Unit::Strip, "strips|strip"),
        (Unit::Piece, "pieces|piece|pcs|pc"),
        // single-letter shorthands, lowest priority
        (Unit::Tbsp, "t"),
        (Unit::Cup, "c"),
    ];
    table
        .iter()
        .map(|(unit, alt)| UnitPattern {
            unit: *unit,
            regex: compile(alt),
        })
        .collect()
});

/// Leading bare quantity with no unit ("3 apples")
pub(crate) static BARE_QTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^\s*(?P<qty>{QTY})\s+")).unwrap());

/// Trailing parenthetical notes ("(at room temperature)")
pub(crate) static PAREN_NOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]*)\)\s*$").unwrap());

fn compile(alt: &str) -> Regex {
    // No lookaround in the regex crate: boundaries are consumed (and later
    // re-trimmed) or matched as \b. Case-insensitive, whole-word.
    Regex::new(&format!(
        r"(?i)(?:^|\s|\b)(?P<qty>{QTY})\s*(?:{alt})\.?(?:\b|\s|$)"
    ))
    .unwrap()
}
