//! Ingredient line parsing
//!
//! Pipeline: unit-pattern extraction, bare-number fallback, notes
//! extraction, name cleanup. Total over all input; the conservative
//! fallback is the raw line with quantity 1 and no unit.

use tracing::trace;

use larder_core::ParsedIngredient;
use larder_units::Unit;

use crate::helpers::{collapse_whitespace, parse_quantity_token};
use crate::patterns::{BARE_QTY, PAREN_NOTES, UNIT_PATTERNS};

/// A parse plus whether the quantity actually came from the text.
/// The scaler refuses to scale defaulted quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub ingredient: ParsedIngredient,
    pub explicit_quantity: bool,
}

/// Parse one free-text ingredient line. Never fails.
pub fn parse_line(line: &str) -> ParsedIngredient {
    parse_line_detailed(line).ingredient
}

/// Parse a batch of lines; empty in, empty out.
pub fn parse_lines(lines: &[String]) -> Vec<ParsedIngredient> {
    lines.iter().map(|line| parse_line(line)).collect()
}

/// Parse one line, keeping the explicit-quantity flag
pub fn parse_line_detailed(line: &str) -> ParsedLine {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ParsedLine {
            ingredient: ParsedIngredient::fallback(line),
            explicit_quantity: false,
        };
    }

    let mut quantity = 1.0;
    let mut unit: Option<Unit> = None;
    let mut explicit = false;
    let mut remainder = trimmed.to_string();

    // Ordered unit-pattern extraction; first positive quantity wins
    'patterns: for pattern in UNIT_PATTERNS.iter() {
        for caps in pattern.regex.captures_iter(trimmed) {
            let token = caps.name("qty").map(|m| m.as_str()).unwrap_or("");
            match parse_quantity_token(token) {
                Ok(q) if q > 0.0 && q.is_finite() => {
                    let span = caps.get(0).expect("whole match");
                    quantity = q;
                    unit = Some(pattern.unit);
                    explicit = true;
                    remainder =
                        format!("{}{}", &trimmed[..span.start()], &trimmed[span.end()..]);
                    trace!(unit = pattern.unit.code(), quantity = q, "unit pattern hit");
                    break 'patterns;
                }
                _ => continue,
            }
        }
    }

    // No unit: a leading bare number or fraction still counts as a quantity
    if unit.is_none() {
        if let Some(caps) = BARE_QTY.captures(trimmed) {
            let token = caps.name("qty").map(|m| m.as_str()).unwrap_or("");
            if let Ok(q) = parse_quantity_token(token) {
                if q.is_finite() && q >= 0.0 {
                    quantity = q;
                    explicit = true;
                    remainder = trimmed[caps.get(0).expect("whole match").end()..].to_string();
                }
            }
        }
    }

    let mut name = collapse_whitespace(&remainder);
    if let Some(prefix) = name.get(..3) {
        if prefix.eq_ignore_ascii_case("of ") {
            name = name[3..].trim_start().to_string();
        }
    }

    let (kept, notes) = extract_notes(&name);
    let mut name = collapse_whitespace(&kept);
    if name.ends_with(',') {
        name.pop();
        name = name.trim_end().to_string();
    }

    if name.is_empty() {
        // nothing displayable survived; keep the raw line intact
        return ParsedLine {
            ingredient: ParsedIngredient::fallback(trimmed),
            explicit_quantity: false,
        };
    }

    ParsedLine {
        ingredient: ParsedIngredient {
            quantity,
            unit: unit.map(|u| u.code().to_string()).unwrap_or_default(),
            name,
            notes,
        },
        explicit_quantity: explicit,
    }
}

/// Split notes off a name: a trailing parenthetical wins, otherwise text
/// after the first comma. Notes are trimmed and comma-normalized.
fn extract_notes(name: &str) -> (String, String) {
    if let Some(caps) = PAREN_NOTES.captures(name) {
        let inner = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let head = &name[..caps.get(0).expect("whole match").start()];
        return (head.to_string(), normalize_notes(inner));
    }
    if let Some((head, tail)) = name.split_once(',') {
        return (head.to_string(), normalize_notes(tail));
    }
    (name.to_string(), String::new())
}

fn normalize_notes(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
