//! Portion scaling - rewrite an ingredient line for a new serving count
//!
//! parse, multiply, round, cascade-downgrade, floor, format, reassemble.
//! Anything that cannot be scaled comes back unchanged.

use tracing::debug;

use larder_parse::parse_line_detailed;
use larder_units::{convert_down, enforce_minimum, format_quantity, round_for_unit, UNITS};

/// Scale one ingredient line from one serving count to another.
///
/// Returns the input unchanged when either portion count is non-positive
/// or non-finite, when the counts are equal, or when the line carries no
/// explicit quantity to scale.
pub fn scale_line(line: &str, from_portions: f64, to_portions: f64) -> String {
    if !from_portions.is_finite()
        || !to_portions.is_finite()
        || from_portions <= 0.0
        || to_portions <= 0.0
    {
        return line.to_string();
    }
    if from_portions == to_portions {
        return line.to_string();
    }

    let parsed = parse_line_detailed(line);
    if !parsed.explicit_quantity {
        return line.to_string();
    }
    let ingredient = parsed.ingredient;

    let unit = if ingredient.unit.is_empty() {
        None
    } else {
        match UNITS.resolve(&ingredient.unit) {
            Ok(u) => Some(u),
            Err(err) => {
                debug!(%err, "stored unit did not resolve; using unknown-class policy");
                None
            }
        }
    };

    let factor = to_portions / from_portions;
    let scaled = ingredient.quantity * factor;
    let rounded = round_for_unit(scaled, unit);
    let (converted, unit) = convert_down(rounded, unit);
    let final_value = if to_portions < from_portions {
        enforce_minimum(converted, unit)
    } else {
        converted
    };

    let quantity_text = format_quantity(final_value, unit);
    let unit_text = unit.map(|u| u.label(final_value)).unwrap_or("");

    let mut out = String::new();
    for part in [quantity_text.as_str(), unit_text, ingredient.name.as_str()] {
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    if !ingredient.notes.is_empty() && !out.is_empty() {
        out.push_str(", ");
        out.push_str(&ingredient.notes);
    }

    if out.is_empty() {
        return line.to_string();
    }
    out
}
