//! Structured representation of one parsed recipe ingredient line

use serde::{Deserialize, Serialize};
use std::fmt;

/// One free-text recipe line, parsed into structured parts.
///
/// Invariant: `name` is never empty. When a line cannot be parsed at all,
/// the whole raw line becomes the name with `quantity = 1` and an empty
/// unit, so callers always have something displayable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIngredient {
    /// Amount, always finite and `>= 0`; defaults to 1 when unparseable
    pub quantity: f64,
    /// Canonical unit code (e.g. "tbsp", "g") or empty string when unitless
    pub unit: String,
    /// Display name of the ingredient, never empty
    pub name: String,
    /// Preparation notes ("diced", "at room temperature") or empty
    pub notes: String,
}

impl ParsedIngredient {
    /// The conservative fallback: the raw line as the name, quantity 1.
    /// Empty input falls back to "Unknown".
    pub fn fallback(raw: &str) -> Self {
        let trimmed = raw.trim();
        ParsedIngredient {
            quantity: 1.0,
            unit: String::new(),
            name: if trimmed.is_empty() {
                "Unknown".to_string()
            } else {
                trimmed.to_string()
            },
            notes: String::new(),
        }
    }

    /// True when no unit was recognized on the line
    pub fn is_unitless(&self) -> bool {
        self.unit.is_empty()
    }
}

impl fmt::Display for ParsedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Plain reassembly; the scaler formats quantities through the
        // measurement policy instead of this.
        if (self.quantity - self.quantity.round()).abs() < f64::EPSILON {
            write!(f, "{}", self.quantity.round() as i64)?;
        } else {
            write!(f, "{}", self.quantity)?;
        }
        if !self.unit.is_empty() {
            write!(f, " {}", self.unit)?;
        }
        write!(f, " {}", self.name)?;
        if !self.notes.is_empty() {
            write!(f, ", {}", self.notes)?;
        }
        Ok(())
    }
}
