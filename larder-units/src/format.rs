//! Quantity formatting - vulgar fractions and trimmed decimals

use crate::class::UnitClass;
use crate::unit::Unit;

/// Decimal -> vulgar fraction table, matched within `FRACTION_TOLERANCE`
const FRACTIONS: [(f64, &str); 9] = [
    (0.125, "1/8"),
    (0.25, "1/4"),
    (1.0 / 3.0, "1/3"),
    (0.375, "3/8"),
    (0.5, "1/2"),
    (0.625, "5/8"),
    (2.0 / 3.0, "2/3"),
    (0.75, "3/4"),
    (0.875, "7/8"),
];

const FRACTION_TOLERANCE: f64 = 0.01;

/// Format a rounded quantity for display.
///
/// Below the class's fraction threshold the fractional part renders as a
/// vulgar fraction ("1/2", "1 1/3"); metric and whole-count quantities are
/// always decimal/integer. Otherwise: bare integer when within 0.01 of
/// integral, else two decimals with trailing zeros stripped.
pub fn format_quantity(value: f64, unit: Option<Unit>) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if value < fraction_threshold(unit) {
        if let Some(s) = fraction_form(value) {
            return s;
        }
    }
    decimal_form(value)
}

fn fraction_threshold(unit: Option<Unit>) -> f64 {
    let class = match unit {
        Some(u) => u.class(),
        None => UnitClass::Unknown,
    };
    match class {
        UnitClass::SmallVolume => 3.0,
        UnitClass::MediumVolume | UnitClass::ImperialWeight | UnitClass::ContainerCount => 2.0,
        UnitClass::Unknown => 1.0,
        // metric and whole counts never render as fractions
        UnitClass::MetricWeight | UnitClass::MetricVolume | UnitClass::WholeCount => 0.0,
    }
}

fn fraction_form(value: f64) -> Option<String> {
    let whole = value.floor();
    let frac = value - whole;
    if frac < FRACTION_TOLERANCE {
        return None;
    }
    let label = FRACTIONS
        .iter()
        .find(|(target, _)| (frac - target).abs() < FRACTION_TOLERANCE)
        .map(|(_, label)| *label)?;
    if whole >= 1.0 {
        Some(format!("{} {}", whole as i64, label))
    } else {
        Some(label.to_string())
    }
}

fn decimal_form(value: f64) -> String {
    if (value - value.round()).abs() < 0.01 {
        return format!("{}", value.round() as i64);
    }
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fractions() {
        assert_eq!(format_quantity(0.25, Some(Unit::Tsp)), "1/4");
        assert_eq!(format_quantity(0.5, Some(Unit::Cup)), "1/2");
        assert_eq!(format_quantity(1.0 / 3.0, Some(Unit::Tsp)), "1/3");
        assert_eq!(format_quantity(0.125, Some(Unit::Tbsp)), "1/8");
    }

    #[test]
    fn test_mixed_numbers() {
        assert_eq!(format_quantity(1.5, Some(Unit::Tbsp)), "1 1/2");
        assert_eq!(format_quantity(2.5, Some(Unit::Tsp)), "2 1/2");
        assert_eq!(format_quantity(1.33, Some(Unit::Can)), "1 1/3");
        assert_eq!(format_quantity(1.75, Some(Unit::Cup)), "1 3/4");
    }

    #[test]
    fn test_above_threshold_is_decimal() {
        // threshold for medium volume is 2
        assert_eq!(format_quantity(2.5, Some(Unit::Cup)), "2.5");
        // small volume threshold is 3
        assert_eq!(format_quantity(4.0, Some(Unit::Tbsp)), "4");
    }

    #[test]
    fn test_metric_never_fractional() {
        assert_eq!(format_quantity(0.25, Some(Unit::Kg)), "0.25");
        assert_eq!(format_quantity(1.25, Some(Unit::L)), "1.25");
        assert_eq!(format_quantity(1000.0, Some(Unit::G)), "1000");
        assert_eq!(format_quantity(400.0, Some(Unit::Ml)), "400");
    }

    #[test]
    fn test_integers_render_bare() {
        assert_eq!(format_quantity(2.0, Some(Unit::Cup)), "2");
        assert_eq!(format_quantity(3.004, Some(Unit::Egg)), "3");
        assert_eq!(format_quantity(1.0, None), "1");
    }

    #[test]
    fn test_trailing_zeros_stripped() {
        assert_eq!(format_quantity(2.5, None), "2.5");
        assert_eq!(format_quantity(2.25, Some(Unit::Cup)), "2.25");
    }

    #[test]
    fn test_tolerance_boundary() {
        // 0.26 is more than 0.01 from 1/4: falls through to decimals
        assert_eq!(format_quantity(0.26, None), "0.26");
        // 0.245 is within tolerance of 1/4
        assert_eq!(format_quantity(0.245, Some(Unit::Tsp)), "1/4");
    }
}
