//! Downgrade cascade and scale-down floors
//!
//! A rounded volume below the practicality threshold for its unit converts
//! to the next smaller unit and is re-rounded there, repeating until
//! stable. Floors stop a positive quantity from ever reaching zero when a
//! recipe is scaled down.

use crate::round::round_for_unit;
use crate::unit::Unit;

pub const CUP_TO_TBSP: f64 = 16.0;
pub const TBSP_TO_TSP: f64 = 3.0;

/// Cascade an impractically small volume down to a smaller unit.
///
/// cup below 1/4 becomes tablespoons; tbsp below 1 becomes teaspoons. The
/// value is re-rounded in each new unit. Applied after rounding and before
/// minimum enforcement.
pub fn convert_down(value: f64, unit: Option<Unit>) -> (f64, Option<Unit>) {
    let Some(mut current) = unit else {
        return (value, None);
    };
    let mut v = value;
    loop {
        match current {
            Unit::Cup if v < 0.25 => {
                v = round_for_unit(v * CUP_TO_TBSP, Some(Unit::Tbsp));
                current = Unit::Tbsp;
            }
            Unit::Tbsp if v < 1.0 => {
                v = round_for_unit(v * TBSP_TO_TSP, Some(Unit::Tsp));
                current = Unit::Tsp;
            }
            _ => break,
        }
    }
    (v, Some(current))
}

/// Clamp a rounded, converted result to its unit's floor.
///
/// Only called when scaling down and the original quantity was positive.
/// The teaspoon check is stricter than the zero check: anything under a
/// quarter teaspoon is not worth writing down.
pub fn enforce_minimum(value: f64, unit: Option<Unit>) -> f64 {
    let Some(unit) = unit else {
        return if value <= 0.0 { 0.125 } else { value };
    };
    let needs_floor = value <= 0.0 || (unit == Unit::Tsp && value < 0.25);
    if needs_floor {
        floor_for(unit)
    } else {
        value
    }
}

fn floor_for(unit: Unit) -> f64 {
    match unit {
        Unit::Egg | Unit::Clove => 1.0,
        Unit::Can | Unit::Box | Unit::Bunch | Unit::Strip | Unit::Piece => 0.25,
        Unit::Tsp => 0.25,
        Unit::Tbsp | Unit::Oz | Unit::Lb | Unit::Cup | Unit::FlOz => 0.125,
        Unit::G | Unit::Ml => 1.0,
        Unit::Kg | Unit::L => 0.01,
    }
}
