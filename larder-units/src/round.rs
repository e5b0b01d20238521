//! Per-class rounding rules
//!
//! Scaled quantities are snapped to amounts a cook can actually measure.
//! Which snapping applies depends on the unit's class; the preference sets
//! below are behavioral contracts, pinned by tests at their boundaries.

use crate::class::UnitClass;
use crate::unit::Unit;

/// Kitchen-measurable amounts for spoon units, in preference order.
/// Ties snap to the earlier entry.
const SMALL_VOLUME_STEPS: [f64; 11] = [
    0.125,
    0.25,
    1.0 / 3.0,
    0.5,
    2.0 / 3.0,
    0.75,
    1.0,
    1.5,
    2.0,
    2.5,
    3.0,
];

/// Sub-2 amounts for container-count units (cans, bunches, ...).
const CONTAINER_STEPS: [f64; 12] = [
    0.25, 0.33, 0.5, 0.67, 0.75, 1.0, 1.25, 1.33, 1.5, 1.67, 1.75, 2.0,
];

/// Round a scaled quantity according to its unit's class.
///
/// `None` means the unit string was empty or unrecognized (the unknown
/// class). Non-finite input is returned unchanged; callers guard portions.
pub fn round_for_unit(value: f64, unit: Option<Unit>) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let Some(unit) = unit else {
        return round_unknown(value);
    };
    match unit.class() {
        UnitClass::SmallVolume => {
            if value > SMALL_VOLUME_STEPS[SMALL_VOLUME_STEPS.len() - 1] {
                round_to(value, 0.25)
            } else {
                snap_to(&SMALL_VOLUME_STEPS, value)
            }
        }
        UnitClass::MediumVolume | UnitClass::ImperialWeight => round_to(value, 0.25),
        UnitClass::MetricWeight => {
            if value < 10.0 {
                round_to(value, 0.25)
            } else if value < 100.0 {
                round_to(value, 0.5)
            } else {
                value.round()
            }
        }
        UnitClass::MetricVolume => match unit {
            Unit::L => round_to(value, 0.25),
            _ => {
                if value < 100.0 {
                    round_to(value, 5.0)
                } else {
                    value.round()
                }
            }
        },
        UnitClass::WholeCount => {
            if value > 0.0 {
                value.round().max(1.0)
            } else {
                value.round()
            }
        }
        UnitClass::ContainerCount => {
            if value < 2.0 {
                snap_to(&CONTAINER_STEPS, value)
            } else {
                round_to(value, 0.25)
            }
        }
        UnitClass::Unknown => round_unknown(value),
    }
}

fn round_unknown(value: f64) -> f64 {
    if value < 1.0 {
        round_to(value, 0.25)
    } else {
        value.round()
    }
}

/// Nearest multiple of `step`
fn round_to(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

/// Nearest entry of `steps`; on a distance tie the earlier entry wins
fn snap_to(steps: &[f64], value: f64) -> f64 {
    let mut best = steps[0];
    let mut best_dist = (value - best).abs();
    for &step in &steps[1..] {
        let dist = (value - step).abs();
        if dist < best_dist {
            best = step;
            best_dist = dist;
        }
    }
    best
}
