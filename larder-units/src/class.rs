//! Unit classes - the internal taxonomy that selects rounding and
//! conversion policy. Every canonical unit maps to exactly one class.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::units::UNITS;

/// Measurement class sharing one rounding/conversion policy.
///
/// `Unknown` never applies to a canonical `Unit`; it is the class of
/// unrecognized or empty unit strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitClass {
    /// tsp, tbsp
    SmallVolume,
    /// cup, fl oz
    MediumVolume,
    /// g, kg
    MetricWeight,
    /// oz, lb
    ImperialWeight,
    /// ml, l
    MetricVolume,
    /// egg, clove
    WholeCount,
    /// can, box, bunch, strip, piece
    ContainerCount,
    /// anything unrecognized, including the empty unit
    Unknown,
}

impl UnitClass {
    /// Class for a raw unit string as stored on an item ("g", "", "handful").
    /// Unrecognized and empty strings are `Unknown`.
    pub fn for_code(code: &str) -> UnitClass {
        match UNITS.get(code) {
            Some(unit) => unit.class(),
            None => UnitClass::Unknown,
        }
    }
}

impl fmt::Display for UnitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnitClass::SmallVolume => "small-volume",
            UnitClass::MediumVolume => "medium-volume",
            UnitClass::MetricWeight => "metric-weight",
            UnitClass::ImperialWeight => "imperial-weight",
            UnitClass::MetricVolume => "metric-volume",
            UnitClass::WholeCount => "whole-count",
            UnitClass::ContainerCount => "container-count",
            UnitClass::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}
