//! Canonical unit representation
//!
//! A closed enumeration with an exhaustive class mapping, so adding a unit
//! without deciding its rounding policy is a compile error rather than a
//! silent fall-through to "unknown" behavior.

use std::fmt;

use crate::class::UnitClass;

/// A canonical recipe unit. The `code()` form is what gets stored on items
/// and emitted by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Tsp,
    Tbsp,
    Cup,
    FlOz,
    Ml,
    L,
    G,
    Kg,
    Oz,
    Lb,
    Egg,
    Clove,
    Can,
    Box,
    Bunch,
    Strip,
    Piece,
}

impl Unit {
    /// Canonical short code, the stored form
    pub fn code(&self) -> &'static str {
        match self {
            Unit::Tsp => "tsp",
            Unit::Tbsp => "tbsp",
            Unit::Cup => "cup",
            Unit::FlOz => "fl oz",
            Unit::Ml => "ml",
            Unit::L => "l",
            Unit::G => "g",
            Unit::Kg => "kg",
            Unit::Oz => "oz",
            Unit::Lb => "lb",
            Unit::Egg => "egg",
            Unit::Clove => "clove",
            Unit::Can => "can",
            Unit::Box => "box",
            Unit::Bunch => "bunch",
            Unit::Strip => "strip",
            Unit::Piece => "piece",
        }
    }

    /// The measurement class that owns this unit's rounding policy
    pub fn class(&self) -> UnitClass {
        match self {
            Unit::Tsp | Unit::Tbsp => UnitClass::SmallVolume,
            Unit::Cup | Unit::FlOz => UnitClass::MediumVolume,
            Unit::G | Unit::Kg => UnitClass::MetricWeight,
            Unit::Oz | Unit::Lb => UnitClass::ImperialWeight,
            Unit::Ml | Unit::L => UnitClass::MetricVolume,
            Unit::Egg | Unit::Clove => UnitClass::WholeCount,
            Unit::Can | Unit::Box | Unit::Bunch | Unit::Strip | Unit::Piece => {
                UnitClass::ContainerCount
            }
        }
    }

    /// True for abbreviated units, which do not change form when plural
    pub fn is_abbreviated(&self) -> bool {
        matches!(
            self,
            Unit::Tsp
                | Unit::Tbsp
                | Unit::FlOz
                | Unit::Ml
                | Unit::L
                | Unit::G
                | Unit::Kg
                | Unit::Oz
                | Unit::Lb
        )
    }

    fn singular(&self) -> &'static str {
        self.code()
    }

    fn plural(&self) -> &'static str {
        match self {
            Unit::Cup => "cups",
            Unit::Egg => "eggs",
            Unit::Clove => "cloves",
            Unit::Can => "cans",
            Unit::Box => "boxes",
            Unit::Bunch => "bunches",
            Unit::Strip => "strips",
            Unit::Piece => "pieces",
            // abbreviations are invariant
            _ => self.code(),
        }
    }

    /// The display form of the unit for a given quantity. Fractional
    /// amounts up to one read singular ("1/2 cup").
    pub fn label(&self, quantity: f64) -> &'static str {
        if self.is_abbreviated() {
            return self.code();
        }
        if quantity > 1.0 + 1e-9 {
            self.plural()
        } else {
            self.singular()
        }
    }

    /// All canonical units, in registry order
    pub fn all() -> &'static [Unit] {
        &[
            Unit::Tsp,
            Unit::Tbsp,
            Unit::Cup,
            Unit::FlOz,
            Unit::Ml,
            Unit::L,
            Unit::G,
            Unit::Kg,
            Unit::Oz,
            Unit::Lb,
            Unit::Egg,
            Unit::Clove,
            Unit::Can,
            Unit::Box,
            Unit::Bunch,
            Unit::Strip,
            Unit::Piece,
        ]
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
