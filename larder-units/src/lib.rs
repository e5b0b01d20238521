//! Larder Units - Kitchen Measurement Policy
//!
//! Everything quantity-related that must behave identically on every host:
//! - Closed `Unit` taxonomy with canonical codes and a `UnitClass` per unit
//! - Alias registry for mapping free-text unit tokens to canonical units
//! - Per-class rounding rules (preference-set snapping, step rounding)
//! - Downgrade cascade for impractically small volumes (cup -> tbsp -> tsp)
//! - Scale-down minimum floors so positive quantities never round to zero
//! - Quantity formatting (vulgar fractions, trimmed decimals) and unit
//!   pluralization
//!
//! All policy is compiled-in static data; nothing here does I/O.

mod class;
mod convert;
mod format;
mod round;
mod unit;
mod units;

pub use class::UnitClass;
pub use convert::{convert_down, enforce_minimum, CUP_TO_TBSP, TBSP_TO_TSP};
pub use format::format_quantity;
pub use round::round_for_unit;
pub use unit::Unit;
pub use units::{UnitRegistry, UNITS};
