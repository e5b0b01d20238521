//! Internal errors for unit and quantity token handling
//!
//! These never cross the public surface: every public operation degrades to
//! a conservative default instead. They exist so the parser and the unit
//! registry can talk about failure precisely.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    #[error("Unrecognized unit token: {0}")]
    UnknownUnit(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}
