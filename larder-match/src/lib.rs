//! Larder Match - Name Matching Heuristics
//!
//! Decides when two grocery entries mean the same thing:
//! - `normalize` / `base_name`: canonical name forms
//! - `identical` / `similar` / `classify`: merge vs. group decisions
//! - `is_seasoning`: keyword detection for the reserved display bucket
//! - `find_pantry_match`: exact-then-fuzzy pantry lookup
//!
//! Identical entries are safe to merge by summing quantities; similar ones
//! only ever group together for display.

mod normalize;
mod pantry;
mod seasoning;
mod similar;

pub use normalize::{base_name, normalize};
pub use pantry::{find_pantry_match, PantryMatch, PantryMatchKind};
pub use seasoning::is_seasoning;
pub use similar::{classify, identical, similar, MatchKind, SimilarityResult};
