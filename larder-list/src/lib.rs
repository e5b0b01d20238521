//! Larder List - Grocery Grouping Engine
//!
//! List-level operations built on the matcher:
//! - `merge_identical`: collapse entries that mean the same item
//! - `group_for_display`: category buckets with similarity clusters
//! - `find_duplicates`: split incoming candidates into merges and inserts
//!
//! All of it is derived, non-persisted views; the host writes results back
//! to its store.

mod group;
mod merge;

pub use group::{group_for_display, DisplayGroup, GroupedResult, SEASONINGS_BUCKET};
pub use merge::{find_duplicates, merge_identical, DuplicateScan, MergeTarget};
