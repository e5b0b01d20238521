//! Merging identical entries and scanning incoming candidates

use serde::{Deserialize, Serialize};
use tracing::debug;

use larder_core::{CandidateItem, GroceryItem};
use larder_match::identical;

/// Result of scanning incoming candidates against an existing list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateScan {
    pub to_merge: Vec<MergeTarget>,
    pub to_add: Vec<CandidateItem>,
}

/// An incoming candidate matched to an existing entry it should merge into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeTarget {
    pub existing_id: String,
    pub candidate: CandidateItem,
}

/// Collapse identical entries: quantities sum, notes union (comma-joined,
/// de-duplicated), completed flags OR together. The first record of each
/// group survives and first-seen order is preserved.
pub fn merge_identical(items: Vec<GroceryItem>) -> Vec<GroceryItem> {
    let total = items.len();
    let mut merged: Vec<GroceryItem> = Vec::with_capacity(total);

    for item in items {
        let existing = merged
            .iter()
            .position(|kept| identical(&kept.key(), &item.key()));
        match existing {
            Some(i) => {
                let kept = &mut merged[i];
                kept.quantity += item.quantity;
                kept.completed = kept.completed || item.completed;
                kept.notes = union_notes(&kept.notes, &item.notes);
                kept.updated_at = kept.updated_at.max(item.updated_at);
            }
            None => merged.push(item),
        }
    }

    if merged.len() < total {
        debug!(before = total, after = merged.len(), "merged identical items");
    }
    merged
}

/// For each incoming candidate, the first identical existing entry wins as
/// a merge target; everything unmatched queues for insertion.
pub fn find_duplicates(existing: &[GroceryItem], incoming: Vec<CandidateItem>) -> DuplicateScan {
    let mut to_merge = Vec::new();
    let mut to_add = Vec::new();

    for candidate in incoming {
        match existing
            .iter()
            .find(|item| identical(&item.key(), &candidate.key()))
        {
            Some(item) => to_merge.push(MergeTarget {
                existing_id: item.id.clone(),
                candidate,
            }),
            None => to_add.push(candidate),
        }
    }

    DuplicateScan { to_merge, to_add }
}

fn union_notes(a: &str, b: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    for source in [a, b] {
        for part in source.split(',') {
            let part = part.trim();
            if !part.is_empty() && !parts.iter().any(|p| p == part) {
                parts.push(part.to_string());
            }
        }
    }
    parts.join(", ")
}
