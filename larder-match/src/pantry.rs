//! Pantry lookup - is this grocery item already owned?

use serde::{Deserialize, Serialize};

use larder_core::PantryItem;

use crate::normalize::normalize;

/// Names shorter than this never fuzzy-match; short tokens produce too many
/// coincidental substrings.
const FUZZY_MIN_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PantryMatchKind {
    Exact,
    Fuzzy,
}

/// Outcome of a pantry lookup; both fields absent when nothing matched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryMatch {
    pub item: Option<PantryItem>,
    pub match_type: Option<PantryMatchKind>,
}

impl PantryMatch {
    fn none() -> Self {
        PantryMatch {
            item: None,
            match_type: None,
        }
    }
}

/// Match a grocery item name against the pantry: exact normalized equality
/// first, then substring containment in either direction gated on both
/// names being at least four characters.
pub fn find_pantry_match(name: &str, pantry: &[PantryItem]) -> PantryMatch {
    let target = normalize(name);
    if target.is_empty() {
        return PantryMatch::none();
    }

    for item in pantry {
        if normalize(&item.name) == target {
            return PantryMatch {
                item: Some(item.clone()),
                match_type: Some(PantryMatchKind::Exact),
            };
        }
    }

    if target.len() >= FUZZY_MIN_LEN {
        for item in pantry {
            let owned = normalize(&item.name);
            if owned.len() >= FUZZY_MIN_LEN && (owned.contains(&target) || target.contains(&owned))
            {
                return PantryMatch {
                    item: Some(item.clone()),
                    match_type: Some(PantryMatchKind::Fuzzy),
                };
            }
        }
    }

    PantryMatch::none()
}
