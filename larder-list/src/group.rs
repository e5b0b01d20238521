//! Display grouping - category buckets with similarity clusters
//!
//! Derived view only; nothing here persists. Clustering is greedy
//! first-fit and therefore order-dependent, which is the contracted
//! behavior: an item joins the first existing cluster it is similar to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use larder_core::GroceryItem;
use larder_match::{is_seasoning, similar};

/// Reserved bucket, always sorted first
pub const SEASONINGS_BUCKET: &str = "seasonings";

const OTHER_BUCKET: &str = "other";

/// One display bucket: a category label and its similarity clusters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayGroup {
    pub category: String,
    pub clusters: Vec<Vec<GroceryItem>>,
}

/// The full display view, buckets in presentation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedResult {
    pub groups: Vec<DisplayGroup>,
}

/// Bucket items into seasonings / stored category / "other", then cluster
/// similar items within each bucket. Seasonings first, the rest
/// alphabetical.
pub fn group_for_display(items: &[GroceryItem]) -> GroupedResult {
    let mut buckets: BTreeMap<String, Vec<&GroceryItem>> = BTreeMap::new();

    for item in items {
        let label = if is_seasoning(&item.name) {
            SEASONINGS_BUCKET.to_string()
        } else {
            item.category
                .map(|c| c.label().to_string())
                .unwrap_or_else(|| OTHER_BUCKET.to_string())
        };
        buckets.entry(label).or_default().push(item);
    }

    let mut groups = Vec::with_capacity(buckets.len());
    if let Some(members) = buckets.remove(SEASONINGS_BUCKET) {
        groups.push(DisplayGroup {
            category: SEASONINGS_BUCKET.to_string(),
            clusters: cluster(&members),
        });
    }
    for (label, members) in buckets {
        groups.push(DisplayGroup {
            category: label,
            clusters: cluster(&members),
        });
    }

    GroupedResult { groups }
}

/// Greedy first-fit similarity clustering, preserving item order
fn cluster(members: &[&GroceryItem]) -> Vec<Vec<GroceryItem>> {
    let mut clusters: Vec<Vec<GroceryItem>> = Vec::new();

    for item in members {
        let slot = clusters
            .iter()
            .position(|c| c.iter().any(|member| similar(&member.key(), &item.key())));
        match slot {
            Some(i) => clusters[i].push((*item).clone()),
            None => clusters.push(vec![(*item).clone()]),
        }
    }

    clusters
}
