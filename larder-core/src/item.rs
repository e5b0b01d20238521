//! Grocery list and pantry entry types
//!
//! These mirror the documents the host app keeps in its store; this crate
//! never touches the store itself. Fields use camelCase on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed grocery category taxonomy.
///
/// The display layer also uses a reserved "seasonings" bucket that is
/// keyword-detected from item names, independent of this stored category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Produce,
    Dairy,
    Meat,
    Seafood,
    Bakery,
    Frozen,
    Pantry,
    Beverages,
    Snacks,
    Household,
    Other,
}

impl Category {
    /// Display bucket label for grouping
    pub fn label(&self) -> &'static str {
        match self {
            Category::Produce => "produce",
            Category::Dairy => "dairy",
            Category::Meat => "meat",
            Category::Seafood => "seafood",
            Category::Bakery => "bakery",
            Category::Frozen => "frozen",
            Category::Pantry => "pantry",
            Category::Beverages => "beverages",
            Category::Snacks => "snacks",
            Category::Household => "household",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One entry on a grocery list.
///
/// Created by the parser/API layer when added to a list; quantity, notes and
/// completed are mutated by merges or user edits; the host owns persistence
/// and deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub completed: bool,
    pub owner_id: String,
    pub list_id: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl GroceryItem {
    /// The view the matcher compares on
    pub fn key(&self) -> ItemKey<'_> {
        ItemKey {
            name: &self.name,
            unit: &self.unit,
            category: self.category,
        }
    }
}

/// A grocery entry that has not been inserted yet (no identity or ownership)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateItem {
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default)]
    pub notes: String,
}

impl CandidateItem {
    pub fn key(&self) -> ItemKey<'_> {
        ItemKey {
            name: &self.name,
            unit: &self.unit,
            category: self.category,
        }
    }
}

/// A pantry inventory entry, read-only to this engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub owner_id: String,
}

/// Borrowed (name, unit, category) triple used for identity and similarity
/// checks. Both `GroceryItem` and `CandidateItem` project into this.
#[derive(Debug, Clone, Copy)]
pub struct ItemKey<'a> {
    pub name: &'a str,
    pub unit: &'a str,
    pub category: Option<Category>,
}
