//! Unit alias registry - canonical codes plus the spellings seen in recipes

use std::collections::HashMap;
use std::sync::LazyLock;

use larder_core::MeasureError;

use crate::class::UnitClass;
use crate::unit::Unit;

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of canonical units and their accepted aliases.
///
/// Lookups are case-insensitive and trimmed. Single-letter shorthands like
/// "t" and "c" are deliberately not here; the parser owns their priority
/// order. "g" and "l" are present because they are canonical codes.
pub struct UnitRegistry {
    units: HashMap<String, Unit>,
    aliases: HashMap<String, String>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Get a unit by canonical code or alias
    pub fn get(&self, token: &str) -> Option<Unit> {
        let key = token.trim().to_lowercase();
        if let Some(unit) = self.units.get(&key) {
            return Some(*unit);
        }
        if let Some(code) = self.aliases.get(&key) {
            return self.units.get(code).copied();
        }
        None
    }

    /// Like `get`, but reports the failed token
    pub fn resolve(&self, token: &str) -> Result<Unit, MeasureError> {
        self.get(token)
            .ok_or_else(|| MeasureError::UnknownUnit(token.trim().to_string()))
    }

    /// All units in a class
    pub fn by_class(&self, class: UnitClass) -> Vec<Unit> {
        Unit::all()
            .iter()
            .copied()
            .filter(|u| u.class() == class)
            .collect()
    }

    /// All canonical codes
    pub fn codes(&self) -> Vec<&'static str> {
        Unit::all().iter().map(|u| u.code()).collect()
    }

    fn register(&mut self, unit: Unit) {
        self.units.insert(unit.code().to_string(), unit);
    }

    fn alias(&mut self, alias: &str, unit: Unit) {
        self.aliases
            .insert(alias.to_string(), unit.code().to_string());
    }

    fn register_all_units(&mut self) {
        for unit in Unit::all() {
            self.register(*unit);
        }
        self.register_volume_aliases();
        self.register_weight_aliases();
        self.register_count_aliases();
    }

    fn register_volume_aliases(&mut self) {
        self.alias("teaspoon", Unit::Tsp);
        self.alias("teaspoons", Unit::Tsp);
        self.alias("tsps", Unit::Tsp);

        self.alias("tablespoon", Unit::Tbsp);
        self.alias("tablespoons", Unit::Tbsp);
        self.alias("tbsps", Unit::Tbsp);
        self.alias("tbs", Unit::Tbsp);

        self.alias("cups", Unit::Cup);

        self.alias("fluid ounce", Unit::FlOz);
        self.alias("fluid ounces", Unit::FlOz);
        self.alias("floz", Unit::FlOz);
        self.alias("fl. oz.", Unit::FlOz);

        self.alias("milliliter", Unit::Ml);
        self.alias("milliliters", Unit::Ml);
        self.alias("millilitre", Unit::Ml);
        self.alias("millilitres", Unit::Ml);
        self.alias("mls", Unit::Ml);

        self.alias("liter", Unit::L);
        self.alias("liters", Unit::L);
        self.alias("litre", Unit::L);
        self.alias("litres", Unit::L);
    }

    fn register_weight_aliases(&mut self) {
        self.alias("gram", Unit::G);
        self.alias("grams", Unit::G);
        self.alias("gr", Unit::G);

        self.alias("kilogram", Unit::Kg);
        self.alias("kilograms", Unit::Kg);
        self.alias("kilo", Unit::Kg);
        self.alias("kilos", Unit::Kg);
        self.alias("kgs", Unit::Kg);

        self.alias("ounce", Unit::Oz);
        self.alias("ounces", Unit::Oz);

        self.alias("pound", Unit::Lb);
        self.alias("pounds", Unit::Lb);
        self.alias("lbs", Unit::Lb);
    }

    fn register_count_aliases(&mut self) {
        self.alias("eggs", Unit::Egg);
        self.alias("cloves", Unit::Clove);
        self.alias("cans", Unit::Can);
        self.alias("boxes", Unit::Box);
        self.alias("bunches", Unit::Bunch);
        self.alias("strips", Unit::Strip);
        self.alias("pieces", Unit::Piece);
        self.alias("pc", Unit::Piece);
        self.alias("pcs", Unit::Piece);
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
