//! Nutrition scaling companion
//!
//! Per-recipe nutrition totals scale linearly with portions; absent values
//! stay absent.

use serde::{Deserialize, Serialize};

/// Nutrition totals for a recipe, every field optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFacts {
    pub kcal: Option<f64>,
    pub protein_g: Option<f64>,
    pub carbohydrate_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub sugars_g: Option<f64>,
    pub fat_saturated_g: Option<f64>,
    pub salt_g: Option<f64>,
}

/// Scale nutrition totals to a different portion count.
///
/// Non-positive or non-finite portion counts return the input unchanged.
pub fn scale_nutrition(facts: &NutritionFacts, from_portions: f64, to_portions: f64) -> NutritionFacts {
    if !from_portions.is_finite()
        || !to_portions.is_finite()
        || from_portions <= 0.0
        || to_portions <= 0.0
    {
        return facts.clone();
    }
    let scale = to_portions / from_portions;
    NutritionFacts {
        kcal: facts.kcal.map(|v| v * scale),
        protein_g: facts.protein_g.map(|v| v * scale),
        carbohydrate_g: facts.carbohydrate_g.map(|v| v * scale),
        fat_g: facts.fat_g.map(|v| v * scale),
        sugars_g: facts.sugars_g.map(|v| v * scale),
        fat_saturated_g: facts.fat_saturated_g.map(|v| v * scale),
        salt_g: facts.salt_g.map(|v| v * scale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doubling() {
        let facts = NutritionFacts {
            kcal: Some(400.0),
            protein_g: Some(30.0),
            carbohydrate_g: None,
            ..Default::default()
        };
        let scaled = scale_nutrition(&facts, 2.0, 4.0);
        assert_eq!(scaled.kcal, Some(800.0));
        assert_eq!(scaled.protein_g, Some(60.0));
        assert_eq!(scaled.carbohydrate_g, None);
    }

    #[test]
    fn test_invalid_portions_unchanged() {
        let facts = NutritionFacts {
            kcal: Some(400.0),
            ..Default::default()
        };
        assert_eq!(scale_nutrition(&facts, 0.0, 4.0), facts);
        assert_eq!(scale_nutrition(&facts, f64::NAN, 4.0), facts);
    }

    #[test]
    fn test_identity() {
        let facts = NutritionFacts {
            kcal: Some(123.0),
            salt_g: Some(1.5),
            ..Default::default()
        };
        assert_eq!(scale_nutrition(&facts, 3.0, 3.0), facts);
    }
}
