//! Recipe catalogue models

use serde::{Deserialize, Serialize};

use super::order::IngredientLine;

/// An ingredient as listed on a recipe
///
/// `required` marks ingredients the student cannot leave out when
/// building an order from the recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeIngredient {
    pub name: String,
    pub amount: String,
    pub unit: String,
    pub required: bool,
}

/// A recipe teachers publish for students to order against
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub difficulty: String,
    pub prep_time: String,
    pub cook_time: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub is_active: bool,
}

impl Recipe {
    /// Build order lines from this recipe for a student's selection
    ///
    /// Required ingredients are always included; optional ones only when
    /// named in `selected`. Selection is matched case-insensitively, the
    /// same normalization used for demand bucketing.
    pub fn order_lines(&self, selected: &[&str]) -> Vec<IngredientLine> {
        self.ingredients
            .iter()
            .filter(|ing| {
                ing.required
                    || selected
                        .iter()
                        .any(|name| name.eq_ignore_ascii_case(&ing.name))
            })
            .map(|ing| IngredientLine {
                name: ing.name.clone(),
                amount: ing.amount.clone(),
                unit: ing.unit.clone(),
            })
            .collect()
    }
}
