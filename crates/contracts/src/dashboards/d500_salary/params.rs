//! Tunable salary parameters per category.
//!
//! The backend falls back to its own defaults for every parameter that is not
//! sent, so the placeholders below only hint at those defaults.

use super::category::Category;
use serde::Serialize;

/// One numeric input shown for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamField {
    /// Key sent in `customParams`
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
}

const fn field(id: &'static str, label: &'static str, placeholder: &'static str) -> ParamField {
    ParamField {
        id,
        label,
        placeholder,
    }
}

const MOTORCYCLE: &[ParamField] = &[
    field("motorcycle_basic_salary_rate", "Basic Salary Rate", "e.g., 53.33333"),
    field("motorcycle_bonus_rate", "Bonus Rate", "e.g., 6"),
    field("motorcycle_penalty_rate", "Penalty Rate", "e.g., 10"),
    field("motorcycle_gas_rate", "Gas Rate", "e.g., 0.65"),
    field("motorcycle_gas_cap", "Gas Cap", "e.g., 261"),
];

const FOOD_TRIAL: &[ParamField] = &[
    field("food_trial_basic_salary_rate", "Basic Salary Rate", "e.g., 66.66667"),
    field("food_trial_bonus_rate", "Bonus Rate", "e.g., 7"),
    field("food_trial_penalty_rate", "Penalty Rate", "e.g., 10"),
    field("food_trial_gas_rate", "Gas Rate", "e.g., 2.11"),
    field("food_trial_gas_cap", "Gas Cap", "e.g., 826"),
];

const FOOD_INHOUSE_NEW: &[ParamField] = &[
    field("food_inhouse_new_basic_salary_rate", "Basic Salary Rate", "e.g., 66.66667"),
    field("food_inhouse_new_bonus_rate", "Bonus Rate", "e.g., 7"),
    field("food_inhouse_new_penalty_rate", "Penalty Rate", "e.g., 10"),
    field("food_inhouse_new_gas_rate", "Gas Rate", "e.g., 1.739"),
    field("food_inhouse_new_gas_cap", "Gas Cap", "e.g., 826"),
];

const FOOD_INHOUSE_OLD: &[ParamField] = &[
    field("food_inhouse_old_basic_salary_rate", "Basic Salary Rate", "e.g., 66.66667"),
    field("food_inhouse_old_penalty_rate", "Penalty Rate", "e.g., 10"),
    field("food_inhouse_old_gas_rate", "Gas Rate", "e.g., 2.065"),
    field("food_inhouse_old_gas_cap", "Gas Cap", "e.g., 826"),
];

const ECOMMERCE_WH: &[ParamField] = &[
    field("ecommerce_wh_basic_salary_rate", "Basic Salary Rate", "e.g., 66.66667"),
    field("ecommerce_wh_bonus_rate", "Bonus Rate", "e.g., 8"),
    field("ecommerce_wh_penalty_rate", "Penalty Rate", "e.g., 10"),
    field("ecommerce_wh_gas_rate", "Gas Rate", "e.g., 15.03"),
    field("ecommerce_wh_gas_cap", "Gas Cap", "e.g., 452"),
];

const ECOMMERCE: &[ParamField] = &[
    field("ecommerce_basic_salary_rate", "Basic Salary Rate", "e.g., 66.66667"),
    field("ecommerce_revenue_coefficient", "Revenue Coefficient", "e.g., 0.3017"),
    field("ecommerce_gas_cap", "Gas Cap", "e.g., 452"),
];

const AJEER: &[ParamField] = &[
    field("ajeer_basic_salary_rate", "Basic Salary Rate", "e.g., 53.33333"),
    field("ajeer_penalty_rate", "Penalty Rate", "e.g., 10"),
    field("ajeer_gas_rate", "Gas Rate", "e.g., 2.065"),
    field("ajeer_gas_cap", "Gas Cap", "e.g., 826"),
];

/// Declarative parameter table, one entry per category
pub const CATEGORY_PARAMS: &[(Category, &[ParamField])] = &[
    (Category::Motorcycle, MOTORCYCLE),
    (Category::FoodTrial, FOOD_TRIAL),
    (Category::FoodInHouseNew, FOOD_INHOUSE_NEW),
    (Category::FoodInHouseOld, FOOD_INHOUSE_OLD),
    (Category::EcommerceWh, ECOMMERCE_WH),
    (Category::Ecommerce, ECOMMERCE),
    (Category::Ajeer, AJEER),
];

impl Category {
    /// Parameter inputs for this category, in display order
    pub fn params(&self) -> &'static [ParamField] {
        CATEGORY_PARAMS
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, fields)| *fields)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_category_has_fields() {
        for category in Category::all() {
            assert!(!category.params().is_empty(), "{} has no params", category);
        }
        assert_eq!(CATEGORY_PARAMS.len(), Category::all().len());
    }

    #[test]
    fn ids_are_unique_across_table() {
        let mut seen = HashSet::new();
        for (_, fields) in CATEGORY_PARAMS {
            for f in fields.iter() {
                assert!(seen.insert(f.id), "duplicate param id {}", f.id);
            }
        }
    }

    #[test]
    fn ecommerce_uses_revenue_coefficient() {
        let ids: Vec<&str> = Category::Ecommerce.params().iter().map(|f| f.id).collect();
        assert_eq!(
            ids,
            vec![
                "ecommerce_basic_salary_rate",
                "ecommerce_revenue_coefficient",
                "ecommerce_gas_cap"
            ]
        );
    }
}
