use serde::{Deserialize, Serialize};

/// Tariff category a courier is paid under.
///
/// The wire value is the human-readable name, exactly as the salary
/// endpoint expects it (`"Food In-House New"`, not `FoodInHouseNew`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Motorcycle")]
    Motorcycle,
    #[serde(rename = "Food Trial")]
    FoodTrial,
    #[serde(rename = "Food In-House New")]
    FoodInHouseNew,
    #[serde(rename = "Food In-House Old")]
    FoodInHouseOld,
    #[serde(rename = "Ecommerce WH")]
    EcommerceWh,
    #[serde(rename = "Ecommerce")]
    Ecommerce,
    #[serde(rename = "Ajeer")]
    Ajeer,
}

impl Category {
    /// Wire name, also used as the key of `customParams`
    pub fn code(&self) -> &'static str {
        match self {
            Category::Motorcycle => "Motorcycle",
            Category::FoodTrial => "Food Trial",
            Category::FoodInHouseNew => "Food In-House New",
            Category::FoodInHouseOld => "Food In-House Old",
            Category::EcommerceWh => "Ecommerce WH",
            Category::Ecommerce => "Ecommerce",
            Category::Ajeer => "Ajeer",
        }
    }

    /// Icon name for the category picker
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Motorcycle => "bike",
            Category::FoodTrial | Category::FoodInHouseNew | Category::FoodInHouseOld => "food",
            Category::EcommerceWh | Category::Ecommerce => "box",
            Category::Ajeer => "users",
        }
    }

    pub fn all() -> Vec<Category> {
        vec![
            Category::Motorcycle,
            Category::FoodTrial,
            Category::FoodInHouseNew,
            Category::FoodInHouseOld,
            Category::EcommerceWh,
            Category::Ecommerce,
            Category::Ajeer,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Category::all().into_iter().find(|c| c.code() == code)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&Category::FoodInHouseOld).unwrap();
        assert_eq!(json, "\"Food In-House Old\"");

        let parsed: Category = serde_json::from_str("\"Ecommerce WH\"").unwrap();
        assert_eq!(parsed, Category::EcommerceWh);
    }

    #[test]
    fn from_code_matches_every_category() {
        let all = Category::all();
        assert_eq!(all.len(), 7);
        for category in all {
            assert_eq!(Category::from_code(category.code()), Some(category));
        }
        assert_eq!(Category::from_code("All"), None);
    }
}
