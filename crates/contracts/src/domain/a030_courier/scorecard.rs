use serde::{Deserialize, Serialize};

/// Aggregate-count tiles on the courier directory page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scorecard {
    TotalActive,
    ActiveEcommerce,
    ActiveFood,
    ActiveMotorcycle,
    Inhouse,
    Ajeer,
}

impl Scorecard {
    /// Count endpoint, answers `{ "count": n }`
    pub fn endpoint(&self) -> &'static str {
        match self {
            Scorecard::TotalActive => "/get_total_active_couriers",
            Scorecard::ActiveEcommerce => "/get_active_ecommerce_couriers",
            Scorecard::ActiveFood => "/get_active_food_couriers",
            Scorecard::ActiveMotorcycle => "/get_active_motorcycle_couriers",
            Scorecard::Inhouse => "/get_inhouse_couriers",
            Scorecard::Ajeer => "/get_ajeer_couriers",
        }
    }

    /// Stable id used for the tile element
    pub fn code(&self) -> &'static str {
        match self {
            Scorecard::TotalActive => "total-active-couriers",
            Scorecard::ActiveEcommerce => "active-ecommerce-couriers",
            Scorecard::ActiveFood => "active-food-couriers",
            Scorecard::ActiveMotorcycle => "active-motorcycle-couriers",
            Scorecard::Inhouse => "inhouse-couriers",
            Scorecard::Ajeer => "ajeer-couriers",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scorecard::TotalActive => "Total Active Couriers",
            Scorecard::ActiveEcommerce => "Active E-commerce",
            Scorecard::ActiveFood => "Active Food",
            Scorecard::ActiveMotorcycle => "Active Motorcycle",
            Scorecard::Inhouse => "In-house",
            Scorecard::Ajeer => "Ajeer",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Scorecard::TotalActive => "users",
            Scorecard::ActiveEcommerce => "box",
            Scorecard::ActiveFood => "food",
            Scorecard::ActiveMotorcycle => "bike",
            Scorecard::Inhouse => "home",
            Scorecard::Ajeer => "briefcase",
        }
    }

    pub fn all() -> Vec<Scorecard> {
        vec![
            Scorecard::TotalActive,
            Scorecard::ActiveEcommerce,
            Scorecard::ActiveFood,
            Scorecard::ActiveMotorcycle,
            Scorecard::Inhouse,
            Scorecard::Ajeer,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn six_distinct_endpoints() {
        let all = Scorecard::all();
        assert_eq!(all.len(), 6);
        let endpoints: HashSet<_> = all.iter().map(|s| s.endpoint()).collect();
        let codes: HashSet<_> = all.iter().map(|s| s.code()).collect();
        assert_eq!(endpoints.len(), 6);
        assert_eq!(codes.len(), 6);
    }
}
