use crate::shared::error::AppError;
use contracts::dashboards::d500_salary::{CalculateSalaryRequest, Category, CustomParams};
use std::collections::BTreeMap;

pub const MSG_NO_CATEGORY: &str = "Please select a category to calculate salaries.";
pub const MSG_NO_PERIOD: &str = "Please select both month and year.";

/// Raw inputs of the calculation form, exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaryForm {
    pub category: Option<Category>,
    pub month: String,
    pub year: String,
    /// Parameter inputs keyed by param id
    pub params: BTreeMap<String, String>,
}

impl SalaryForm {
    pub fn set_param(&mut self, id: &str, raw: impl Into<String>) {
        self.params.insert(id.to_string(), raw.into());
    }

    pub fn param(&self, id: &str) -> &str {
        self.params.get(id).map(String::as_str).unwrap_or("")
    }

    /// Check the inputs and build the request body. Nothing is sent when
    /// this fails.
    pub fn validate(&self) -> Result<CalculateSalaryRequest, AppError> {
        let category = self
            .category
            .ok_or_else(|| AppError::Validation(MSG_NO_CATEGORY.to_string()))?;

        let month = self.month.trim();
        let year = self.year.trim();
        if month.is_empty() || year.is_empty() {
            return Err(AppError::Validation(MSG_NO_PERIOD.to_string()));
        }

        let month: u32 = month
            .parse()
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or_else(|| AppError::Validation(MSG_NO_PERIOD.to_string()))?;
        let year: i32 = year
            .parse()
            .ok()
            .filter(|y| (1000..=9999).contains(y))
            .ok_or_else(|| AppError::Validation(MSG_NO_PERIOD.to_string()))?;

        Ok(CalculateSalaryRequest {
            category,
            month,
            year,
            custom_params: self.custom_params(category),
        })
    }

    /// Parameters of the selected category that hold a finite number
    fn custom_params(&self, category: Category) -> CustomParams {
        let values: BTreeMap<String, f64> = category
            .params()
            .iter()
            .filter_map(|field| {
                let value: f64 = self.param(field.id).trim().parse().ok()?;
                value.is_finite().then(|| (field.id.to_string(), value))
            })
            .collect();

        let mut params = CustomParams::new();
        if !values.is_empty() {
            params.insert(category.code().to_string(), values);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(category: Option<Category>, month: &str, year: &str) -> SalaryForm {
        SalaryForm {
            category,
            month: month.into(),
            year: year.into(),
            params: BTreeMap::new(),
        }
    }

    #[test]
    fn category_is_checked_first() {
        let err = form(None, "", "").validate().unwrap_err();
        assert_eq!(err, AppError::Validation(MSG_NO_CATEGORY.into()));
    }

    #[test]
    fn month_and_year_are_required() {
        for (m, y) in [("", "2024"), ("3", ""), ("13", "2024"), ("0", "2024"), ("3", "24")] {
            let err = form(Some(Category::Ajeer), m, y).validate().unwrap_err();
            assert_eq!(err, AppError::Validation(MSG_NO_PERIOD.into()), "{} {}", m, y);
        }
    }

    #[test]
    fn only_finite_params_of_the_category_are_sent() {
        let mut f = form(Some(Category::Motorcycle), "3", "2024");
        f.set_param("motorcycle_gas_cap", " 300 ");
        f.set_param("motorcycle_basic_salary_rate", "abc");
        f.set_param("motorcycle_bonus_rate", "NaN");
        f.set_param("ecommerce_basic_salary_rate", "66");

        let request = f.validate().unwrap();
        assert_eq!(request.month, 3);
        assert_eq!(request.year, 2024);
        let motorcycle = &request.custom_params["Motorcycle"];
        assert_eq!(motorcycle.len(), 1);
        assert_eq!(motorcycle["motorcycle_gas_cap"], 300.0);
        assert!(!request.custom_params.contains_key("Ecommerce"));
    }

    #[test]
    fn no_params_means_empty_custom_params() {
        let request = form(Some(Category::Ajeer), "1", "2025").validate().unwrap();
        assert!(request.custom_params.is_empty());
    }
}
