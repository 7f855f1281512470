use super::category::Category;
use crate::shared::lenient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parameter overrides, keyed by category code and then by param id
pub type CustomParams = BTreeMap<String, BTreeMap<String, f64>>;

/// Body of `POST /calculate_salary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateSalaryRequest {
    pub category: Category,
    pub month: u32,
    pub year: i32,
    #[serde(rename = "customParams", default)]
    pub custom_params: CustomParams,
}

/// Successful answer of `POST /calculate_salary`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculateSalaryResponse {
    #[serde(default)]
    pub data: Vec<SalaryRecord>,
    #[serde(default)]
    pub meta: Option<SalaryResponseMeta>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalaryResponseMeta {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub count: Option<usize>,
}

/// Pay period the salary was computed for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryPeriod {
    #[serde(default, deserialize_with = "lenient::text")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub end_date: Option<String>,
}

/// One computed salary row.
///
/// Field names on the wire follow the warehouse columns, hence the renames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    #[serde(rename = "BARQ_ID", default, deserialize_with = "lenient::text")]
    pub barq_id: Option<String>,
    #[serde(rename = "Name", default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub iban: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub id_number: Option<String>,
    #[serde(rename = "joining_Date", default, deserialize_with = "lenient::text")]
    pub joining_date: Option<String>,
    #[serde(rename = "Status", default, deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(rename = "Sponsorshipstatus", default, deserialize_with = "lenient::text")]
    pub sponsorship_status: Option<String>,
    #[serde(rename = "PROJECT", default, deserialize_with = "lenient::text")]
    pub project: Option<String>,
    #[serde(rename = "Supervisor", default, deserialize_with = "lenient::text")]
    pub supervisor: Option<String>,

    #[serde(rename = "Total_Orders", default, deserialize_with = "lenient::number")]
    pub total_orders: Option<f64>,
    #[serde(rename = "target", default, deserialize_with = "lenient::number")]
    pub target: Option<f64>,
    /// Raw warehouse column; older responses only carry this spelling
    #[serde(
        rename = "TARGET",
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_raw: Option<f64>,
    #[serde(rename = "Total_Revenue", default, deserialize_with = "lenient::number")]
    pub total_revenue: Option<f64>,
    #[serde(rename = "Gas_Usage", default, deserialize_with = "lenient::number")]
    pub gas_usage: Option<f64>,

    #[serde(rename = "Basic_Salary", default, deserialize_with = "lenient::number")]
    pub basic_salary: Option<f64>,
    #[serde(rename = "Bonus_Amount", default, deserialize_with = "lenient::number")]
    pub bonus_amount: Option<f64>,
    #[serde(rename = "Gas_Deserved", default, deserialize_with = "lenient::number")]
    pub gas_deserved: Option<f64>,
    #[serde(rename = "Gas_Difference", default, deserialize_with = "lenient::number")]
    pub gas_difference: Option<f64>,
    #[serde(rename = "Total_Salary", default, deserialize_with = "lenient::number")]
    pub total_salary: Option<f64>,

    #[serde(default)]
    pub period: Option<SalaryPeriod>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub days_since_joining: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub generated_date: Option<String>,
}

impl SalaryRecord {
    /// Monthly order target, whichever spelling the backend used
    pub fn target(&self) -> Option<f64> {
        self.target.or(self.target_raw)
    }

    pub fn period_start(&self) -> Option<&str> {
        self.period.as_ref().and_then(|p| p.start_date.as_deref())
    }

    pub fn period_end(&self) -> Option<&str> {
        self.period.as_ref().and_then(|p| p.end_date.as_deref())
    }

    /// Display name for charts and headings
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: &str = r#"{
        "BARQ_ID": 10234,
        "Name": "Faisal Al-Harbi",
        "iban": "SA0380000000608010167519",
        "id_number": "2456789012",
        "joining_Date": "2023-02-11",
        "Status": "Active",
        "Sponsorshipstatus": "Inhouse",
        "PROJECT": "Food",
        "Supervisor": "Omar",
        "Total_Orders": 412,
        "TARGET": "390",
        "Total_Revenue": 8650.5,
        "Gas_Usage": null,
        "Basic_Salary": 2000.0,
        "Bonus_Amount": "154",
        "Gas_Deserved": 826,
        "Gas_Difference": -12.4,
        "Total_Salary": 2980.4,
        "period": {"start_date": "2024-02-25", "end_date": "2024-03-24"},
        "days_since_joining": 402,
        "category": "Food In-House New",
        "generated_date": "2024-03-26",
        "unexpected_column": [1, 2]
    }"#;

    #[test]
    fn parses_mixed_scalar_types() {
        let record: SalaryRecord = serde_json::from_str(ROW).unwrap();
        assert_eq!(record.barq_id.as_deref(), Some("10234"));
        assert_eq!(record.total_orders, Some(412.0));
        assert_eq!(record.target(), Some(390.0));
        assert_eq!(record.bonus_amount, Some(154.0));
        assert_eq!(record.gas_usage, None);
        assert_eq!(record.period_start(), Some("2024-02-25"));
        assert_eq!(record.period_end(), Some("2024-03-24"));
    }

    #[test]
    fn sparse_record_still_parses() {
        let record: SalaryRecord = serde_json::from_str(r#"{"Name": ""}"#).unwrap();
        assert!(record.period.is_none());
        assert_eq!(record.display_name(), "Unknown");
        assert_eq!(record.target(), None);
    }

    #[test]
    fn request_serialises_custom_params_by_category() {
        let mut params = CustomParams::new();
        params
            .entry(Category::Motorcycle.code().to_string())
            .or_default()
            .insert("motorcycle_gas_cap".to_string(), 300.0);
        let request = CalculateSalaryRequest {
            category: Category::Motorcycle,
            month: 3,
            year: 2024,
            custom_params: params,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["category"], "Motorcycle");
        assert_eq!(value["month"], 3);
        assert_eq!(value["customParams"]["Motorcycle"]["motorcycle_gas_cap"], 300.0);
    }

    #[test]
    fn response_without_data_is_empty() {
        let response: CalculateSalaryResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_empty());
        assert!(response.meta.is_none());
    }
}
