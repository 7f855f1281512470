use crate::shared::lenient;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Placeholder shown for missing courier values
pub const MISSING_VALUE: &str = "N/A";

/// A courier row as returned by the directory endpoints.
///
/// The backend sends every warehouse column, so the record keeps the raw
/// object and exposes typed accessors for the columns the list shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourierRecord {
    fields: Map<String, Value>,
}

impl CourierRecord {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn name(&self) -> Option<String> {
        self.text("Name")
    }

    pub fn joining_date(&self) -> Option<String> {
        self.text("Joining_Date")
    }

    pub fn status(&self) -> Option<String> {
        self.text("Status")
    }

    pub fn id_number(&self) -> Option<String> {
        self.text("ID_Number")
    }

    pub fn sponsorship_status(&self) -> Option<String> {
        self.text("Sponsorshipstatus")
    }

    pub fn barq_id(&self) -> Option<String> {
        self.text("BARQ_ID")
    }

    /// Non-empty text value of a column
    pub fn text(&self, key: &str) -> Option<String> {
        self.fields.get(key).and_then(value_to_text)
    }

    /// Every column with its display value, in key order
    pub fn fields(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .map(|(k, v)| {
                let shown = value_to_text(v).unwrap_or_else(|| MISSING_VALUE.to_string());
                (k.clone(), shown)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Answer of every scorecard count endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountResponse {
    #[serde(default, deserialize_with = "lenient::number")]
    pub count: Option<f64>,
}

impl CountResponse {
    pub fn value(&self) -> Option<u64> {
        self.count.filter(|c| *c >= 0.0).map(|c| c.round() as u64)
    }
}

/// `GET /get_all_couriers`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllCouriersResponse {
    #[serde(default)]
    pub couriers: Vec<CourierRecord>,
}

/// Body of `POST /get_courier_data`. Empty strings mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourierFilterRequest {
    pub courier_name: String,
    pub filter_date: String,
    #[serde(rename = "filter_BARQ_ID")]
    pub filter_barq_id: String,
    pub filter_status: String,
    pub filter_id_number: String,
    pub filter_sponsorship: String,
}

impl CourierFilterRequest {
    pub fn is_empty(&self) -> bool {
        [
            &self.courier_name,
            &self.filter_date,
            &self.filter_barq_id,
            &self.filter_status,
            &self.filter_id_number,
            &self.filter_sponsorship,
        ]
        .iter()
        .all(|v| v.trim().is_empty())
    }
}

/// Answer of `POST /get_courier_data`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourierDataResponse {
    #[serde(default)]
    pub courier_data: Vec<CourierRecord>,
}

/// Answer of `GET /get_courier_details`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourierDetailsResponse {
    #[serde(default)]
    pub courier: Option<CourierRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CourierRecord {
        serde_json::from_str(
            r#"{
                "BARQ_ID": 5521,
                "Name": "Khalid",
                "Joining_Date": "2022-07-01",
                "Status": "Active",
                "ID_Number": "",
                "Sponsorshipstatus": null,
                "Vehicle": "Motorcycle"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn typed_accessors() {
        let courier = sample();
        assert_eq!(courier.barq_id().as_deref(), Some("5521"));
        assert_eq!(courier.name().as_deref(), Some("Khalid"));
        assert_eq!(courier.id_number(), None);
        assert_eq!(courier.sponsorship_status(), None);
    }

    #[test]
    fn fields_keep_unknown_columns_and_placeholder() {
        let fields = sample().fields();
        assert_eq!(fields.len(), 7);
        assert!(fields.contains(&("Vehicle".to_string(), "Motorcycle".to_string())));
        assert!(fields.contains(&("ID_Number".to_string(), MISSING_VALUE.to_string())));
        assert!(fields.contains(&("Sponsorshipstatus".to_string(), MISSING_VALUE.to_string())));
    }

    #[test]
    fn filter_request_wire_names() {
        let request = CourierFilterRequest {
            filter_barq_id: "5521".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["filter_BARQ_ID"], "5521");
        assert_eq!(value["courier_name"], "");
        assert!(!request.is_empty());
        assert!(CourierFilterRequest::default().is_empty());
    }

    #[test]
    fn count_response_accepts_string_counts() {
        let response: CountResponse = serde_json::from_str(r#"{"count": "42"}"#).unwrap();
        assert_eq!(response.value(), Some(42));
        let missing: CountResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.value(), None);
    }

    #[test]
    fn details_without_courier() {
        let response: CourierDetailsResponse =
            serde_json::from_str(r#"{"error": "Courier not found"}"#).unwrap();
        assert!(response.courier.is_none());
    }
}
