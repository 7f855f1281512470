use serde::{Deserialize, Serialize};

/// Error body returned by the backend on non-2xx responses.
///
/// The backend is not consistent: validation and server failures carry
/// `error` (sometimes with `details`), "nothing found" answers carry `message`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Text to show the user, if the server provided one
    pub fn user_message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.message.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_error_over_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error":"Missing required fields","message":"x"}"#).unwrap();
        assert_eq!(body.user_message(), Some("Missing required fields"));
    }

    #[test]
    fn falls_back_to_message_and_ignores_blank() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"message":"No results found for the given query."}"#)
                .unwrap();
        assert_eq!(
            body.user_message(),
            Some("No results found for the given query.")
        );

        let blank: ApiErrorBody = serde_json::from_str(r#"{"error":"  "}"#).unwrap();
        assert_eq!(blank.user_message(), None);
    }
}
