//! API utilities for frontend-backend communication
//!
//! URL construction plus the response handling every endpoint shares:
//! status check, server error body extraction and JSON decoding.

use crate::shared::error::AppError;
use contracts::shared::api_error::ApiErrorBody;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

/// Build a full API URL from a path
///
/// An empty `base` keeps the request on the page's own origin, which is how
/// the dashboard is normally served.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url("", "/get_all_couriers");
/// assert_eq!(url, "/get_all_couriers");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Check the status and decode the JSON body.
///
/// Non-2xx answers become [`AppError::Http`] carrying the server's `error`
/// (or `message`) text when the body has one.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if !response.ok() {
        let status = response.status();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.user_message().map(str::to_string));
        return Err(AppError::Http { status, message });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

pub fn network_error(e: gloo_net::Error) -> AppError {
    AppError::Network(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_and_path() {
        assert_eq!(api_url("", "/calculate_salary"), "/calculate_salary");
        assert_eq!(
            api_url("http://127.0.0.1:5000/", "/calculate_salary"),
            "http://127.0.0.1:5000/calculate_salary"
        );
        assert_eq!(
            api_url("http://127.0.0.1:5000", "get_all_couriers"),
            "http://127.0.0.1:5000/get_all_couriers"
        );
    }
}
