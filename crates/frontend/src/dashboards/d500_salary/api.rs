use crate::shared::api_utils::{api_url, network_error, read_json};
use crate::shared::error::AppError;
use async_trait::async_trait;
use contracts::dashboards::d500_salary::{CalculateSalaryRequest, CalculateSalaryResponse, SalaryRecord};
use gloo_net::http::Request;

pub const CALCULATE_SALARY_PATH: &str = "/calculate_salary";

/// Transport used by the salary dashboard
#[async_trait(?Send)]
pub trait SalaryApi {
    /// Computed rows for the request; "nothing found" is an empty list
    async fn calculate(&self, request: &CalculateSalaryRequest) -> Result<Vec<SalaryRecord>, AppError>;
}

/// `POST /calculate_salary` over fetch
#[derive(Debug, Clone)]
pub struct HttpSalaryApi {
    base_url: String,
}

impl HttpSalaryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl SalaryApi for HttpSalaryApi {
    async fn calculate(&self, request: &CalculateSalaryRequest) -> Result<Vec<SalaryRecord>, AppError> {
        let url = api_url(&self.base_url, CALCULATE_SALARY_PATH);
        log::debug!(
            "POST {} category={} period={:02}/{}",
            url,
            request.category,
            request.month,
            request.year
        );

        let response = Request::post(&url)
            .json(request)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;

        // The backend answers 404 with a plain message when the query is empty
        if response.status() == 404 {
            return Ok(Vec::new());
        }

        let body: CalculateSalaryResponse = read_json(response).await?;
        Ok(body.data)
    }
}
