use crate::shared::api_utils::{api_url, network_error, read_json};
use crate::shared::error::AppError;
use async_trait::async_trait;
use contracts::domain::a030_courier::{
    AllCouriersResponse, CountResponse, CourierDataResponse, CourierDetailsResponse,
    CourierFilterRequest, CourierRecord, Scorecard,
};
use gloo_net::http::Request;

pub const ALL_COURIERS_PATH: &str = "/get_all_couriers";
pub const COURIER_DATA_PATH: &str = "/get_courier_data";
pub const COURIER_DETAILS_PATH: &str = "/get_courier_details";

/// Transport used by the courier directory
#[async_trait(?Send)]
pub trait CourierApi {
    async fn count(&self, scorecard: Scorecard) -> Result<u64, AppError>;

    async fn all(&self) -> Result<Vec<CourierRecord>, AppError>;

    async fn filter(&self, request: &CourierFilterRequest) -> Result<Vec<CourierRecord>, AppError>;

    /// Full record of one courier; an answer without `courier` is `NotFound`
    async fn details(&self, barq_id: &str) -> Result<CourierRecord, AppError>;
}

#[derive(Debug, Clone)]
pub struct HttpCourierApi {
    base_url: String,
}

impl HttpCourierApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

pub fn details_path(barq_id: &str) -> String {
    format!("{}?barq_id={}", COURIER_DETAILS_PATH, urlencoding::encode(barq_id))
}

#[async_trait(?Send)]
impl CourierApi for HttpCourierApi {
    async fn count(&self, scorecard: Scorecard) -> Result<u64, AppError> {
        let url = api_url(&self.base_url, scorecard.endpoint());
        let response = Request::get(&url).send().await.map_err(network_error)?;
        let body: CountResponse = read_json(response).await?;
        body.value()
            .ok_or_else(|| AppError::Decode(format!("{} returned no count", scorecard.endpoint())))
    }

    async fn all(&self) -> Result<Vec<CourierRecord>, AppError> {
        let url = api_url(&self.base_url, ALL_COURIERS_PATH);
        let response = Request::get(&url).send().await.map_err(network_error)?;
        let body: AllCouriersResponse = read_json(response).await?;
        Ok(body.couriers)
    }

    async fn filter(&self, request: &CourierFilterRequest) -> Result<Vec<CourierRecord>, AppError> {
        let url = api_url(&self.base_url, COURIER_DATA_PATH);
        log::debug!("POST {} {:?}", url, request);
        let response = Request::post(&url)
            .json(request)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        let body: CourierDataResponse = read_json(response).await?;
        Ok(body.courier_data)
    }

    async fn details(&self, barq_id: &str) -> Result<CourierRecord, AppError> {
        let url = api_url(&self.base_url, &details_path(barq_id));
        let response = Request::get(&url).send().await.map_err(network_error)?;
        let body: CourierDetailsResponse = read_json(response).await?;
        body.courier
            .ok_or_else(|| AppError::NotFound(format!("courier {}", barq_id)))
    }
}
