use std::time::Duration;

use reqwest::{Method, Url};
use serde_json::Value;
use vcats_logging::{vcats_debug, vcats_warn};

use crate::{ApiError, CatId, CatRecord, FailureKind, MutationReply};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Origin of the cats API; also the prefix for image paths.
    pub base_url: String,
    pub connect_timeout: Duration,
    /// `None` leaves a slow request pending until the server answers.
    pub request_timeout: Option<Duration>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait CatApi: Send + Sync {
    /// `GET /cats`
    async fn list_cats(&self) -> Result<Vec<CatRecord>, ApiError>;
    /// `POST /adopt/{id}`
    async fn feed_cat(&self, cat_id: CatId) -> Result<MutationReply, ApiError>;
    /// `DELETE /cats/{id}`
    async fn delete_cat(&self, cat_id: CatId) -> Result<MutationReply, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestCatApi {
    client: reqwest::Client,
    base: String,
}

impl ReqwestCatApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        Url::parse(&settings.base_url)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            client,
            base: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Sends the request and returns the body of a 2xx reply.
    ///
    /// Non-2xx replies become `HttpStatus` errors carrying the body's `detail`.
    async fn send(&self, method: Method, path: &str) -> Result<Vec<u8>, ApiError> {
        let url = self.endpoint(path);
        vcats_debug!("{} {}", method, url);

        let response = self
            .client
            .request(method.clone(), &url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let detail = string_field(&body, "detail");
            vcats_warn!(
                "{} {} failed with {} (detail: {:?})",
                method,
                url,
                status,
                detail
            );
            return Err(
                ApiError::new(FailureKind::HttpStatus(status.as_u16()), status.to_string())
                    .with_detail(detail),
            );
        }

        Ok(body.to_vec())
    }

    async fn mutate(&self, method: Method, path: &str) -> Result<MutationReply, ApiError> {
        let body = self.send(method, path).await?;
        Ok(MutationReply {
            message: string_field(&body, "message"),
        })
    }
}

#[async_trait::async_trait]
impl CatApi for ReqwestCatApi {
    async fn list_cats(&self) -> Result<Vec<CatRecord>, ApiError> {
        let body = self.send(Method::GET, "/cats").await?;
        serde_json::from_slice(&body)
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
    }

    async fn feed_cat(&self, cat_id: CatId) -> Result<MutationReply, ApiError> {
        self.mutate(Method::POST, &format!("/adopt/{cat_id}")).await
    }

    async fn delete_cat(&self, cat_id: CatId) -> Result<MutationReply, ApiError> {
        self.mutate(Method::DELETE, &format!("/cats/{cat_id}")).await
    }
}

/// Reads a top-level string field from a JSON object body. Anything else is `None`.
fn string_field(body: &[u8], field: &str) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value.get(field)?.as_str().map(ToOwned::to_owned)
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
