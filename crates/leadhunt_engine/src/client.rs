use std::time::Duration;

use leadhunt_core::{HuntCriteria, Lead};
use reqwest::Url;

use crate::{FailureKind, ServiceError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "LEADHUNT_API_URL";

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Service root without a trailing slash.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ServiceSettings {
    pub fn with_base_url(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_ref()),
            ..Self::default()
        }
    }

    /// Reads [`BASE_URL_ENV`], falling back to the default when unset or blank.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::with_base_url(value),
            _ => Self::default(),
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// The two operations the hunt consumes from the remote service.
#[async_trait::async_trait]
pub trait LeadService: Send + Sync {
    /// `POST /start-job?role=..&industry=..`. Any 2xx counts as accepted.
    async fn start_job(&self, criteria: &HuntCriteria) -> Result<(), ServiceError>;

    /// `GET /leads`, in service order.
    async fn fetch_leads(&self) -> Result<Vec<Lead>, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestLeadService {
    settings: ServiceSettings,
    client: reqwest::Client,
}

impl ReqwestLeadService {
    pub fn new(settings: ServiceSettings) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ServiceError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        Url::parse(&format!("{}{path}", self.settings.base_url))
            .map_err(|err| ServiceError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl LeadService for ReqwestLeadService {
    async fn start_job(&self, criteria: &HuntCriteria) -> Result<(), ServiceError> {
        let mut url = self.endpoint("/start-job")?;
        url.query_pairs_mut()
            .append_pair("role", &criteria.role)
            .append_pair("industry", &criteria.industry);

        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.bytes().await.unwrap_or_default();
        Err(
            ServiceError::new(FailureKind::HttpStatus(status.as_u16()), status.to_string())
                .with_service_message(service_message(&body)),
        )
    }

    async fn fetch_leads(&self) -> Result<Vec<Lead>, ServiceError> {
        let url = self.endpoint("/leads")?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        if !status.is_success() {
            return Err(
                ServiceError::new(FailureKind::HttpStatus(status.as_u16()), status.to_string())
                    .with_service_message(service_message(&body)),
            );
        }

        serde_json::from_slice::<Vec<Lead>>(&body)
            .map_err(|err| ServiceError::new(FailureKind::Decode, err.to_string()))
    }
}

/// Extracts a string `message` field from a JSON error body.
fn service_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("message")
        .and_then(|message| message.as_str())
        .map(str::to_owned)
}

fn map_reqwest_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        return ServiceError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ServiceError::new(FailureKind::Decode, err.to_string());
    }
    ServiceError::new(FailureKind::Network, err.to_string())
}
