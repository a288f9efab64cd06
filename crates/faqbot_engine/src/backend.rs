use engine_logging::engine_warn;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::{
    build_ingest_form, BackendError, BackendSettings, FailureKind, IngestReceipt, QueryReply,
    UploadFile,
};

const HEALTH_PATH: &str = "/api/v1/health";
const QUERY_PATH: &str = "/api/v1/query";
const INGEST_PATH: &str = "/api/v1/ingest";

#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// One reachability probe. Any failure reads as unreachable.
    async fn health(&self) -> bool;

    async fn query(&self, question: &str) -> Result<QueryReply, BackendError>;

    async fn ingest(&self, files: Vec<UploadFile>) -> Result<IngestReceipt, BackendError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    settings: BackendSettings,
    client: Client,
}

impl ReqwestBackend {
    pub fn new(settings: BackendSettings) -> Result<Self, BackendError> {
        let client = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| BackendError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    async fn check_health(&self) -> Result<(), BackendError> {
        let url = self.settings.endpoint(HEALTH_PATH)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(BackendError::new(
                FailureKind::HttpStatus {
                    status: status.as_u16(),
                    detail: None,
                },
                status.to_string(),
            ))
        }
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn health(&self) -> bool {
        match self.check_health().await {
            Ok(()) => true,
            Err(err) => {
                engine_warn!("Health probe failed: {}", err);
                false
            }
        }
    }

    async fn query(&self, question: &str) -> Result<QueryReply, BackendError> {
        let url = self.settings.endpoint(QUERY_PATH)?;
        let response = self
            .client
            .post(url)
            .json(&json!({ "question": question }))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode_success(response).await
    }

    async fn ingest(&self, files: Vec<UploadFile>) -> Result<IngestReceipt, BackendError> {
        let url = self.settings.endpoint(INGEST_PATH)?;
        let form = build_ingest_form(files)?;
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode_success(response).await
    }
}

async fn decode_success<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(BackendError::new(
            FailureKind::HttpStatus {
                status: status.as_u16(),
                detail: extract_detail(&body),
            },
            status.to_string(),
        ));
    }
    response.json::<T>().await.map_err(map_reqwest_error)
}

/// String `detail` field of an error body. Structured details are not shown.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .filter(|detail| !detail.is_empty())
        .map(ToOwned::to_owned)
}

fn map_reqwest_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        return BackendError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return BackendError::new(FailureKind::Decode, err.to_string());
    }
    BackendError::new(FailureKind::Network, err.to_string())
}
