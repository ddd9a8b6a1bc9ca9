use std::time::Duration;

use futures_util::StreamExt;
use newscheck_logging::{nc_debug, nc_warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::{ClassifyError, FailureKind, HealthStatus, PredictionRequest, PredictionResponse};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct ClassifySettings {
    /// Service root; `predict` and `health` are resolved beneath it.
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl ClassifySettings {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait Classifier: Send + Sync {
    /// Issues exactly one prediction request; never retries.
    async fn classify(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, ClassifyError>;

    async fn health(&self) -> Result<HealthStatus, ClassifyError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestClassifier {
    settings: ClassifySettings,
}

impl ReqwestClassifier {
    pub fn new(settings: ClassifySettings) -> Self {
        Self { settings }
    }

    pub fn endpoint(&self, segment: &str) -> Result<Url, ClassifyError> {
        let mut url = self.settings.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                ClassifyError::new(
                    FailureKind::InvalidUrl,
                    format!("{} cannot be used as a base url", self.settings.base_url),
                )
            })?;
            segments.pop_if_empty().push(segment);
        }
        Ok(url)
    }

    fn build_client(&self) -> Result<reqwest::Client, ClassifyError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(self.settings.redirect_limit))
            .build()
            .map_err(|err| ClassifyError::new(FailureKind::Network, err.to_string()))
    }

    /// Sends one request and decodes a success body as `T`.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClassifyError> {
        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();

        if !status.is_success() {
            // The error body is best-effort: any problem reading it means no detail.
            let detail = match self.read_body(response).await {
                Ok(bytes) => error_detail(&bytes),
                Err(err) => {
                    nc_warn!("Could not read error body for status {}: {}", status, err);
                    None
                }
            };
            let message = detail.clone().unwrap_or_else(|| status.to_string());
            return Err(ClassifyError::new(
                FailureKind::HttpStatus {
                    status: status.as_u16(),
                    detail,
                },
                message,
            ));
        }

        let bytes = self.read_body(response).await?;
        serde_json::from_slice(&bytes)
            .map_err(|err| ClassifyError::new(FailureKind::MalformedBody, err.to_string()))
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, ClassifyError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, Some(content_len)));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, Some(next_len)));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl Classifier for ReqwestClassifier {
    async fn classify(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, ClassifyError> {
        let url = self.endpoint("predict")?;
        let client = self.build_client()?;
        let body = serde_json::to_vec(request)
            .map_err(|err| ClassifyError::new(FailureKind::MalformedBody, err.to_string()))?;

        nc_debug!("POST {} body_len={}", url, body.len());
        let builder = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body);
        self.execute(builder).await
    }

    async fn health(&self) -> Result<HealthStatus, ClassifyError> {
        let url = self.endpoint("health")?;
        let client = self.build_client()?;

        nc_debug!("GET {}", url);
        self.execute(client.get(url).header(ACCEPT, "application/json")).await
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Extracts a string `detail` from an error body. Structured details (such as
/// validation error lists) and non-JSON bodies yield `None`.
fn error_detail(bytes: &[u8]) -> Option<String> {
    let body: ErrorBody = serde_json::from_slice(bytes).ok()?;
    match body.detail? {
        serde_json::Value::String(detail) => Some(detail),
        _ => None,
    }
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> ClassifyError {
    ClassifyError::new(
        FailureKind::TooLarge { max_bytes, actual },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> ClassifyError {
    if err.is_timeout() {
        return ClassifyError::new(FailureKind::Timeout, err.to_string());
    }
    ClassifyError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier(base: &str) -> ReqwestClassifier {
        ReqwestClassifier::new(ClassifySettings::new(Url::parse(base).unwrap()))
    }

    #[test]
    fn endpoint_appends_segment_to_base_path() {
        assert_eq!(
            classifier("http://localhost:8000").endpoint("predict").unwrap().as_str(),
            "http://localhost:8000/predict"
        );
        assert_eq!(
            classifier("https://api.example.com/v1/").endpoint("predict").unwrap().as_str(),
            "https://api.example.com/v1/predict"
        );
    }

    #[test]
    fn endpoint_rejects_cannot_be_base_urls() {
        let err = classifier("mailto:news@example.com")
            .endpoint("predict")
            .unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
    }

    #[test]
    fn error_detail_only_accepts_strings() {
        assert_eq!(
            error_detail(br#"{"detail":"Text too short"}"#),
            Some("Text too short".to_string())
        );
        assert_eq!(error_detail(br#"{"detail":[{"loc":["body"]}]}"#), None);
        assert_eq!(error_detail(br#"{"message":"nope"}"#), None);
        assert_eq!(error_detail(b"<html>Bad Gateway</html>"), None);
    }
}
