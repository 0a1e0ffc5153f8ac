use super::ItineraryService;
use crate::{
    error::{Result, TripError},
    schemas::decode_envelope,
    types::{TripRequest, TripResponse},
};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://tripsight-backend.onrender.com";
pub const GENERATE_PATH: &str = "generate-itinerary";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the itinerary backend's `POST /generate-itinerary` endpoint.
#[derive(Clone, Debug)]
pub struct HttpItineraryService {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpItineraryService {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let endpoint = build_endpoint_url(base_url, GENERATE_PATH)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| TripError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ItineraryService for HttpItineraryService {
    async fn generate_itinerary(&self, request: &TripRequest) -> Result<TripResponse> {
        debug!(
            target: "tripsight::http",
            endpoint = %self.endpoint,
            destination = %request.destination,
            days = request.days,
            "requesting itinerary"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| TripError::Decode(format!("Failed to read response: {err}")))?;

        if !status.is_success() {
            warn!(target: "tripsight::http", status = status.as_u16(), "itinerary request failed");
            return Err(server_error(status, &body));
        }

        decode_envelope::<TripResponse>(&body)
    }
}

/// Join a base URL and a path, rejecting bases that aren't absolute URLs.
pub(crate) fn build_endpoint_url(base_url: &str, path: &str) -> Result<Url> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let joined = format!("{}/{}", trimmed, path.trim_start_matches('/'));
    let url = Url::parse(&joined)
        .map_err(|err| TripError::InvalidEndpoint(format!("`{base_url}`: {err}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(TripError::InvalidEndpoint(format!(
            "`{base_url}`: unsupported scheme `{scheme}`"
        ))),
    }
}

/// Map a non-2xx response to a server error, using the FastAPI `detail` when present.
fn server_error(status: StatusCode, body: &str) -> TripError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("detail").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| "Server error".to_string());

    TripError::Server {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_joined_without_double_slash() {
        let url = build_endpoint_url("https://example.com/", GENERATE_PATH).unwrap();
        assert_eq!(url.as_str(), "https://example.com/generate-itinerary");

        let url = build_endpoint_url("http://localhost:8000/api", "/generate-itinerary").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/generate-itinerary");
    }

    #[test]
    fn malformed_base_url_is_invalid_endpoint() {
        let err = build_endpoint_url("not a url", GENERATE_PATH).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ENDPOINT");

        let err = build_endpoint_url("ftp://example.com", GENERATE_PATH).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn server_error_prefers_detail_message() {
        match server_error(StatusCode::INTERNAL_SERVER_ERROR, r#"{"detail": "quota exceeded"}"#) {
            TripError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        match server_error(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>") {
            TripError::Server { message, .. } => assert_eq!(message, "Server error"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
