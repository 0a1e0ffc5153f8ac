use super::{
    http_client::{build_endpoint_url, DEFAULT_REQUEST_TIMEOUT},
    prompt::{itinerary_prompt, SYSTEM_PROMPT},
    ItineraryService,
};
use crate::{
    error::{Result, TripError},
    types::{TripRequest, TripResponse},
};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_CHAT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Generates itineraries by prompting an OpenAI-compatible chat completions API directly.
#[derive(Clone, Debug)]
pub struct ChatItineraryService {
    client: reqwest::Client,
    api_key: String,
    endpoint: Url,
    model: String,
}

impl ChatItineraryService {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_options(api_key, DEFAULT_CHAT_BASE_URL, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_options(
        api_key: impl Into<String>,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(TripError::Config(
                "An API key is required for direct itinerary generation".to_string(),
            ));
        }

        let endpoint = build_chat_url(base_url)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| TripError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            api_key,
            endpoint,
            model: DEFAULT_MODEL.to_string(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(&self, request: &TripRequest) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": itinerary_prompt(request) }
            ]
        })
    }
}

#[async_trait]
impl ItineraryService for ChatItineraryService {
    async fn generate_itinerary(&self, request: &TripRequest) -> Result<TripResponse> {
        debug!(
            target: "tripsight::chat",
            model = %self.model,
            destination = %request.destination,
            days = request.days,
            "requesting itinerary completion"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&self.request_body(request))
            .send()
            .await?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|err| TripError::Decode(format!("Failed to read response: {err}")))?;

        let response_json: Option<Value> = serde_json::from_str(&response_text).ok();

        if !status.is_success() {
            let message = response_json
                .as_ref()
                .and_then(api_error_message)
                .unwrap_or_else(|| "Server error".to_string());
            warn!(target: "tripsight::chat", status = status.as_u16(), %message, "completion failed");
            return Err(TripError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let response_json = response_json
            .ok_or_else(|| TripError::Decode("Completion response is not valid JSON".to_string()))?;

        if let Some(message) = api_error_message(&response_json) {
            return Err(TripError::Decode(format!("API error: {message}")));
        }

        let itinerary = response_json
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                TripError::Decode("Completion response has no message content".to_string())
            })?;

        Ok(TripResponse {
            itinerary: itinerary.to_string(),
        })
    }
}

fn build_chat_url(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.ends_with("/chat/completions") {
        build_endpoint_url(trimmed.trim_end_matches("/chat/completions"), "chat/completions")
    } else {
        build_endpoint_url(trimmed, "chat/completions")
    }
}

fn api_error_message(value: &Value) -> Option<String> {
    let error = value.get("error")?;
    Some(
        error
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string()),
    )
}
