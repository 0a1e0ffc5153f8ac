use super::{AuthUser, IdentityProvider};
use crate::{
    error::{Result, TripError},
    services::http_client::DEFAULT_REQUEST_TIMEOUT,
};
use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const IDP_REQUEST_URI: &str = "http://localhost";

/// Identity provider backed by the Firebase Auth REST API.
#[derive(Clone, Debug)]
pub struct FirebaseIdentityProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FirebaseAuthResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    id_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
}

impl From<FirebaseAuthResponse> for AuthUser {
    fn from(response: FirebaseAuthResponse) -> Self {
        Self {
            uid: response.local_id,
            email: response.email.filter(|email| !email.is_empty()),
            display_name: response.display_name.filter(|name| !name.is_empty()),
            id_token: response.id_token,
            refresh_token: response.refresh_token,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

impl FirebaseIdentityProvider {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_IDENTITY_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(TripError::Config(
                "Firebase configuration error: missing API key".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .build()
            .map_err(|err| TripError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into(),
        })
    }

    fn method_url(&self, method: &str) -> Result<Url> {
        crate::services::http_client::build_endpoint_url(
            &self.base_url,
            &format!("accounts:{method}"),
        )
    }

    async fn call<B: Serialize + ?Sized>(&self, method: &str, body: &B) -> Result<AuthUser> {
        let url = self.method_url(method)?;
        debug!(target: "tripsight::auth", method, "calling identity provider");

        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| TripError::Decode(format!("Failed to read response: {err}")))?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|value| {
                    value
                        .pointer("/error/message")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or_else(|| format!("identity provider returned {status}"));
            warn!(target: "tripsight::auth", method, status = status.as_u16(), %message, "sign-in rejected");
            return Err(TripError::Auth(message));
        }

        let mut deserializer = serde_json::Deserializer::from_str(&text);
        let parsed: FirebaseAuthResponse = serde_path_to_error::deserialize(&mut deserializer)
            .map_err(|err| {
                TripError::Decode(format!("Unexpected identity response at {}: {}", err.path(), err))
            })?;

        Ok(parsed.into())
    }
}

#[async_trait]
impl IdentityProvider for FirebaseIdentityProvider {
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser> {
        self.call(
            "signUp",
            &PasswordRequest {
                email,
                password,
                return_secure_token: true,
            },
        )
        .await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser> {
        self.call(
            "signInWithPassword",
            &PasswordRequest {
                email,
                password,
                return_secure_token: true,
            },
        )
        .await
    }

    async fn sign_in_with_id_token(
        &self,
        provider_id: &str,
        id_token: &str,
        access_token: Option<&str>,
    ) -> Result<AuthUser> {
        let body = json!({
            "postBody": idp_post_body(provider_id, id_token, access_token),
            "requestUri": IDP_REQUEST_URI,
            "returnSecureToken": true,
            "returnIdpCredential": true,
        });
        self.call("signInWithIdp", &body).await
    }
}

fn idp_post_body(provider_id: &str, id_token: &str, access_token: Option<&str>) -> String {
    let mut post_body = format!("id_token={id_token}&providerId={provider_id}");
    if let Some(access_token) = access_token {
        post_body.push_str(&format!("&access_token={access_token}"));
    }
    post_body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_key_is_rejected() {
        let err = FirebaseIdentityProvider::new("").unwrap_err();
        assert!(err.to_string().contains("Firebase configuration error"));
    }

    #[test]
    fn method_url_keeps_colon_segment() {
        let provider = FirebaseIdentityProvider::new("key").unwrap();
        assert_eq!(
            provider.method_url("signInWithPassword").unwrap().as_str(),
            "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword"
        );
    }

    #[test]
    fn idp_post_body_includes_optional_access_token() {
        assert_eq!(
            idp_post_body("google.com", "jwt", None),
            "id_token=jwt&providerId=google.com"
        );
        assert_eq!(
            idp_post_body("google.com", "jwt", Some("at")),
            "id_token=jwt&providerId=google.com&access_token=at"
        );
    }
}
