//! Sign-in against an identity provider and the session state built on it.

pub mod firebase;
pub mod session;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use firebase::FirebaseIdentityProvider;
pub use session::{AuthSession, RememberedSession};

/// Provider id used for Google federated sign-in.
pub const GOOGLE_PROVIDER_ID: &str = "google.com";

/// Signed-in user handle returned by an identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an account; providers sign the new user in on success.
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser>;

    /// Exchange a federated provider's tokens for a user handle.
    async fn sign_in_with_id_token(
        &self,
        provider_id: &str,
        id_token: &str,
        access_token: Option<&str>,
    ) -> Result<AuthUser>;

    async fn sign_out(&self, _user: &AuthUser) -> Result<()> {
        Ok(())
    }
}
