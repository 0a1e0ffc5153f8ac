use super::{AuthUser, IdentityProvider, GOOGLE_PROVIDER_ID};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// What a caller persists between launches to restore a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RememberedSession {
    pub remember_me: bool,
    pub last_logged_in_email: Option<String>,
    pub user: Option<AuthUser>,
}

/// Owned authentication state for the app shell.
///
/// Screens borrow this instead of reading process-wide state; it is created
/// at startup and dropped on shutdown.
#[derive(Debug)]
pub struct AuthSession<P> {
    provider: P,
    user: Option<AuthUser>,
    error_message: Option<String>,
    remember_me: bool,
    last_logged_in_email: Option<String>,
}

impl<P: IdentityProvider> AuthSession<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            user: None,
            error_message: None,
            remember_me: false,
            last_logged_in_email: None,
        }
    }

    /// Rebuild a session from a snapshot. The stored user only comes back when
    /// remember-me was on.
    pub fn restore(provider: P, snapshot: RememberedSession) -> Self {
        let user = if snapshot.remember_me {
            snapshot.user
        } else {
            None
        };
        Self {
            provider,
            user,
            error_message: None,
            remember_me: snapshot.remember_me,
            last_logged_in_email: snapshot
                .last_logged_in_email
                .filter(|_| snapshot.remember_me),
        }
    }

    pub fn snapshot(&self) -> RememberedSession {
        RememberedSession {
            remember_me: self.remember_me,
            last_logged_in_email: self.last_logged_in_email.clone(),
            user: if self.remember_me {
                self.user.clone()
            } else {
                None
            },
        }
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    pub fn last_logged_in_email(&self) -> Option<&str> {
        self.last_logged_in_email.as_deref()
    }

    pub fn set_remember_me(&mut self, remember_me: bool) {
        self.remember_me = remember_me;
        if !remember_me {
            self.last_logged_in_email = None;
        }
    }

    pub async fn sign_up(&mut self, email: &str, password: &str) -> bool {
        let outcome = self.provider.sign_up(email, password).await;
        self.complete(outcome)
    }

    pub async fn sign_in(&mut self, email: &str, password: &str) -> bool {
        let outcome = self.provider.sign_in(email, password).await;
        self.complete(outcome)
    }

    /// Finish Google sign-in with the tokens obtained from the Google flow.
    pub async fn sign_in_with_google(&mut self, id_token: &str, access_token: &str) -> bool {
        if id_token.trim().is_empty() {
            self.error_message = Some("Failed to get ID token".to_string());
            return false;
        }
        let outcome = self
            .provider
            .sign_in_with_id_token(GOOGLE_PROVIDER_ID, id_token, Some(access_token))
            .await;
        self.complete(outcome)
    }

    pub async fn sign_out(&mut self) {
        if let Some(user) = self.user.as_ref() {
            if let Err(err) = self.provider.sign_out(user).await {
                warn!(target: "tripsight::auth", error = %err, "provider sign-out failed");
                self.error_message = Some(err.to_string());
                return;
            }
        }
        self.set_user(None);
    }

    fn complete(&mut self, outcome: crate::error::Result<AuthUser>) -> bool {
        match outcome {
            Ok(user) => {
                info!(target: "tripsight::auth", uid = %user.uid, "signed in");
                self.error_message = None;
                self.set_user(Some(user));
                true
            }
            Err(err) => {
                self.error_message = Some(match err {
                    crate::error::TripError::Auth(message) => message,
                    other => other.to_string(),
                });
                false
            }
        }
    }

    fn set_user(&mut self, user: Option<AuthUser>) {
        if self.remember_me {
            if let Some(email) = user.as_ref().and_then(|user| user.email.clone()) {
                self.last_logged_in_email = Some(email);
            }
        } else {
            self.last_logged_in_email = None;
        }
        self.user = user;
    }
}
