//! Authentication session: login, logout and periodic token refresh.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use lingua_core::User;

use crate::error::{ClientError, Result};
use crate::http::ApiClient;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: String,
}

#[derive(Debug, Default)]
struct SessionState {
    user: Option<User>,
    refreshed_at: Option<DateTime<Utc>>,
}

/// Authenticated admin session. Cloning shares the session.
#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
    state: Arc<RwLock<SessionState>>,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(SessionState::default())),
        }
    }

    /// Whether an access token is held.
    pub async fn is_authenticated(&self) -> bool {
        self.client.has_token().await
    }

    /// Profile of the signed-in user, once fetched.
    pub async fn user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    /// When the access token was last obtained.
    pub async fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.refreshed_at
    }

    /// Log in with email and password, then load the profile.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let tokens: TokenResponse = self
            .client
            .post("/auth/login", &LoginRequest { email, password })
            .await?;

        if tokens.access_token.is_empty() {
            return Err(ClientError::NotAuthenticated);
        }

        self.store_token(tokens.access_token).await;
        tracing::info!(email, "logged in");

        self.fetch_profile().await
    }

    /// Load the profile of the current user.
    pub async fn fetch_profile(&self) -> Result<User> {
        if !self.client.has_token().await {
            return Err(ClientError::NotAuthenticated);
        }
        let user: User = self.client.get("/users/profile").await?;
        self.state.write().await.user = Some(user.clone());
        Ok(user)
    }

    /// Exchange the refresh cookie for a new access token.
    ///
    /// With `update` set only the token is renewed; otherwise the profile is
    /// reloaded too. Failures end the session and are logged, not returned.
    pub async fn refresh(&self, update: bool) -> bool {
        match self.try_refresh(update).await {
            Ok(refreshed) => refreshed,
            Err(e) => {
                tracing::warn!(error = %e, "token refresh failed");
                self.reset().await;
                false
            }
        }
    }

    async fn try_refresh(&self, update: bool) -> Result<bool> {
        let tokens: TokenResponse = self
            .client
            .post("/auth/refresh", &serde_json::json!({}))
            .await?;

        if tokens.access_token.is_empty() {
            return Ok(false);
        }

        self.store_token(tokens.access_token).await;
        tracing::debug!("access token refreshed");

        if !update {
            self.fetch_profile().await?;
        }
        Ok(true)
    }

    /// Log out on the server and forget the local session.
    pub async fn logout(&self) -> Result<()> {
        let result = self.client.send_empty(Method::POST, "/auth/logout").await;
        self.reset().await;
        tracing::info!("logged out");
        result
    }

    /// Refresh the token every `interval` until the handle is aborted.
    /// Runs independently of in-flight requests.
    pub fn spawn_refresh_loop(&self, interval: Duration) -> JoinHandle<()> {
        let auth = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                auth.refresh(true).await;
            }
        })
    }

    async fn store_token(&self, token: String) {
        self.client.set_token(Some(token)).await;
        self.state.write().await.refreshed_at = Some(Utc::now());
    }

    async fn reset(&self) {
        self.client.set_token(None).await;
        let mut state = self.state.write().await;
        state.user = None;
        state.refreshed_at = None;
    }
}
