//! HTTP notification scheduler adapter.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::notifications::{
    errors::NotifyError,
    models::{NotificationRequest, PushToken},
    service::Notify,
};

/// Configuration for connecting to the notification scheduler.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    /// Scheduler address, e.g. `"https://api.example.com"`.
    pub base_url: String,

    /// Bearer token for the authenticated session.
    pub auth_token: String,
}

/// HTTP client for the notification scheduler.
#[derive(Debug, Clone)]
pub struct HttpNotifyService {
    config: NotifyConfig,
    http: Client,
}

impl HttpNotifyService {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: NotifyConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl Notify for HttpNotifyService {
    async fn schedule(&self, request: NotificationRequest) -> Result<(), NotifyError> {
        let url = format!("{}/v1/notifications/schedule", self.config.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.auth_token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(NotifyError::UnexpectedResponse(format!(
                "schedule request failed with status {status}: {text}"
            )));
        }

        Ok(())
    }

    async fn register_push(&self) -> Result<PushToken, NotifyError> {
        let url = format!("{}/v1/notifications/register", self.config.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.auth_token)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(NotifyError::UnexpectedResponse(format!(
                "push registration failed with status {status}: {text}"
            )));
        }

        let parsed: RegisterResponse = response.json().await?;

        Ok(PushToken(parsed.token))
    }
}

#[derive(Debug, Deserialize)]
struct RegisterResponse {
    token: String,
}
