use crate::config::Config;
use crate::entity::{ActivityError, Transaction, DEFAULT_API_ERROR};
use anyhow::Result;
use async_trait::async_trait;
use log::{error, info};
use reqwest::{Client, RequestBuilder, Response, StatusCode};

/// Source of a user's account activity
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Get every activity recorded for the user's account
    async fn fetch_activities(&self, user_id: i64) -> Result<Vec<Transaction>>;

    /// Get a single activity by its ID
    async fn fetch_activity(&self, user_id: i64, activity_id: i64) -> Result<Transaction>;
}

/// Repository backed by the wallet REST API
pub struct HttpActivityRepository {
    http_client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl HttpActivityRepository {
    pub fn new(base_url: impl Into<String>, access_token: Option<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone(), config.access_token.clone())
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let request = self
            .http_client
            .get(format!("{}{}", self.base_url, path))
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ActivityError> {
        let response = request.send().await.map_err(|e| {
            error!("Failed to reach wallet API: {}", e);
            ActivityError::Http(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            error!("Wallet API rejected the access token");
            return Err(ActivityError::Unauthorized);
        }

        let message = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_API_ERROR.to_string());
        error!("Wallet API error [{}]: {}", status.as_u16(), message);

        Err(ActivityError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ActivityRepository for HttpActivityRepository {
    async fn fetch_activities(&self, user_id: i64) -> Result<Vec<Transaction>> {
        info!("Fetching activities for user {}", user_id);

        let response = self
            .send(self.get(&format!("/accounts/{}/activity", user_id)))
            .await?;

        let activities: Vec<Transaction> = response
            .json()
            .await
            .map_err(|e| ActivityError::Decode(e.to_string()))?;

        info!("Fetched {} activities for user {}", activities.len(), user_id);
        Ok(activities)
    }

    async fn fetch_activity(&self, user_id: i64, activity_id: i64) -> Result<Transaction> {
        info!("Fetching activity {} for user {}", activity_id, user_id);

        let response = self
            .send(self.get(&format!("/accounts/{}/activity/{}", user_id, activity_id)))
            .await?;

        let activity = response
            .json()
            .await
            .map_err(|e| ActivityError::Decode(e.to_string()))?;

        Ok(activity)
    }
}
