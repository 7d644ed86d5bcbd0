//! HTTP client for the remote inventory service.

use reqwest::Client;
use serde::Deserialize;

use satchel::{
    checkout::Order,
    lessons::{Lesson, LessonId},
};

use crate::remote::errors::RemoteError;

/// Configuration for connecting to the inventory service.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Service base address, e.g. `"http://localhost:3000"`.
    pub base_url: String,
}

/// HTTP client for the inventory service's lesson and order endpoints.
#[derive(Debug, Clone)]
pub struct LessonsClient {
    config: RemoteConfig,
    http: Client,
}

impl LessonsClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Fetch the full lesson catalog.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn list_lessons(&self) -> Result<Vec<Lesson>, RemoteError> {
        let url = format!("{}/collection/lessons", self.config.base_url);

        let response = self.http.get(&url).send().await?;

        let response = Self::require_success(response, "list lessons").await?;

        Ok(response.json().await?)
    }

    /// Fetch the lessons matching a server-side search query.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn search_lessons(&self, query: &str) -> Result<Vec<Lesson>, RemoteError> {
        let url = format!("{}/search/lessons", self.config.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await?;

        let response = Self::require_success(response, "search lessons").await?;

        Ok(response.json().await?)
    }

    /// Persist a lesson's remaining capacity, returning the updated lesson.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn update_spaces(&self, id: &LessonId, spaces: u64) -> Result<Lesson, RemoteError> {
        let url = format!("{}/collection/lessons/{id}", self.config.base_url);

        let body = serde_json::json!({ "spaces": spaces });

        let response = self.http.put(&url).json(&body).send().await?;

        let response = Self::require_success(response, "update spaces").await?;

        Ok(response.json().await?)
    }

    /// Submit a completed order.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, an unexpected response body, or when
    /// the service declines the order.
    pub async fn submit_order(&self, order: &Order) -> Result<(), RemoteError> {
        let url = format!("{}/orders", self.config.base_url);

        let response = self.http.post(&url).json(order).send().await?;

        let response = Self::require_success(response, "submit order").await?;

        let parsed: OrderResponse = response.json().await?;

        if parsed.success {
            Ok(())
        } else {
            Err(RemoteError::OrderRejected)
        }
    }

    async fn require_success(
        response: reqwest::Response,
        operation: &str,
    ) -> Result<reqwest::Response, RemoteError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        Err(RemoteError::UnexpectedResponse(format!(
            "{operation} request failed with status {status}: {text}"
        )))
    }
}

#[derive(Debug, Deserialize)]
struct OrderResponse {
    success: bool,
}
