//! Notify API client implementation.

use crate::auth::TokenIssuer;
use crate::config::{NotifyConfig, NotifyConfigBuilder};
use crate::errors::{ApiErrorDetail, NotifyError, NotifyResult};
use crate::filters::NotificationFilters;
use crate::services::notifications::NotificationsService;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Response};
use serde::{de::DeserializeOwned, Serialize};

/// Notify API client.
///
/// Cheap to share by reference: holds no per-call state beyond the token
/// claims cached on first authentication.
pub struct NotifyClient {
    /// HTTP client.
    http: Client,
    /// Configuration.
    config: NotifyConfig,
    /// Token issuer.
    auth: TokenIssuer,
}

impl NotifyClient {
    /// Creates a new Notify client.
    pub fn new(config: NotifyConfig) -> NotifyResult<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool.max_idle_per_host)
            .pool_idle_timeout(config.pool.idle_timeout)
            .build()
            .map_err(|e| {
                NotifyError::configuration(format!("failed to create HTTP client: {}", e))
            })?;

        let auth = TokenIssuer::new(config.service_id.clone(), config.api_key.clone());

        Ok(Self { http, config, auth })
    }

    /// Creates a new client builder.
    pub fn builder() -> NotifyClientBuilder {
        NotifyClientBuilder::new()
    }

    /// Gets the base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Gets the notifications service.
    pub fn notifications(&self) -> NotificationsService<'_> {
        NotificationsService::new(self)
    }

    // HTTP methods

    /// Makes a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> NotifyResult<T> {
        let url = self.build_url(path);
        let response = self.execute(Method::GET, url, None).await?;
        Self::decode(response).await
    }

    /// Makes a GET request with encoded filter parameters.
    pub(crate) async fn get_with_filters<T: DeserializeOwned>(
        &self,
        path: &str,
        filters: &NotificationFilters,
    ) -> NotifyResult<T> {
        let mut url = self.build_url(path);

        let query = serde_urlencoded::to_string(filters).map_err(|e| {
            NotifyError::transport(format!("failed to encode query parameters: {}", e))
        })?;
        if !query.is_empty() {
            url = format!("{}?{}", url, query);
        }

        let response = self.execute(Method::GET, url, None).await?;
        Self::decode(response).await
    }

    /// Makes a POST request with a JSON body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> NotifyResult<T> {
        let url = self.build_url(path);

        let bytes = serde_json::to_vec(body).map_err(|e| {
            NotifyError::transport(format!("failed to serialize request body: {}", e))
        })?;

        let response = self.execute(Method::POST, url, Some(bytes)).await?;
        Self::decode(response).await
    }

    // Internal methods

    async fn execute(
        &self,
        method: Method,
        url: String,
        body: Option<Vec<u8>>,
    ) -> NotifyResult<Response> {
        let token = self.auth.bearer_token().await?;

        let mut request = self
            .http
            .request(method.clone(), url.as_str())
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(USER_AGENT, &self.config.user_agent)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");

        if let Some(bytes) = body {
            request = request.body(bytes);
        }

        tracing::debug!(%method, %url, "dispatching request");

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                NotifyError::timeout(format!("request timed out: {}", e))
            } else if e.is_connect() {
                NotifyError::connection(format!("connection failed: {}", e))
            } else {
                NotifyError::transport(format!("request failed: {}", e))
            }
        })?;

        Self::check_status(response).await
    }

    /// Fails with a decoded API error when the status is an error status.
    async fn check_status(response: Response) -> NotifyResult<Response> {
        let status = response.status();
        if status.as_u16() < 400 {
            return Ok(response);
        }

        tracing::debug!(status = status.as_u16(), "api returned an error status");

        let bytes = response.bytes().await.map_err(|e| {
            NotifyError::transport(format!("failed to read error response body: {}", e))
        })?;

        let details: Vec<ApiErrorDetail> = serde_json::from_slice(&bytes).map_err(|e| {
            NotifyError::deserialization(format!("failed to decode error response body: {}", e))
                .with_status(status.as_u16())
                .with_cause(e)
        })?;

        Err(NotifyError::from_response(status.as_u16(), details))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> NotifyResult<T> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| NotifyError::transport(format!("failed to read response body: {}", e)))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            NotifyError::deserialization(format!("failed to decode response body: {}", e))
                .with_cause(e)
        })
    }

    fn build_url(&self, path: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

/// Builder for NotifyClient.
pub struct NotifyClientBuilder {
    config_builder: NotifyConfigBuilder,
}

impl NotifyClientBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            config_builder: NotifyConfig::builder(),
        }
    }

    /// Sets the service ID.
    pub fn service_id(mut self, id: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.service_id(id);
        self
    }

    /// Sets the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.api_key(key);
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(url);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.user_agent(ua);
        self
    }

    /// Builds the client.
    pub fn build(self) -> NotifyResult<NotifyClient> {
        let config = self.config_builder.build()?;
        NotifyClient::new(config)
    }
}

impl Default for NotifyClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> NotifyClient {
        NotifyClient::builder()
            .service_id("test-service")
            .api_key("test-key")
            .base_url("https://notify.example.com")
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_url() {
        let client = client();

        assert_eq!(
            client.build_url("/v2/notifications"),
            "https://notify.example.com/v2/notifications"
        );
        assert_eq!(
            client.build_url("v2/notifications"),
            "https://notify.example.com/v2/notifications"
        );
        // Pagination links arrive with a query attached.
        assert_eq!(
            client.build_url("/v2/notifications?older_than=abc"),
            "https://notify.example.com/v2/notifications?older_than=abc"
        );
    }

    #[test]
    fn test_client_builder() {
        let result = NotifyClient::builder()
            .service_id("test-service")
            .api_key("test-key")
            .user_agent("test-client/1.0")
            .build();

        assert!(result.is_ok());
    }

    #[test]
    fn test_client_builder_rejects_missing_credentials() {
        let result = NotifyClient::builder().build();
        assert!(result.is_err());
    }
}
