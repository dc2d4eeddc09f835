//! Configuration types for the Notify client.

use crate::errors::{NotifyError, NotifyErrorKind};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

/// Default Notify API base URL (production).
pub const DEFAULT_BASE_URL: &str = "https://api.notifications.service.gov.uk";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default User-Agent header.
pub const DEFAULT_USER_AGENT: &str = concat!("integrations-notify/", env!("CARGO_PKG_VERSION"));

/// Path for listing notifications.
pub const PATH_NOTIFICATIONS: &str = "/v2/notifications";

/// Path for sending an email notification.
pub const PATH_SEND_EMAIL: &str = "/v2/notifications/email";

/// Path for sending a letter notification.
pub const PATH_SEND_LETTER: &str = "/v2/notifications/letter";

/// Path for sending an SMS notification.
pub const PATH_SEND_SMS: &str = "/v2/notifications/sms";

/// Connection pool configuration.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum idle connections per host.
    pub max_idle_per_host: usize,
    /// Idle connection timeout.
    pub idle_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 20,
            idle_timeout: Duration::from_secs(90),
        }
    }
}

/// Notify client configuration.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    /// Service ID, used as the token issuer claim.
    pub service_id: String,
    /// API key used to sign request tokens.
    pub api_key: SecretString,
    /// API base URL.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// User-Agent header.
    pub user_agent: String,
    /// Connection pool configuration.
    pub pool: PoolConfig,
}

impl NotifyConfig {
    /// Creates a configuration with defaults for the given credentials.
    pub fn new(service_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
            api_key: SecretString::new(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            pool: PoolConfig::default(),
        }
    }

    /// Creates a new configuration builder.
    pub fn builder() -> NotifyConfigBuilder {
        NotifyConfigBuilder::new()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), NotifyError> {
        if self.service_id.is_empty() {
            return Err(NotifyError::configuration("service ID cannot be empty"));
        }

        if self.api_key.expose_secret().is_empty() {
            return Err(NotifyError::configuration("API key cannot be empty"));
        }

        if self.base_url.is_empty() {
            return Err(NotifyError::new(
                NotifyErrorKind::InvalidBaseUrl,
                "base URL cannot be empty",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(NotifyError::new(
                NotifyErrorKind::InvalidBaseUrl,
                "base URL must start with http:// or https://",
            ));
        }

        Url::parse(&self.base_url).map_err(|e| {
            NotifyError::new(
                NotifyErrorKind::InvalidBaseUrl,
                format!("base URL failed to parse: {}", e),
            )
        })?;

        if self.user_agent.is_empty() {
            return Err(NotifyError::configuration("User-Agent cannot be empty"));
        }

        Ok(())
    }
}

/// Builder for NotifyConfig.
#[derive(Debug, Default)]
pub struct NotifyConfigBuilder {
    service_id: Option<String>,
    api_key: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    pool: Option<PoolConfig>,
}

impl NotifyConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service ID.
    pub fn service_id(mut self, id: impl Into<String>) -> Self {
        self.service_id = Some(id.into());
        self
    }

    /// Sets the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the connection pool configuration.
    pub fn pool(mut self, config: PoolConfig) -> Self {
        self.pool = Some(config);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Result<NotifyConfig, NotifyError> {
        let config = NotifyConfig {
            service_id: self.service_id.unwrap_or_default(),
            api_key: self
                .api_key
                .unwrap_or_else(|| SecretString::new(String::new())),
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            user_agent: self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            pool: self.pool.unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }
}
