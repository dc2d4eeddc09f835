//! Error types for the Notify client.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias for Notify operations.
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Error kinds for categorizing Notify errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyErrorKind {
    // Configuration errors
    /// Invalid configuration.
    InvalidConfiguration,
    /// Invalid base URL.
    InvalidBaseUrl,

    // Authentication errors
    /// Token signing failed.
    AuthenticationFailed,

    // Network errors
    /// Connection failed.
    ConnectionFailed,
    /// Request timeout.
    Timeout,
    /// Other transport-level failure.
    TransportError,

    // API errors (status >= 400)
    /// Request rejected by the API (400).
    BadRequest,
    /// Authorization rejected by the API (401/403).
    AuthorizationFailed,
    /// Resource not found (404).
    NotFound,
    /// Too many requests (429).
    TooManyRequests,
    /// API-side server error (5xx).
    ServerError,
    /// Other error status returned by the API.
    ApiError,

    // Response errors
    /// Failed to deserialize a response body.
    DeserializationError,

    // Pagination errors
    /// No adjacent page to fetch.
    NoFurtherPage,
}

impl fmt::Display for NotifyErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration => write!(f, "invalid_configuration"),
            Self::InvalidBaseUrl => write!(f, "invalid_base_url"),
            Self::AuthenticationFailed => write!(f, "authentication_failed"),
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::TransportError => write!(f, "transport_error"),
            Self::BadRequest => write!(f, "bad_request"),
            Self::AuthorizationFailed => write!(f, "authorization_failed"),
            Self::NotFound => write!(f, "not_found"),
            Self::TooManyRequests => write!(f, "too_many_requests"),
            Self::ServerError => write!(f, "server_error"),
            Self::ApiError => write!(f, "api_error"),
            Self::DeserializationError => write!(f, "deserialization_error"),
            Self::NoFurtherPage => write!(f, "no_further_page"),
        }
    }
}

/// One error entry returned in an API error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    /// Error classification reported by the API (e.g. `NoResultFound`).
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Notify API error with detailed information.
#[derive(Error, Debug)]
pub struct NotifyError {
    /// Error kind.
    kind: NotifyErrorKind,
    /// Error message.
    message: String,
    /// HTTP status code.
    status_code: Option<u16>,
    /// Error entries decoded from the API error body, in response order.
    api_errors: Vec<ApiErrorDetail>,
    /// Underlying cause.
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(code) = self.status_code {
            write!(f, " (HTTP {})", code)?;
        }
        for detail in &self.api_errors {
            write!(f, "; {}: {}", detail.error, detail.message)?;
        }
        Ok(())
    }
}

impl NotifyError {
    /// Creates a new Notify error.
    pub fn new(kind: NotifyErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: None,
            api_errors: Vec::new(),
            cause: None,
        }
    }

    /// Sets the HTTP status code.
    pub fn with_status(mut self, code: u16) -> Self {
        self.status_code = Some(code);
        self
    }

    /// Sets the decoded API error entries.
    pub fn with_api_errors(mut self, errors: Vec<ApiErrorDetail>) -> Self {
        self.api_errors = errors;
        self
    }

    /// Sets the underlying cause.
    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Gets the error kind.
    pub fn kind(&self) -> &NotifyErrorKind {
        &self.kind
    }

    /// Gets the HTTP status code.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Gets the API error entries, in the order the API returned them.
    pub fn api_errors(&self) -> &[ApiErrorDetail] {
        &self.api_errors
    }

    /// Returns true if the error originated from an error status response.
    pub fn is_api_error(&self) -> bool {
        matches!(
            self.kind,
            NotifyErrorKind::BadRequest
                | NotifyErrorKind::AuthorizationFailed
                | NotifyErrorKind::NotFound
                | NotifyErrorKind::TooManyRequests
                | NotifyErrorKind::ServerError
                | NotifyErrorKind::ApiError
        )
    }

    /// Creates an error from an error status response.
    pub fn from_response(status: u16, errors: Vec<ApiErrorDetail>) -> Self {
        let kind = Self::kind_from_status(status);
        Self::new(kind, "api returned an error status")
            .with_status(status)
            .with_api_errors(errors)
    }

    /// Maps HTTP status code to error kind.
    fn kind_from_status(status: u16) -> NotifyErrorKind {
        match status {
            400 => NotifyErrorKind::BadRequest,
            401 | 403 => NotifyErrorKind::AuthorizationFailed,
            404 => NotifyErrorKind::NotFound,
            429 => NotifyErrorKind::TooManyRequests,
            500..=599 => NotifyErrorKind::ServerError,
            _ => NotifyErrorKind::ApiError,
        }
    }

    // Convenience constructors

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(NotifyErrorKind::InvalidConfiguration, message)
    }

    /// Creates an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(NotifyErrorKind::AuthenticationFailed, message)
    }

    /// Creates a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(NotifyErrorKind::Timeout, message)
    }

    /// Creates a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::new(NotifyErrorKind::ConnectionFailed, message)
    }

    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(NotifyErrorKind::TransportError, message)
    }

    /// Creates a deserialization error.
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::new(NotifyErrorKind::DeserializationError, message)
    }

    /// Creates a pagination error.
    pub fn no_further_page(message: impl Into<String>) -> Self {
        Self::new(NotifyErrorKind::NoFurtherPage, message)
    }
}
