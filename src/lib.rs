//! # Notify Integration Library
//!
//! A typed client for the GOV.UK Notify API with:
//! - Email, SMS and letter sending from pre-registered templates
//! - Notification lookup and filtered listing
//! - Cursor-based forward/backward pagination over list results
//! - JWT (HS256) request authentication
//! - Structured API error reporting
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_notify::{NotifyClient, NotifyConfig, Personalisation};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NotifyConfig::builder()
//!         .service_id("my-service-id")
//!         .api_key("my-api-key")
//!         .build()?;
//!
//!     let client = NotifyClient::new(config)?;
//!
//!     let mut personalisation = Personalisation::new();
//!     personalisation.insert("name".into(), "Jo".into());
//!
//!     let entry = client
//!         .notifications()
//!         .send_email("jo@example.com", "template-id", personalisation, "ref-001")
//!         .await?;
//!     println!("queued notification {}", entry.id);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod errors;
pub mod types;

// Authentication
pub mod auth;

// List filters
pub mod filters;

// HTTP client and transport
pub mod client;

// API services
pub mod services;

// Re-exports for convenience
pub use client::{NotifyClient, NotifyClientBuilder};
pub use config::{NotifyConfig, NotifyConfigBuilder};
pub use errors::{ApiErrorDetail, NotifyError, NotifyErrorKind, NotifyResult};
pub use filters::NotificationFilters;
pub use services::notifications::{Channel, NotificationList, NotificationsService};
pub use types::*;
