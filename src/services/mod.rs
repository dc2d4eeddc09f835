//! API services.

pub mod notifications;

pub use notifications::{Channel, NotificationList, NotificationsService, SendRequest};
