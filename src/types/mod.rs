//! Core data types for the Notify API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placeholder substitutions applied to a template when rendering.
pub type Personalisation = HashMap<String, String>;

/// Template reference returned as part of a notification response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    /// Template ID.
    pub id: i64,
    /// Template resource URI.
    pub uri: String,
    /// Template version.
    pub version: i64,
}

/// Pagination links returned as part of a list response.
///
/// Each link is a relative URL (path plus query), empty when the
/// corresponding page does not exist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLinks {
    /// Link to the current page.
    pub current: String,
    /// Link to the next page.
    pub next: String,
    /// Link to the previous page.
    pub previous: String,
}

impl PageLinks {
    /// Returns true if there is a next page.
    pub fn has_next(&self) -> bool {
        !self.next.is_empty()
    }

    /// Returns true if there is a previous page.
    pub fn has_previous(&self) -> bool {
        !self.previous.is_empty()
    }
}

/// A previously sent or received notification.
///
/// Produced only by deserializing API responses; fields absent from the
/// body decode to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    /// Notification ID.
    pub id: String,
    /// Rendered message body.
    pub body: String,
    /// Rendered subject (email only).
    pub subject: String,
    /// Caller-supplied reference.
    pub reference: String,
    /// Recipient email address (email only).
    pub email_address: String,
    /// Recipient phone number (SMS only).
    pub phone_number: String,
    /// Address line 1 (letter only).
    pub line_1: String,
    /// Address line 2 (letter only).
    pub line_2: String,
    /// Address line 3 (letter only).
    pub line_3: String,
    /// Address line 4 (letter only).
    pub line_4: String,
    /// Address line 5 (letter only).
    pub line_5: String,
    /// Address line 6 (letter only).
    pub line_6: String,
    /// Postcode (letter only).
    pub postcode: String,
    /// Notification type (email, sms or letter).
    #[serde(rename = "type")]
    pub notification_type: String,
    /// Delivery status.
    pub status: String,
    /// Template used to render the notification.
    pub template: Template,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Dispatch time.
    pub sent_at: Option<DateTime<Utc>>,
}

/// Acknowledgment returned when a send succeeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationEntry {
    /// Rendered content keyed by part (e.g. body, subject).
    pub content: HashMap<String, String>,
    /// ID assigned to the new notification.
    pub id: String,
    /// Caller-supplied reference.
    pub reference: String,
    /// Template used for the send.
    pub template: Template,
    /// Resource URI of the new notification.
    pub uri: String,
}
