//! Query filters for listing notifications.

use serde::Serialize;

/// Filters applied when listing notifications.
///
/// Unset and empty fields are omitted from the query string entirely, so a
/// present key always carries a non-empty value. The setters normalize empty
/// values to unset; encoding skips empty strings as well, covering fields
/// assigned directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NotificationFilters {
    /// Cursor: only return notifications older than this ID.
    #[serde(skip_serializing_if = "unset")]
    pub older_than: Option<String>,
    /// Caller-supplied reference to match.
    #[serde(skip_serializing_if = "unset")]
    pub reference: Option<String>,
    /// Delivery status to match.
    #[serde(skip_serializing_if = "unset")]
    pub status: Option<String>,
    /// Template type to match (email, sms or letter).
    #[serde(skip_serializing_if = "unset")]
    pub template_type: Option<String>,
}

impl NotificationFilters {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the older-than cursor.
    pub fn older_than(mut self, id: impl Into<String>) -> Self {
        self.older_than = non_empty(id.into());
        self
    }

    /// Sets the reference filter.
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = non_empty(reference.into());
        self
    }

    /// Sets the status filter.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = non_empty(status.into());
        self
    }

    /// Sets the template type filter.
    pub fn template_type(mut self, template_type: impl Into<String>) -> Self {
        self.template_type = non_empty(template_type.into());
        self
    }

    /// Returns true if no filter field would reach the query string.
    pub fn is_empty(&self) -> bool {
        unset(&self.older_than)
            && unset(&self.reference)
            && unset(&self.status)
            && unset(&self.template_type)
    }

    /// Converts to query parameters, omitting unset and empty fields.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        Self::add_if_set(&mut params, "older_than", &self.older_than);
        Self::add_if_set(&mut params, "reference", &self.reference);
        Self::add_if_set(&mut params, "status", &self.status);
        Self::add_if_set(&mut params, "template_type", &self.template_type);
        params
    }

    fn add_if_set(params: &mut Vec<(String, String)>, key: &str, value: &Option<String>) {
        if !unset(value) {
            params.push((key.to_string(), value.clone().unwrap_or_default()));
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

// Skip predicate for serialization: absent or empty, either way the key
// must not reach the query string.
fn unset(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}
