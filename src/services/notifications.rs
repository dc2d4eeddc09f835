//! Notification operations: send, lookup, list and paginate.

use crate::client::NotifyClient;
use crate::config::{PATH_NOTIFICATIONS, PATH_SEND_EMAIL, PATH_SEND_LETTER, PATH_SEND_SMS};
use crate::errors::{NotifyError, NotifyResult};
use crate::filters::NotificationFilters;
use crate::types::{Notification, NotificationEntry, PageLinks, Personalisation};
use serde::{Deserialize, Serialize};

/// Delivery channel, carrying the channel-specific recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Channel {
    /// Email to the given address.
    Email(String),
    /// SMS to the given phone number.
    Sms(String),
    /// Letter with the given body.
    Letter(String),
}

impl Channel {
    /// Endpoint path for sends on this channel.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Email(_) => PATH_SEND_EMAIL,
            Self::Sms(_) => PATH_SEND_SMS,
            Self::Letter(_) => PATH_SEND_LETTER,
        }
    }
}

/// Wire payload for a send request.
///
/// Exactly one recipient field is populated, selected by the [`Channel`]
/// passed at construction. Recipient format is not validated here; that is
/// the API's concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendRequest {
    /// Recipient email address (email channel).
    pub email_address: String,
    /// Letter body (letter channel).
    pub letter: String,
    /// Placeholder substitutions, passed through unchanged.
    pub personalisation: Personalisation,
    /// Recipient phone number (SMS channel).
    pub phone_number: String,
    /// Caller-supplied reference.
    pub reference: String,
    /// Template to render.
    pub template_id: String,
}

impl SendRequest {
    /// Builds a payload for the given channel.
    pub fn new(
        channel: Channel,
        template_id: impl Into<String>,
        personalisation: Personalisation,
        reference: impl Into<String>,
    ) -> Self {
        let mut request = Self {
            personalisation,
            reference: reference.into(),
            template_id: template_id.into(),
            ..Self::default()
        };

        match channel {
            Channel::Email(address) => request.email_address = address,
            Channel::Sms(number) => request.phone_number = number,
            Channel::Letter(body) => request.letter = body,
        }

        request
    }
}

/// One page of a notification list, as returned on the wire.
#[derive(Debug, Deserialize)]
struct ListPage {
    #[serde(default)]
    notifications: Vec<Notification>,
    #[serde(default)]
    links: PageLinks,
}

/// Service for notification operations.
pub struct NotificationsService<'a> {
    client: &'a NotifyClient,
}

impl<'a> NotificationsService<'a> {
    /// Creates a new notifications service.
    pub fn new(client: &'a NotifyClient) -> Self {
        Self { client }
    }

    /// Gets a notification by ID.
    pub async fn get(&self, id: &str) -> NotifyResult<Notification> {
        self.client
            .get(&format!("{}/{}", PATH_NOTIFICATIONS, id))
            .await
    }

    /// Lists notifications matching the given filters.
    ///
    /// The returned list borrows the client so adjacent pages can be
    /// fetched with [`NotificationList::next`] and
    /// [`NotificationList::previous`].
    pub async fn list(&self, filters: NotificationFilters) -> NotifyResult<NotificationList<'a>> {
        let page: ListPage = self
            .client
            .get_with_filters(PATH_NOTIFICATIONS, &filters)
            .await?;

        Ok(NotificationList {
            client: self.client,
            notifications: page.notifications,
            links: page.links,
        })
    }

    /// Sends an email notification.
    pub async fn send_email(
        &self,
        email_address: impl Into<String>,
        template_id: impl Into<String>,
        personalisation: Personalisation,
        reference: impl Into<String>,
    ) -> NotifyResult<NotificationEntry> {
        self.send(
            Channel::Email(email_address.into()),
            template_id,
            personalisation,
            reference,
        )
        .await
    }

    /// Sends an SMS notification.
    pub async fn send_sms(
        &self,
        phone_number: impl Into<String>,
        template_id: impl Into<String>,
        personalisation: Personalisation,
        reference: impl Into<String>,
    ) -> NotifyResult<NotificationEntry> {
        self.send(
            Channel::Sms(phone_number.into()),
            template_id,
            personalisation,
            reference,
        )
        .await
    }

    /// Sends a letter notification.
    pub async fn send_letter(
        &self,
        letter: impl Into<String>,
        template_id: impl Into<String>,
        personalisation: Personalisation,
        reference: impl Into<String>,
    ) -> NotifyResult<NotificationEntry> {
        self.send(
            Channel::Letter(letter.into()),
            template_id,
            personalisation,
            reference,
        )
        .await
    }

    /// Sends a notification on the given channel.
    pub async fn send(
        &self,
        channel: Channel,
        template_id: impl Into<String>,
        personalisation: Personalisation,
        reference: impl Into<String>,
    ) -> NotifyResult<NotificationEntry> {
        let path = channel.endpoint();
        let request = SendRequest::new(channel, template_id, personalisation, reference);
        self.client.post(path, &request).await
    }
}

/// A page of notifications with a cursor to its neighbours.
///
/// Borrows the owning client; fetching an adjacent page replaces the
/// contents and links in place. One page per call, no prefetching.
pub struct NotificationList<'a> {
    client: &'a NotifyClient,
    /// Notifications on the current page.
    pub notifications: Vec<Notification>,
    /// Links to adjacent pages.
    pub links: PageLinks,
}

impl NotificationList<'_> {
    /// Returns true if there is a next page.
    pub fn has_next(&self) -> bool {
        self.links.has_next()
    }

    /// Returns true if there is a previous page.
    pub fn has_previous(&self) -> bool {
        self.links.has_previous()
    }

    /// Loads the next page in place of the current one.
    pub async fn next(&mut self) -> NotifyResult<()> {
        if !self.has_next() {
            return Err(NotifyError::no_further_page("already on the last page"));
        }
        let link = self.links.next.clone();
        self.load(&link).await
    }

    /// Loads the previous page in place of the current one.
    pub async fn previous(&mut self) -> NotifyResult<()> {
        if !self.has_previous() {
            return Err(NotifyError::no_further_page("already on the first page"));
        }
        let link = self.links.previous.clone();
        self.load(&link).await
    }

    // Contents are only replaced once the fetch and decode both succeed.
    async fn load(&mut self, link: &str) -> NotifyResult<()> {
        let page: ListPage = self.client.get(link).await?;
        self.notifications = page.notifications;
        self.links = page.links;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn personalisation() -> Personalisation {
        let mut p = Personalisation::new();
        p.insert("name".into(), "Jo".into());
        p
    }

    #[test]
    fn test_sms_payload_routes_phone_number() {
        let request = SendRequest::new(
            Channel::Sms("00000000000".into()),
            "12345",
            personalisation(),
            "123456qwerty",
        );

        assert_eq!(request.phone_number, "00000000000");
        assert_eq!(request.reference, "123456qwerty");
        assert_eq!(request.template_id, "12345");
        assert_eq!(request.personalisation["name"], "Jo");
        assert!(request.email_address.is_empty());
        assert!(request.letter.is_empty());
    }

    #[test]
    fn test_email_payload_routes_address() {
        let request = SendRequest::new(
            Channel::Email("test@example.com".into()),
            "12345",
            Personalisation::new(),
            "ref",
        );

        assert_eq!(request.email_address, "test@example.com");
        assert!(request.phone_number.is_empty());
        assert!(request.letter.is_empty());
    }

    #[test]
    fn test_letter_payload_routes_body() {
        let request = SendRequest::new(
            Channel::Letter("xxx".into()),
            "12345",
            Personalisation::new(),
            "ref",
        );

        assert_eq!(request.letter, "xxx");
        assert!(request.email_address.is_empty());
        assert!(request.phone_number.is_empty());
    }

    #[test]
    fn test_channel_endpoints() {
        assert_eq!(
            Channel::Email(String::new()).endpoint(),
            "/v2/notifications/email"
        );
        assert_eq!(Channel::Sms(String::new()).endpoint(), "/v2/notifications/sms");
        assert_eq!(
            Channel::Letter(String::new()).endpoint(),
            "/v2/notifications/letter"
        );
    }

    #[test]
    fn test_payload_wire_shape() {
        let request = SendRequest::new(
            Channel::Sms("07700900000".into()),
            "12345",
            Personalisation::new(),
            "ref",
        );

        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();

        // All six wire fields are always present; unused recipients stay empty.
        for field in [
            "email_address",
            "letter",
            "personalisation",
            "phone_number",
            "reference",
            "template_id",
        ] {
            assert!(object.contains_key(field), "missing {}", field);
        }
        assert_eq!(object["phone_number"], "07700900000");
        assert_eq!(object["email_address"], "");
    }
}
