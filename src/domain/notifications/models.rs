//! Notification Models

use serde::{Serialize, Serializer};

use crate::domain::orders::models::OrderId;

/// Ephemeral confirmation value for one purchased item.
///
/// Fire-and-forget: no acknowledgement is tracked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    /// The committed order this confirmation references.
    pub order_id: OrderId,

    /// Title of the purchased e-book, embedded in the notification body.
    pub book_title: String,
}

impl OrderConfirmation {
    /// Expand into the scheduler request payload.
    ///
    /// `link_scheme` is the app's deep-link prefix (e.g. `"folio://"`); the
    /// link consumed by the surrounding app follows `order/<orderId>`.
    #[must_use]
    pub fn request(&self, link_scheme: &str) -> NotificationRequest {
        NotificationRequest {
            content: NotificationContent {
                title: format!("Your order #{} has been confirmed!", self.order_id),
                body: format!(
                    "Your e-book \"{}\" is ready to download. Tap to access!",
                    self.book_title
                ),
                data: NotificationData {
                    url: format!("{link_scheme}order/{}", self.order_id),
                    order_id: self.order_id.clone(),
                },
                sound: "default".to_string(),
            },
            trigger: Trigger::Immediate,
        }
    }
}

/// A schedule request as the notification collaborator accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationRequest {
    /// What the notification shows and carries.
    pub content: NotificationContent,

    /// When to deliver it.
    pub trigger: Trigger,
}

/// Displayable content of a scheduled notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationContent {
    /// Headline line naming the confirmed order.
    pub title: String,

    /// Body line naming the purchased e-book.
    pub body: String,

    /// Payload for deep-link handling on tap.
    pub data: NotificationData,

    /// Delivery sound, `"default"` for confirmations.
    pub sound: String,
}

/// Payload attached to the notification for deep-link handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationData {
    /// Deep link opened on tap, `<scheme>order/<orderId>`.
    pub url: String,

    /// The confirmed order.
    pub order_id: OrderId,
}

/// Delivery trigger. Immediate serializes as `null`, the scheduler's "now".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Trigger {
    #[default]
    Immediate,
}

impl Serialize for Trigger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Trigger::Immediate => serializer.serialize_none(),
        }
    }
}

/// Opaque device push token returned by registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushToken(pub String);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_expands_order_and_title() {
        let confirmation = OrderConfirmation {
            order_id: OrderId::from("order-7"),
            book_title: "Dune".to_string(),
        };

        let request = confirmation.request("folio://");

        assert_eq!(
            request.content.title,
            "Your order #order-7 has been confirmed!"
        );
        assert_eq!(
            request.content.body,
            "Your e-book \"Dune\" is ready to download. Tap to access!"
        );
        assert_eq!(request.content.data.url, "folio://order/order-7");
        assert_eq!(request.content.data.order_id, OrderId::from("order-7"));
        assert_eq!(request.content.sound, "default");
    }

    #[test]
    fn request_serializes_with_null_trigger() {
        let confirmation = OrderConfirmation {
            order_id: OrderId::from("order-7"),
            book_title: "Dune".to_string(),
        };

        let body = serde_json::to_value(confirmation.request("folio://"))
            .expect("request payload should serialize");

        assert_eq!(body["trigger"], json!(null));
        assert_eq!(body["content"]["sound"], "default");
        assert_eq!(body["content"]["data"]["orderId"], "order-7");
    }
}
