//! Notifications service.

use async_trait::async_trait;
use mockall::automock;

use crate::domain::{
    cart::Cart,
    notifications::{
        errors::NotifyError,
        models::{NotificationRequest, OrderConfirmation, PushToken},
    },
    orders::models::OrderId,
};

/// Notification collaborator port.
///
/// Delivery and OS-level permission prompts are the collaborator's problem;
/// this port only submits requests. The contract is at-most-once with no
/// delivery guarantee, so nothing in the purchase flow may depend on a
/// schedule call succeeding.
#[automock]
#[async_trait]
pub trait Notify: Send + Sync {
    /// Submit one schedule request.
    async fn schedule(&self, request: NotificationRequest) -> Result<(), NotifyError>;

    /// Register this device for push notifications.
    async fn register_push(&self) -> Result<PushToken, NotifyError>;
}

/// Submit one confirmation request per purchased item.
///
/// Each request is independent: a failure is logged and the remaining items
/// are still submitted. Failures never reach the purchaser and never affect
/// the committed order or token rendering.
pub async fn send_confirmations(
    notify: &dyn Notify,
    link_scheme: &str,
    order_id: &OrderId,
    cart: &Cart,
) {
    for item in cart.items() {
        let confirmation = OrderConfirmation {
            order_id: order_id.clone(),
            book_title: item.title.clone(),
        };

        if let Err(error) = notify.schedule(confirmation.request(link_scheme)).await {
            tracing::warn!(
                order_id = %order_id,
                book_title = %item.title,
                %error,
                "confirmation notification failed"
            );
        }
    }
}

/// Best-effort push registration for this device.
///
/// Returns `None` on failure; registration problems are logged, never fatal.
pub async fn register_push(notify: &dyn Notify) -> Option<PushToken> {
    match notify.register_push().await {
        Ok(token) => Some(token),
        Err(error) => {
            tracing::warn!(%error, "push registration failed");
            None
        }
    }
}
