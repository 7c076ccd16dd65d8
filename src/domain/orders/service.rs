//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::domain::{
    cart::Cart,
    identity::Identity,
    orders::{
        errors::{OrderStoreError, PlaceOrderError},
        models::{NewOrder, Order, OrderId},
    },
};

/// Remote order store port.
///
/// The store is the sole source of order id generation; a create is a single
/// atomic write.
#[automock]
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Durably record an order, returning the store-assigned id.
    async fn create_order(&self, order: NewOrder) -> Result<OrderId, OrderStoreError>;
}

/// Places orders against a remote [`OrderStore`].
#[derive(Clone)]
pub struct OrdersService {
    store: Arc<dyn OrderStore>,
}

impl OrdersService {
    #[must_use]
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Commit the cart as a new order attributed to `identity`.
    ///
    /// Without an authenticated identity this fails immediately with
    /// [`PlaceOrderError::NotAuthenticated`] and performs no remote call.
    /// A store failure surfaces as [`PlaceOrderError::Commit`]; the cart is
    /// untouched and the caller may retry.
    ///
    /// No idempotency key is sent, so a retry after an ambiguous transport
    /// failure whose write actually landed can create a duplicate order.
    ///
    /// # Errors
    ///
    /// Returns an error when no identity is present or the remote write
    /// fails.
    pub async fn place_order(
        &self,
        cart: &Cart,
        identity: Option<&Identity>,
    ) -> Result<Order, PlaceOrderError> {
        let Some(identity) = identity else {
            return Err(PlaceOrderError::NotAuthenticated);
        };

        let total = cart.total();

        let order_id = self
            .store
            .create_order(NewOrder {
                items: cart.items().to_vec(),
                total,
                user_id: identity.user_id.clone(),
            })
            .await
            .map_err(PlaceOrderError::Commit)?;

        tracing::info!(
            order_id = %order_id,
            items = cart.len(),
            total = %total,
            "order committed"
        );

        Ok(Order {
            order_id,
            items: cart.items().iter().map(|item| item.id.clone()).collect(),
            placed_at: Timestamp::now(),
        })
    }
}
