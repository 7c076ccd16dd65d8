//! Checkout
//!
//! The screen-level state machine sequencing cart review, order commit, and
//! proof-of-purchase display. A checkout starts in [`CheckoutState::Reviewing`]
//! and moves to [`CheckoutState::Confirmed`] exactly once, on a successful
//! commit; the only exit from `Confirmed` is [`Checkout::continue_shopping`],
//! which discards all state.

use crate::{
    context::AppContext,
    domain::{
        access::{self, Proof},
        cart::{Cart, Price},
        identity::Identity,
        notifications,
        orders::{OrdersService, PlaceOrderError, models::{Order, OrderId}},
    },
};

/// What the checkout screen is showing.
///
/// Each variant carries exactly the data that state needs, so impossible
/// combinations (QR codes with no committed order) cannot be represented.
#[derive(Debug, Clone)]
pub enum CheckoutState {
    /// Cart and total are displayed; payment has not been attempted or the
    /// last attempt failed.
    Reviewing {
        /// The cart under review.
        cart: Cart,
    },

    /// The order is committed; one access token per item is displayed.
    Confirmed {
        /// Client-side record of the commit.
        order: Order,

        /// The authoritative purchased-items list for token rendering.
        cart: Cart,
    },
}

/// One checkout attempt over a single cart.
pub struct Checkout {
    state: CheckoutState,
    orders: OrdersService,
    ctx: AppContext,
}

impl Checkout {
    /// Start reviewing the given cart.
    #[must_use]
    pub fn new(cart: Cart, ctx: AppContext) -> Self {
        Self {
            state: CheckoutState::Reviewing { cart },
            orders: OrdersService::new(ctx.orders.clone()),
            ctx,
        }
    }

    /// Start reviewing the given cart, registering this device for push
    /// notifications on the way in. Registration is best-effort; a failure
    /// is logged and checkout proceeds regardless.
    pub async fn open(cart: Cart, ctx: AppContext) -> Self {
        // The UI shell forwards the token to its backend; the flow itself
        // only needs registration attempted.
        let _token = notifications::register_push(ctx.notify.as_ref()).await;

        Self::new(cart, ctx)
    }

    /// The current screen state.
    #[must_use]
    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// The cart as displayed: under review, or the purchased list once
    /// confirmed.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        match &self.state {
            CheckoutState::Reviewing { cart } | CheckoutState::Confirmed { cart, .. } => cart,
        }
    }

    /// The displayed total.
    #[must_use]
    pub fn total(&self) -> Price {
        self.cart().total()
    }

    /// Attempt payment.
    ///
    /// In `Reviewing`, commits the cart as an order; on success the checkout
    /// transitions to `Confirmed` and one confirmation notification per item
    /// is submitted best-effort. On failure the state is untouched, the cart
    /// stays visible, and the user may retry.
    ///
    /// In `Confirmed` this is a no-op returning the already-assigned order
    /// id; no second write is reachable.
    ///
    /// Dropping the returned future abandons the await. Before the commit
    /// resolves, the remote write may still land with no local
    /// acknowledgement; once it has resolved the checkout is already
    /// `Confirmed`, so a drop can only cut the confirmation fan-out short.
    ///
    /// # Errors
    ///
    /// Returns an error when no identity is present or the commit fails.
    pub async fn pay(
        &mut self,
        identity: Option<&Identity>,
    ) -> Result<OrderId, PlaceOrderError> {
        let cart = match &mut self.state {
            CheckoutState::Confirmed { order, .. } => {
                tracing::debug!(order_id = %order.order_id, "pay ignored, already confirmed");
                return Ok(order.order_id.clone());
            }
            CheckoutState::Reviewing { cart } => cart,
        };

        let order = self.orders.place_order(cart, identity).await?;
        let cart = std::mem::take(cart);
        let order_id = order.order_id.clone();

        tracing::debug!(order_id = %order_id, "checkout confirmed");

        // Transition before the fan-out: the commit is already durable, and
        // confirmations are a decoupled side effect that must not keep the
        // checkout out of `Confirmed`.
        self.state = CheckoutState::Confirmed { order, cart };

        if let CheckoutState::Confirmed { cart, .. } = &self.state {
            notifications::send_confirmations(
                self.ctx.notify.as_ref(),
                &self.ctx.link_scheme,
                &order_id,
                cart,
            )
            .await;
        }

        Ok(order_id)
    }

    /// One proof of purchase per item, once confirmed.
    #[must_use]
    pub fn proofs(&self) -> Option<Vec<Proof>> {
        match &self.state {
            CheckoutState::Confirmed { cart, .. } => Some(access::proofs(cart)),
            CheckoutState::Reviewing { .. } => None,
        }
    }

    /// The committed order, once confirmed.
    #[must_use]
    pub fn order(&self) -> Option<&Order> {
        match &self.state {
            CheckoutState::Confirmed { order, .. } => Some(order),
            CheckoutState::Reviewing { .. } => None,
        }
    }

    /// Leave the checkout, discarding all of its state.
    ///
    /// A hard reset back to the catalog root rather than a back-navigation:
    /// the consumed checkout cannot return to `Reviewing` for the same cart,
    /// so a confirmed order cannot be re-submitted. A re-entered checkout is
    /// a fresh `Reviewing` instance.
    pub fn continue_shopping(self) {
        if let CheckoutState::Confirmed { order, .. } = &self.state {
            tracing::debug!(order_id = %order.order_id, "leaving checkout");
        }
    }
}
