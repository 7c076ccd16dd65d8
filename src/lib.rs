//! Folio
//!
//! Folio is the order-placement and proof-of-purchase core of an e-book
//! storefront: cart totals, remote order commit, per-item access tokens for
//! QR rendering, and order-confirmation notifications, sequenced by an
//! explicit checkout state machine.
//!
//! Persistence, identity, and notification delivery live behind ports
//! ([`domain::orders::OrderStore`], [`domain::notifications::Notify`]); HTTP
//! adapters for a remote backend are provided alongside each port.

pub mod checkout;
pub mod context;
pub mod domain;
