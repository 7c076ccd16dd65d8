//! Folio Domain Concerns

pub mod access;
pub mod cart;
pub mod identity;
pub mod notifications;
pub mod orders;
