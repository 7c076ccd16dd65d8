//! App Context

use std::sync::Arc;

use crate::domain::{
    notifications::{
        Notify,
        http::{HttpNotifyService, NotifyConfig},
    },
    orders::{
        OrderStore,
        http::{HttpOrderStore, StoreConfig},
    },
};

/// Deep-link prefix used in confirmation notifications by default.
pub const DEFAULT_LINK_SCHEME: &str = "folio://";

/// Collaborator wiring shared by checkout instances.
#[derive(Clone)]
pub struct AppContext {
    /// Remote order store.
    pub orders: Arc<dyn OrderStore>,

    /// Notification scheduler.
    pub notify: Arc<dyn Notify>,

    /// Deep-link prefix for confirmation notifications.
    pub link_scheme: String,
}

impl AppContext {
    /// Build a context over the given collaborators.
    pub fn new(
        orders: Arc<dyn OrderStore>,
        notify: Arc<dyn Notify>,
        link_scheme: impl Into<String>,
    ) -> Self {
        Self {
            orders,
            notify,
            link_scheme: link_scheme.into(),
        }
    }

    /// Build a context backed by the HTTP adapters.
    #[must_use]
    pub fn from_backend(store: StoreConfig, notify: NotifyConfig) -> Self {
        Self {
            orders: Arc::new(HttpOrderStore::new(store)),
            notify: Arc::new(HttpNotifyService::new(notify)),
            link_scheme: DEFAULT_LINK_SCHEME.to_string(),
        }
    }
}
