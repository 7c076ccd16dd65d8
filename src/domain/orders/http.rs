//! HTTP order store adapter.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::orders::{
    errors::OrderStoreError,
    models::{NewOrder, OrderId},
    service::OrderStore,
};

/// Configuration for connecting to the remote order store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Backend address, e.g. `"https://api.example.com"`.
    pub base_url: String,

    /// Bearer token for the authenticated session.
    pub auth_token: String,
}

/// HTTP client for the remote order collection.
///
/// Posts the order record and parses the store-assigned id; `createdAt` is
/// assigned server-side.
#[derive(Debug, Clone)]
pub struct HttpOrderStore {
    config: StoreConfig,
    http: Client,
}

impl HttpOrderStore {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl OrderStore for HttpOrderStore {
    async fn create_order(&self, order: NewOrder) -> Result<OrderId, OrderStoreError> {
        let url = format!(
            "{}/v1/collections/orders/documents",
            self.config.base_url
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.auth_token)
            .json(&order)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(OrderStoreError::UnexpectedResponse(format!(
                "create order failed with status {status}: {text}"
            )));
        }

        let parsed: CreateOrderResponse = response.json().await?;

        Ok(OrderId::from(parsed.id))
    }
}

#[derive(Debug, Deserialize)]
struct CreateOrderResponse {
    id: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::cart::{CartItem, Price};

    use super::*;

    #[test]
    fn order_record_matches_store_shape() {
        let order = NewOrder {
            items: vec![CartItem {
                id: "a".to_string(),
                title: "Book A".to_string(),
                price: Price::from_minor(10),
                file_url: None,
            }],
            total: Price::from_minor(10),
            user_id: "u1".to_string(),
        };

        let body = serde_json::to_value(&order).expect("order record should serialize");

        assert_eq!(
            body,
            json!({
                "items": [{"id": "a", "title": "Book A", "price": 10}],
                "total": 10,
                "userId": "u1",
            })
        );
    }

    #[test]
    fn create_order_response_parses_assigned_id() {
        let parsed: CreateOrderResponse =
            serde_json::from_value(json!({"id": "order-9"}))
                .expect("response body should deserialize");

        assert_eq!(parsed.id, "order-9");
    }
}
