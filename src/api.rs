//! Models and HTTP client for the dashboard backend.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Address of the REST backend. Not configurable at runtime.
pub const BASE_URL: &str = "http://127.0.0.1:8000";

/// An inventory item as the server reports it. Read-only on the client.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub description: String,
}

impl Item {
    /// Label shown for this item in the order form's selector.
    pub fn option_label(&self) -> String {
        format!(
            "{} ({}) - {} available",
            self.name, self.category, self.quantity
        )
    }
}

/// The order form's state, serialized verbatim as the request body. Both
/// fields hold raw form input; the server is the one doing validation.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct OrderRequest {
    pub item_id: String,
    pub quantity: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// A client against a specific base address. Production call sites go
    /// through [`fetch_items`]/[`place_order`] and the fixed [`BASE_URL`].
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
        let response = self.http.get(format!("{}/api/items/", self.base)).send().await?;
        Ok(Self::check_status(response)?.json().await?)
    }

    /// Submits one order. The response body is decoded only to confirm it
    /// parses; nothing beyond the success signal is consumed.
    pub async fn place_order(&self, order: &OrderRequest) -> Result<(), ApiError> {
        let response = self
            .http
            .post(format!("{}/api/orders/", self.base))
            .json(order)
            .send()
            .await?;
        Self::check_status(response)?.json::<serde_json::Value>().await?;
        Ok(())
    }

    fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status(status))
        }
    }
}

pub async fn fetch_items() -> Result<Vec<Item>, ApiError> {
    ApiClient::new(BASE_URL).list_items().await
}

pub async fn place_order(order: &OrderRequest) -> Result<(), ApiError> {
    ApiClient::new(BASE_URL).place_order(order).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn option_label_shows_name_category_and_stock() {
        let item = Item {
            id: 1,
            name: "Widget".into(),
            category: "Tools".into(),
            quantity: 5,
            description: "A widget".into(),
        };
        assert_eq!(item.option_label(), "Widget (Tools) - 5 available");
    }

    #[test]
    fn order_request_starts_out_empty() {
        let form = OrderRequest::default();
        assert_eq!(form.item_id, "");
        assert_eq!(form.quantity, "");
    }

    #[test]
    fn order_request_serializes_with_the_wire_keys() {
        let form = OrderRequest {
            item_id: "1".into(),
            quantity: "3".into(),
        };
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            json!({ "item_id": "1", "quantity": "3" })
        );
    }

    #[test]
    fn updating_one_field_leaves_the_other_unchanged() {
        let mut form = OrderRequest::default();
        form.item_id = "2".into();
        assert_eq!(form.quantity, "");
        form.quantity = "4".into();
        assert_eq!(form.item_id, "2");
    }
}
