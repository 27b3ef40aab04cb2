use serde::{Deserialize, Serialize};

use crate::model::item::Item;
use crate::model::order::OrderStatus;

/// Body for `POST /orders`.
///
/// `items` is always sent empty: item rows are created one at a time through
/// the item endpoints, never inline with the order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateOrderPayload {
    pub customer_id: i64,
    pub address: String,
    pub status: OrderStatus,
    pub items: Vec<Item>,
}

/// Body for `PUT /orders/{id}`. Carries the three mutable order fields and
/// nothing else; item rows are managed through their own endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateOrderPayload {
    pub customer_id: i64,
    pub address: String,
    pub status: OrderStatus,
}

/// Body for `POST /orders/{order_id}/items`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateItemPayload {
    pub order_id: i64,
    pub item_name: String,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Error body the service sends with non-2xx replies.
/// Missing or malformed bodies decode to an empty message.
pub struct ErrorEnvelope {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_order_payload_always_carries_empty_items() {
        let payload = CreateOrderPayload {
            customer_id: 7,
            address: "1 Main St".to_string(),
            status: OrderStatus::Received,
            items: Vec::new(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "customer_id": 7,
                "address": "1 Main St",
                "status": "Received",
                "items": []
            })
        );
    }

    #[test]
    fn update_order_payload_has_exactly_three_fields() {
        let payload = UpdateOrderPayload {
            customer_id: 7,
            address: "9 New Rd".to_string(),
            status: OrderStatus::Processing,
        };
        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["status"], json!("Processing"));
        assert!(!object.contains_key("items"));
    }

    #[test]
    fn create_item_payload_uses_wire_field_names() {
        let payload = CreateItemPayload {
            order_id: 42,
            item_name: "Egg".to_string(),
            quantity: 6,
            price: 1.5,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "order_id": 42,
                "item_name": "Egg",
                "quantity": 6,
                "price": 1.5
            })
        );
    }

    #[test]
    fn error_envelope_tolerates_missing_message() {
        let envelope: ErrorEnvelope = serde_json::from_value(json!({})).unwrap();
        assert_eq!(envelope.message, "");
        let envelope: ErrorEnvelope =
            serde_json::from_value(json!({"message": "Order not found"})).unwrap();
        assert_eq!(envelope.message, "Order not found");
    }
}
