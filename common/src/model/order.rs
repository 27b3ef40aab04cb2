use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::item::Item;

/// Lifecycle state of an order.
///
/// The server stores and returns the state as the plain variant name
/// ("Received", "Processing", ...), which is exactly how serde serializes a
/// fieldless enum, so no rename attributes are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Initial state of every new order.
    #[default]
    Received,
    /// The order is being prepared for shipment.
    Processing,
    /// The order has left the warehouse.
    Shipped,
    /// The order was cancelled and will not ship.
    Cancelled,
}

impl OrderStatus {
    /// Every state, in the order the status dropdown lists them.
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Received,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Received => "Received",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Parses the wire/form spelling of a state. Only the four exact variant
    /// names are accepted; anything else is `None`.
    pub fn parse(value: &str) -> Option<OrderStatus> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order as the service returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Server-assigned identifier.
    pub id: i64,
    /// The customer who placed the order.
    pub customer_id: i64,
    /// Free-form shipping address.
    pub address: String,
    /// Current lifecycle state.
    pub status: OrderStatus,
    /// Item rows belonging to this order. List endpoints may omit the field.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Order {
    /// One-line summary of all item rows for the results table, for example
    /// `"[3] Egg $1.50 × 6; [4] Flour $2.00 × 1"`. Empty when the order has
    /// no items.
    pub fn items_summary(&self) -> String {
        self.items
            .iter()
            .map(Item::display_fragment)
            .collect::<Vec<_>>()
            .join("; ")
    }
}
