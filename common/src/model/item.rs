use serde::{Deserialize, Serialize};

/// A single line item belonging to an order.
///
/// Items never exist on their own; every item endpoint is scoped under its
/// parent order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Server-assigned identifier, unique within the parent order.
    pub item_id: i64,
    /// Identifier of the order this item belongs to.
    pub order_id: i64,
    /// Product name as entered by the user.
    pub item_name: String,
    /// Number of units ordered. Never negative.
    pub quantity: u32,
    /// Unit price in dollars. Never negative.
    pub price: f64,
}

impl Item {
    /// Compact rendering for the Items column of the order table:
    /// `"[item_id] name $price × quantity"`, price with two decimals.
    pub fn display_fragment(&self) -> String {
        format!(
            "[{}] {} ${:.2} × {}",
            self.item_id, self.item_name, self.price, self.quantity
        )
    }
}
