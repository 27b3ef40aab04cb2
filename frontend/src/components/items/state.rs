//! State and operation logic for the item panel. Items are always addressed
//! through their parent order, so every operation here starts from a
//! non-blank order id.

use common::model::item::Item;
use common::requests::CreateItemPayload;

use crate::api::ApiError;
use crate::envelope::ResponseEnvelope;
use crate::forms::{Field, FieldMarks, FormState};
use crate::status::Flash;
use crate::validate;

const CREATE_REQUIRED: [Field; 4] = [
    Field::ItemOrderId,
    Field::ItemName,
    Field::Quantity,
    Field::Price,
];
const LOOKUP_REQUIRED: [Field; 2] = [Field::ItemId, Field::ItemOrderId];

const ITEM_FIELDS: [Field; 5] = [
    Field::ItemId,
    Field::ItemOrderId,
    Field::ItemName,
    Field::Quantity,
    Field::Price,
];

pub struct ItemsComponent {
    pub form: FormState,
    pub marks: FieldMarks,
    pub table: Vec<Item>,
}

impl ItemsComponent {
    pub fn new() -> Self {
        Self {
            form: FormState::default(),
            marks: FieldMarks::default(),
            table: Vec::new(),
        }
    }

    pub fn clear_form(&mut self) {
        self.form.clear(&ITEM_FIELDS);
        self.marks.clear();
    }

    pub fn clear_results(&mut self) {
        self.table.clear();
    }

    pub fn fill_form(&mut self, item: &Item) {
        self.form.set(Field::ItemId, item.item_id.to_string());
        self.form.set(Field::ItemOrderId, item.order_id.to_string());
        self.form.set(Field::ItemName, item.item_name.clone());
        self.form.set(Field::Quantity, item.quantity.to_string());
        self.form.set(Field::Price, item.price.to_string());
    }

    fn apply(&mut self, envelope: ResponseEnvelope<Item>) {
        let normalized = envelope.normalize();
        if let Some(record) = &normalized.form_record {
            self.fill_form(record);
        }
        self.table = normalized.table_records;
    }

    /// Item creation never sends an item id (the server assigns one), but it
    /// must always name its parent order and pass the non-negativity checks.
    pub fn validate_create(&mut self) -> Result<(i64, CreateItemPayload), Flash> {
        if !validate::require_filled(&CREATE_REQUIRED, &self.form, &mut self.marks) {
            return Err(Flash::warning(validate::missing_fields_message(
                &CREATE_REQUIRED,
                &self.form,
            )));
        }
        let order_id = validate::parse_id(Field::ItemOrderId, &self.form, &mut self.marks)
            .map_err(Flash::warning)?;
        let quantity = validate::parse_quantity(Field::Quantity, &self.form, &mut self.marks)
            .map_err(Flash::warning)?;
        let price =
            validate::parse_price(Field::Price, &self.form, &mut self.marks).map_err(Flash::warning)?;
        Ok((
            order_id,
            CreateItemPayload {
                order_id,
                item_name: self.form.get(Field::ItemName).to_string(),
                quantity,
                price,
            },
        ))
    }

    /// Retrieve and delete address one existing item: `(order_id, item_id)`.
    pub fn validate_lookup(&mut self) -> Result<(i64, i64), Flash> {
        if !validate::require_filled(&LOOKUP_REQUIRED, &self.form, &mut self.marks) {
            return Err(Flash::warning(validate::missing_fields_message(
                &LOOKUP_REQUIRED,
                &self.form,
            )));
        }
        let item_id =
            validate::parse_id(Field::ItemId, &self.form, &mut self.marks).map_err(Flash::warning)?;
        let order_id = validate::parse_id(Field::ItemOrderId, &self.form, &mut self.marks)
            .map_err(Flash::warning)?;
        Ok((order_id, item_id))
    }

    pub fn on_created(&mut self, result: Result<Item, ApiError>) -> Flash {
        match result {
            Ok(item) => {
                let message = format!("Item {} added to order {}", item.item_id, item.order_id);
                self.apply(ResponseEnvelope::Single(item));
                Flash::success(message)
            }
            Err(err) => Flash::danger(err.to_string()),
        }
    }

    pub fn on_retrieved(&mut self, result: Result<Item, ApiError>) -> Flash {
        match result {
            Ok(item) => {
                let id = item.item_id;
                self.apply(ResponseEnvelope::Single(item));
                Flash::success(format!("Item {id} retrieved"))
            }
            Err(err) => {
                self.clear_form();
                Flash::danger(err.to_string())
            }
        }
    }

    pub fn on_deleted(&mut self, order_id: i64, item_id: i64, result: Result<(), ApiError>) -> Flash {
        match result {
            Ok(()) => {
                self.clear_form();
                self.clear_results();
                Flash::success(format!("Item {item_id} deleted from order {order_id}"))
            }
            Err(err) => Flash::danger(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Severity;

    fn item(item_id: i64, order_id: i64, name: &str, quantity: u32, price: f64) -> Item {
        Item {
            item_id,
            order_id,
            item_name: name.to_string(),
            quantity,
            price,
        }
    }

    #[test]
    fn create_requires_parent_order_and_all_fields() {
        let mut panel = ItemsComponent::new();
        let flash = panel.validate_create().unwrap_err();
        assert_eq!(flash.severity, Severity::Warning);
        assert_eq!(flash.message, "Please fill in: Order ID, Name, Quantity, Price");
        assert!(panel.marks.is_invalid(Field::ItemOrderId));
        assert!(panel.marks.is_invalid(Field::Price));
    }

    #[test]
    fn negative_quantity_is_rejected_before_any_request() {
        let mut panel = ItemsComponent::new();
        panel.form.set(Field::ItemOrderId, "42");
        panel.form.set(Field::ItemName, "Egg");
        panel.form.set(Field::Quantity, "-1");
        panel.form.set(Field::Price, "1.50");
        let flash = panel.validate_create().unwrap_err();
        assert_eq!(flash.severity, Severity::Warning);
        assert_eq!(flash.message, "Quantity must not be negative");
        assert!(panel.marks.is_invalid(Field::Quantity));
        assert!(!panel.marks.is_invalid(Field::Price));
    }

    #[test]
    fn negative_price_is_rejected_before_any_request() {
        let mut panel = ItemsComponent::new();
        panel.form.set(Field::ItemOrderId, "42");
        panel.form.set(Field::ItemName, "Egg");
        panel.form.set(Field::Quantity, "6");
        panel.form.set(Field::Price, "-0.01");
        let flash = panel.validate_create().unwrap_err();
        assert_eq!(flash.message, "Price must not be negative");
        assert!(panel.marks.is_invalid(Field::Price));
    }

    #[test]
    fn valid_create_builds_the_scoped_payload() {
        let mut panel = ItemsComponent::new();
        panel.form.set(Field::ItemOrderId, "42");
        panel.form.set(Field::ItemName, "Egg");
        panel.form.set(Field::Quantity, "6");
        panel.form.set(Field::Price, "1.50");
        let (order_id, payload) = panel.validate_create().unwrap();
        assert_eq!(order_id, 42);
        assert_eq!(payload.order_id, 42);
        assert_eq!(payload.item_name, "Egg");
        assert_eq!(payload.quantity, 6);
        assert_eq!(payload.price, 1.5);
    }

    #[test]
    fn created_item_fills_form_and_row() {
        let mut panel = ItemsComponent::new();
        let flash = panel.on_created(Ok(item(3, 42, "Egg", 6, 1.5)));
        assert_eq!(flash.severity, Severity::Success);
        assert_eq!(flash.message, "Item 3 added to order 42");
        assert_eq!(panel.form.get(Field::ItemId), "3");
        assert_eq!(panel.form.get(Field::ItemOrderId), "42");
        assert_eq!(panel.table.len(), 1);
    }

    #[test]
    fn lookup_requires_both_ids() {
        let mut panel = ItemsComponent::new();
        panel.form.set(Field::ItemOrderId, "42");
        let flash = panel.validate_lookup().unwrap_err();
        assert_eq!(flash.message, "Please fill in: Item ID");
        assert!(panel.marks.is_invalid(Field::ItemId));
        assert!(!panel.marks.is_invalid(Field::ItemOrderId));
    }

    #[test]
    fn retrieved_item_fills_form_and_row() {
        let mut panel = ItemsComponent::new();
        let flash = panel.on_retrieved(Ok(item(3, 42, "Egg", 6, 1.5)));
        assert_eq!(flash.severity, Severity::Success);
        assert_eq!(flash.message, "Item 3 retrieved");
        assert_eq!(panel.form.get(Field::ItemName), "Egg");
        assert_eq!(panel.table.len(), 1);
    }

    #[test]
    fn failed_retrieve_clears_the_item_form() {
        let mut panel = ItemsComponent::new();
        panel.form.set(Field::ItemId, "3");
        panel.form.set(Field::ItemOrderId, "42");
        let flash = panel.on_retrieved(Err(ApiError::Status {
            code: 404,
            message: "Item with id '3' was not found.".to_string(),
        }));
        assert_eq!(flash.severity, Severity::Danger);
        assert_eq!(flash.message, "Item with id '3' was not found.");
        assert!(panel.form.is_blank(Field::ItemId));
        assert!(panel.form.is_blank(Field::ItemOrderId));
    }

    #[test]
    fn deleted_item_clears_form_and_results() {
        let mut panel = ItemsComponent::new();
        panel.form.set(Field::ItemId, "3");
        panel.form.set(Field::ItemOrderId, "42");
        panel.table = vec![item(3, 42, "Egg", 6, 1.5)];

        let flash = panel.on_deleted(42, 3, Ok(()));
        assert_eq!(flash.severity, Severity::Success);
        assert_eq!(flash.message, "Item 3 deleted from order 42");
        assert!(panel.form.is_blank(Field::ItemId));
        assert!(panel.table.is_empty());
    }

    #[test]
    fn failed_delete_preserves_form_and_results() {
        let mut panel = ItemsComponent::new();
        panel.form.set(Field::ItemId, "3");
        panel.table = vec![item(3, 42, "Egg", 6, 1.5)];

        let flash = panel.on_deleted(42, 3, Err(ApiError::Network("Failed to fetch".to_string())));
        assert_eq!(flash.severity, Severity::Danger);
        assert_eq!(panel.form.get(Field::ItemId), "3");
        assert_eq!(panel.table.len(), 1);
    }

    #[test]
    fn clear_form_resets_fields_and_marks() {
        let mut panel = ItemsComponent::new();
        panel.form.set(Field::ItemId, "3");
        panel.form.set(Field::Quantity, "-1");
        panel.marks.mark_invalid(Field::Quantity);

        panel.clear_form();
        assert!(panel.form.is_blank(Field::ItemId));
        assert!(panel.form.is_blank(Field::Quantity));
        assert!(!panel.marks.is_invalid(Field::Quantity));
    }
}
