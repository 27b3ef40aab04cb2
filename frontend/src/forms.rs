//! Form value storage shared by the order and item panels.
//!
//! Inputs are kept as raw strings in a [`FormState`] keyed by [`Field`], so
//! the view can echo exactly what the user typed while validation decides
//! what those strings mean. [`FieldMarks`] tracks which inputs failed the
//! last validation pass; the view turns each mark into a CSS class.

use std::collections::{BTreeMap, BTreeSet};

/// Every input the two form panels render. One enum for both panels keeps
/// field identity unambiguous when the item form reuses a label like
/// "Order ID".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    OrderId,
    CustomerId,
    Address,
    Status,
    SearchValue,
    ItemId,
    ItemOrderId,
    ItemName,
    Quantity,
    Price,
}

impl Field {
    /// DOM id of the input element bound to this field.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::OrderId => "order_id",
            Field::CustomerId => "customer_id",
            Field::Address => "address",
            Field::Status => "status",
            Field::SearchValue => "search_value",
            Field::ItemId => "item_id",
            Field::ItemOrderId => "item_order_id",
            Field::ItemName => "name",
            Field::Quantity => "quantity",
            Field::Price => "price",
        }
    }

    /// Human-readable label, also used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::OrderId => "Order ID",
            Field::CustomerId => "Customer ID",
            Field::Address => "Address",
            Field::Status => "Status",
            Field::SearchValue => "Search value",
            Field::ItemId => "Item ID",
            Field::ItemOrderId => "Order ID",
            Field::ItemName => "Name",
            Field::Quantity => "Quantity",
            Field::Price => "Price",
        }
    }
}

/// Raw string values of a form, exactly as typed. Absent fields read as "".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: BTreeMap<Field, String>,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        self.values
            .get(&field)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// A field is blank when it is unset or holds only whitespace.
    pub fn is_blank(&self, field: Field) -> bool {
        self.get(field).trim().is_empty()
    }

    pub fn clear(&mut self, fields: &[Field]) {
        for field in fields {
            self.values.remove(field);
        }
    }
}

/// Set of fields the last validation pass rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMarks {
    invalid: BTreeSet<Field>,
}

impl FieldMarks {
    pub fn mark_invalid(&mut self, field: Field) {
        self.invalid.insert(field);
    }

    pub fn mark_valid(&mut self, field: Field) {
        self.invalid.remove(&field);
    }

    pub fn is_invalid(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    pub fn clear(&mut self) {
        self.invalid.clear();
    }
}

/// The closed set of order attributes the search dropdown offers. Adding a
/// searchable attribute means adding a variant here, not editing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    CustomerId,
    Status,
}

impl SearchField {
    pub const ALL: [SearchField; 2] = [SearchField::CustomerId, SearchField::Status];

    /// Query-string key the server expects for this attribute.
    pub fn query_key(self) -> &'static str {
        match self {
            SearchField::CustomerId => "customer_id",
            SearchField::Status => "status",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchField::CustomerId => "Customer ID",
            SearchField::Status => "Status",
        }
    }

    /// Maps a dropdown value (the query key) back to the variant.
    pub fn parse(value: &str) -> Option<SearchField> {
        SearchField::ALL
            .into_iter()
            .find(|field| field.query_key() == value)
    }
}

/// A validated search request: which attribute to filter on and the
/// already-normalized value to send.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub field: SearchField,
    pub value: String,
}
