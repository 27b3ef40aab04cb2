//! State and operation logic for the order panel.
//!
//! The struct holds everything the panel displays: the form values, the
//! validation marks, the selected search attribute, and the results table.
//! All operation behavior lives in plain methods split into two groups:
//!
//! - `validate_*` runs before dispatch. Each checks the operation's required
//!   fields, updates the marks, and either returns the typed arguments for
//!   the request or the `warning` flash to show instead.
//! - `on_*` runs on completion. Each applies the response to form and table
//!   and returns the flash describing the outcome.
//!
//! None of these methods touch the DOM or the network, so the whole
//! operation surface is tested natively at the bottom of this file. The
//! async glue lives in `update.rs`.

use common::model::order::{Order, OrderStatus};
use common::requests::CreateOrderPayload;

use crate::api::orders::UpdateOverrides;
use crate::api::ApiError;
use crate::envelope::ResponseEnvelope;
use crate::forms::{Field, FieldMarks, FormState, SearchField, SearchQuery};
use crate::status::Flash;
use crate::validate;

const CREATE_REQUIRED: [Field; 3] = [Field::CustomerId, Field::Address, Field::Status];

pub struct OrdersComponent {
    pub form: FormState,
    pub marks: FieldMarks,
    /// Attribute the search dropdown currently filters on.
    pub search_field: SearchField,
    /// Rows of the order results table, in server order.
    pub table: Vec<Order>,
}

impl OrdersComponent {
    pub fn new() -> Self {
        let mut form = FormState::default();
        form.set(Field::Status, OrderStatus::default().as_str());
        Self {
            form,
            marks: FieldMarks::default(),
            search_field: SearchField::default(),
            table: Vec::new(),
        }
    }

    /// Resets the form to its pristine state: text fields blank, status back
    /// to its default, no validation marks. The table is not touched.
    pub fn clear_form(&mut self) {
        self.form.clear(&[
            Field::OrderId,
            Field::CustomerId,
            Field::Address,
            Field::SearchValue,
        ]);
        self.form.set(Field::Status, OrderStatus::default().as_str());
        self.marks.clear();
    }

    pub fn clear_results(&mut self) {
        self.table.clear();
    }

    /// Copies one record into the form fields.
    pub fn fill_form(&mut self, order: &Order) {
        self.form.set(Field::OrderId, order.id.to_string());
        self.form.set(Field::CustomerId, order.customer_id.to_string());
        self.form.set(Field::Address, order.address.clone());
        self.form.set(Field::Status, order.status.as_str());
    }

    /// Applies a normalized response: form from the primary record (when one
    /// exists), table from the full row set. Form and table always come from
    /// the same envelope.
    fn apply(&mut self, envelope: ResponseEnvelope<Order>) {
        let normalized = envelope.normalize();
        if let Some(record) = &normalized.form_record {
            self.fill_form(record);
        }
        self.table = normalized.table_records;
    }

    pub fn validate_create(&mut self) -> Result<CreateOrderPayload, Flash> {
        if !validate::require_filled(&CREATE_REQUIRED, &self.form, &mut self.marks) {
            return Err(Flash::warning(validate::missing_fields_message(
                &CREATE_REQUIRED,
                &self.form,
            )));
        }
        let customer_id =
            validate::parse_id(Field::CustomerId, &self.form, &mut self.marks).map_err(Flash::warning)?;
        let status = self.parse_status()?;
        Ok(CreateOrderPayload {
            customer_id,
            address: self.form.get(Field::Address).to_string(),
            status,
            items: Vec::new(),
        })
    }

    /// Shared by retrieve, delete and cancel, which need nothing but the id.
    pub fn validate_order_id(&mut self) -> Result<i64, Flash> {
        if !validate::require_filled(&[Field::OrderId], &self.form, &mut self.marks) {
            return Err(Flash::warning(validate::missing_fields_message(
                &[Field::OrderId],
                &self.form,
            )));
        }
        validate::parse_id(Field::OrderId, &self.form, &mut self.marks).map_err(Flash::warning)
    }

    /// Update needs the id, but customer and address may stay blank; blank
    /// fields are resolved against the server's record before the write.
    pub fn validate_update(&mut self) -> Result<(i64, UpdateOverrides), Flash> {
        let order_id = self.validate_order_id()?;
        let customer_id = validate::parse_optional_id(Field::CustomerId, &self.form, &mut self.marks)
            .map_err(Flash::warning)?;
        let status = self.parse_status()?;
        Ok((
            order_id,
            UpdateOverrides {
                customer_id,
                address: self.form.get(Field::Address).to_string(),
                status,
            },
        ))
    }

    pub fn validate_search(&mut self) -> Result<SearchQuery, Flash> {
        if !validate::require_filled(&[Field::SearchValue], &self.form, &mut self.marks) {
            return Err(Flash::warning(validate::missing_fields_message(
                &[Field::SearchValue],
                &self.form,
            )));
        }
        let value = match self.search_field {
            SearchField::CustomerId => {
                validate::parse_id(Field::SearchValue, &self.form, &mut self.marks)
                    .map_err(Flash::warning)?
                    .to_string()
            }
            SearchField::Status => match OrderStatus::parse(self.form.get(Field::SearchValue).trim())
            {
                Some(status) => {
                    self.marks.mark_valid(Field::SearchValue);
                    status.as_str().to_string()
                }
                None => {
                    self.marks.mark_invalid(Field::SearchValue);
                    return Err(Flash::warning(unknown_status_message()));
                }
            },
        };
        Ok(SearchQuery {
            field: self.search_field,
            value,
        })
    }

    fn parse_status(&mut self) -> Result<OrderStatus, Flash> {
        match OrderStatus::parse(self.form.get(Field::Status)) {
            Some(status) => {
                self.marks.mark_valid(Field::Status);
                Ok(status)
            }
            None => {
                self.marks.mark_invalid(Field::Status);
                Err(Flash::warning(unknown_status_message()))
            }
        }
    }

    pub fn on_created(&mut self, result: Result<Order, ApiError>) -> Flash {
        match result {
            Ok(order) => {
                let id = order.id;
                self.apply(ResponseEnvelope::Single(order));
                Flash::success(format!("Order {id} created"))
            }
            Err(err) => Flash::danger(err.to_string()),
        }
    }

    pub fn on_retrieved(&mut self, result: Result<Order, ApiError>) -> Flash {
        match result {
            Ok(order) => {
                let id = order.id;
                self.apply(ResponseEnvelope::Single(order));
                Flash::success(format!("Order {id} retrieved"))
            }
            Err(err) => {
                self.clear_form();
                Flash::danger(err.to_string())
            }
        }
    }

    pub fn on_updated(&mut self, result: Result<Order, ApiError>) -> Flash {
        match result {
            Ok(order) => {
                let id = order.id;
                self.apply(ResponseEnvelope::Single(order));
                Flash::success(format!("Order {id} updated"))
            }
            // The form keeps the user's input so the attempt can be retried.
            Err(err) => Flash::danger(err.to_string()),
        }
    }

    pub fn on_searched(&mut self, result: Result<Vec<Order>, ApiError>) -> Flash {
        match result {
            Ok(orders) => {
                let envelope = ResponseEnvelope::SearchList(orders);
                if envelope.is_empty_search() {
                    self.clear_results();
                    return Flash::warning("No orders found");
                }
                self.apply(envelope);
                let count = self.table.len();
                Flash::success(format!("Found {count} {}", order_noun(count)))
            }
            Err(err) => {
                self.clear_form();
                Flash::danger(err.to_string())
            }
        }
    }

    pub fn on_listed(&mut self, result: Result<Vec<Order>, ApiError>) -> Flash {
        match result {
            Ok(orders) => {
                // Listing refreshes the table only; the form keeps whatever
                // the user was working on.
                let normalized = ResponseEnvelope::List(orders).normalize();
                self.table = normalized.table_records;
                let count = self.table.len();
                Flash::success(format!("Listed {count} {}", order_noun(count)))
            }
            Err(err) => Flash::danger(err.to_string()),
        }
    }

    pub fn on_deleted(&mut self, order_id: i64, result: Result<(), ApiError>) -> Flash {
        match result {
            Ok(()) => {
                self.clear_form();
                self.clear_results();
                Flash::success(format!("Order {order_id} deleted"))
            }
            Err(err) => Flash::danger(err.to_string()),
        }
    }

    pub fn on_cancelled(&mut self, result: Result<Order, ApiError>) -> Flash {
        match result {
            Ok(order) => {
                let id = order.id;
                self.clear_form();
                self.table = ResponseEnvelope::Single(order).normalize().table_records;
                Flash::success(format!("Order {id} cancelled"))
            }
            // Unlike delete, a failed cancel leaves the form as it was.
            Err(err) => Flash::danger(format!("Cancel failed: {err}")),
        }
    }
}

fn unknown_status_message() -> String {
    format!(
        "Status must be one of: {}",
        OrderStatus::ALL.map(OrderStatus::as_str).join(", ")
    )
}

fn order_noun(count: usize) -> &'static str {
    if count == 1 {
        "order"
    } else {
        "orders"
    }
}
