//! Order endpoints, including the fetch-then-merge update flow.

use gloo_net::http::Request;

use common::model::order::{Order, OrderStatus};
use common::requests::{CreateOrderPayload, UpdateOrderPayload};

use super::{decode, expect_success, ApiError};
use crate::forms::SearchQuery;

fn order_url(order_id: i64) -> String {
    format!("/orders/{order_id}")
}

pub async fn create(payload: &CreateOrderPayload) -> Result<Order, ApiError> {
    let response = Request::post("/orders").json(payload)?.send().await?;
    decode(response).await
}

pub async fn fetch(order_id: i64) -> Result<Order, ApiError> {
    let response = Request::get(&order_url(order_id)).send().await?;
    decode(response).await
}

pub async fn list() -> Result<Vec<Order>, ApiError> {
    let response = Request::get("/orders").send().await?;
    decode(response).await
}

pub async fn search(query: &SearchQuery) -> Result<Vec<Order>, ApiError> {
    let response = Request::get("/orders")
        .query([(query.field.query_key(), query.value.as_str())])
        .send()
        .await?;
    decode(response).await
}

pub async fn delete(order_id: i64) -> Result<(), ApiError> {
    let response = Request::delete(&order_url(order_id)).send().await?;
    expect_success(response).await
}

/// Cancel is a POST to a verb route, not a DELETE: the order survives with
/// its status moved to Cancelled, and the reply carries the updated record.
pub async fn cancel(order_id: i64) -> Result<Order, ApiError> {
    let response = Request::post(&format!("{}/cancel", order_url(order_id)))
        .send()
        .await?;
    decode(response).await
}

/// The form's contribution to an update. `customer_id` and `address` may be
/// left blank to mean "keep what the server has"; the status select always
/// holds a value, so status is always taken from the form.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOverrides {
    pub customer_id: Option<i64>,
    pub address: String,
    pub status: OrderStatus,
}

/// Pure merge step of the update flow: start from the server's current
/// record and overlay the fields the form actually supplied.
pub fn merge_update_payload(current: &Order, overrides: &UpdateOverrides) -> UpdateOrderPayload {
    UpdateOrderPayload {
        customer_id: overrides.customer_id.unwrap_or(current.customer_id),
        address: if overrides.address.trim().is_empty() {
            current.address.clone()
        } else {
            overrides.address.clone()
        },
        status: overrides.status,
    }
}

/// Fetches the order's current server state and merges the form's overrides
/// into it. The update flow always goes through this resolution step so a
/// partially filled form cannot blank out fields the user never touched.
pub async fn resolve_update_payload(
    order_id: i64,
    overrides: &UpdateOverrides,
) -> Result<UpdateOrderPayload, ApiError> {
    let current = fetch(order_id).await?;
    Ok(merge_update_payload(&current, overrides))
}

pub async fn update(order_id: i64, overrides: UpdateOverrides) -> Result<Order, ApiError> {
    let payload = resolve_update_payload(order_id, &overrides).await?;
    let response = Request::put(&order_url(order_id)).json(&payload)?.send().await?;
    decode(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current_order() -> Order {
        Order {
            id: 42,
            customer_id: 7,
            address: "1 Old Lane".to_string(),
            status: OrderStatus::Received,
            items: Vec::new(),
        }
    }

    #[test]
    fn merge_keeps_server_customer_when_form_left_it_blank() {
        let payload = merge_update_payload(
            &current_order(),
            &UpdateOverrides {
                customer_id: None,
                address: "9 New Rd".to_string(),
                status: OrderStatus::Received,
            },
        );
        assert_eq!(payload.customer_id, 7);
        assert_eq!(payload.address, "9 New Rd");
        assert_eq!(payload.status, OrderStatus::Received);
    }

    #[test]
    fn merge_keeps_server_address_when_form_left_it_blank() {
        let payload = merge_update_payload(
            &current_order(),
            &UpdateOverrides {
                customer_id: Some(8),
                address: "   ".to_string(),
                status: OrderStatus::Processing,
            },
        );
        assert_eq!(payload.customer_id, 8);
        assert_eq!(payload.address, "1 Old Lane");
        assert_eq!(payload.status, OrderStatus::Processing);
    }

    #[test]
    fn merge_takes_form_values_verbatim_when_supplied() {
        let payload = merge_update_payload(
            &current_order(),
            &UpdateOverrides {
                customer_id: Some(9),
                address: "2 Elm St".to_string(),
                status: OrderStatus::Shipped,
            },
        );
        assert_eq!(payload.customer_id, 9);
        assert_eq!(payload.address, "2 Elm St");
        assert_eq!(payload.status, OrderStatus::Shipped);
    }

    #[test]
    fn merge_always_takes_status_from_the_form() {
        // Even a form that supplies nothing else still dictates the status.
        let payload = merge_update_payload(
            &current_order(),
            &UpdateOverrides {
                customer_id: None,
                address: String::new(),
                status: OrderStatus::Cancelled,
            },
        );
        assert_eq!(payload.customer_id, 7);
        assert_eq!(payload.address, "1 Old Lane");
        assert_eq!(payload.status, OrderStatus::Cancelled);
    }
}
