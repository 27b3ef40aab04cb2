//! Item endpoints. Every route is scoped under a parent order.

use gloo_net::http::Request;

use common::model::item::Item;
use common::requests::CreateItemPayload;

use super::{decode, expect_success, ApiError};

fn items_url(order_id: i64) -> String {
    format!("/orders/{order_id}/items")
}

fn item_url(order_id: i64, item_id: i64) -> String {
    format!("/orders/{order_id}/items/{item_id}")
}

pub async fn create(order_id: i64, payload: &CreateItemPayload) -> Result<Item, ApiError> {
    let response = Request::post(&items_url(order_id)).json(payload)?.send().await?;
    decode(response).await
}

pub async fn fetch(order_id: i64, item_id: i64) -> Result<Item, ApiError> {
    let response = Request::get(&item_url(order_id, item_id)).send().await?;
    decode(response).await
}

pub async fn delete(order_id: i64, item_id: i64) -> Result<(), ApiError> {
    let response = Request::delete(&item_url(order_id, item_id)).send().await?;
    expect_success(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_routes_nest_under_their_order() {
        assert_eq!(items_url(42), "/orders/42/items");
        assert_eq!(item_url(42, 3), "/orders/42/items/3");
    }
}
