use common::model::item::Item;

use crate::api::ApiError;
use crate::forms::Field;

pub enum Msg {
    Edit(Field, String),
    Create,
    Retrieve,
    Delete,
    Clear,
    Created(Result<Item, ApiError>),
    Retrieved(Result<Item, ApiError>),
    Deleted {
        order_id: i64,
        item_id: i64,
        result: Result<(), ApiError>,
    },
}
