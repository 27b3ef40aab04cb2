use common::model::order::Order;

use crate::api::ApiError;
use crate::forms::Field;

pub enum Msg {
    Edit(Field, String),
    SelectSearchField(String),
    Create,
    Retrieve,
    Update,
    Search,
    Delete,
    Cancel,
    List,
    Clear,
    Created(Result<Order, ApiError>),
    Retrieved(Result<Order, ApiError>),
    Updated(Result<Order, ApiError>),
    Searched(Result<Vec<Order>, ApiError>),
    Deleted { order_id: i64, result: Result<(), ApiError> },
    Cancelled(Result<Order, ApiError>),
    Listed(Result<Vec<Order>, ApiError>),
}
