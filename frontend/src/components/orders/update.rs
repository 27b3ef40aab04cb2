//! Update function for the order panel.
//!
//! Follows the Elm-style contract: receive the current state, the `Context`,
//! and a `Msg`; mutate the state; return whether the view should re-render.
//! Operation messages run the matching `validate_*` method first; on
//! failure the warning goes straight to the banner and no request is sent.
//! On success the request is spawned and its outcome comes back as a
//! completion message, which the matching `on_*` method turns into a flash.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::forms::SearchField;
use crate::status::Flash;

use super::messages::Msg;
use super::state::OrdersComponent;

pub fn update(component: &mut OrdersComponent, ctx: &Context<OrdersComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Edit(field, value) => {
            component.form.set(field, value);
            true
        }
        Msg::SelectSearchField(raw) => {
            if let Some(field) = SearchField::parse(&raw) {
                component.search_field = field;
            }
            true
        }
        Msg::Clear => {
            component.clear_form();
            ctx.props().on_flash.emit(Flash::clear());
            true
        }

        Msg::Create => {
            match component.validate_create() {
                Ok(payload) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        link.send_message(Msg::Created(api::orders::create(&payload).await));
                    });
                }
                Err(flash) => ctx.props().on_flash.emit(flash),
            }
            true
        }
        Msg::Retrieve => {
            match component.validate_order_id() {
                Ok(order_id) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        link.send_message(Msg::Retrieved(api::orders::fetch(order_id).await));
                    });
                }
                Err(flash) => ctx.props().on_flash.emit(flash),
            }
            true
        }
        Msg::Update => {
            match component.validate_update() {
                Ok((order_id, overrides)) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        link.send_message(Msg::Updated(
                            api::orders::update(order_id, overrides).await,
                        ));
                    });
                }
                Err(flash) => ctx.props().on_flash.emit(flash),
            }
            true
        }
        Msg::Search => {
            match component.validate_search() {
                Ok(query) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        link.send_message(Msg::Searched(api::orders::search(&query).await));
                    });
                }
                Err(flash) => ctx.props().on_flash.emit(flash),
            }
            true
        }
        Msg::Delete => {
            match component.validate_order_id() {
                Ok(order_id) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = api::orders::delete(order_id).await;
                        link.send_message(Msg::Deleted { order_id, result });
                    });
                }
                Err(flash) => ctx.props().on_flash.emit(flash),
            }
            true
        }
        Msg::Cancel => {
            match component.validate_order_id() {
                Ok(order_id) => {
                    gloo_console::debug!(format!("cancelling order {order_id}"));
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        link.send_message(Msg::Cancelled(api::orders::cancel(order_id).await));
                    });
                }
                Err(flash) => ctx.props().on_flash.emit(flash),
            }
            true
        }
        Msg::List => {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Listed(api::orders::list().await));
            });
            false
        }

        Msg::Created(result) => {
            let flash = component.on_created(result);
            ctx.props().on_flash.emit(flash);
            true
        }
        Msg::Retrieved(result) => {
            let flash = component.on_retrieved(result);
            ctx.props().on_flash.emit(flash);
            true
        }
        Msg::Updated(result) => {
            let flash = component.on_updated(result);
            ctx.props().on_flash.emit(flash);
            true
        }
        Msg::Searched(result) => {
            let flash = component.on_searched(result);
            ctx.props().on_flash.emit(flash);
            true
        }
        Msg::Deleted { order_id, result } => {
            let flash = component.on_deleted(order_id, result);
            ctx.props().on_flash.emit(flash);
            true
        }
        Msg::Cancelled(result) => {
            let flash = component.on_cancelled(result);
            ctx.props().on_flash.emit(flash);
            true
        }
        Msg::Listed(result) => {
            let flash = component.on_listed(result);
            ctx.props().on_flash.emit(flash);
            true
        }
    }
}
