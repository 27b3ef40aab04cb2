//! Update function for the item panel. Same contract as the order panel:
//! validate, spawn the request, apply the completion through the state
//! methods, and report the outcome upward.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::status::Flash;

use super::messages::Msg;
use super::state::ItemsComponent;

pub fn update(component: &mut ItemsComponent, ctx: &Context<ItemsComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Edit(field, value) => {
            component.form.set(field, value);
            true
        }
        Msg::Clear => {
            component.clear_form();
            ctx.props().on_flash.emit(Flash::clear());
            true
        }

        Msg::Create => {
            match component.validate_create() {
                Ok((order_id, payload)) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        link.send_message(Msg::Created(
                            api::items::create(order_id, &payload).await,
                        ));
                    });
                }
                Err(flash) => ctx.props().on_flash.emit(flash),
            }
            true
        }
        Msg::Retrieve => {
            match component.validate_lookup() {
                Ok((order_id, item_id)) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        link.send_message(Msg::Retrieved(
                            api::items::fetch(order_id, item_id).await,
                        ));
                    });
                }
                Err(flash) => ctx.props().on_flash.emit(flash),
            }
            true
        }
        Msg::Delete => {
            match component.validate_lookup() {
                Ok((order_id, item_id)) => {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = api::items::delete(order_id, item_id).await;
                        link.send_message(Msg::Deleted {
                            order_id,
                            item_id,
                            result,
                        });
                    });
                }
                Err(flash) => ctx.props().on_flash.emit(flash),
            }
            true
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
        Msg::Deleted {
            order_id,
            item_id,
            result,
        } => {
            let flash = component.on_deleted(order_id, item_id, result);
            ctx.props().on_flash.emit(flash);
            true
        }
    }
}
