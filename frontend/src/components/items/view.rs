//! View rendering for the item panel.

use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::item::Item;

use crate::forms::Field;

use super::messages::Msg;
use super::state::ItemsComponent;

pub fn view(component: &ItemsComponent, ctx: &Context<ItemsComponent>) -> Html {
    let link = ctx.link();
    html! {
        <section class="panel">
            <h2>{"Order Items"}</h2>
            <div class="form-grid">
                { text_input(component, link, Field::ItemId) }
                { text_input(component, link, Field::ItemOrderId) }
                { text_input(component, link, Field::ItemName) }
                { text_input(component, link, Field::Quantity) }
                { text_input(component, link, Field::Price) }
            </div>
            { build_buttons(link) }
            { build_results(component) }
        </section>
    }
}

fn text_input(component: &ItemsComponent, link: &Scope<ItemsComponent>, field: Field) -> Html {
    let oninput = link.callback(move |event: InputEvent| {
        let value = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();
        Msg::Edit(field, value)
    });
    html! {
        <div class="form-row">
            <label for={field.input_id()}>{ field.label() }</label>
            <input
                type="text"
                id={field.input_id()}
                class={classes!("form-input", component.marks.is_invalid(field).then_some("invalid"))}
                value={component.form.get(field).to_string()}
                {oninput}
            />
        </div>
    }
}

fn build_buttons(link: &Scope<ItemsComponent>) -> Html {
    html! {
        <div class="button-row">
            <button id="item-create-btn" onclick={link.callback(|_| Msg::Create)}>{"Create"}</button>
            <button id="item-retrieve-btn" onclick={link.callback(|_| Msg::Retrieve)}>{"Retrieve"}</button>
            <button id="item-delete-btn" onclick={link.callback(|_| Msg::Delete)}>{"Delete"}</button>
            <button id="item-clear-btn" onclick={link.callback(|_| Msg::Clear)}>{"Clear"}</button>
        </div>
    }
}

fn build_results(component: &ItemsComponent) -> Html {
    html! {
        <table id="item_search_results" class="results-table">
            <thead>
                <tr>
                    <th>{"Item ID"}</th>
                    <th>{"Order ID"}</th>
                    <th>{"Name"}</th>
                    <th>{"Quantity"}</th>
                    <th>{"Price"}</th>
                </tr>
            </thead>
            <tbody>
                { for component.table.iter().map(item_row) }
            </tbody>
        </table>
    }
}

fn item_row(item: &Item) -> Html {
    html! {
        <tr>
            <td>{ item.item_id.to_string() }</td>
            <td>{ item.order_id.to_string() }</td>
            <td>{ item.item_name.clone() }</td>
            <td>{ item.quantity.to_string() }</td>
            <td>{ format!("{:.2}", item.price) }</td>
        </tr>
    }
}
