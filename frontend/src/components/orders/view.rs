//! View rendering for the order panel: the form fields, the search row, the
//! action buttons, and the results table. Inputs marked invalid by the last
//! validation pass get an extra `invalid` class.

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::model::order::{Order, OrderStatus};

use crate::forms::{Field, SearchField};

use super::messages::Msg;
use super::state::OrdersComponent;

pub fn view(component: &OrdersComponent, ctx: &Context<OrdersComponent>) -> Html {
    let link = ctx.link();
    html! {
        <section class="panel">
            <h2>{"Orders"}</h2>
            <div class="form-grid">
                { text_input(component, link, Field::OrderId) }
                { text_input(component, link, Field::CustomerId) }
                { text_input(component, link, Field::Address) }
                { status_select(component, link) }
            </div>
            { build_buttons(link) }
            { search_controls(component, link) }
            { build_results(component) }
        </section>
    }
}

/// One labeled text input bound to `field` through `Msg::Edit`.
fn text_input(component: &OrdersComponent, link: &Scope<OrdersComponent>, field: Field) -> Html {
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

fn status_select(component: &OrdersComponent, link: &Scope<OrdersComponent>) -> Html {
    let current = component.form.get(Field::Status).to_string();
    let onchange = link.callback(move |event: Event| {
        let value = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            .map(|select| select.value())
            .unwrap_or_default();
        Msg::Edit(Field::Status, value)
    });
    html! {
        <div class="form-row">
            <label for={Field::Status.input_id()}>{ Field::Status.label() }</label>
            <select id={Field::Status.input_id()} class="form-input" {onchange}>
                { for OrderStatus::ALL.iter().map(|status| html! {
                    <option value={status.as_str()} selected={current == status.as_str()}>
                        { status.as_str() }
                    </option>
                }) }
            </select>
        </div>
    }
}

/// Dropdown choosing which attribute to filter on, the value input, and the
/// search button itself.
fn search_controls(component: &OrdersComponent, link: &Scope<OrdersComponent>) -> Html {
    let selected = component.search_field;
    let onchange = link.callback(|event: Event| {
        let value = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            .map(|select| select.value())
            .unwrap_or_default();
        Msg::SelectSearchField(value)
    });
    html! {
        <div class="search-row">
            <label for="search_field">{"Search by"}</label>
            <select id="search_field" class="form-input" {onchange}>
                { for SearchField::ALL.iter().map(|field| html! {
                    <option value={field.query_key()} selected={selected == *field}>
                        { field.label() }
                    </option>
                }) }
            </select>
            { text_input(component, link, Field::SearchValue) }
            <button id="search-btn" onclick={link.callback(|_| Msg::Search)}>{"Search"}</button>
        </div>
    }
}

fn build_buttons(link: &Scope<OrdersComponent>) -> Html {
    html! {
        <div class="button-row">
            <button id="create-btn" onclick={link.callback(|_| Msg::Create)}>{"Create"}</button>
            <button id="retrieve-btn" onclick={link.callback(|_| Msg::Retrieve)}>{"Retrieve"}</button>
            <button id="update-btn" onclick={link.callback(|_| Msg::Update)}>{"Update"}</button>
            <button id="delete-btn" onclick={link.callback(|_| Msg::Delete)}>{"Delete"}</button>
            <button id="cancel-btn" onclick={link.callback(|_| Msg::Cancel)}>{"Cancel Order"}</button>
            <button id="list-btn" onclick={link.callback(|_| Msg::List)}>{"List All"}</button>
            <button id="clear-btn" onclick={link.callback(|_| Msg::Clear)}>{"Clear"}</button>
        </div>
    }
}

fn build_results(component: &OrdersComponent) -> Html {
    html! {
        <table id="search_results" class="results-table">
            <thead>
                <tr>
                    <th>{"Order ID"}</th>
                    <th>{"Customer ID"}</th>
                    <th>{"Address"}</th>
                    <th>{"Items"}</th>
                    <th>{"Status"}</th>
                </tr>
            </thead>
            <tbody>
                { for component.table.iter().map(order_row) }
            </tbody>
        </table>
    }
}

fn order_row(order: &Order) -> Html {
    html! {
        <tr>
            <td>{ order.id.to_string() }</td>
            <td>{ order.customer_id.to_string() }</td>
            <td>{ order.address.clone() }</td>
            <td>{ order.items_summary() }</td>
            <td>{ order.status.as_str() }</td>
        </tr>
    }
}
