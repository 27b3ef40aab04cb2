//! Order panel: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, and view rendering.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `OrdersProps`, `OrdersComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::OrdersProps;
pub use state::OrdersComponent;

impl Component for OrdersComponent {
    type Message = Msg;
    type Properties = OrdersProps;

    fn create(_ctx: &Context<Self>) -> Self {
        OrdersComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
