//! Item panel: `Component` wiring over the state/update/view split.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ItemsProps;
pub use state::ItemsComponent;

impl Component for ItemsComponent {
    type Message = Msg;
    type Properties = ItemsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ItemsComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
