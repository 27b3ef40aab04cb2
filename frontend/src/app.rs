use gloo_timers::future::TimeoutFuture;
use yew::{classes, html, Component, Context, Html};

use crate::components::items::ItemsComponent;
use crate::components::orders::OrdersComponent;
use crate::status::{Flash, StatusState, STATUS_VISIBLE_MS};

pub struct App {
    status: StatusState,
}

pub enum AppMsg {
    Flash(Flash),
    StatusExpired(u32),
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            status: StatusState::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::Flash(flash) => {
                // Timers are never cancelled; the epoch decides on expiry
                // whether the timer still owns the message on display.
                if let Some(epoch) = self.status.apply(flash) {
                    let link = ctx.link().clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        TimeoutFuture::new(STATUS_VISIBLE_MS).await;
                        link.send_message(AppMsg::StatusExpired(epoch));
                    });
                }
                true
            }
            AppMsg::StatusExpired(epoch) => self.status.expire(epoch),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_flash = ctx.link().callback(AppMsg::Flash);
        html! {
            <div class="page">
                <h1>{"Order Service Administration"}</h1>
                <div id="flash_message" class={classes!("flash", self.status.severity().css_class())}>
                    { self.status.message().to_string() }
                </div>
                <OrdersComponent on_flash={on_flash.clone()} />
                <ItemsComponent on_flash={on_flash} />
            </div>
        }
    }
}
