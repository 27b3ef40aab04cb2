//! Properties for the order panel.

use yew::prelude::*;

use crate::status::Flash;

/// The panel owns its form and table but not the status banner; every
/// operation outcome is reported upward through `on_flash` so the app root
/// can run the shared auto-dismiss timer.
#[derive(Properties, PartialEq, Clone)]
pub struct OrdersProps {
    pub on_flash: Callback<Flash>,
}
