use yew::prelude::*;

use crate::status::Flash;

#[derive(Properties, PartialEq, Clone)]
pub struct ItemsProps {
    /// Reports operation outcomes to the shared status banner.
    pub on_flash: Callback<Flash>,
}
