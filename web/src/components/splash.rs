//! Splash screen.
use crate::constants::SPLASH_ID;
use portfolio_core::content::PROFILE;
use yew::prelude::*;

#[function_component(Splash)]
pub fn splash() -> Html {
    html! {
        <div id={SPLASH_ID} class={classes!("splash")}>
            <div class={classes!("splash-title")}>{ PROFILE.name }</div>
        </div>
    }
}
