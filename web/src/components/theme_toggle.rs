//! Dark and light theme switch.
use crate::hooks::{use_theme, use_theme_store};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let store = use_theme_store();
    let theme = use_theme();

    let onclick = Callback::from(move |_: MouseEvent| {
        store.toggle();
    });

    let (icon_id, title) = if theme.is_dark {
        (IconId::FeatherSun, "Switch to light theme")
    } else {
        (IconId::FeatherMoon, "Switch to dark theme")
    };

    html! {
        <button class={classes!("theme-toggle")} type={"button"} {title} {onclick}>
            <Icon {icon_id} width={"20"} height={"20"} />
        </button>
    }
}
