//! Home page.
use crate::hooks::{use_navigate_to, use_role_cycle};
use portfolio_core::content::PROFILE;
use portfolio_core::navigation::Page;
use portfolio_core::SiteConfig;
use yew::prelude::*;

/// Pages linked from the hero.
const QUICK_LINKS: [Page; 3] = [Page::Skills, Page::Experience, Page::Contact];

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_context::<SiteConfig>().expect("`SiteConfig` context not found");
    let navigate_to = use_navigate_to();
    let role = use_role_cycle(PROFILE.roles.len(), config.role_interval());

    html! {
        <div class={classes!("page", "home")}>
            <h1 class={classes!("headline")}>
                <span>{ PROFILE.roles.get(role).copied().unwrap_or_default() }</span>
            </h1>
            <p class={classes!("summary")}>{ PROFILE.summary }</p>
            <div class={classes!("quick-links")}>
                { QUICK_LINKS.into_iter().map(|page| {
                    let onclick = {
                        let navigate_to = navigate_to.clone();
                        Callback::from(move |_: MouseEvent| navigate_to.emit(page))
                    };

                    html! {
                        <button key={page.name()} type={"button"} class={classes!("quick-link", page.name())} {onclick}>
                            { page.title() }
                        </button>
                    }
                }).collect::<Html>() }
            </div>
        </div>
    }
}
