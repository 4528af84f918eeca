//! Page links.
use crate::routes::Route;
use portfolio_core::navigation::Page;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let current = use_route::<Route>().and_then(|route| route.page());

    html! {
        <nav class={classes!("nav-bar")}>
            <ol>
                { Page::ALL.into_iter().map(|page| {
                    let active = current == Some(page);
                    html! {
                        <li key={page.name()} class={classes!(active.then_some("active"))}>
                            <Link<Route> to={Route::from(page)}>{ page.title() }</Link<Route>>
                        </li>
                    }
                }).collect::<Html>() }
            </ol>
        </nav>
    }
}
