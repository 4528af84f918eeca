//! 404 Not Found page.
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class={classes!("page", "not-found")}>
            <h2>{ "Not found" }</h2>
            <p>{ "Oops... Looks like we couldn't find the page you were looking for." }</p>
            <div>
                <Link<Route> to={Route::Home}>{ "Home" }</Link<Route>>
            </div>
        </div>
    }
}
