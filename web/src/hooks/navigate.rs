//! Navigation between pages.
use crate::routes::Route;
use portfolio_core::navigation::Page;
use yew::prelude::*;
use yew_router::prelude::*;

/// Callback navigating to a page.
/// Navigating to the current page does nothing.
#[hook]
pub fn use_navigate_to() -> Callback<Page> {
    let navigator = use_navigator().expect("navigator not found");
    let current = use_route::<Route>();

    Callback::from(move |page: Page| {
        let target = Route::from(page);
        if current == Some(target) {
            return;
        }

        tracing::debug!(%page, "navigate");
        navigator.push(&target);
    })
}
