//! Splash screen visibility.
use crate::timers::TimeoutScheduler;
use portfolio_core::splash::SplashController;
use std::time::Duration;
use yew::prelude::*;

/// Whether the splash screen is showing.
/// Hides once, `delay` after the first render.
#[hook]
pub fn use_splash(delay: Duration) -> bool {
    let visible = use_state(|| true);

    {
        let visible = visible.clone();

        use_effect_with((), move |_| {
            let splash =
                SplashController::mount(&TimeoutScheduler, delay, move || visible.set(false));

            // destructor
            move || splash.teardown()
        });
    }

    *visible
}
