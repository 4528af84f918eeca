//! Headline roles.
use gloo_timers::callback::Interval;
use portfolio_core::content::RoleCycle;
use std::rc::Rc;
use std::time::Duration;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
struct RoleState(RoleCycle);

impl Reducible for RoleState {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: Self::Action) -> Rc<Self> {
        Self(self.0.advance()).into()
    }
}

/// Index of the role to display, advancing every `interval`.
#[hook]
pub fn use_role_cycle(len: usize, interval: Duration) -> usize {
    let state = use_reducer(|| RoleState(RoleCycle::new(len)));

    {
        let dispatcher = state.dispatcher();

        use_effect_with(interval, move |interval| {
            let millis = u32::try_from(interval.as_millis()).unwrap_or(u32::MAX);
            let interval = Interval::new(millis, move || dispatcher.dispatch(()));

            // destructor
            move || drop(interval)
        });
    }

    state.0.index()
}
