//! Browser timers.
use gloo_timers::callback::Timeout;
use portfolio_core::splash::{Scheduler, TaskHandle};
use std::time::Duration;

/// Schedules tasks with `setTimeout`.
#[derive(Clone, Copy, Default, Debug)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        TimeoutHandle(Timeout::new(millis, task))
    }
}

/// Pending `setTimeout` call.
pub struct TimeoutHandle(Timeout);

impl TaskHandle for TimeoutHandle {
    fn cancel(self) {
        let _callback = self.0.cancel();
    }
}
