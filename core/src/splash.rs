//! Splash screen lifecycle.
//!
//! The splash is shown from mount until a one shot timer fires.
//! The timer is owned by the [`SplashController`] and cancelled on teardown,
//! so a torn down splash never changes state.
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

pub const SPLASH_DELAY_MIN_MS: u32 = 2_000;
pub const SPLASH_DELAY_MAX_MS: u32 = 2_500;

// *****************
// *** Scheduler ***
// *****************

/// Cancellable handle to a scheduled task.
pub trait TaskHandle {
    /// Cancels the task.
    /// The task must not run after this returns.
    fn cancel(self);
}

/// Runs a task once after a delay.
pub trait Scheduler {
    type Handle: TaskHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

// *************
// *** Phase ***
// *************

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SplashPhase {
    Showing,
    Hidden,
}

impl SplashPhase {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Showing)
    }
}

// ******************
// *** Controller ***
// ******************

/// One shot splash visibility for a single mount.
pub struct SplashController<H: TaskHandle> {
    phase: Rc<Cell<SplashPhase>>,
    timer: Option<H>,
}

impl<H: TaskHandle> SplashController<H> {
    /// Arms the splash timer.
    /// `on_hidden` runs exactly once, when the splash transitions to [`SplashPhase::Hidden`].
    pub fn mount<S>(scheduler: &S, delay: Duration, on_hidden: impl FnOnce() + 'static) -> Self
    where
        S: Scheduler<Handle = H>,
    {
        let phase = Rc::new(Cell::new(SplashPhase::Showing));
        let timer = scheduler.schedule(delay, {
            let phase = phase.clone();
            Box::new(move || {
                if phase.replace(SplashPhase::Hidden) == SplashPhase::Showing {
                    tracing::debug!("splash hidden");
                    on_hidden();
                }
            })
        });

        Self {
            phase,
            timer: Some(timer),
        }
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase.get()
    }

    /// Cancels the timer if it has not fired yet.
    pub fn teardown(mut self) {
        self.cancel_timer();
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

impl<H: TaskHandle> Drop for SplashController<H> {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

#[cfg(test)]
#[path = "./splash_test.rs"]
mod splash_test;
