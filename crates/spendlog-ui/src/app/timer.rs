//! `setTimeout`-backed scheduler.

use crate::page::dismiss::timer_millis;
use crate::page::ports::Scheduler;
use gloo::timers::callback::Timeout;
use std::time::Duration;

/// Schedules one-shot tasks on the browser event loop.
pub(crate) struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = timer_millis(delay);
        // Dropping the handle would cancel the timeout.
        let _id = Timeout::new(millis, task).forget();
    }
}
