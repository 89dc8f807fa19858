//! Browser timers via `gloo-timers`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use super::{OnceTask, RepeatingTask, Scheduler};

/// Schedules on the window's `setTimeout`. Timers are forgotten, so they
/// fire even after the scheduler handle is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebScheduler;

impl Scheduler for WebScheduler {
    fn schedule_once(&self, delay_ms: u32, task: OnceTask) {
        Timeout::new(delay_ms, task).forget();
    }

    fn schedule_repeating(&self, interval_ms: u32, task: RepeatingTask) {
        chain(interval_ms, Rc::new(RefCell::new(task)));
    }
}

/// Each tick arms the next `Timeout` only if the task wants to continue, so
/// no interval handle has to be cleared from inside its own callback.
fn chain(interval_ms: u32, task: Rc<RefCell<RepeatingTask>>) {
    Timeout::new(interval_ms, move || {
        let flow = (task.borrow_mut())();
        if flow.is_continue() {
            chain(interval_ms, task);
        }
    })
    .forget();
}
