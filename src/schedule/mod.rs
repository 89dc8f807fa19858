//! Timer abstraction.
//!
//! Components ask a [`Scheduler`] for delayed work instead of calling browser
//! timers directly. The browser uses [`web::WebScheduler`]; tests drive a
//! [`ManualScheduler`] whose clock only moves when told to.

mod manual;
#[cfg(feature = "hydrate")]
pub mod web;

use std::ops::ControlFlow;

pub use manual::ManualScheduler;

/// One-shot delayed callback.
pub type OnceTask = Box<dyn FnOnce()>;

/// Repeating callback; returning [`ControlFlow::Break`] stops the repetition.
pub type RepeatingTask = Box<dyn FnMut() -> ControlFlow<()>>;

/// Fire-and-forget timer scheduling. Nothing scheduled can be cancelled.
pub trait Scheduler {
    /// Run `task` once, `delay_ms` from now.
    fn schedule_once(&self, delay_ms: u32, task: OnceTask);

    /// Run `task` every `interval_ms`, first run one interval from now, until
    /// it returns [`ControlFlow::Break`].
    fn schedule_repeating(&self, interval_ms: u32, task: RepeatingTask);
}
