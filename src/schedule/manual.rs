//! Virtual-clock scheduler for deterministic tests.

#[cfg(test)]
#[path = "manual_test.rs"]
mod manual_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{OnceTask, RepeatingTask, Scheduler};

enum Job {
    Once(OnceTask),
    Repeating { interval_ms: u32, task: RepeatingTask },
}

#[derive(Default)]
struct Queue {
    now_ms: u64,
    next_seq: u64,
    /// Keyed by `(due_ms, submission seq)` so equal deadlines run in submission order.
    jobs: BTreeMap<(u64, u64), Job>,
}

impl Queue {
    fn push(&mut self, due_ms: u64, job: Job) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.jobs.insert((due_ms, seq), job);
    }
}

/// A scheduler whose time only advances through [`ManualScheduler::advance`]
/// or [`ManualScheduler::run_until_idle`].
///
/// Clones share one queue and clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual milliseconds elapsed since creation.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.queue.borrow().now_ms
    }

    /// Number of tasks waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().jobs.len()
    }

    /// Move the clock forward by `ms`, running every task that falls due on
    /// the way, including tasks scheduled by those tasks. Returns how many
    /// callbacks ran.
    pub fn advance(&self, ms: u64) -> usize {
        let target = self.now_ms().saturating_add(ms);
        let mut ran = 0;
        while self.run_next(Some(target)) {
            ran += 1;
        }
        self.queue.borrow_mut().now_ms = target;
        ran
    }

    /// Run tasks in deadline order until none remain. Returns how many
    /// callbacks ran. A repeating task that never breaks keeps this looping.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while self.run_next(None) {
            ran += 1;
        }
        ran
    }

    /// Pop and run the earliest task due at or before `limit`.
    ///
    /// The queue borrow is released before the callback runs so the task may
    /// schedule more work on this same scheduler.
    fn run_next(&self, limit: Option<u64>) -> bool {
        let next = {
            let mut queue = self.queue.borrow_mut();
            let due = match queue.jobs.first_key_value() {
                Some(((due, _), _)) if limit.is_none_or(|limit| *due <= limit) => *due,
                _ => return false,
            };
            queue.now_ms = queue.now_ms.max(due);
            queue.jobs.pop_first()
        };
        let Some(((due, _), job)) = next else {
            return false;
        };

        match job {
            Job::Once(task) => task(),
            Job::Repeating { interval_ms, mut task } => {
                if task().is_continue() {
                    self.queue
                        .borrow_mut()
                        .push(due + u64::from(interval_ms), Job::Repeating { interval_ms, task });
                }
            }
        }
        true
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_once(&self, delay_ms: u32, task: OnceTask) {
        let mut queue = self.queue.borrow_mut();
        let due = queue.now_ms + u64::from(delay_ms);
        queue.push(due, Job::Once(task));
    }

    fn schedule_repeating(&self, interval_ms: u32, task: RepeatingTask) {
        let mut queue = self.queue.borrow_mut();
        let due = queue.now_ms + u64::from(interval_ms);
        queue.push(due, Job::Repeating { interval_ms, task });
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now_ms", &self.now_ms())
            .field("pending", &self.pending())
            .finish()
    }
}
