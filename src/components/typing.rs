//! Typing animation for the brand title.
//!
//! The first character appears immediately; every following character after
//! one more interval. Once the title is complete the timer stops and the
//! animation cannot be restarted.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use crate::dom::Element;
use crate::schedule::Scheduler;

/// Position of the animation within its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingProgress {
    chars: Vec<char>,
    index: usize,
}

impl TypingProgress {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), index: 0 }
    }

    /// Characters revealed so far.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.index >= self.chars.len()
    }

    /// Take the next character to reveal, or `None` once complete.
    pub fn next_char(&mut self) -> Option<char> {
        let c = self.chars.get(self.index).copied()?;
        self.index += 1;
        Some(c)
    }
}

/// Handle to a running animation; only useful for observing progress.
#[derive(Debug, Clone)]
pub struct TypingAnimator {
    progress: Rc<RefCell<TypingProgress>>,
}

impl TypingAnimator {
    /// Start revealing `text` into `target`, one character per `interval_ms`.
    ///
    /// Returns `None` without scheduling anything when there is no target.
    pub fn start<E, S>(target: Option<E>, text: &str, interval_ms: u32, scheduler: &S) -> Option<Self>
    where
        E: Element + 'static,
        S: Scheduler,
    {
        let Some(target) = target else {
            log::debug!("typing target missing, animation skipped");
            return None;
        };

        let progress = Rc::new(RefCell::new(TypingProgress::new(text)));
        if !reveal_next(&target, &progress) {
            return Some(Self { progress });
        }

        let tick_progress = Rc::clone(&progress);
        scheduler.schedule_repeating(
            interval_ms,
            Box::new(move || {
                if reveal_next(&target, &tick_progress) {
                    ControlFlow::Continue(())
                } else {
                    ControlFlow::Break(())
                }
            }),
        );
        Some(Self { progress })
    }

    #[must_use]
    pub fn progress(&self) -> TypingProgress {
        self.progress.borrow().clone()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress.borrow().is_complete()
    }
}

/// Append the next character; report whether more remain.
fn reveal_next<E: Element>(target: &E, progress: &RefCell<TypingProgress>) -> bool {
    let mut progress = progress.borrow_mut();
    if let Some(c) = progress.next_char() {
        let mut buf = [0u8; 4];
        target.append_text(c.encode_utf8(&mut buf));
    }
    !progress.is_complete()
}
