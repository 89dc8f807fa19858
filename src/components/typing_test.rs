use super::*;
use crate::consts::{TYPING_INTERVAL_MS, TYPING_TEXT};
use crate::dom::memory::MemoryElement;
use crate::schedule::ManualScheduler;

// --- TypingProgress ---

#[test]
fn progress_walks_characters_in_order() {
    let mut p = TypingProgress::new("ab");
    assert_eq!(p.len(), 2);
    assert_eq!(p.next_char(), Some('a'));
    assert_eq!(p.index(), 1);
    assert!(!p.is_complete());
    assert_eq!(p.next_char(), Some('b'));
    assert!(p.is_complete());
    assert_eq!(p.next_char(), None);
    assert_eq!(p.index(), 2);
}

#[test]
fn progress_counts_unicode_scalars() {
    let p = TypingProgress::new("é☀");
    assert_eq!(p.len(), 2);
}

#[test]
fn empty_progress_is_complete() {
    let p = TypingProgress::new("");
    assert!(p.is_empty());
    assert!(p.is_complete());
}

// --- TypingAnimator ---

#[test]
fn missing_target_is_a_noop() {
    let sched = ManualScheduler::new();
    let anim = TypingAnimator::start(None::<MemoryElement>, TYPING_TEXT, TYPING_INTERVAL_MS, &sched);
    assert!(anim.is_none());
    assert_eq!(sched.pending(), 0);
}

#[test]
fn first_character_appears_immediately() {
    let sched = ManualScheduler::new();
    let el = MemoryElement::new();
    TypingAnimator::start(Some(el.clone()), "Hey", 100, &sched);
    assert_eq!(el.text(), "H");
}

#[test]
fn one_character_per_interval() {
    let sched = ManualScheduler::new();
    let el = MemoryElement::new();
    TypingAnimator::start(Some(el.clone()), "Hey", 100, &sched);

    sched.advance(99);
    assert_eq!(el.text(), "H");
    sched.advance(1);
    assert_eq!(el.text(), "He");
    sched.advance(100);
    assert_eq!(el.text(), "Hey");
}

#[test]
fn drained_queue_reveals_title_exactly_once() {
    let sched = ManualScheduler::new();
    let el = MemoryElement::new();
    let anim = TypingAnimator::start(Some(el.clone()), TYPING_TEXT, TYPING_INTERVAL_MS, &sched).unwrap();

    sched.run_until_idle();
    assert_eq!(el.text(), TYPING_TEXT);
    assert!(anim.is_complete());
    assert_eq!(anim.progress().index(), TYPING_TEXT.chars().count());
}

#[test]
fn timer_stops_after_last_character() {
    let sched = ManualScheduler::new();
    let el = MemoryElement::new();
    TypingAnimator::start(Some(el.clone()), "abc", 100, &sched);

    sched.advance(200);
    assert_eq!(el.text(), "abc");
    assert_eq!(sched.pending(), 0);

    sched.advance(10_000);
    assert_eq!(el.text(), "abc");
}

#[test]
fn appends_to_existing_text() {
    let sched = ManualScheduler::new();
    let el = MemoryElement::new();
    el.set_text("> ");
    TypingAnimator::start(Some(el.clone()), "ok", 100, &sched);
    sched.run_until_idle();
    assert_eq!(el.text(), "> ok");
}

#[test]
fn empty_title_schedules_nothing() {
    let sched = ManualScheduler::new();
    let el = MemoryElement::new();
    let anim = TypingAnimator::start(Some(el.clone()), "", 100, &sched).unwrap();
    assert!(anim.is_complete());
    assert_eq!(sched.pending(), 0);
    assert_eq!(el.text(), "");
}

#[test]
fn single_character_title_needs_no_timer() {
    let sched = ManualScheduler::new();
    let el = MemoryElement::new();
    TypingAnimator::start(Some(el.clone()), "M", 100, &sched);
    assert_eq!(el.text(), "M");
    assert_eq!(sched.pending(), 0);
}
