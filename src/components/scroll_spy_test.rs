#![allow(clippy::cast_precision_loss)]

use super::*;
use crate::consts::SCROLL_OFFSET_PX;
use crate::dom::memory::MemoryElement;

struct Page {
    sections: Vec<MemoryElement>,
    links: Vec<MemoryElement>,
    spy: ScrollSpy<MemoryElement>,
}

/// Sections stacked 500px apart starting at the viewport top.
fn page(ids: &[&str]) -> Page {
    let sections: Vec<_> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let top = i as f64 * 500.0;
            MemoryElement::section(id, top, top + 499.0)
        })
        .collect();
    let links: Vec<_> = ids.iter().map(|id| MemoryElement::link(&format!("#{id}"))).collect();
    let spy = ScrollSpy::new(sections.clone(), links.clone(), SCROLL_OFFSET_PX);
    Page { sections, links, spy }
}

fn scroll(page: &Page, dy: f64) {
    for s in &page.sections {
        s.scroll_by(dy);
    }
}

fn active_hrefs(page: &Page) -> Vec<String> {
    page.links
        .iter()
        .filter(|l| l.has_class("active"))
        .filter_map(|l| l.attribute("href"))
        .collect()
}

// --- current_section ---

#[test]
fn current_section_matches_inclusive_edges() {
    let at_top = vec![("a".to_owned(), Rect::new(120.0, 300.0))];
    assert_eq!(current_section(at_top, 120.0).as_deref(), Some("a"));
    let at_bottom = vec![("a".to_owned(), Rect::new(0.0, 120.0))];
    assert_eq!(current_section(at_bottom, 120.0).as_deref(), Some("a"));
}

#[test]
fn current_section_last_match_wins() {
    let overlapping = vec![
        ("first".to_owned(), Rect::new(0.0, 400.0)),
        ("second".to_owned(), Rect::new(100.0, 200.0)),
        ("below".to_owned(), Rect::new(300.0, 600.0)),
    ];
    assert_eq!(current_section(overlapping, 120.0).as_deref(), Some("second"));
}

#[test]
fn current_section_none_in_gap() {
    let gap = vec![("a".to_owned(), Rect::new(0.0, 100.0)), ("b".to_owned(), Rect::new(150.0, 300.0))];
    assert_eq!(current_section(gap, 120.0), None);
}

// --- link_target ---

#[test]
fn link_target_drops_first_character() {
    assert_eq!(link_target("#projects"), "projects");
    assert_eq!(link_target("#"), "");
    assert_eq!(link_target(""), "");
}

// --- ScrollSpy ---

#[test]
fn only_projects_link_is_active_when_line_inside_projects() {
    let page = page(&["home", "about", "projects", "contact"]);
    // projects spans 1000..=1499; after scrolling 950 it spans 50..=549.
    scroll(&page, 950.0);

    assert_eq!(page.spy.on_scroll().as_deref(), Some("projects"));
    assert_eq!(active_hrefs(&page), vec!["#projects".to_owned()]);
}

#[test]
fn highlight_moves_with_scroll() {
    let page = page(&["home", "about", "projects"]);
    assert_eq!(page.spy.on_scroll().as_deref(), Some("home"));
    assert_eq!(active_hrefs(&page), vec!["#home".to_owned()]);

    scroll(&page, 500.0);
    assert_eq!(page.spy.on_scroll().as_deref(), Some("about"));
    assert_eq!(active_hrefs(&page), vec!["#about".to_owned()]);
}

#[test]
fn no_match_clears_every_highlight() {
    let page = page(&["home", "about"]);
    page.spy.on_scroll();
    assert_eq!(active_hrefs(&page).len(), 1);

    scroll(&page, 5_000.0);
    assert_eq!(page.spy.on_scroll(), None);
    assert!(active_hrefs(&page).is_empty());
}

#[test]
fn sections_without_id_are_ignored() {
    let anonymous = MemoryElement::new();
    anonymous.set_rect(Rect::new(0.0, 1_000.0));
    let spy = ScrollSpy::new(vec![anonymous], vec![], SCROLL_OFFSET_PX);
    assert_eq!(spy.section_count(), 0);
    assert_eq!(spy.on_scroll(), None);
}

#[test]
fn section_without_link_highlights_nothing() {
    let section = MemoryElement::section("extra", 0.0, 500.0);
    let link = MemoryElement::link("#home");
    link.add_class("active").unwrap();
    let spy = ScrollSpy::new(vec![section], vec![link.clone()], SCROLL_OFFSET_PX);

    assert_eq!(spy.on_scroll().as_deref(), Some("extra"));
    assert!(!link.has_class("active"));
}

#[test]
fn later_duplicate_link_wins() {
    let section = MemoryElement::section("home", 0.0, 500.0);
    let first = MemoryElement::link("#home");
    let second = MemoryElement::link("#home");
    let spy = ScrollSpy::new(vec![section], vec![first.clone(), second.clone()], SCROLL_OFFSET_PX);

    spy.on_scroll();
    assert!(!first.has_class("active"));
    assert!(second.has_class("active"));
}

#[test]
fn link_without_href_is_still_cleared() {
    let section = MemoryElement::section("home", 0.0, 500.0);
    let bare = MemoryElement::new();
    bare.add_class("active").unwrap();
    let spy = ScrollSpy::new(vec![section], vec![bare.clone()], SCROLL_OFFSET_PX);
    assert_eq!(spy.link_count(), 1);

    spy.on_scroll();
    assert!(!bare.has_class("active"));
}

#[test]
fn overlapping_sections_highlight_the_later_one() {
    let outer = MemoryElement::section("outer", 0.0, 1_000.0);
    let inner = MemoryElement::section("inner", 100.0, 200.0);
    let links = vec![MemoryElement::link("#outer"), MemoryElement::link("#inner")];
    let spy = ScrollSpy::new(vec![outer, inner], links.clone(), SCROLL_OFFSET_PX);

    assert_eq!(spy.on_scroll().as_deref(), Some("inner"));
    assert!(!links[0].has_class("active"));
    assert!(links[1].has_class("active"));
}

#[test]
fn later_empty_id_section_suppresses_highlight() {
    let about = MemoryElement::section("about", 0.0, 500.0);
    let blank = MemoryElement::section("", 100.0, 200.0);
    let links = vec![MemoryElement::link("#about"), MemoryElement::link("#")];
    let spy = ScrollSpy::new(vec![about, blank], links.clone(), SCROLL_OFFSET_PX);

    assert_eq!(spy.section_count(), 2);
    assert_eq!(spy.on_scroll(), None);
    assert!(links.iter().all(|l| !l.has_class("active")));
}

#[test]
fn earlier_empty_id_section_is_overridden_by_later_match() {
    let blank = MemoryElement::section("", 0.0, 500.0);
    let about = MemoryElement::section("about", 100.0, 200.0);
    let link = MemoryElement::link("#about");
    let spy = ScrollSpy::new(vec![blank, about], vec![link.clone()], SCROLL_OFFSET_PX);

    assert_eq!(spy.on_scroll().as_deref(), Some("about"));
    assert!(link.has_class("active"));
}
