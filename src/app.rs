//! Browser entry point.
//!
//! Runs once when the WASM module loads: installs the console logger and panic
//! hook, reads the page configuration, then looks up each component's
//! elements and attaches its listeners. A component whose elements are missing
//! is skipped; a component that fails to wire is logged and the rest still run.
//! Listener closures are leaked on purpose: they live as long as the page.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{AddEventListenerOptions, Document, Event, EventTarget, HtmlFormElement, Window};

use crate::components::contact::ContactFormHandler;
use crate::components::footer::FooterYear;
use crate::components::nav::MobileNav;
use crate::components::scroll_spy::ScrollSpy;
use crate::components::theme::ThemeController;
use crate::components::typing::TypingAnimator;
use crate::config::{CONFIG_ELEMENT_ID, PortfolioConfig};
use crate::consts::PREFERS_DARK_QUERY;
use crate::dom::web::{WebStorage, dom_error, query_all, query_document};
use crate::error::{Error, Result};
use crate::schedule::web::WebScheduler;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Trace).is_err() {
        log::debug!("console logger already installed");
    }
    match mount() {
        Ok(()) => log::info!("portfolio behaviors attached"),
        Err(e) => log::error!("portfolio setup failed: {e}"),
    }
}

fn mount() -> Result<()> {
    let window = web_sys::window().ok_or(Error::MissingElement("window"))?;
    let document = window.document().ok_or(Error::MissingElement("document"))?;

    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let config = PortfolioConfig::resolve(raw.as_deref());
    log::set_max_level(config.log_level.to_level().to_level_filter());

    start_typing(&document, &config);
    if let Err(e) = wire_theme(&window, &document, &config) {
        log::warn!("theme toggle not wired: {e}");
    }
    if let Err(e) = wire_nav(&document, &config) {
        log::warn!("mobile nav not wired: {e}");
    }
    if let Err(e) = wire_scroll_spy(&window, &document, &config) {
        log::warn!("scroll spy not wired: {e}");
    }
    stamp_year(&document, &config);
    if let Err(e) = wire_contact_form(&document, &config) {
        log::warn!("contact form not wired: {e}");
    }
    Ok(())
}

// --- Listener helpers ---

fn on<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    closure.forget();
    Ok(())
}

/// Like [`on`], but the listener promises never to call `preventDefault`.
fn on_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(dom_error)?;
    closure.forget();
    Ok(())
}

// --- Components ---

fn start_typing(document: &Document, config: &PortfolioConfig) {
    TypingAnimator::start(
        document.get_element_by_id(&config.ids.typing_target),
        &config.typing_text,
        config.typing_interval_ms,
        &WebScheduler,
    );
}

fn prefers_dark(window: &Window) -> bool {
    match window.match_media(PREFERS_DARK_QUERY) {
        Ok(Some(query)) => query.matches(),
        Ok(None) => false,
        Err(e) => {
            log::debug!("matchMedia unavailable: {}", dom_error(e));
            false
        }
    }
}

fn wire_theme(window: &Window, document: &Document, config: &PortfolioConfig) -> Result<()> {
    let root = document
        .document_element()
        .ok_or(Error::MissingElement("documentElement"))?;
    let toggle = document.get_element_by_id(&config.ids.theme_toggle);
    let controller = Rc::new(ThemeController::new(
        root,
        toggle.clone(),
        WebStorage::local(window),
        config.theme_storage_key.clone(),
    ));
    controller.init(prefers_dark(window));

    if let Some(toggle) = toggle {
        on(&toggle, "click", move |_| {
            controller.on_toggle_click();
        })?;
    }
    Ok(())
}

fn wire_nav(document: &Document, config: &PortfolioConfig) -> Result<()> {
    let menu = document.get_element_by_id(&config.ids.menu_toggle);
    let list = document.get_element_by_id(&config.ids.nav_list);
    let links = match &list {
        Some(list) => query_all(list, "a")?,
        None => Vec::new(),
    };
    let Some(nav) = MobileNav::new(menu.as_ref(), list) else {
        return Ok(());
    };
    let Some(menu) = menu else {
        return Ok(());
    };

    let nav = Rc::new(nav);
    let on_menu = Rc::clone(&nav);
    on(&menu, "click", move |_| {
        on_menu.on_menu_click();
    })?;
    for link in links {
        let on_link = Rc::clone(&nav);
        on(&link, "click", move |_| on_link.on_link_click())?;
    }
    Ok(())
}

fn wire_scroll_spy(window: &Window, document: &Document, config: &PortfolioConfig) -> Result<()> {
    let sections = query_document(document, &config.ids.sections)?;
    let links = query_document(document, &config.ids.nav_links)?;
    let spy = Rc::new(ScrollSpy::new(sections, links, config.scroll_offset_px));
    log::debug!("scroll spy tracking {} sections, {} links", spy.section_count(), spy.link_count());

    let on_scroll = Rc::clone(&spy);
    on_passive(document, "scroll", move |_| {
        on_scroll.on_scroll();
    })?;
    on(window, "load", move |_| {
        spy.on_scroll();
    })
}

fn stamp_year(document: &Document, config: &PortfolioConfig) {
    let year = js_sys::Date::new_0().get_full_year();
    FooterYear::stamp(document.get_element_by_id(&config.ids.year).as_ref(), year);
}

fn wire_contact_form(document: &Document, config: &PortfolioConfig) -> Result<()> {
    let Some(form) = document.get_element_by_id(&config.ids.contact_form) else {
        log::debug!("contact form missing, handler skipped");
        return Ok(());
    };
    let form = form
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| Error::Dom(format!("#{} is not a <form>", config.ids.contact_form)))?;
    let status = document
        .get_element_by_id(&config.ids.form_status)
        .ok_or(Error::MissingElement("form status"))?;

    let handler = ContactFormHandler::new(form.clone(), status, WebScheduler, config.submit_delay_ms)?;
    on(&form, "submit", move |event: Event| {
        event.prevent_default();
        handler.on_submit();
    })
}
