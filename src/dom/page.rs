use std::cell::RefCell;
use std::rc::Rc;

use chrono::Datelike;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlDetailsElement, HtmlElement, HtmlFormElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, VisibilityState,
    Window,
};

use super::{by_id, is_escape, query_all, query_one, scroll_offset, smooth_scroll_to, BodyLock, EventBinding};
use crate::behavior::anchor::{anchor_target, faq_open_states, scroll_target};
use crate::behavior::contact::{ContactGuard, SubmitDecision};
use crate::behavior::debounce::{debounce, BrowserTimer};
use crate::behavior::element::FlagTarget;
use crate::behavior::header::HeaderTracker;
use crate::behavior::menu::MobileMenu;
use crate::behavior::modal::{ModalKind, ModalSet};
use crate::behavior::reveal::{stagger_delay, Intersection, RevealAnimator, ANIMATE_FLAG, STAGGER_GROUPS};
use crate::behavior::sections::{NavEntry, Section, SectionHighlighter};
use crate::config::SiteConfig;

const NAV_LINK_SELECTOR: &str = ".nav__link";

// Dropping it removes every listener and disconnects the reveal observer.
pub struct PageBehavior {
    _listeners: Vec<EventBinding>,
    _reveal: Option<RevealBinding>,
}

impl PageBehavior {
    pub fn attach(config: SiteConfig) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let mut listeners = Vec::new();

        let header = by_id::<HtmlElement>(&document, "header");
        if header.is_none() {
            warn!("No #header element, header styling and scroll offsets disabled");
        }

        if let Some(header) = header.clone() {
            bind_header(&window, header, &config, &mut listeners);
        }
        bind_menu(&document, &mut listeners);
        bind_anchors(&window, &document, header.clone(), &mut listeners);
        bind_sections(&window, &document, &config, &mut listeners);
        bind_contact_form(&document, &config, &mut listeners);
        bind_faq_links(&window, &document, header, &config, &mut listeners);
        bind_modals(&document, &mut listeners);
        set_current_year(&document);
        let reveal = RevealBinding::new(&document, &config);

        info!("ThriveIn website initialized");
        Some(Self {
            _listeners: listeners,
            _reveal: reveal,
        })
    }
}

fn bind_header(window: &Window, header: HtmlElement, config: &SiteConfig, listeners: &mut Vec<EventBinding>) {
    let tracker = HeaderTracker::new(header, config.scroll_threshold);
    tracker.update(scroll_offset(window));

    let on_scroll = {
        let window = window.clone();
        debounce(
            move |()| {
                tracker.update(scroll_offset(&window));
            },
            config.header_debounce_ms,
            BrowserTimer,
        )
    };
    listeners.push(EventBinding::new(window, "scroll", move |_| on_scroll.call(())));
}

fn bind_menu(document: &Document, listeners: &mut Vec<EventBinding>) {
    let (Some(toggle), Some(nav)) = (
        by_id::<HtmlElement>(document, "menu-toggle"),
        by_id::<HtmlElement>(document, "nav"),
    ) else {
        return;
    };
    let menu = Rc::new(MobileMenu::new(toggle.clone(), nav, BodyLock(document.body())));

    {
        let menu = menu.clone();
        listeners.push(EventBinding::new(&toggle, "click", move |_| {
            menu.toggle();
        }));
    }
    for link in query_all::<Element>(document, NAV_LINK_SELECTOR) {
        let menu = menu.clone();
        listeners.push(EventBinding::new(&link, "click", move |_| menu.close()));
    }
    listeners.push(EventBinding::new(document, "keydown", move |event| {
        if is_escape(&event) {
            menu.on_escape();
        }
    }));
}

fn header_height(header: &Option<HtmlElement>) -> f64 {
    header.as_ref().map_or(0.0, |h| h.offset_height() as f64)
}

fn bind_anchors(window: &Window, document: &Document, header: Option<HtmlElement>, listeners: &mut Vec<EventBinding>) {
    // FAQ links scroll with their own offset.
    for anchor in query_all::<Element>(document, "a[href^=\"#\"]:not([data-faq-link])") {
        let window = window.clone();
        let document = document.clone();
        let header = header.clone();
        let source = anchor.clone();
        listeners.push(EventBinding::new(&anchor, "click", move |event| {
            let Some(href) = source.get_attribute("href") else {
                return;
            };
            let Some(target) = anchor_target(&href).and_then(|selector| query_one(&document, selector)) else {
                return;
            };
            event.prevent_default();
            let top = scroll_target(
                target.get_bounding_client_rect().top(),
                scroll_offset(&window),
                header_height(&header),
                0.0,
            );
            smooth_scroll_to(&window, top);
        }));
    }
}

fn bind_sections(window: &Window, document: &Document, config: &SiteConfig, listeners: &mut Vec<EventBinding>) {
    let sections = query_all::<HtmlElement>(document, "section[id]")
        .into_iter()
        .map(|element| Section {
            id: element.id(),
            element,
        })
        .collect();
    let entries = query_all::<HtmlElement>(document, NAV_LINK_SELECTOR)
        .into_iter()
        .filter_map(|element| {
            let href = element.get_attribute("href")?;
            NavEntry::from_href(&href, element)
        })
        .collect();
    let highlighter = Rc::new(SectionHighlighter::new(sections, entries, config.section_offset));
    highlighter.highlight(scroll_offset(window));

    let on_scroll = {
        let highlighter = highlighter.clone();
        let window = window.clone();
        debounce(
            move |()| {
                highlighter.highlight(scroll_offset(&window));
            },
            config.highlight_debounce_ms,
            BrowserTimer,
        )
    };
    listeners.push(EventBinding::new(window, "scroll", move |_| on_scroll.call(())));

    // Scroll events are not delivered to background tabs.
    let window = window.clone();
    let source = document.clone();
    listeners.push(EventBinding::new(document, "visibilitychange", move |_| {
        if source.visibility_state() == VisibilityState::Visible {
            highlighter.highlight(scroll_offset(&window));
        }
    }));
}

fn bind_contact_form(document: &Document, config: &SiteConfig, listeners: &mut Vec<EventBinding>) {
    let Some(form) = by_id::<HtmlFormElement>(document, "contact-form") else {
        return;
    };
    let guard = ContactGuard::new(config.form_placeholder.clone(), config.form_restore_ms, BrowserTimer);
    let source = form.clone();
    listeners.push(EventBinding::new(&form, "submit", move |event| {
        let button = source
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|b| b.dyn_into::<HtmlButtonElement>().ok());
        if guard.on_submit(&source.action(), button) == SubmitDecision::NotConfigured {
            event.prevent_default();
        }
    }));
}

fn bind_faq_links(
    window: &Window,
    document: &Document,
    header: Option<HtmlElement>,
    config: &SiteConfig,
    listeners: &mut Vec<EventBinding>,
) {
    let extra = config.faq_extra_offset;
    for link in query_all::<Element>(document, "[data-faq-link]") {
        let window = window.clone();
        let document = document.clone();
        let header = header.clone();
        let source = link.clone();
        listeners.push(EventBinding::new(&link, "click", move |event| {
            event.prevent_default();
            let Some(target) = source
                .get_attribute("href")
                .and_then(|href| query_one(&document, &href))
            else {
                return;
            };

            let categories = query_all::<Element>(&document, ".faq-category");
            for (category, open) in categories.iter().zip(faq_open_states(&categories, &target)) {
                if let Some(details) = category.dyn_ref::<HtmlDetailsElement>() {
                    details.set_open(open);
                }
            }
            if let Some(details) = target.dyn_ref::<HtmlDetailsElement>() {
                details.set_open(true);
            }

            let top = scroll_target(
                target.get_bounding_client_rect().top(),
                scroll_offset(&window),
                header_height(&header),
                extra,
            );
            smooth_scroll_to(&window, top);
        }));
    }
}

fn bind_modals(document: &Document, listeners: &mut Vec<EventBinding>) {
    let mut modals = ModalSet::new(BodyLock(document.body()));
    for kind in ModalKind::ALL {
        if let Some(element) = document.get_element_by_id(kind.element_id()) {
            modals.insert(kind, element);
        }
    }
    let modals = Rc::new(modals);

    for kind in ModalKind::ALL {
        let selector = format!("a[href=\"{}\"]", kind.link_href());
        for link in query_all::<Element>(document, &selector) {
            let modals = modals.clone();
            listeners.push(EventBinding::new(&link, "click", move |event| {
                event.prevent_default();
                modals.open(kind);
            }));
        }
    }

    for control in query_all::<Element>(document, "[data-close-modal]") {
        let modals = modals.clone();
        let source = control.clone();
        listeners.push(EventBinding::new(&control, "click", move |_| {
            if let Ok(Some(modal)) = source.closest(".modal") {
                modals.close_element(&modal);
            }
        }));
    }

    listeners.push(EventBinding::new(document, "keydown", move |event| {
        if is_escape(&event) && modals.close_all() > 0 {
            debug!("Closed open modals on Escape");
        }
    }));
}

fn set_current_year(document: &Document) {
    if let Some(year) = document.get_element_by_id("current-year") {
        year.set_text_content(Some(&chrono::Local::now().year().to_string()));
    }
}

fn stagger_reveal_targets(document: &Document) {
    for group in STAGGER_GROUPS {
        for (index, element) in query_all::<HtmlElement>(document, group.selector).iter().enumerate() {
            element.set_flag(ANIMATE_FLAG, true);
            if let Some(delay) = stagger_delay(index, group.step) {
                let _ = element.style().set_property("transition-delay", &delay);
            }
        }
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct RevealBinding {
    observer: IntersectionObserver,
    animator: Rc<RefCell<RevealAnimator<Element>>>,
    _callback: ObserverCallback,
}

impl RevealBinding {
    fn new(document: &Document, config: &SiteConfig) -> Option<Self> {
        let animator = Rc::new(RefCell::new(RevealAnimator::new()));
        let callback: ObserverCallback = {
            let animator = animator.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| Intersection {
                        target: entry.target(),
                        is_intersecting: entry.is_intersecting(),
                    });
                let mut animator = animator.borrow_mut();
                let revealed = animator.on_intersections(batch, &observer);
                if revealed > 0 {
                    debug!("Revealed {} element(s), {} still waiting", revealed, animator.observed_count());
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_root_margin("0px");
        options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("Scroll animations disabled: {:?}", e);
                return None;
            }
        };

        let binding = Self {
            observer,
            animator,
            _callback: callback,
        };
        stagger_reveal_targets(document);
        for element in query_all::<Element>(document, &format!(".{}", ANIMATE_FLAG)) {
            binding.register(&element);
        }
        Some(binding)
    }

    fn register(&self, element: &Element) {
        self.animator.borrow_mut().register(element, &self.observer);
    }
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
