pub mod page;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlButtonElement, HtmlElement, IntersectionObserver, KeyboardEvent,
    ScrollBehavior, ScrollToOptions, Window,
};

use crate::behavior::contact::SubmitButton;
use crate::behavior::element::{FlagTarget, LayoutBox, ObservationRegistry, ScrollLock};

impl FlagTarget for Element {
    fn set_flag(&self, name: &str, on: bool) {
        let classes = self.class_list();
        let _ = if on {
            classes.add_1(name)
        } else {
            classes.remove_1(name)
        };
    }

    fn has_flag(&self, name: &str) -> bool {
        self.class_list().contains(name)
    }
}

impl FlagTarget for HtmlElement {
    fn set_flag(&self, name: &str, on: bool) {
        Element::set_flag(self, name, on)
    }

    fn has_flag(&self, name: &str) -> bool {
        Element::has_flag(self, name)
    }
}

impl LayoutBox for HtmlElement {
    fn offset_top(&self) -> f64 {
        HtmlElement::offset_top(self) as f64
    }

    fn offset_height(&self) -> f64 {
        HtmlElement::offset_height(self) as f64
    }
}

impl ObservationRegistry<Element> for IntersectionObserver {
    fn observe(&self, element: &Element) {
        IntersectionObserver::observe(self, element);
    }

    fn unobserve(&self, element: &Element) {
        IntersectionObserver::unobserve(self, element);
    }
}

impl SubmitButton for HtmlButtonElement {
    fn label(&self) -> String {
        self.inner_html()
    }

    fn set_label(&self, label: &str) {
        self.set_inner_html(label);
    }

    fn set_disabled(&self, disabled: bool) {
        HtmlButtonElement::set_disabled(self, disabled);
    }
}

#[derive(Clone)]
pub struct BodyLock(pub Option<HtmlElement>);

impl ScrollLock for BodyLock {
    fn set_scroll_locked(&self, locked: bool) {
        let Some(body) = &self.0 else {
            return;
        };
        let style = body.style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }
}

pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventBinding {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        if target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("Could not listen for {} events", event);
        }
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn query_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn is_escape(event: &Event) -> bool {
    event
        .dyn_ref::<KeyboardEvent>()
        .map_or(false, |e| e.key() == "Escape")
}
