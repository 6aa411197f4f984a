use std::cell::RefCell;
use std::rc::Rc;

use super::debounce::Timer;

pub const NOT_CONFIGURED_LABEL: &str = "<span>Form not configured</span>";
pub const SENDING_LABEL: &str = "<span>Sending...</span>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    NotConfigured,
    Sending,
}

pub fn decide(action: &str, placeholder: &str) -> SubmitDecision {
    if !placeholder.is_empty() && action.contains(placeholder) {
        SubmitDecision::NotConfigured
    } else {
        SubmitDecision::Sending
    }
}

pub fn button_state(decision: SubmitDecision) -> (&'static str, bool) {
    match decision {
        SubmitDecision::NotConfigured => (NOT_CONFIGURED_LABEL, true),
        SubmitDecision::Sending => (SENDING_LABEL, true),
    }
}

pub trait SubmitButton {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn set_disabled(&self, disabled: bool);
}

pub struct ContactGuard<T: Timer> {
    placeholder: String,
    restore_ms: u32,
    timer: T,
    original: Rc<RefCell<Option<String>>>,
    restore: RefCell<Option<T::Handle>>,
}

impl<T: Timer> ContactGuard<T> {
    pub fn new(placeholder: String, restore_ms: u32, timer: T) -> Self {
        Self {
            placeholder,
            restore_ms,
            timer,
            original: Rc::new(RefCell::new(None)),
            restore: RefCell::new(None),
        }
    }

    pub fn on_submit<B>(&self, action: &str, button: Option<B>) -> SubmitDecision
    where
        B: SubmitButton + 'static,
    {
        let decision = decide(action, &self.placeholder);
        if decision == SubmitDecision::NotConfigured {
            log::warn!("Contact form is not configured. Please update the Formspree form ID in index.html");
        }
        let Some(button) = button else {
            return decision;
        };

        // A second notice while one is showing must not capture the notice as the label.
        if decision == SubmitDecision::NotConfigured {
            self.original.borrow_mut().get_or_insert_with(|| button.label());
        }
        let (label, disabled) = button_state(decision);
        button.set_label(label);
        button.set_disabled(disabled);

        if decision == SubmitDecision::NotConfigured {
            let original = self.original.clone();
            let handle = self.timer.schedule(
                self.restore_ms,
                Box::new(move || {
                    if let Some(label) = original.borrow_mut().take() {
                        button.set_label(&label);
                    }
                    button.set_disabled(false);
                }),
            );
            self.restore.replace(Some(handle));
        }
        decision
    }
}
