use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;

use super::contact::SubmitButton;
use super::debounce::Timer;
use super::element::{FlagTarget, LayoutBox, ObservationRegistry, ScrollLock};

#[derive(Default)]
struct FakeState {
    name: String,
    flags: HashSet<String>,
    top: f64,
    height: f64,
}

#[derive(Clone)]
pub struct FakeElement(Rc<RefCell<FakeState>>);

impl FakeElement {
    pub fn new(name: &str) -> Self {
        Self(Rc::new(RefCell::new(FakeState {
            name: name.to_string(),
            ..FakeState::default()
        })))
    }

    pub fn with_box(name: &str, top: f64, height: f64) -> Self {
        let element = Self::new(name);
        {
            let mut state = element.0.borrow_mut();
            state.top = top;
            state.height = height;
        }
        element
    }

    pub fn name(&self) -> String {
        self.0.borrow().name.clone()
    }
}

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FakeElement({})", self.0.borrow().name)
    }
}

impl FlagTarget for FakeElement {
    fn set_flag(&self, name: &str, on: bool) {
        let mut state = self.0.borrow_mut();
        if on {
            state.flags.insert(name.to_string());
        } else {
            state.flags.remove(name);
        }
    }

    fn has_flag(&self, name: &str) -> bool {
        self.0.borrow().flags.contains(name)
    }
}

impl LayoutBox for FakeElement {
    fn offset_top(&self) -> f64 {
        self.0.borrow().top
    }

    fn offset_height(&self) -> f64 {
        self.0.borrow().height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegistryCall {
    Observe(String),
    Unobserve(String),
}

#[derive(Default)]
pub struct FakeRegistry {
    pub calls: RefCell<Vec<RegistryCall>>,
}

impl ObservationRegistry<FakeElement> for FakeRegistry {
    fn observe(&self, element: &FakeElement) {
        self.calls.borrow_mut().push(RegistryCall::Observe(element.name()));
    }

    fn unobserve(&self, element: &FakeElement) {
        self.calls.borrow_mut().push(RegistryCall::Unobserve(element.name()));
    }
}

#[derive(Default)]
pub struct FakeLock {
    pub locked: Cell<bool>,
}

impl ScrollLock for FakeLock {
    fn set_scroll_locked(&self, locked: bool) {
        self.locked.set(locked);
    }
}

// Menu and modal tests keep a handle on the lock they hand out.
impl ScrollLock for Rc<FakeLock> {
    fn set_scroll_locked(&self, locked: bool) {
        self.locked.set(locked);
    }
}

#[derive(Clone)]
pub struct FakeButton(Rc<RefCell<(String, bool)>>);

impl FakeButton {
    pub fn new(label: &str) -> Self {
        Self(Rc::new(RefCell::new((label.to_string(), false))))
    }

    pub fn disabled(&self) -> bool {
        self.0.borrow().1
    }
}

impl SubmitButton for FakeButton {
    fn label(&self) -> String {
        self.0.borrow().0.clone()
    }

    fn set_label(&self, label: &str) {
        self.0.borrow_mut().0 = label.to_string();
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.borrow_mut().1 = disabled;
    }
}

struct Pending {
    due: u32,
    cancelled: Rc<Cell<bool>>,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ClockState {
    now: u32,
    next_id: u64,
    pending: BTreeMap<u64, Pending>,
}

// Scheduled callbacks run only when a test advances the clock.
#[derive(Clone, Default)]
pub struct FakeTimer(Rc<RefCell<ClockState>>);

pub struct FakeHandle(Rc<Cell<bool>>);

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

impl FakeTimer {
    pub fn now(&self) -> u32 {
        self.0.borrow().now
    }

    pub fn pending_count(&self) -> usize {
        self.0
            .borrow()
            .pending
            .values()
            .filter(|p| !p.cancelled.get())
            .count()
    }

    pub fn advance_to(&self, t: u32) {
        loop {
            let next = {
                let mut state = self.0.borrow_mut();
                let id = state
                    .pending
                    .iter()
                    .filter(|(_, p)| p.due <= t)
                    .min_by_key(|(id, p)| (p.due, **id))
                    .map(|(id, _)| *id);
                match id {
                    Some(id) => {
                        let pending = state.pending.remove(&id);
                        if let Some(p) = &pending {
                            state.now = p.due;
                        }
                        pending
                    }
                    None => None,
                }
            };
            match next {
                Some(p) if !p.cancelled.get() => (p.callback)(),
                Some(_) => {}
                None => break,
            }
        }
        self.0.borrow_mut().now = t;
    }
}

impl Timer for FakeTimer {
    type Handle = FakeHandle;

    fn schedule(&self, wait_ms: u32, callback: Box<dyn FnOnce()>) -> FakeHandle {
        let mut state = self.0.borrow_mut();
        let cancelled = Rc::new(Cell::new(false));
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + wait_ms;
        state.pending.insert(
            id,
            Pending {
                due,
                cancelled: cancelled.clone(),
                callback,
            },
        );
        FakeHandle(cancelled)
    }
}
