use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// One-shot timer primitive. Dropping the returned handle cancels the call.
pub trait Timer {
    type Handle;

    fn schedule(&self, wait_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

#[derive(Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    type Handle = Timeout;

    fn schedule(&self, wait_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(wait_ms, callback)
    }
}

/// Trailing-edge debounce: each call replaces the pending one, and the
/// action runs once `wait_ms` pass without a new call, with the latest args.
pub struct Debounced<A, T: Timer> {
    action: Rc<dyn Fn(A)>,
    wait_ms: u32,
    timer: T,
    pending: RefCell<Option<T::Handle>>,
}

pub fn debounce<A, T, F>(action: F, wait_ms: u32, timer: T) -> Debounced<A, T>
where
    T: Timer,
    F: Fn(A) + 'static,
{
    Debounced {
        action: Rc::new(action),
        wait_ms,
        timer,
        pending: RefCell::new(None),
    }
}

impl<A: 'static, T: Timer> Debounced<A, T> {
    pub fn call(&self, args: A) {
        let action = self.action.clone();
        let handle = self
            .timer
            .schedule(self.wait_ms, Box::new(move || action(args)));
        // Replacing the old handle drops it, which cancels the superseded call.
        self.pending.replace(Some(handle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::testing::FakeTimer;

    fn recorder(timer: &FakeTimer) -> (Rc<RefCell<Vec<(u32, i32)>>>, impl Fn(i32) + 'static) {
        let runs = Rc::new(RefCell::new(Vec::new()));
        let clock = timer.clone();
        let sink = runs.clone();
        (runs, move |arg| sink.borrow_mut().push((clock.now(), arg)))
    }

    #[test]
    fn burst_of_calls_runs_once_with_last_args() {
        let timer = FakeTimer::default();
        let (runs, action) = recorder(&timer);
        let debounced = debounce(action, 50, timer.clone());

        debounced.call(1);
        timer.advance_to(10);
        debounced.call(2);
        timer.advance_to(20);
        debounced.call(3);

        timer.advance_to(69);
        assert!(runs.borrow().is_empty());

        timer.advance_to(200);
        assert_eq!(*runs.borrow(), vec![(70, 3)]);
    }

    #[test]
    fn never_fires_while_calls_keep_arriving() {
        let timer = FakeTimer::default();
        let (runs, action) = recorder(&timer);
        let debounced = debounce(action, 50, timer.clone());

        for t in (0..500).step_by(40) {
            timer.advance_to(t);
            debounced.call(t as i32);
        }
        assert!(runs.borrow().is_empty());

        timer.advance_to(1000);
        assert_eq!(*runs.borrow(), vec![(530, 480)]);
    }

    #[test]
    fn separate_quiet_windows_each_fire() {
        let timer = FakeTimer::default();
        let (runs, action) = recorder(&timer);
        let debounced = debounce(action, 5, timer.clone());

        debounced.call(7);
        timer.advance_to(100);
        debounced.call(8);
        timer.advance_to(200);

        assert_eq!(*runs.borrow(), vec![(5, 7), (105, 8)]);
    }
}
