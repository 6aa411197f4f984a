use super::element::{FlagTarget, ScrollLock};

pub const OPEN_FLAG: &str = "active";

pub struct MobileMenu<E, L> {
    toggle: E,
    nav: E,
    lock: L,
}

impl<E: FlagTarget, L: ScrollLock> MobileMenu<E, L> {
    pub fn new(toggle: E, nav: E, lock: L) -> Self {
        Self { toggle, nav, lock }
    }

    pub fn is_open(&self) -> bool {
        self.nav.has_flag(OPEN_FLAG)
    }

    pub fn toggle(&self) -> bool {
        self.toggle.toggle_flag(OPEN_FLAG);
        let open = self.nav.toggle_flag(OPEN_FLAG);
        self.lock.set_scroll_locked(open);
        log::debug!("Mobile menu {}", if open { "opened" } else { "closed" });
        open
    }

    pub fn close(&self) {
        self.toggle.set_flag(OPEN_FLAG, false);
        self.nav.set_flag(OPEN_FLAG, false);
        self.lock.set_scroll_locked(false);
    }

    pub fn on_escape(&self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.close();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::testing::{FakeElement, FakeLock};
    use std::rc::Rc;

    fn menu() -> (MobileMenu<FakeElement, Rc<FakeLock>>, FakeElement, Rc<FakeLock>) {
        let toggle = FakeElement::new("menu-toggle");
        let nav = FakeElement::new("nav");
        let lock = Rc::new(FakeLock::default());
        (MobileMenu::new(toggle.clone(), nav, lock.clone()), toggle, lock)
    }

    #[test]
    fn toggle_flips_both_flags_and_lock() {
        let (menu, toggle, lock) = menu();
        assert!(menu.toggle());
        assert!(toggle.has_flag(OPEN_FLAG));
        assert!(lock.locked.get());

        assert!(!menu.toggle());
        assert!(!toggle.has_flag(OPEN_FLAG));
        assert!(!lock.locked.get());
    }

    #[test]
    fn nav_click_closes_regardless_of_parity() {
        for toggles in 0..5 {
            let (menu, toggle, lock) = menu();
            for _ in 0..toggles {
                menu.toggle();
            }
            menu.close();
            assert!(!menu.is_open(), "after {toggles} toggles");
            assert!(!toggle.has_flag(OPEN_FLAG));
            assert!(!lock.locked.get());
        }
    }

    #[test]
    fn escape_ignored_when_closed() {
        let (menu, _, lock) = menu();
        assert!(!menu.on_escape());
        menu.toggle();
        assert!(menu.on_escape());
        assert!(!menu.is_open());
        assert!(!lock.locked.get());
    }
}
