pub trait FlagTarget {
    fn set_flag(&self, name: &str, on: bool);
    fn has_flag(&self, name: &str) -> bool;

    fn toggle_flag(&self, name: &str) -> bool {
        let on = !self.has_flag(name);
        self.set_flag(name, on);
        on
    }
}

pub trait LayoutBox {
    fn offset_top(&self) -> f64;
    fn offset_height(&self) -> f64;
}

pub trait ObservationRegistry<E> {
    fn observe(&self, element: &E);
    fn unobserve(&self, element: &E);
}

pub trait ScrollLock {
    fn set_scroll_locked(&self, locked: bool);
}
