use super::element::{FlagTarget, ScrollLock};

pub const OPEN_FLAG: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Privacy,
    Terms,
}

impl ModalKind {
    pub const ALL: [ModalKind; 2] = [ModalKind::Privacy, ModalKind::Terms];

    pub fn element_id(self) -> &'static str {
        match self {
            ModalKind::Privacy => "privacy-modal",
            ModalKind::Terms => "terms-modal",
        }
    }

    pub fn link_href(self) -> &'static str {
        match self {
            ModalKind::Privacy => "#privacy",
            ModalKind::Terms => "#terms",
        }
    }
}

// Page scroll stays locked while at least one modal is open.
pub struct ModalSet<E, L> {
    modals: Vec<(ModalKind, E)>,
    lock: L,
}

impl<E: FlagTarget + PartialEq, L: ScrollLock> ModalSet<E, L> {
    pub fn new(lock: L) -> Self {
        Self {
            modals: Vec::new(),
            lock,
        }
    }

    pub fn insert(&mut self, kind: ModalKind, element: E) {
        self.modals.retain(|(k, _)| *k != kind);
        self.modals.push((kind, element));
    }

    fn element(&self, kind: ModalKind) -> Option<&E> {
        self.modals.iter().find(|(k, _)| *k == kind).map(|(_, e)| e)
    }

    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.element(kind).map_or(false, |e| e.has_flag(OPEN_FLAG))
    }

    pub fn any_open(&self) -> bool {
        self.modals.iter().any(|(_, e)| e.has_flag(OPEN_FLAG))
    }

    pub fn open(&self, kind: ModalKind) -> bool {
        let Some(element) = self.element(kind) else {
            return false;
        };
        if self.is_open(kind) {
            return true;
        }
        element.set_flag(OPEN_FLAG, true);
        self.lock.set_scroll_locked(true);
        log::debug!("Opened {:?} modal", kind);
        true
    }

    pub fn close(&self, kind: ModalKind) {
        if let Some(element) = self.element(kind) {
            element.set_flag(OPEN_FLAG, false);
            self.release_lock();
        }
    }

    pub fn close_element(&self, element: &E) {
        if let Some((kind, _)) = self.modals.iter().find(|(_, e)| e == element) {
            self.close(*kind);
        }
    }

    pub fn close_all(&self) -> usize {
        let mut closed = 0;
        for (_, element) in &self.modals {
            if element.has_flag(OPEN_FLAG) {
                element.set_flag(OPEN_FLAG, false);
                closed += 1;
            }
        }
        if closed > 0 {
            self.release_lock();
        }
        closed
    }

    fn release_lock(&self) {
        if !self.any_open() {
            self.lock.set_scroll_locked(false);
        }
    }
}
