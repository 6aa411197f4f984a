use super::element::FlagTarget;

pub const SCROLLED_FLAG: &str = "header--scrolled";

pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

pub struct HeaderTracker<E> {
    header: E,
    threshold: f64,
}

impl<E: FlagTarget> HeaderTracker<E> {
    pub fn new(header: E, threshold: f64) -> Self {
        Self { header, threshold }
    }

    pub fn update(&self, offset: f64) -> bool {
        let scrolled = is_scrolled(offset, self.threshold);
        self.header.set_flag(SCROLLED_FLAG, scrolled);
        scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::testing::FakeElement;

    #[test]
    fn threshold_is_exclusive() {
        for offset in [0.0, 12.5, 49.9, 50.0] {
            assert!(!is_scrolled(offset, 50.0), "offset {offset}");
        }
        for offset in [50.1, 51.0, 4000.0] {
            assert!(is_scrolled(offset, 50.0), "offset {offset}");
        }
    }

    #[test]
    fn update_sets_and_clears_flag() {
        let header = FakeElement::new("header");
        let tracker = HeaderTracker::new(header.clone(), 50.0);

        assert!(tracker.update(120.0));
        assert!(header.has_flag(SCROLLED_FLAG));
        assert!(tracker.update(120.0));
        assert!(header.has_flag(SCROLLED_FLAG));

        assert!(!tracker.update(50.0));
        assert!(!header.has_flag(SCROLLED_FLAG));
    }
}
