use super::element::{FlagTarget, ObservationRegistry};

pub const VISIBLE_FLAG: &str = "visible";
pub const ANIMATE_FLAG: &str = "animate-on-scroll";

pub struct Intersection<E> {
    pub target: E,
    pub is_intersecting: bool,
}

// The registry is passed per call so the observer callback can hand in
// the observer that fired.
pub struct RevealAnimator<E> {
    observed: Vec<E>,
}

impl<E> Default for RevealAnimator<E> {
    fn default() -> Self {
        Self { observed: Vec::new() }
    }
}

impl<E: FlagTarget + PartialEq + Clone> RevealAnimator<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(element: &E) -> bool {
        element.has_flag(VISIBLE_FLAG)
    }

    pub fn register<R: ObservationRegistry<E>>(&mut self, element: &E, registry: &R) -> bool {
        if Self::is_revealed(element) || self.observed.contains(element) {
            return false;
        }
        registry.observe(element);
        self.observed.push(element.clone());
        true
    }

    pub fn on_intersections<R, I>(&mut self, entries: I, registry: &R) -> usize
    where
        R: ObservationRegistry<E>,
        I: IntoIterator<Item = Intersection<E>>,
    {
        let mut revealed = 0;
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            if !Self::is_revealed(&entry.target) {
                entry.target.set_flag(VISIBLE_FLAG, true);
                revealed += 1;
            }
            registry.unobserve(&entry.target);
            self.observed.retain(|element| *element != entry.target);
        }
        revealed
    }

    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }
}

pub struct StaggerGroup {
    pub selector: &'static str,
    // seconds per position
    pub step: f64,
}

pub const STAGGER_GROUPS: &[StaggerGroup] = &[
    StaggerGroup { selector: ".service-card", step: 0.1 },
    StaggerGroup { selector: ".step", step: 0.15 },
    StaggerGroup { selector: ".feature", step: 0.1 },
    StaggerGroup { selector: ".testimonial-card", step: 0.1 },
    StaggerGroup { selector: ".faq-category", step: 0.1 },
    StaggerGroup { selector: ".section-header", step: 0.0 },
];

pub fn stagger_delay(index: usize, step: f64) -> Option<String> {
    if step <= 0.0 {
        return None;
    }
    let seconds = (index as f64 * step * 100.0).round() / 100.0;
    Some(format!("{}s", seconds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::testing::{FakeElement, FakeRegistry, RegistryCall};

    fn hit(target: &FakeElement) -> Intersection<FakeElement> {
        Intersection { target: target.clone(), is_intersecting: true }
    }

    fn miss(target: &FakeElement) -> Intersection<FakeElement> {
        Intersection { target: target.clone(), is_intersecting: false }
    }

    #[test]
    fn reveals_once_and_stops_observing() {
        let registry = FakeRegistry::default();
        let mut animator = RevealAnimator::new();
        let card = FakeElement::new("card");

        assert!(animator.register(&card, &registry));
        assert_eq!(animator.on_intersections([miss(&card)], &registry), 0);
        assert!(!RevealAnimator::is_revealed(&card));

        assert_eq!(animator.on_intersections([hit(&card)], &registry), 1);
        assert!(card.has_flag(VISIBLE_FLAG));
        assert_eq!(animator.observed_count(), 0);
        assert_eq!(
            *registry.calls.borrow(),
            vec![
                RegistryCall::Observe("card".into()),
                RegistryCall::Unobserve("card".into())
            ]
        );
    }

    #[test]
    fn revealed_is_terminal() {
        let registry = FakeRegistry::default();
        let mut animator = RevealAnimator::new();
        let card = FakeElement::new("card");
        animator.register(&card, &registry);
        animator.on_intersections([hit(&card)], &registry);

        assert_eq!(animator.on_intersections([hit(&card), miss(&card)], &registry), 0);
        assert!(card.has_flag(VISIBLE_FLAG));
        assert!(!animator.register(&card, &registry));
        assert_eq!(registry.calls.borrow().iter().filter(|c| matches!(c, RegistryCall::Observe(_))).count(), 1);
    }

    #[test]
    fn duplicate_registration_observes_once() {
        let registry = FakeRegistry::default();
        let mut animator = RevealAnimator::new();
        let card = FakeElement::new("card");

        assert!(animator.register(&card, &registry));
        assert!(!animator.register(&card, &registry));
        assert_eq!(animator.observed_count(), 1);
        assert_eq!(registry.calls.borrow().len(), 1);
    }

    #[test]
    fn late_registrations_join_the_batch() {
        let registry = FakeRegistry::default();
        let mut animator = RevealAnimator::new();
        let first = FakeElement::new("first");
        let late = FakeElement::new("late");

        animator.register(&first, &registry);
        animator.on_intersections([hit(&first)], &registry);
        animator.register(&late, &registry);

        assert_eq!(animator.on_intersections([hit(&first), hit(&late)], &registry), 1);
        assert!(late.has_flag(VISIBLE_FLAG));
    }

    #[test]
    fn stagger_delays() {
        assert_eq!(stagger_delay(0, 0.1).as_deref(), Some("0s"));
        assert_eq!(stagger_delay(3, 0.1).as_deref(), Some("0.3s"));
        assert_eq!(stagger_delay(2, 0.15).as_deref(), Some("0.3s"));
        assert_eq!(stagger_delay(5, 0.0), None);
    }
}
