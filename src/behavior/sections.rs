use super::element::{FlagTarget, LayoutBox};

pub const ACTIVE_FLAG: &str = "active";

pub struct Section<E> {
    pub id: String,
    pub element: E,
}

pub struct NavEntry<E> {
    pub target_id: String,
    pub element: E,
}

impl<E> NavEntry<E> {
    pub fn from_href(href: &str, element: E) -> Option<Self> {
        let target_id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
        Some(Self {
            target_id: target_id.to_string(),
            element,
        })
    }
}

/// Id of the section containing `offset`.
///
/// A section spans `[top - lead, top - lead + height)`. Sections are walked
/// in document order and a later match overrides an earlier one.
pub fn current_section<E: LayoutBox>(offset: f64, sections: &[Section<E>], lead: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        let start = section.element.offset_top() - lead;
        let end = start + section.element.offset_height();
        if start <= offset && offset < end {
            current = Some(section.id.as_str());
        }
    }
    current
}

pub fn nav_states<E>(current: Option<&str>, entries: &[NavEntry<E>]) -> Vec<bool> {
    entries
        .iter()
        .map(|entry| current == Some(entry.target_id.as_str()))
        .collect()
}

pub struct SectionHighlighter<E> {
    sections: Vec<Section<E>>,
    entries: Vec<NavEntry<E>>,
    lead: f64,
}

impl<E: FlagTarget + LayoutBox> SectionHighlighter<E> {
    pub fn new(sections: Vec<Section<E>>, entries: Vec<NavEntry<E>>, lead: f64) -> Self {
        Self {
            sections,
            entries,
            lead,
        }
    }

    pub fn highlight(&self, offset: f64) -> Option<&str> {
        let current = current_section(offset, &self.sections, self.lead);
        for (entry, active) in self.entries.iter().zip(nav_states(current, &self.entries)) {
            entry.element.set_flag(ACTIVE_FLAG, active);
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::testing::FakeElement;

    fn section(id: &str, top: f64, height: f64) -> Section<FakeElement> {
        Section {
            id: id.to_string(),
            element: FakeElement::with_box(id, top, height),
        }
    }

    fn entry(href: &str) -> NavEntry<FakeElement> {
        NavEntry::from_href(href, FakeElement::new(href)).unwrap()
    }

    fn active(highlighter: &SectionHighlighter<FakeElement>) -> Vec<String> {
        highlighter
            .entries
            .iter()
            .filter(|e| e.element.has_flag(ACTIVE_FLAG))
            .map(|e| e.target_id.clone())
            .collect()
    }

    fn two_sections() -> SectionHighlighter<FakeElement> {
        SectionHighlighter::new(
            vec![section("a", 0.0, 500.0), section("b", 500.0, 500.0)],
            vec![entry("#a"), entry("#b")],
            150.0,
        )
    }

    #[test]
    fn offset_inside_second_section_activates_it() {
        let highlighter = two_sections();
        assert_eq!(highlighter.highlight(600.0), Some("b"));
        assert_eq!(active(&highlighter), vec!["b"]);
    }

    #[test]
    fn boundaries_are_half_open() {
        let highlighter = two_sections();
        assert_eq!(highlighter.highlight(-150.0), Some("a"));
        assert_eq!(highlighter.highlight(349.0), Some("a"));
        assert_eq!(highlighter.highlight(350.0), Some("b"));
        assert_eq!(highlighter.highlight(849.0), Some("b"));
    }

    #[test]
    fn no_match_clears_every_entry() {
        let highlighter = two_sections();
        highlighter.highlight(600.0);
        assert_eq!(highlighter.highlight(850.0), None);
        assert!(active(&highlighter).is_empty());
    }

    #[test]
    fn at_most_one_entry_active_across_offsets() {
        let highlighter = two_sections();
        for offset in (-400..1200).step_by(25) {
            highlighter.highlight(offset as f64);
            assert!(active(&highlighter).len() <= 1, "offset {offset}");
        }
    }

    #[test]
    fn overlapping_sections_resolve_to_last_in_order() {
        let sections = vec![section("a", 0.0, 800.0), section("b", 300.0, 500.0)];
        assert_eq!(current_section(400.0, &sections, 150.0), Some("b"));
        assert_eq!(current_section(100.0, &sections, 150.0), Some("a"));
    }

    #[test]
    fn redundant_calls_are_stable() {
        let highlighter = two_sections();
        highlighter.highlight(100.0);
        highlighter.highlight(100.0);
        assert_eq!(active(&highlighter), vec!["a"]);
    }

    #[test]
    fn href_binding_ignores_non_fragments() {
        assert!(NavEntry::from_href("#", ()).is_none());
        assert!(NavEntry::from_href("/pricing", ()).is_none());
        assert_eq!(NavEntry::from_href("#contact", ()).unwrap().target_id, "contact");
    }
}
