// The bare `#` link and links to other pages are left to the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(href),
        _ => None,
    }
}

pub fn scroll_target(rect_top: f64, scroll_y: f64, header_height: f64, extra: f64) -> f64 {
    rect_top + scroll_y - header_height - extra
}

pub fn faq_open_states<E: PartialEq>(categories: &[E], target: &E) -> Vec<bool> {
    categories.iter().map(|category| category == target).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fragment_links_are_intercepted() {
        assert_eq!(anchor_target("#services"), Some("#services"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/blog"), None);
        assert_eq!(anchor_target("https://example.com/#x"), None);
    }

    #[test]
    fn target_accounts_for_header_and_gap() {
        assert_eq!(scroll_target(300.0, 1000.0, 80.0, 0.0), 1220.0);
        assert_eq!(scroll_target(300.0, 1000.0, 80.0, 20.0), 1200.0);
        assert_eq!(scroll_target(-200.0, 1000.0, 80.0, 0.0), 720.0);
    }

    #[test]
    fn faq_link_opens_only_its_category() {
        let categories = ["general", "pricing", "privacy"];
        assert_eq!(
            faq_open_states(&categories, &"pricing"),
            vec![false, true, false]
        );
    }
}
