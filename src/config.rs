use log::Level;
use serde::Deserialize;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info  // Production
}

pub const CONFIG_ELEMENT_ID: &str = "site-config";

// Every field has a default; an override block names only what it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub scroll_threshold: f64,
    pub section_offset: f64,
    pub faq_extra_offset: f64,
    pub header_debounce_ms: u32,
    pub highlight_debounce_ms: u32,
    pub reveal_threshold: f64,
    pub form_placeholder: String,
    pub form_restore_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
            section_offset: 150.0,
            faq_extra_offset: 20.0,
            header_debounce_ms: 5,
            highlight_debounce_ms: 50,
            reveal_threshold: 0.1,
            form_placeholder: "YOUR_FORM_ID".to_string(),
            form_restore_ms: 2000,
        }
    }
}

impl SiteConfig {
    // Missing or malformed blocks fall back to the defaults.
    pub fn from_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring malformed #{} block: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }

    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());
        Self::from_json(raw.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_block_uses_defaults() {
        assert_eq!(SiteConfig::from_json(None), SiteConfig::default());
        assert_eq!(SiteConfig::from_json(Some("  \n ")), SiteConfig::default());
    }

    #[test]
    fn partial_block_overrides_only_named_fields() {
        let config = SiteConfig::from_json(Some(
            r#"{ "scroll_threshold": 80, "form_placeholder": "FORM_TBD" }"#,
        ));
        assert_eq!(config.scroll_threshold, 80.0);
        assert_eq!(config.form_placeholder, "FORM_TBD");
        assert_eq!(config.section_offset, 150.0);
        assert_eq!(config.highlight_debounce_ms, 50);
    }

    #[test]
    fn malformed_block_falls_back() {
        let config = SiteConfig::from_json(Some("{ scroll_threshold: }"));
        assert_eq!(config, SiteConfig::default());
    }
}
