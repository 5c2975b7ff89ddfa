use log::{warn, Level};
use serde::Deserialize;
use web_sys::Document;

/// Id of the optional inline JSON block that overrides the defaults below.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage_key: String,
    pub theme_debounce_ms: u32,
    pub reveal_threshold: f64,
    pub send_delay_ms: u32,
    pub feedback_clear_ms: u32,
    pub min_message_len: usize,
    pub load_more_step_ms: u32,
    pub back_to_top_offset: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            theme_debounce_ms: 200,
            reveal_threshold: 0.1,
            send_delay_ms: 1_000,
            feedback_clear_ms: 3_000,
            min_message_len: 10,
            load_more_step_ms: 200,
            back_to_top_offset: 300.0,
        }
    }
}

impl Config {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads `<script type="application/json" id="site-config">` if the page has one.
    pub fn from_document(document: &Document) -> Self {
        let raw = match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Self::default(),
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
