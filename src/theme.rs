use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::{Element, Storage, Window};

use crate::config::Config;
use crate::debounce::Debounce;
use crate::dom::{self, selectors, Page};
use crate::error::{EnhanceError, Result};

pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";
pub const VALUE_ATTRIBUTE: &str = "data-bs-theme-value";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Auto];

    /// Anything that is not exactly "dark" or "auto" renders light.
    pub fn from_stored(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            "auto" => Theme::Auto,
            "light" => Theme::Light,
            other => {
                warn!("Unrecognized theme value {:?}, using light", other);
                Theme::Light
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Auto => "Auto",
        }
    }

    pub fn resolve(self, os_prefers_dark: bool) -> bool {
        match self {
            Theme::Auto => os_prefers_dark,
            Theme::Dark => true,
            Theme::Light => false,
        }
    }
}

pub fn icon_href(dark: bool) -> &'static str {
    if dark {
        "#moon-stars-fill"
    } else {
        "#sun-fill"
    }
}

pub fn toggle_label(theme: Theme) -> String {
    format!("Toggle theme (current: {})", theme.as_str())
}

#[derive(Clone)]
pub struct ThemeController {
    window: Window,
    root: Element,
    toggle: Element,
    icon: Element,
    text: Element,
    buttons: Rc<Vec<Element>>,
    storage_key: Rc<str>,
}

impl ThemeController {
    pub fn new(page: &Page, config: &Config) -> Result<Self> {
        let toggle = page
            .theme_button
            .clone()
            .ok_or(EnhanceError::MissingElement(selectors::THEME_BUTTON))?;
        let icon = page
            .theme_icon
            .clone()
            .ok_or(EnhanceError::MissingElement(selectors::THEME_ICON))?;
        let text = page
            .theme_text
            .clone()
            .ok_or(EnhanceError::MissingElement(selectors::THEME_TEXT))?;
        let root = page
            .document
            .document_element()
            .ok_or(EnhanceError::MissingElement("html"))?;

        Ok(Self {
            window: page.window.clone(),
            root,
            toggle,
            icon,
            text,
            buttons: Rc::new(page.theme_buttons.clone()),
            storage_key: Rc::from(config.storage_key.as_str()),
        })
    }

    fn storage(&self) -> Option<Storage> {
        self.window.local_storage().ok().flatten()
    }

    /// The persisted preference, `Auto` when nothing has been stored.
    pub fn preference(&self) -> Theme {
        self.storage()
            .and_then(|s| s.get_item(&self.storage_key).ok().flatten())
            .map(|value| Theme::from_stored(&value))
            .unwrap_or_default()
    }

    pub fn persist(&self, theme: Theme) {
        match self.storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(&self.storage_key, theme.as_str()) {
                    warn!("Failed to persist theme: {:?}", e);
                }
            }
            None => warn!("Local storage unavailable, theme not persisted"),
        }
    }

    pub fn os_prefers_dark(&self) -> bool {
        self.window
            .match_media(DARK_QUERY)
            .ok()
            .flatten()
            .map_or(false, |query| query.matches())
    }

    pub fn apply(&self, theme: Theme) -> Result<()> {
        let dark = theme.resolve(self.os_prefers_dark());
        self.root
            .set_attribute(THEME_ATTRIBUTE, if dark { "dark" } else { "light" })?;
        self.icon.set_attribute("href", icon_href(dark))?;
        self.text.set_text_content(Some(theme.label()));

        for button in self.buttons.iter() {
            let active = dom::attr(button, VALUE_ATTRIBUTE) == theme.as_str();
            button.class_list().toggle_with_force("active", active)?;
            button.set_attribute("aria-pressed", if active { "true" } else { "false" })?;
        }
        Ok(())
    }

    /// Reapplies `Auto` after an OS color-scheme change. Returns whether anything was applied.
    pub fn on_scheme_change(&self) -> Result<bool> {
        if self.preference() != Theme::Auto {
            return Ok(false);
        }
        debug!("OS color scheme changed, reapplying auto theme");
        self.apply(Theme::Auto)?;
        Ok(true)
    }

    fn select(&self, theme: Theme) -> Result<()> {
        self.apply(theme)?;
        self.persist(theme);
        self.toggle.set_attribute("aria-label", &toggle_label(theme))?;
        Ok(())
    }
}

pub fn init(page: &Page, config: &Config) -> Result<()> {
    let controller = ThemeController::new(page, config)?;

    controller
        .toggle
        .set_attribute("aria-label", &toggle_label(Theme::Auto))?;
    controller.apply(controller.preference())?;

    for button in controller.buttons.iter() {
        let controller = controller.clone();
        let value = dom::attr(button, VALUE_ATTRIBUTE);
        dom::listen(button, "click", move |_| {
            let theme = Theme::from_stored(&value);
            if let Err(e) = controller.select(theme) {
                warn!("Failed to switch theme: {}", e);
            }
        })?;
    }

    match page.window.match_media(DARK_QUERY)? {
        Some(query) => {
            let debounce = Rc::new(RefCell::new(Debounce::new(config.theme_debounce_ms)));
            let controller = controller.clone();
            dom::listen(&query, "change", move |_| {
                let mut timer = debounce.borrow_mut();
                if controller.preference() != Theme::Auto {
                    timer.cancel();
                    return;
                }
                if timer.is_pending() {
                    debug!("Coalescing OS color scheme change");
                }
                let controller = controller.clone();
                timer.schedule(move || {
                    if let Err(e) = controller.on_scheme_change() {
                        warn!("Failed to reapply theme: {}", e);
                    }
                });
            })?;
        }
        None => debug!("No color-scheme media query support"),
    }

    info!("Theme toggle ready ({})", controller.preference().as_str());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_stored(theme.as_str()), theme);
        }
    }

    #[test]
    fn unknown_values_render_light() {
        let theme = Theme::from_stored("sepia");
        assert_eq!(theme, Theme::Light);
        assert!(!theme.resolve(true));
        assert_eq!(Theme::from_stored("Dark"), Theme::Light);
    }

    #[test]
    fn auto_follows_os_signal() {
        assert!(Theme::Auto.resolve(true));
        assert!(!Theme::Auto.resolve(false));
    }

    #[test]
    fn explicit_themes_ignore_os_signal() {
        for os_dark in [true, false] {
            assert!(Theme::Dark.resolve(os_dark));
            assert!(!Theme::Light.resolve(os_dark));
        }
    }

    #[test]
    fn labels_are_capitalized_names() {
        assert_eq!(Theme::Light.label(), "Light");
        assert_eq!(Theme::Dark.label(), "Dark");
        assert_eq!(Theme::Auto.label(), "Auto");
    }

    #[test]
    fn icon_tracks_rendered_state() {
        assert_eq!(icon_href(true), "#moon-stars-fill");
        assert_eq!(icon_href(false), "#sun-fill");
    }

    #[test]
    fn default_preference_is_auto() {
        assert_eq!(Theme::default(), Theme::Auto);
        assert_eq!(toggle_label(Theme::default()), "Toggle theme (current: auto)");
    }
}
