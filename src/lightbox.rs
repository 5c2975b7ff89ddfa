use log::info;
use wasm_bindgen::JsValue;
use web_sys::js_sys::Reflect;
use web_sys::{Document, Element, HtmlImageElement, Window};

use crate::dom::{self, selectors, Page};
use crate::error::{EnhanceError, Result};
use crate::focus;

/// Ids and wording for one gallery's modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxSpec {
    pub name: &'static str,
    pub trigger_selector: &'static str,
    pub trigger_label: &'static str,
    pub modal_id: &'static str,
    pub image_id: &'static str,
    pub label_id: &'static str,
    pub description_id: &'static str,
    pub alt_suffix: &'static str,
}

pub const FEATURE: LightboxSpec = LightboxSpec {
    name: "feature",
    trigger_selector: selectors::FEATURE_IMAGES,
    trigger_label: "View feature image details",
    modal_id: "featureModal",
    image_id: "featureModalImage",
    label_id: "featureModalLabel",
    description_id: "featureModalDescription",
    alt_suffix: "feature image",
};

pub const PORTFOLIO: LightboxSpec = LightboxSpec {
    name: "portfolio",
    trigger_selector: selectors::PORTFOLIO_CARDS,
    trigger_label: "View project details",
    modal_id: "projectModal",
    image_id: "modalImage",
    label_id: "projectModalLabel",
    description_id: "modalDescription",
    alt_suffix: "project image",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxContent {
    pub image: String,
    pub title: String,
    pub description: String,
}

impl LightboxContent {
    pub fn from_trigger(trigger: &Element) -> Self {
        Self {
            image: dom::attr(trigger, "data-img"),
            title: dom::attr(trigger, "data-title"),
            description: dom::attr(trigger, "data-desc"),
        }
    }
}

pub fn alt_text(title: &str, suffix: &str) -> String {
    format!("{} {}", title, suffix)
}

fn has_modal_library(window: &Window) -> bool {
    Reflect::get(window, &JsValue::from_str("bootstrap"))
        .ok()
        .filter(|lib| !lib.is_undefined() && !lib.is_null())
        .and_then(|lib| Reflect::get(&lib, &JsValue::from_str("Modal")).ok())
        .map_or(false, |modal| !modal.is_undefined() && !modal.is_null())
}

fn fill(document: &Document, spec: &LightboxSpec, content: &LightboxContent) {
    let image = dom::by_id::<HtmlImageElement>(document, spec.image_id);
    let label = document.get_element_by_id(spec.label_id);
    let description = document.get_element_by_id(spec.description_id);

    if let (Some(image), Some(label), Some(description)) = (image, label, description) {
        image.set_src(&content.image);
        image.set_alt(&alt_text(&content.title, spec.alt_suffix));
        label.set_text_content(Some(&content.title));
        description.set_text_content(Some(&content.description));
    }
}

pub fn init(page: &Page, triggers: &[Element], spec: LightboxSpec) -> Result<()> {
    if triggers.is_empty() {
        return Err(EnhanceError::MissingElement(spec.trigger_selector));
    }
    if !has_modal_library(&page.window) {
        return Err(EnhanceError::MissingElement("bootstrap.Modal"));
    }

    if let Some(modal) = page.document.get_element_by_id(spec.modal_id) {
        focus::trap(&modal)?;
    }

    for trigger in triggers {
        trigger.set_attribute("role", "button")?;
        trigger.set_attribute("aria-label", spec.trigger_label)?;

        let document = page.document.clone();
        let source = trigger.clone();
        dom::listen(trigger, "click", move |_| {
            fill(&document, &spec, &LightboxContent::from_trigger(&source));
        })?;
    }

    info!("{} lightbox ready ({} items)", spec.name, triggers.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_text_names_the_gallery() {
        assert_eq!(alt_text("Rocket", FEATURE.alt_suffix), "Rocket feature image");
        assert_eq!(alt_text("Rocket", PORTFOLIO.alt_suffix), "Rocket project image");
    }

    #[test]
    fn missing_title_still_produces_alt() {
        assert_eq!(alt_text("", PORTFOLIO.alt_suffix), " project image");
    }

    #[test]
    fn galleries_target_distinct_modals() {
        assert_ne!(FEATURE.modal_id, PORTFOLIO.modal_id);
        assert_eq!(PORTFOLIO.modal_id, "projectModal");
        assert_eq!(FEATURE.image_id, "featureModalImage");
    }
}
