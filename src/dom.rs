use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    CssStyleDeclaration, Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement,
    NodeList, Window,
};

use crate::error::{EnhanceError, Result};

pub mod selectors {
    pub const THEME_BUTTON: &str = ".btn-bd-primary";
    pub const THEME_ICON: &str = ".theme-icon-active use";
    pub const THEME_TEXT: &str = "bd-theme-text";
    pub const THEME_BUTTONS: &str = "[data-bs-theme-value]";
    pub const ANIMATE_ELEMENTS: &str = ".animate-reveal, .testimonials";
    pub const CONTACT_FORM: &str = "contact-form";
    pub const FEEDBACK: &str = "form-feedback";
    pub const FEATURE_IMAGES: &str = ".featurette-image";
    pub const PORTFOLIO_CARDS: &str = ".portfolio-card";
    pub const LOAD_MORE: &str = "loadMore";
    pub const HIDDEN_CARDS: &str = ".portfolio-card.hidden";
    pub const PRELOADER: &str = "preloader";
    pub const ANCHORS: &str = "a[href^=\"#\"]";
}

/// Every element the enhancements touch, queried once after the document is parsed.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub theme_button: Option<Element>,
    pub theme_icon: Option<Element>,
    pub theme_text: Option<Element>,
    pub theme_buttons: Vec<Element>,
    pub animate_elements: Vec<Element>,
    pub form: Option<HtmlFormElement>,
    pub feedback: Option<HtmlElement>,
    pub feature_images: Vec<Element>,
    pub portfolio_cards: Vec<Element>,
    pub load_more_button: Option<HtmlElement>,
    pub hidden_cards: Vec<Element>,
    pub preloader: Option<HtmlElement>,
    pub anchors: Vec<Element>,
}

impl Page {
    pub fn query(window: Window, document: Document) -> Self {
        use selectors::*;

        Self {
            theme_button: query_one(&document, THEME_BUTTON),
            theme_icon: query_one(&document, THEME_ICON),
            theme_text: document.get_element_by_id(THEME_TEXT),
            theme_buttons: query_all(&document, THEME_BUTTONS),
            animate_elements: query_all(&document, ANIMATE_ELEMENTS),
            form: by_id(&document, CONTACT_FORM),
            feedback: by_id(&document, FEEDBACK),
            feature_images: query_all(&document, FEATURE_IMAGES),
            portfolio_cards: query_all(&document, PORTFOLIO_CARDS),
            load_more_button: by_id(&document, LOAD_MORE),
            hidden_cards: query_all(&document, HIDDEN_CARDS),
            preloader: by_id(&document, PRELOADER),
            anchors: query_all(&document, ANCHORS),
            window,
            document,
        }
    }
}

pub fn query_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Looks up an element by id and casts it; a wrong element type counts as absent.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Attribute value, or an empty string when the attribute is not set.
pub fn attr(element: &Element, name: &str) -> String {
    element.get_attribute(name).unwrap_or_default()
}

pub fn style(element: &Element) -> Result<CssStyleDeclaration> {
    element
        .dyn_ref::<HtmlElement>()
        .map(|el| el.style())
        .ok_or_else(|| EnhanceError::Js(format!("<{}> has no inline style", element.tag_name())))
}

pub fn set_display(element: &Element, value: &str) -> Result<()> {
    style(element)?.set_property("display", value)?;
    Ok(())
}

/// Attaches a listener that lives as long as the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}
