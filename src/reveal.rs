use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::Config;
use crate::dom::{selectors, Page};
use crate::error::{EnhanceError, Result};

pub const REVEALED_CLASS: &str = "show";

/// Adds `show` to each element the first time it intersects the viewport, then stops watching it.
pub fn init(page: &Page, config: &Config) -> Result<()> {
    if page.animate_elements.is_empty() {
        return Err(EnhanceError::MissingElement(selectors::ANIMATE_ELEMENTS));
    }

    let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                let target = entry.target();
                if let Err(e) = target.class_list().add_1(REVEALED_CLASS) {
                    warn!("Failed to reveal element: {:?}", e);
                }
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in &page.animate_elements {
        observer.observe(element);
    }

    info!("Scroll reveal watching {} elements", page.animate_elements.len());
    Ok(())
}
