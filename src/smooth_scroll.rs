use log::debug;
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{self, Page};
use crate::error::Result;

/// Selector for the element a same-page link points at; `None` for a bare `#` or an external link.
pub fn fragment_target(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

fn scroll_to(document: &Document, selector: &str) {
    // An id that is not a valid selector behaves like a missing target.
    let Some(target) = document.query_selector(selector).ok().flatten() else {
        debug!("No scroll target for {}", selector);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

fn bind(document: &Document, anchor: &Element) -> Result<()> {
    let document = document.clone();
    let link = anchor.clone();
    dom::listen(anchor, "click", move |event| {
        let href = dom::attr(&link, "href");
        if !href.starts_with('#') {
            return;
        }
        event.prevent_default();
        if let Some(selector) = fragment_target(&href) {
            scroll_to(&document, selector);
        }
    })
}

pub fn init(page: &Page) -> Result<()> {
    for anchor in &page.anchors {
        bind(&page.document, anchor)?;
    }
    debug!("Smooth scroll bound to {} anchors", page.anchors.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_links_resolve_to_selector() {
        assert_eq!(fragment_target("#contact"), Some("#contact"));
    }

    #[test]
    fn bare_hash_has_no_target() {
        assert_eq!(fragment_target("#"), None);
    }

    #[test]
    fn other_links_are_not_fragments() {
        assert_eq!(fragment_target("/about#team"), None);
        assert_eq!(fragment_target(""), None);
    }
}
