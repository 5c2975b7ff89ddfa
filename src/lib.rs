//! Progressive enhancements for the static marketing site: theme switching,
//! scroll reveals, the contact form, gallery lightboxes, load-more, the
//! preloader, smooth anchor scrolling and a back-to-top button.

use log::{debug, info, warn};
use web_sys::Window;

pub mod back_to_top;
pub mod config;
pub mod contact;
pub mod debounce;
pub mod dom;
pub mod error;
pub mod focus;
pub mod lightbox;
pub mod load_more;
pub mod preloader;
pub mod reveal;
pub mod smooth_scroll;
pub mod theme;

use config::Config;
use dom::Page;
use error::Result;

fn report(feature: &str, result: Result<()>) {
    match result {
        Ok(()) => {}
        Err(e) if e.is_missing() => debug!("Skipping {}: {}", feature, e),
        Err(e) => warn!("Failed to initialize {}: {}", feature, e),
    }
}

/// Wires every enhancement against an already parsed document.
pub fn enhance(page: &Page, config: &Config) {
    report("theme toggle", theme::init(page, config));
    report("scroll reveal", reveal::init(page, config));
    report("contact form", contact::init(page, config));
    report(
        "feature lightbox",
        lightbox::init(page, &page.feature_images, lightbox::FEATURE),
    );
    report(
        "portfolio lightbox",
        lightbox::init(page, &page.portfolio_cards, lightbox::PORTFOLIO),
    );
    report("load more", load_more::init(page, config));
    report("preloader", preloader::init(page));
    report("smooth scroll", smooth_scroll::init(page));
    report("back to top", back_to_top::init(page, config));
}

fn run(window: Window) {
    let Some(document) = window.document() else {
        warn!("No document, site enhancements disabled");
        return;
    };
    let config = Config::from_document(&document);
    let page = Page::query(window, document);
    enhance(&page, &config);
    info!("Site enhancements ready");
}

/// Runs the enhancements now, or on `DOMContentLoaded` if the document is still loading.
pub fn start() {
    let Some(window) = web_sys::window() else {
        warn!("No window, site enhancements disabled");
        return;
    };
    let Some(document) = window.document() else {
        warn!("No document, site enhancements disabled");
        return;
    };

    if document.ready_state() != "loading" {
        run(window);
        return;
    }

    let mut pending = Some(window);
    if let Err(e) = dom::listen(&document, "DOMContentLoaded", move |_| {
        if let Some(window) = pending.take() {
            run(window);
        }
    }) {
        warn!("Failed to wait for DOMContentLoaded: {}", e);
    }
}
