use log::{info, warn};

use crate::dom::{self, selectors, Page};
use crate::error::{EnhanceError, Result};

/// Hides `#preloader` once the window has finished loading.
pub fn init(page: &Page) -> Result<()> {
    let preloader = page
        .preloader
        .clone()
        .ok_or(EnhanceError::MissingElement(selectors::PRELOADER))?;

    // The module may start after `load` already fired.
    if page.document.ready_state() == "complete" {
        dom::set_display(&preloader, "none")?;
        info!("Preloader hidden");
        return Ok(());
    }

    dom::listen(&page.window, "load", move |_| {
        match dom::set_display(&preloader, "none") {
            Ok(()) => info!("Preloader hidden"),
            Err(e) => warn!("Failed to hide preloader: {}", e),
        }
    })
}
