use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::Element;

use crate::config::Config;
use crate::dom::{self, selectors, Page};
use crate::error::{EnhanceError, Result};

pub const HIDDEN_CLASS: &str = "hidden";

/// Delay before the card at `index` is revealed.
pub fn reveal_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

fn reveal(card: &Element) -> Result<()> {
    let classes = card.class_list();
    classes.remove_1(HIDDEN_CLASS)?;
    classes.add_2("animate-reveal", "show")?;
    Ok(())
}

pub fn init(page: &Page, config: &Config) -> Result<()> {
    let button = page
        .load_more_button
        .clone()
        .ok_or(EnhanceError::MissingElement(selectors::LOAD_MORE))?;
    if page.hidden_cards.is_empty() {
        return Err(EnhanceError::MissingElement(selectors::HIDDEN_CARDS));
    }

    let cards = Rc::new(page.hidden_cards.clone());
    let step = config.load_more_step_ms;
    let used = Rc::new(Cell::new(false));

    let target = button.clone();
    dom::listen(&target, "click", move |_| {
        if used.replace(true) {
            return;
        }
        for (index, card) in cards.iter().enumerate() {
            let card = card.clone();
            Timeout::new(reveal_delay(index, step), move || {
                if let Err(e) = reveal(&card) {
                    warn!("Failed to reveal card: {}", e);
                }
            })
            .forget();
        }
        if let Err(e) = dom::set_display(&button, "none") {
            warn!("Failed to hide load-more button: {}", e);
        }
    })?;

    info!("Load more ready ({} hidden cards)", page.hidden_cards.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_card_is_immediate() {
        assert_eq!(reveal_delay(0, 200), 0);
    }

    #[test]
    fn delays_step_by_fixed_amount() {
        let delays: Vec<u32> = (0..5).map(|i| reveal_delay(i, 200)).collect();
        assert_eq!(delays, vec![0, 200, 400, 600, 800]);
        assert!(delays.windows(2).all(|w| w[1] - w[0] == 200));
    }

    #[test]
    fn huge_index_saturates() {
        assert_eq!(reveal_delay(usize::MAX, 200), u32::MAX);
    }
}
