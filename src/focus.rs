use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

use crate::dom;
use crate::error::Result;

pub const FOCUSABLE: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// Index focus should jump to, or `None` to let the browser move focus normally.
pub fn wrap_target(active: Option<usize>, len: usize, shift: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match active {
        Some(0) if shift => Some(last),
        Some(i) if !shift && i == last => Some(0),
        _ => None,
    }
}

/// Keeps Tab and Shift+Tab cycling inside `modal`.
///
/// Focusable descendants are collected on every keypress, so content swapped
/// into the dialog after setup is part of the ring.
pub fn trap(modal: &Element) -> Result<()> {
    let root = modal.clone();
    dom::listen(modal, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if key.key() != "Tab" {
            return;
        }

        let focusable = dom::query_all_in(&root, FOCUSABLE);
        let active = root
            .owner_document()
            .and_then(|doc| doc.active_element())
            .and_then(|el| focusable.iter().position(|candidate| *candidate == el));

        if let Some(index) = wrap_target(active, focusable.len(), key.shift_key()) {
            event.prevent_default();
            if let Some(target) = focusable[index].dyn_ref::<HtmlElement>() {
                if let Err(e) = target.focus() {
                    warn!("Failed to move focus: {:?}", e);
                }
            }
        }
    })
}
