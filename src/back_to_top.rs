use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config::Config;
use crate::dom::Page;
use crate::error::{EnhanceError, Result};

pub const HOST_ID: &str = "back-to-top-root";

pub fn is_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn display_style(visible: bool) -> &'static str {
    if visible {
        "display: block;"
    } else {
        "display: none;"
    }
}

fn current_scroll() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub threshold: f64,
}

#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    let threshold = props.threshold;
    let visible = use_state(|| is_visible(current_scroll(), threshold));

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().and_then(|window| {
                    let scroll_window = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let offset = scroll_window.scroll_y().unwrap_or(0.0);
                        visible.set(is_visible(offset, threshold));
                    }) as Box<dyn FnMut()>);
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .ok()?;
                    Some((window, scroll_callback))
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <button
            class="back-to-top"
            aria-label="Scroll back to top"
            style={display_style(*visible)}
            {onclick}
        >
            {"↑ Top"}
        </button>
    }
}

/// Appends a host element to `<body>` and mounts the button into it.
pub fn init(page: &Page, config: &Config) -> Result<()> {
    let body = page
        .document
        .body()
        .ok_or(EnhanceError::MissingElement("body"))?;
    let host = page.document.create_element("div")?;
    host.set_id(HOST_ID);
    body.append_child(&host)?;

    yew::Renderer::<BackToTop>::with_root_and_props(
        host,
        BackToTopProps {
            threshold: config.back_to_top_offset,
        },
    )
    .render();

    info!("Back-to-top button mounted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_at_and_below_threshold() {
        assert!(!is_visible(0.0, 300.0));
        assert!(!is_visible(300.0, 300.0));
    }

    #[test]
    fn visible_past_threshold() {
        assert!(is_visible(300.5, 300.0));
        assert!(is_visible(5_000.0, 300.0));
    }

    #[test]
    fn style_toggles_display() {
        assert_eq!(display_style(true), "display: block;");
        assert_eq!(display_style(false), "display: none;");
    }
}
