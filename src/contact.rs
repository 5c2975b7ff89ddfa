use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::config::Config;
use crate::dom::{selectors, Page};
use crate::error::{EnhanceError, Result};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const SENDING: &str = "Sending...";
pub const SENT: &str = "Message sent successfully!";
pub const SEND_FAILED: &str = "Error sending message. Please try again.";

pub const ERROR_COLOR: &str = "red";
pub const NEUTRAL_COLOR: &str = "var(--dark)";
pub const SUCCESS_COLOR: &str = "var(--accent)";

const NAME_INPUT: &str = "input[type=\"text\"]";
const EMAIL_INPUT: &str = "input[type=\"email\"]";
const MESSAGE_INPUT: &str = "textarea";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Message must be at least {0} characters long.")]
    MessageTooShort(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Email first, then length; only the first failure is reported.
pub fn validate(
    email: &str,
    message: &str,
    min_len: usize,
) -> std::result::Result<(), ValidationError> {
    if !is_valid_email(email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    if message.trim().chars().count() < min_len {
        return Err(ValidationError::MessageTooShort(min_len));
    }
    Ok(())
}

/// Stands in for a submission service; nothing leaves the page.
async fn deliver(message: &ContactMessage, delay_ms: u32) -> Result<()> {
    debug!(
        "Simulating delivery of a {}-character message",
        message.message.chars().count()
    );
    TimeoutFuture::new(delay_ms).await;
    Ok(())
}

#[derive(Clone)]
struct Feedback(HtmlElement);

impl Feedback {
    fn show(&self, text: &str, color: &str) {
        self.0.set_text_content(Some(text));
        if let Err(e) = self.0.style().set_property("color", color) {
            warn!("Failed to color form feedback: {:?}", e);
        }
    }

    fn clear(&self) {
        self.0.set_text_content(Some(""));
    }
}

fn field_value(form: &HtmlFormElement, selector: &str) -> String {
    let Some(field) = form.query_selector(selector).ok().flatten() else {
        return String::new();
    };
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value().trim().to_string()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value().trim().to_string()
    } else {
        String::new()
    }
}

fn read_form(form: &HtmlFormElement) -> ContactMessage {
    ContactMessage {
        name: field_value(form, NAME_INPUT),
        email: field_value(form, EMAIL_INPUT),
        message: field_value(form, MESSAGE_INPUT),
    }
}

pub fn init(page: &Page, config: &Config) -> Result<()> {
    let form = page
        .form
        .clone()
        .ok_or(EnhanceError::MissingElement(selectors::CONTACT_FORM))?;
    let feedback = page
        .feedback
        .clone()
        .map(Feedback)
        .ok_or(EnhanceError::MissingElement(selectors::FEEDBACK))?;

    let min_len = config.min_message_len;
    let send_delay = config.send_delay_ms;
    let clear_delay = config.feedback_clear_ms;

    let target = form.clone();
    crate::dom::listen(&target, "submit", move |event| {
        event.prevent_default();

        let submission = read_form(&form);
        if let Err(e) = validate(&submission.email, &submission.message, min_len) {
            feedback.show(&e.to_string(), ERROR_COLOR);
            return;
        }

        feedback.show(SENDING, NEUTRAL_COLOR);

        let form = form.clone();
        let feedback = feedback.clone();
        spawn_local(async move {
            match deliver(&submission, send_delay).await {
                Ok(()) => {
                    feedback.show(SENT, SUCCESS_COLOR);
                    form.reset();
                    Timeout::new(clear_delay, move || feedback.clear()).forget();
                }
                Err(e) => {
                    warn!("Contact form delivery failed: {}", e);
                    feedback.show(SEND_FAILED, ERROR_COLOR);
                }
            }
        });
    })?;

    info!("Contact form ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimal_address() {
        assert!(is_valid_email("a@b.co"));
    }

    #[test]
    fn rejects_address_without_dot_after_at() {
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn rejects_whitespace_in_local_part() {
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn rejects_double_at() {
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("@b.com"));
    }

    #[test]
    fn message_length_boundary() {
        assert_eq!(
            validate("a@b.co", "123456789", 10),
            Err(ValidationError::MessageTooShort(10))
        );
        assert_eq!(validate("a@b.co", "1234567890", 10), Ok(()));
    }

    #[test]
    fn message_is_trimmed_before_counting() {
        assert!(validate("a@b.co", "   123456789   ", 10).is_err());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(validate("a@b.co", "ääääääääää", 10), Ok(()));
    }

    #[test]
    fn email_is_checked_before_length() {
        assert_eq!(validate("nope", "short", 10), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
        assert_eq!(
            ValidationError::MessageTooShort(10).to_string(),
            "Message must be at least 10 characters long."
        );
    }
}
