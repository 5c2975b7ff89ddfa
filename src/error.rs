use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum EnhanceError {
    /// A selector or id the feature depends on matched nothing on this page.
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for EnhanceError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        EnhanceError::Js(message)
    }
}

impl EnhanceError {
    pub fn is_missing(&self) -> bool {
        matches!(self, EnhanceError::MissingElement(_))
    }
}

pub type Result<T> = std::result::Result<T, EnhanceError>;
