use std::fmt::{Display, Formatter};
use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum FxError {
    Dom(String),
    Storage(String),
    Config(String),
    MissingElement(String),
}

impl Display for FxError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FxError::Dom(msg) => write!(f, "DOM Error: {}", msg),
            FxError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            FxError::Config(msg) => write!(f, "Config Error: {}", msg),
            FxError::MissingElement(what) => write!(f, "Missing Element: {}", what),
        }
    }
}

impl std::error::Error for FxError {}

impl From<JsValue> for FxError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(msg) => FxError::Dom(msg),
            None => FxError::Dom(format!("{:?}", value)),
        }
    }
}

impl From<serde_json::Error> for FxError {
    fn from(error: serde_json::Error) -> Self {
        FxError::Config(error.to_string())
    }
}

impl From<FxError> for JsValue {
    fn from(err: FxError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
