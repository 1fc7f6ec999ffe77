use crate::domain::trigger::TriggerError;
use wasm_bindgen::{JsCast, JsValue};

/// Best-effort human text for a thrown JS value (`Error.message`, a string, or its debug form).
pub fn describe_js_value(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        String::from(error.message())
    } else if let Some(text) = value.as_string() {
        text
    } else {
        format!("{:?}", value)
    }
}

/// Conversion from JsValue to TriggerError for WASM infrastructure
impl From<JsValue> for TriggerError {
    fn from(err: JsValue) -> Self {
        TriggerError::js_error(describe_js_value(&err))
    }
}

/// Conversion from TriggerError to JsValue for WASM boundary
impl From<TriggerError> for JsValue {
    fn from(error: TriggerError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
