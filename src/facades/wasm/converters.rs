use crate::domain::trigger::{TriggerConfig, TriggerError};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// `undefined`/`null` select the default config; objects may omit any field.
pub fn config_from_js(value: JsValue) -> Result<TriggerConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(TriggerConfig::default());
    }
    from_value(value).map_err(|e| to_js_error(TriggerError::invalid_config(e.to_string())))
}

pub fn to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

pub fn to_js_value<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(to_js_error)
}
