use crate::domain::trigger::TriggerError;
use wasm_bindgen::prelude::*;
use web_sys::{DedicatedWorkerGlobalScope, Document, Window};

pub fn get_global_scope() -> Result<JsValue, TriggerError> {
    // Try worker scope first
    if let Ok(scope) = js_sys::global().dyn_into::<DedicatedWorkerGlobalScope>() {
        return Ok(JsValue::from(scope));
    }

    let window = web_sys::window().ok_or_else(|| {
        TriggerError::environment("Neither DedicatedWorkerGlobalScope nor Window found")
    })?;
    Ok(JsValue::from(window))
}

pub fn window() -> Result<Window, TriggerError> {
    get_global_scope()?
        .dyn_into::<Window>()
        .map_err(|_| TriggerError::environment("Page controls need a Window, not a worker"))
}

pub fn document() -> Result<Document, TriggerError> {
    window()?
        .document()
        .ok_or_else(|| TriggerError::environment("Window has no document"))
}
