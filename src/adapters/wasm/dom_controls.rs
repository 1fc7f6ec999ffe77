use super::error_conversions::describe_js_value;
use crate::domain::trigger::TriggerError;
use crate::global::document;
use crate::platform::Platform;
use crate::ports::{ActivationHandler, ControlBinding, ControlPort};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventTarget};

/// Controls looked up in the current document with `getElementById`.
#[derive(Clone, Copy)]
pub struct DomControls;

impl DomControls {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DomControls {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlPort for DomControls {
    fn bind(
        &self,
        control_id: &str,
        event: &str,
        handler: ActivationHandler,
    ) -> Result<Box<dyn ControlBinding>, TriggerError> {
        let element = document()?
            .get_element_by_id(control_id)
            .ok_or_else(|| TriggerError::control_not_found(control_id))?;

        let callback = Closure::wrap(Box::new(move |_event: Event| {
            let pending = handler();
            spawn_local(async move {
                pending.await;
            });
        }) as Box<dyn FnMut(Event)>);

        element
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| TriggerError::registration(describe_js_value(&e)))?;

        Ok(Box::new(DomBinding {
            control_id: control_id.to_string(),
            event: event.to_string(),
            target: element.into(),
            callback: Some(callback),
        }))
    }
}

/// Listener on one element. `None` once detached or handed to the page.
pub struct DomBinding {
    control_id: String,
    event: String,
    target: EventTarget,
    callback: Option<Closure<dyn FnMut(Event)>>,
}

impl DomBinding {
    fn remove_listener(&mut self) -> Result<(), TriggerError> {
        match self.callback.take() {
            Some(callback) => self
                .target
                .remove_event_listener_with_callback(&self.event, callback.as_ref().unchecked_ref())
                .map_err(|e| TriggerError::registration(describe_js_value(&e))),
            None => Ok(()),
        }
    }
}

impl ControlBinding for DomBinding {
    fn control_id(&self) -> &str {
        &self.control_id
    }

    fn detach(mut self: Box<Self>) -> Result<(), TriggerError> {
        self.remove_listener()
    }

    fn keep_alive(mut self: Box<Self>) {
        if let Some(callback) = self.callback.take() {
            callback.forget();
        }
    }
}

// A freed closure left on the element would throw on the next event.
impl Drop for DomBinding {
    fn drop(&mut self) {
        if let Err(e) = self.remove_listener() {
            Platform::new().logger().warn(&e.to_string());
        }
    }
}

/// Runs `callback` once the DOM is parsed: right away unless the document is
/// still loading, otherwise on `DOMContentLoaded`.
pub fn when_document_ready(callback: impl FnOnce() + 'static) -> Result<(), TriggerError> {
    let document = document()?;
    if document.ready_state() != "loading" {
        callback();
        return Ok(());
    }

    let listener = Closure::once_into_js(callback);
    document
        .add_event_listener_with_callback("DOMContentLoaded", listener.unchecked_ref())
        .map_err(|e| TriggerError::registration(describe_js_value(&e)))
}
