use super::converters;
use crate::adapters::wasm::{when_document_ready, DomControls};
use crate::domain::trigger::{self, validate_config, TriggerConfig};
use crate::platform::Platform;
use crate::ports::ControlBinding;
use wasm_bindgen::prelude::*;

/// JS handle on an installed trigger. Freeing it drops the binding, which
/// removes the listener unless `keep_alive` was called first.
#[wasm_bindgen]
pub struct TriggerHandle {
    binding: Option<Box<dyn ControlBinding>>,
}

#[wasm_bindgen]
impl TriggerHandle {
    #[wasm_bindgen(getter)]
    pub fn control_id(&self) -> Option<String> {
        self.binding
            .as_ref()
            .map(|binding| binding.control_id().to_string())
    }

    pub fn detach(self) -> Result<(), JsValue> {
        let mut handle = self;
        match handle.binding.take() {
            Some(binding) => Ok(binding.detach()?),
            None => Ok(()),
        }
    }

    pub fn keep_alive(self) {
        let mut handle = self;
        if let Some(binding) = handle.binding.take() {
            binding.keep_alive();
        }
    }
}

/// Binds the start request to the control named in `config` (defaults when omitted).
#[wasm_bindgen]
pub fn install_trigger(config: JsValue) -> Result<TriggerHandle, JsValue> {
    let config = converters::config_from_js(config)?;
    let binding = trigger::install(&Platform::new(), &DomControls::new(), config)?;
    Ok(TriggerHandle {
        binding: Some(binding),
    })
}

/// Sends one start request without a click and resolves to the outcome object.
#[wasm_bindgen]
pub async fn activate(config: JsValue) -> Result<JsValue, JsValue> {
    let config = converters::config_from_js(config)?;
    validate_config(&config)?;
    let outcome = trigger::activate(&Platform::new(), &config).await;
    converters::to_js_value(&outcome)
}

/// Installs the default trigger for the page lifetime once the DOM is ready.
/// A missing control is reported as a configuration error on the console.
pub fn autostart() {
    let platform = Platform::new();
    let logger = platform.logger();

    let scheduled = when_document_ready(move || {
        match trigger::install(&platform, &DomControls::new(), TriggerConfig::default()) {
            Ok(binding) => binding.keep_alive(),
            Err(e) => platform.logger().error(&e.to_string()),
        }
    });

    if let Err(e) = scheduled {
        logger.error(&e.to_string());
    }
}
