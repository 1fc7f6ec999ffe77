// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod platform;
pub mod ports;

pub mod measure;

#[cfg(target_arch = "wasm32")]
pub mod facades;
#[cfg(target_arch = "wasm32")]
pub mod global;

pub use domain::trigger::{
    activate, install, ActivationOutcome, HttpStatus, TransportError, TriggerConfig,
    TriggerError,
};
pub use platform::Platform;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(all(target_arch = "wasm32", feature = "autostart"))]
    facades::wasm::trigger::autostart();

    Ok(())
}
