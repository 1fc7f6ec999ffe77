use crate::global::get_global_scope;
use crate::ports::clock::ClockPort;
use wasm_bindgen::JsCast;
use web_sys::{Performance, WorkerGlobalScope};

#[derive(Clone, Copy)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }

    fn get_performance(&self) -> Option<Performance> {
        let scope = get_global_scope().ok()?;
        if let Ok(worker) = scope.clone().dyn_into::<WorkerGlobalScope>() {
            worker.performance()
        } else if let Ok(window) = scope.dyn_into::<web_sys::Window>() {
            window.performance()
        } else {
            None
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for Clock {
    fn is_available(&self) -> bool {
        self.get_performance().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_clock_available_in_browser() {
        assert!(Clock::new().is_available(), "Clock should be available");
    }
}
