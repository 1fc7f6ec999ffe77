use crate::domain::trigger::{ActivationOutcome, TriggerError};
use crate::ports::{ActivationHandler, ControlBinding, ControlPort};
use futures::future::LocalBoxFuture;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

struct Subscription {
    id: u64,
    event: String,
    handler: ActivationHandler,
}

#[derive(Default)]
struct Registry {
    controls: HashMap<String, Vec<Subscription>>,
    next_id: u64,
}

/// An in-memory page: controls exist only once declared, and `dispatch` plays the
/// role of the browser firing an event on one of them.
#[derive(Clone, Default)]
pub struct SimulatedControls {
    registry: Rc<RefCell<Registry>>,
}

impl SimulatedControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_control(self, control_id: &str) -> Self {
        self.add_control(control_id);
        self
    }

    pub fn add_control(&self, control_id: &str) {
        self.registry
            .borrow_mut()
            .controls
            .entry(control_id.to_string())
            .or_default();
    }

    pub fn listener_count(&self, control_id: &str) -> usize {
        self.registry
            .borrow()
            .controls
            .get(control_id)
            .map_or(0, Vec::len)
    }

    /// Fires `event` on the control and returns one pending activation per listener.
    pub fn dispatch(
        &self,
        control_id: &str,
        event: &str,
    ) -> Vec<LocalBoxFuture<'static, ActivationOutcome>> {
        let handlers: Vec<ActivationHandler> = self
            .registry
            .borrow()
            .controls
            .get(control_id)
            .map(|subs| {
                subs.iter()
                    .filter(|sub| sub.event == event)
                    .map(|sub| sub.handler.clone())
                    .collect()
            })
            .unwrap_or_default();

        handlers.iter().map(|handler| handler()).collect()
    }

    pub fn click(&self, control_id: &str) -> Vec<LocalBoxFuture<'static, ActivationOutcome>> {
        self.dispatch(control_id, "click")
    }
}

impl ControlPort for SimulatedControls {
    fn bind(
        &self,
        control_id: &str,
        event: &str,
        handler: ActivationHandler,
    ) -> Result<Box<dyn ControlBinding>, TriggerError> {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;

        let subs = registry
            .controls
            .get_mut(control_id)
            .ok_or_else(|| TriggerError::control_not_found(control_id))?;
        subs.push(Subscription {
            id,
            event: event.to_string(),
            handler,
        });

        Ok(Box::new(SimulatedBinding {
            registry: self.registry.clone(),
            control_id: control_id.to_string(),
            id,
            attached: true,
        }))
    }
}

struct SimulatedBinding {
    registry: Rc<RefCell<Registry>>,
    control_id: String,
    id: u64,
    attached: bool,
}

impl SimulatedBinding {
    fn remove(&mut self) -> Result<(), TriggerError> {
        if !self.attached {
            return Ok(());
        }
        self.attached = false;

        let mut registry = self.registry.borrow_mut();
        let subs = registry
            .controls
            .get_mut(&self.control_id)
            .ok_or_else(|| TriggerError::control_not_found(self.control_id.as_str()))?;
        let id = self.id;
        subs.retain(|sub| sub.id != id);
        Ok(())
    }
}

impl ControlBinding for SimulatedBinding {
    fn control_id(&self) -> &str {
        &self.control_id
    }

    fn detach(mut self: Box<Self>) -> Result<(), TriggerError> {
        self.remove()
    }

    fn keep_alive(mut self: Box<Self>) {
        self.attached = false;
    }
}

impl Drop for SimulatedBinding {
    fn drop(&mut self) {
        let _ = self.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::FutureExt;

    fn handler(outcome: ActivationOutcome) -> ActivationHandler {
        Rc::new(move || futures::future::ready(outcome.clone()).boxed_local())
    }

    #[test]
    fn test_bind_unknown_control_fails() {
        let controls = SimulatedControls::new();
        let result = controls.bind(
            "startButton",
            "click",
            handler(ActivationOutcome::Success { status: 200 }),
        );
        assert!(matches!(result, Err(TriggerError::ControlNotFound(id)) if id == "startButton"));
    }

    #[test]
    fn test_dispatch_only_matching_event() {
        let controls = SimulatedControls::new().with_control("startButton");
        let _binding = controls
            .bind(
                "startButton",
                "click",
                handler(ActivationOutcome::Success { status: 200 }),
            )
            .unwrap();

        assert_eq!(controls.dispatch("startButton", "keyup").len(), 0);
        let pending = controls.click("startButton");
        assert_eq!(pending.len(), 1);
        for fut in pending {
            assert!(block_on(fut).is_success());
        }
    }

    #[test]
    fn test_detach_removes_only_its_listener() {
        let controls = SimulatedControls::new().with_control("startButton");
        let first = controls
            .bind(
                "startButton",
                "click",
                handler(ActivationOutcome::Success { status: 200 }),
            )
            .unwrap();
        let second = controls
            .bind(
                "startButton",
                "click",
                handler(ActivationOutcome::RemoteRejected { status: 500 }),
            )
            .unwrap();
        assert_eq!(controls.listener_count("startButton"), 2);

        first.detach().unwrap();
        assert_eq!(controls.listener_count("startButton"), 1);

        let outcomes: Vec<_> = controls.click("startButton").into_iter().map(block_on).collect();
        assert_eq!(outcomes, vec![ActivationOutcome::RemoteRejected { status: 500 }]);

        second.keep_alive();
        assert_eq!(controls.listener_count("startButton"), 1);
    }

    #[test]
    fn test_dropped_binding_stops_listening() {
        let controls = SimulatedControls::new().with_control("startButton");
        let binding = controls
            .bind(
                "startButton",
                "click",
                handler(ActivationOutcome::Success { status: 200 }),
            )
            .unwrap();
        assert_eq!(controls.listener_count("startButton"), 1);

        drop(binding);

        assert_eq!(controls.listener_count("startButton"), 0);
        assert!(controls.click("startButton").is_empty());
    }
}
