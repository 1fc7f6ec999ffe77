use crate::domain::trigger::{ActivationOutcome, TriggerError};
use futures::future::LocalBoxFuture;
use std::rc::Rc;

/// Invoked once per user activation. The returned future is driven by the adapter
/// (`spawn_local` in the browser) so the event callback itself never waits.
pub type ActivationHandler = Rc<dyn Fn() -> LocalBoxFuture<'static, ActivationOutcome>>;

/// Page controls that can be looked up by id and subscribed to.
pub trait ControlPort {
    fn bind(
        &self,
        control_id: &str,
        event: &str,
        handler: ActivationHandler,
    ) -> Result<Box<dyn ControlBinding>, TriggerError>;
}

/// A live subscription on one control. Dropping it without `keep_alive`
/// removes the subscription, same as `detach`.
pub trait ControlBinding {
    fn control_id(&self) -> &str;

    /// Removes the subscription; later activations do nothing.
    fn detach(self: Box<Self>) -> Result<(), TriggerError>;

    /// Leaves the subscription in place for the lifetime of the page.
    fn keep_alive(self: Box<Self>);
}
