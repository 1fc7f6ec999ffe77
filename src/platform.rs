/// Platform - Dependency injection container for the trigger's ports.
///
/// Hybrid approach:
/// - Stateless ports: `&'static` references (zero-cost)
/// - Stateful ports: `Arc<dyn Trait>` (ref-counted)
use crate::ports::{ClockPort, LoggerPort, TransportPort};
use std::sync::Arc;

#[derive(Clone)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    clock: &'static dyn ClockPort,
    transport: Arc<dyn TransportPort>,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
            clock: crate::adapters::clock(),
            transport: crate::adapters::transport(),
        }
    }

    pub fn with_logger(mut self, logger: &'static dyn LoggerPort) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_clock(mut self, clock: &'static dyn ClockPort) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn TransportPort>) -> Self {
        self.transport = transport;
        self
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn clock(&self) -> &'static dyn ClockPort {
        self.clock
    }

    #[inline]
    pub fn transport(&self) -> &dyn TransportPort {
        self.transport.as_ref()
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
