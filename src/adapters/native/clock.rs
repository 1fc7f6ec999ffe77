use crate::ports::clock::ClockPort;

/// Native clock: the `log` facade has no timer API, so timings are always
/// reported as debug entries.
#[derive(Clone, Copy)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for Clock {
    fn is_available(&self) -> bool {
        true
    }
}
