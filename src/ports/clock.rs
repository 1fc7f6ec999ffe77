/// Port for performance measurement support
pub trait ClockPort: Send + Sync {
    /// Checks if performance timing is available
    fn is_available(&self) -> bool;
}
