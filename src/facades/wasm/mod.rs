pub mod converters;
pub mod trigger;
