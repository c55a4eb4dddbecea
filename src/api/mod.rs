//! Log events raised by the weather forecast API.

pub mod logger_extensions;

pub use logger_extensions::*;
