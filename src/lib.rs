//! Forecast Logging - typed structured log events for the forecast API
//!
//! Each event is declared once as an [`logging::EventDefinition`] (id, name,
//! severity, message template) and raised through a small extension method
//! on a category-bound logger handle. Records go to whatever `log` backend
//! the handle wraps; parameters travel as structured key/values rather than
//! pre-formatted text.
//!
//! ## Architecture
//!
//! - `api` - The forecast API's event definitions and extension methods
//! - `logging` - Event definitions, templates, record model, capture backend and logger setup

pub mod api;
pub mod logging;

#[doc(hidden)]
pub use log as __log;
