//! Logger extension methods for the forecast endpoint.

use lazy_static::lazy_static;

use crate::log_event;
use crate::logging::severity::Severity;
use crate::logging::structured::{CategoryLogger, EventDefinition};

/// Category of the API's program-level logger.
pub const PROGRAM_CATEGORY: &str = "Program";

/// Event name of the forecast request event.
pub const GET_WEATHER_FORECAST_EVENT: &str = "GetWeatherForecastEvent";
/// Message template of the forecast request event.
pub const GET_WEATHER_FORECAST_TEMPLATE: &str = "Getting weather forecast, item count = {Count}";

lazy_static! {
    /// Information-level event raised when a forecast is requested.
    pub static ref GET_WEATHER_FORECAST: EventDefinition = EventDefinition::define(
        0,
        GET_WEATHER_FORECAST_EVENT,
        Severity::Information,
        GET_WEATHER_FORECAST_TEMPLATE,
    ).unwrap();
}

impl CategoryLogger<'static> {
    /// The global logger under [`PROGRAM_CATEGORY`].
    pub fn for_program() -> Self {
        Self::global(PROGRAM_CATEGORY)
    }
}

pub trait LoggerExtensions {
    /// Raise `GetWeatherForecastEvent` with the given item count.
    ///
    /// Any count is accepted, including zero and negative values.
    fn log_get_weather_forecast(&self, count: i32);
}

impl LoggerExtensions for CategoryLogger<'_> {
    fn log_get_weather_forecast(&self, count: i32) {
        log_event!(self, GET_WEATHER_FORECAST, Count = count);
    }
}

pub fn log_get_weather_forecast(logger: &CategoryLogger<'_>, count: i32) {
    logger.log_get_weather_forecast(count);
}
