use forecast_logging::api::{LoggerExtensions, PROGRAM_CATEGORY};
use forecast_logging::logging::{CaptureLogger, CategoryLogger, LogEvent};
use lazy_static::lazy_static;

lazy_static! {
    static ref GLOBAL: CaptureLogger = CaptureLogger::new();
}

fn install() {
    // Tests in this binary share one global logger.
    let _ = log::set_logger(&*GLOBAL);
    log::set_max_level(log::LevelFilter::Trace);
}

fn events_for(target: &str) -> Vec<LogEvent> {
    GLOBAL
        .events()
        .into_iter()
        .filter(|e| e.target == target)
        .collect()
}

#[test]
fn test_global_handle_uses_installed_logger() {
    install();

    let logger = CategoryLogger::global("Forecasts");
    logger.log_get_weather_forecast(42);

    let events = events_for("Forecasts");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].message, "Getting weather forecast, item count = 42");
}

#[test]
fn test_for_program_binds_program_category() {
    install();

    let logger = CategoryLogger::for_program();
    assert_eq!(logger.category(), PROGRAM_CATEGORY);
    logger.log_get_weather_forecast(7);

    let events = events_for(PROGRAM_CATEGORY);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_name, "GetWeatherForecastEvent");
    assert_eq!(events[0].param_i64("Count"), Some(7));
}
