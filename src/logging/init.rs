//! Process-wide logger setup.
//!
//! Installs `env_logger` as the `log` backend. `RUST_LOG` directives are
//! applied on top of the configured level, and structured key/values are
//! appended to each line as `key=value`.

use std::fmt::Display;
use std::io::{self, Write as _};
use std::str::FromStr;

use log::kv::{self, Key, Value, VisitSource};
use log::{LevelFilter, Record};

use super::error::LoggingError;
use super::structured::ORIGINAL_FORMAT_KEY;

/// Logger configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: LevelFilter,
    pub timestamp_millis: bool,
    /// Extra `RUST_LOG`-style directives, e.g. `"Program=debug"`.
    pub filters: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            timestamp_millis: true,
            filters: None,
        }
    }
}

impl LoggingConfig {
    pub fn from_level_str(level: &str) -> Result<Self, LoggingError> {
        let level = LevelFilter::from_str(level.trim())
            .map_err(|_| LoggingError::InvalidLevel(level.to_string()))?;
        Ok(Self {
            level,
            ..Self::default()
        })
    }
}

/// Install the global logger.
///
/// Fails with [`LoggingError::AlreadyInitialized`] if any logger is
/// already set; callers that may run setup twice can ignore that error.
pub fn init_logger(config: &LoggingConfig) -> Result<(), LoggingError> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(config.level);
    if let Some(filters) = &config.filters {
        builder.parse_filters(filters);
    }
    builder.parse_default_env();

    let millis = config.timestamp_millis;
    builder.format(move |buf, record| {
        let timestamp = if millis {
            buf.timestamp_millis()
        } else {
            buf.timestamp()
        };
        write_line(buf, &timestamp, record)
    });

    builder.try_init()?;
    Ok(())
}

/// `[timestamp LEVEL target] message key=value...`
fn write_line<W: io::Write>(out: &mut W, timestamp: &dyn Display, record: &Record<'_>) -> io::Result<()> {
    let mut fields = FieldWriter::default();
    let _ = record.key_values().visit(&mut fields);
    writeln!(
        out,
        "[{} {:<5} {}] {}{}",
        timestamp,
        record.level(),
        record.target(),
        record.args(),
        fields.0
    )
}

/// Renders key/values as ` key=value` pairs.
#[derive(Default)]
struct FieldWriter(String);

impl<'kvs> VisitSource<'kvs> for FieldWriter {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), kv::Error> {
        if key.as_str() != ORIGINAL_FORMAT_KEY {
            self.0.push_str(&format!(" {}={}", key, value));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GET_WEATHER_FORECAST;
    use log::kv::Source;
    use log::{Log, Metadata};
    use parking_lot::Mutex;

    #[derive(Default)]
    struct LineLogger(Mutex<Vec<String>>);

    impl Log for LineLogger {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            let mut line = Vec::new();
            write_line(&mut line, &"2026-10-19T00:00:00.000Z", record).unwrap();
            self.0.lock().push(String::from_utf8(line).unwrap());
        }

        fn flush(&self) {}
    }

    #[test]
    fn test_forecast_line_format() {
        let lines = LineLogger::default();
        let count = -3;
        GET_WEATHER_FORECAST.emit(
            &lines,
            "Program",
            &[("Count", log::kv::ToValue::to_value(&count))],
        );

        assert_eq!(
            lines.0.lock().as_slice(),
            ["[2026-10-19T00:00:00.000Z INFO  Program] Getting weather forecast, item count = -3 \
EventId=0 EventName=GetWeatherForecastEvent Count=-3\n"]
        );
    }

    #[test]
    fn test_from_level_str() {
        let config = LoggingConfig::from_level_str("debug").unwrap();
        assert_eq!(config.level, LevelFilter::Debug);
        assert!(config.timestamp_millis);

        let err = LoggingConfig::from_level_str("chatty").unwrap_err();
        assert!(matches!(err, LoggingError::InvalidLevel(ref s) if s == "chatty"));
    }

    #[test]
    fn test_field_writer_skips_template() {
        let kvs = [
            ("EventName", Value::from("GetWeatherForecastEvent")),
            ("Count", Value::from(5i64)),
            (ORIGINAL_FORMAT_KEY, Value::from("{Count}")),
        ];
        let mut fields = FieldWriter::default();
        kvs.visit(&mut fields).unwrap();
        assert_eq!(fields.0, " EventName=GetWeatherForecastEvent Count=5");
    }

    #[test]
    fn test_second_init_is_rejected() {
        let config = LoggingConfig::default();
        let _ = init_logger(&config);
        assert!(matches!(
            init_logger(&config),
            Err(LoggingError::AlreadyInitialized(_))
        ));
    }
}
