//! Structured event definitions.
//!
//! An [`EventDefinition`] fixes the id, name, severity and message template
//! of one class of log record. Emitting it renders the template and hands
//! the backend a `log::Record` whose key/values carry the event identity,
//! every named parameter, and the raw template under `{OriginalFormat}`.

use std::fmt;

use log::kv::{self, Key, Source, ToValue, Value, VisitSource};
use log::{Log, Metadata, Record};

use super::error::TemplateError;
use super::severity::Severity;
use super::template::MessageTemplate;

pub const EVENT_ID_KEY: &str = "EventId";
pub const EVENT_NAME_KEY: &str = "EventName";
pub const ORIGINAL_FORMAT_KEY: &str = "{OriginalFormat}";

/// One class of structured log record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDefinition {
    pub id: i32,
    pub name: &'static str,
    pub severity: Severity,
    pub template: MessageTemplate,
}

impl EventDefinition {
    pub fn define(
        id: i32,
        name: &'static str,
        severity: Severity,
        template: &str,
    ) -> Result<Self, TemplateError> {
        Ok(Self {
            id,
            name,
            severity,
            template: MessageTemplate::parse(template)?,
        })
    }

    /// Forward one record to `logger` under `target`.
    ///
    /// Nothing is rendered when the backend has the level disabled.
    pub fn emit<L: Log + ?Sized>(&self, logger: &L, target: &str, params: &[(&str, Value<'_>)]) {
        let metadata = Metadata::builder()
            .level(self.severity.to_level())
            .target(target)
            .build();
        if !logger.enabled(&metadata) {
            return;
        }

        let message = self.template.render(params);
        let fields = EventFields {
            definition: self,
            params,
        };

        logger.log(
            &Record::builder()
                .metadata(metadata)
                .args(format_args!("{}", message))
                .key_values(&fields)
                .build(),
        );
    }
}

struct EventFields<'a> {
    definition: &'a EventDefinition,
    params: &'a [(&'a str, Value<'a>)],
}

impl Source for EventFields<'_> {
    fn visit<'kvs>(&'kvs self, visitor: &mut dyn VisitSource<'kvs>) -> Result<(), kv::Error> {
        visitor.visit_pair(Key::from_str(EVENT_ID_KEY), self.definition.id.to_value())?;
        visitor.visit_pair(Key::from_str(EVENT_NAME_KEY), self.definition.name.to_value())?;
        for (name, value) in self.params {
            visitor.visit_pair(Key::from_str(name), value.to_value())?;
        }
        visitor.visit_pair(
            Key::from_str(ORIGINAL_FORMAT_KEY),
            self.definition.template.as_str().to_value(),
        )
    }
}

/// A borrowed logging backend bound to a category.
///
/// The category becomes the record target, the way a typed logger handle
/// names its owning component.
#[derive(Clone, Copy)]
pub struct CategoryLogger<'a> {
    sink: &'a dyn Log,
    category: &'a str,
    facade_filter: bool,
}

impl<'a> CategoryLogger<'a> {
    pub fn new(sink: &'a dyn Log, category: &'a str) -> Self {
        Self {
            sink,
            category,
            facade_filter: false,
        }
    }

    pub fn category(&self) -> &str {
        self.category
    }

    pub fn emit(&self, definition: &EventDefinition, params: &[(&str, Value<'_>)]) {
        if self.facade_filter && definition.severity.to_level() > log::max_level() {
            return;
        }
        definition.emit(self.sink, self.category, params);
    }
}

impl CategoryLogger<'static> {
    /// Bind the process-wide logger installed through `log::set_logger`.
    ///
    /// Events above `log::max_level()` are dropped, as the `log` macros do.
    pub fn global(category: &'static str) -> Self {
        Self {
            facade_filter: true,
            ..Self::new(log::logger(), category)
        }
    }
}

impl fmt::Debug for CategoryLogger<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryLogger")
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Emit an event definition with named parameters.
///
/// ```ignore
/// log_event!(logger, GET_WEATHER_FORECAST, Count = count);
/// ```
#[macro_export]
macro_rules! log_event {
    ($logger:expr, $definition:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::logging::structured::CategoryLogger::emit(
            &$logger,
            &$definition,
            &[$((stringify!($key), $crate::__log::kv::ToValue::to_value(&$value))),*],
        )
    };
}
