use std::fmt;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

use crate::clock::SystemClock;
use crate::defaults;
use crate::format::MessageFormatter;
use crate::registry::SharedRegistry;

/// A tracing event formatter that renders diagnostics through the level
/// registry.
///
/// Each event is decorated by the registry level named after its tracing
/// level (`ERROR`, `WARN`, `INFO`, `DEBUG`, `TRACE`), falling back to
/// `DEFAULT`. Registering a level called `WARN` therefore restyles every
/// warning the binary prints. No span or target metadata is written.
pub struct LevelFormatter {
    registry: SharedRegistry,
    clock: SystemClock,
}

impl LevelFormatter {
    pub fn new(registry: SharedRegistry) -> Self {
        Self {
            registry,
            clock: SystemClock,
        }
    }
}

impl<S, N> FormatEvent<S, N> for LevelFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        // Buffer the fields so the whole line can be decorated at once.
        let mut buffer = String::new();
        ctx.format_fields(Writer::new(&mut buffer), event)?;

        let level = self
            .registry
            .resolve(event.metadata().level().as_str())
            .or_else(|_| self.registry.resolve(defaults::LEVEL));

        let line = match level {
            Ok(level) => {
                let formatter = MessageFormatter::new(&level, &self.clock);
                let indented = formatter.indent(&buffer);
                formatter
                    .render(&indented, writer.has_ansi_escapes())
                    .unwrap_or(indented)
            }
            Err(_) => buffer,
        };

        writeln!(writer, "{}", line)
    }
}
