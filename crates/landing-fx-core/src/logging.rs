//! Console logging layer for `tracing`.
//!
//! [`ConsoleLayer`] renders each event as a single line and hands it to a
//! [`LineSink`] together with its level. The browser binding plugs in a sink
//! that routes to `console.error/warn/info/debug`; tests plug in a buffer.
//!
//! ```ignore
//! use landing_fx_core::logging::ConsoleLayer;
//! use tracing_subscriber::prelude::*;
//!
//! let subscriber = tracing_subscriber::registry()
//!     .with(ConsoleLayer::new(BrowserConsole, tracing::Level::INFO));
//! tracing::subscriber::set_global_default(subscriber)?;
//! ```

use std::fmt::Write as FmtWrite;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Destination for rendered log lines.
pub trait LineSink: Send + Sync + 'static {
    fn emit(&self, level: Level, line: &str);
}

/// A tracing Layer that writes one line per event to a [`LineSink`].
pub struct ConsoleLayer<S> {
    sink: S,
    max_level: Level,
}

impl<S: LineSink> ConsoleLayer<S> {
    /// Events more verbose than `max_level` are dropped.
    pub fn new(sink: S, max_level: Level) -> Self {
        Self { sink, max_level }
    }
}

impl<S, Sub> Layer<Sub> for ConsoleLayer<S>
where
    S: LineSink,
    Sub: Subscriber + for<'a> LookupSpan<'a>,
{
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, Sub>) -> bool {
        *metadata.level() <= self.max_level
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, Sub>) {
        let metadata = event.metadata();

        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let spans = ctx
            .event_scope(event)
            .map(|scope| {
                scope
                    .from_root()
                    .map(|span| span.name())
                    .collect::<Vec<_>>()
                    .join(" > ")
            })
            .unwrap_or_default();

        let line = render_line(
            *metadata.level(),
            metadata.target(),
            &spans,
            visitor.message.as_deref().unwrap_or_default(),
            &visitor.fields,
        );
        self.sink.emit(*metadata.level(), &line);
    }
}

/// Format `LEVEL target [span]: message key=value ...`.
pub fn render_line(
    level: Level,
    target: &str,
    spans: &str,
    message: &str,
    fields: &[(String, String)],
) -> String {
    let mut line = format!("{level} {target}");
    if !spans.is_empty() {
        let _ = write!(line, " [{spans}]");
    }
    let _ = write!(line, ": {message}");
    for (name, value) in fields {
        let _ = write!(line, " {name}={value}");
    }
    line
}

/// Visitor that splits the message from the structured fields.
#[derive(Default)]
struct LineVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl Visit for LineVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);

        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.fields.push((field.name().to_string(), buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.fields
            .push((field.name().to_string(), value.to_string()));
    }
}
