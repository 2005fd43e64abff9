//! Console Logger
//!
//! Routes `tracing` events to the browser console. Each event is formatted
//! by the `fmt` layer into a buffer and flushed as one console call, picked
//! by level: errors to `console.error`, warnings to `console.warn`, the
//! rest to `console.log`.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;

/// Level used when `BILLUND_LOG` is unset or unrecognised
pub const DEFAULT_LEVEL: Level = Level::INFO;

/// Destination for one finished log line
pub type Sink = fn(Level, &str);

/// Parse a level name (`error`, `warn`, `info`, `debug`, `trace`)
pub fn parse_level(name: &str) -> Option<Level> {
    match name.trim().to_ascii_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

/// Level baked in at compile time from `BILLUND_LOG`
pub fn level_from_env() -> Level {
    option_env!("BILLUND_LOG")
        .and_then(parse_level)
        .unwrap_or(DEFAULT_LEVEL)
}

fn browser_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

/// Buffers one formatted event and hands it to the sink on drop
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
    sink: Sink,
}

impl ConsoleWriter {
    fn new(level: Level, sink: Sink) -> Self {
        Self { level, buf: Vec::new(), sink }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end();
        if !line.is_empty() {
            (self.sink)(self.level, line);
        }
    }
}

/// `MakeWriter` that hands out one `ConsoleWriter` per event
#[derive(Clone, Copy)]
pub struct MakeConsoleWriter {
    sink: Sink,
}

impl MakeConsoleWriter {
    pub fn new() -> Self {
        Self { sink: browser_console }
    }

    pub fn with_sink(sink: Sink) -> Self {
        Self { sink }
    }
}

impl Default for MakeConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO, self.sink)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level(), self.sink)
    }
}

/// Install the console subscriber as the global default.
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init(level: Level) {
    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_writer(MakeConsoleWriter::new())
        .with_filter(LevelFilter::from_level(level));

    let _ = tracing_subscriber::registry().with(layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Write;

    thread_local! {
        static LINES: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
    }

    fn capture(level: Level, line: &str) {
        LINES.with(|lines| lines.borrow_mut().push((level, line.to_string())));
    }

    fn take_lines() -> Vec<(Level, String)> {
        LINES.with(|lines| lines.borrow_mut().drain(..).collect())
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(Level::DEBUG));
        assert_eq!(parse_level(" WARN "), Some(Level::WARN));
        assert_eq!(parse_level("warning"), Some(Level::WARN));
        assert_eq!(parse_level("verbose"), None);
    }

    #[test]
    fn test_writer_flushes_one_line_on_drop() {
        take_lines();
        {
            let mut writer = ConsoleWriter::new(Level::WARN, capture);
            write!(writer, " WARN trip: ").unwrap();
            writeln!(writer, "day 7 missing").unwrap();
        }
        assert_eq!(take_lines(), vec![(Level::WARN, " WARN trip: day 7 missing".to_string())]);
    }

    #[test]
    fn test_empty_event_is_skipped() {
        take_lines();
        drop(ConsoleWriter::new(Level::INFO, capture));
        assert!(take_lines().is_empty());
    }

    #[test]
    fn test_subscriber_routes_by_level() {
        take_lines();
        let layer = tracing_subscriber::fmt::layer()
            .without_time()
            .with_ansi(false)
            .with_writer(MakeConsoleWriter::with_sink(capture))
            .with_filter(LevelFilter::INFO);
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("hidden");
            tracing::info!(day = 3, "day toggled");
            tracing::error!("content missing");
        });

        let lines = take_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, Level::INFO);
        assert!(lines[0].1.contains("day toggled"));
        assert!(lines[0].1.contains("day=3"));
        assert_eq!(lines[1].0, Level::ERROR);
        assert!(lines[1].1.contains("content missing"));
    }
}
