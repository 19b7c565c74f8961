//! Browser console logging.
//!
//! Installs a `tracing` subscriber whose only layer is the core
//! [`ConsoleLayer`], writing to `console.error/warn/info/debug`.

use landing_fx_core::logging::{ConsoleLayer, LineSink};
use tracing::Level;
use tracing_subscriber::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Routes rendered lines to the matching `console` method.
pub struct BrowserConsole;

impl LineSink for BrowserConsole {
    fn emit(&self, level: Level, line: &str) {
        let line = JsValue::from_str(line);
        match level {
            Level::ERROR => console::error_1(&line),
            Level::WARN => console::warn_1(&line),
            Level::INFO => console::info_1(&line),
            _ => console::debug_1(&line),
        }
    }
}

/// Install the console subscriber. Later calls are ignored.
pub fn init(max_level: Level) {
    let subscriber =
        tracing_subscriber::registry().with(ConsoleLayer::new(BrowserConsole, max_level));
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("Console logging already installed");
    }
}
