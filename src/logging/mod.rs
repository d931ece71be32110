use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

/// `log` backend that forwards records to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

pub(crate) fn max_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub(crate) fn format_record(level: Level, target: &str, args: &std::fmt::Arguments<'_>) -> String {
    format!("[{level}] {target}: {args}")
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from_str(&format_record(
            record.level(),
            record.target(),
            record.args(),
        ));

        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger. Safe to call more than once.
pub(crate) fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max_level());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_prefixes_level_and_target() {
        let line = format_record(
            Level::Error,
            "sharebox_dashboard::state",
            &format_args!("stats failed: {}", "User not found"),
        );
        assert_eq!(
            line,
            "[ERROR] sharebox_dashboard::state: stats failed: User not found"
        );
    }

    #[test]
    fn test_debug_builds_log_debug() {
        if cfg!(debug_assertions) {
            assert_eq!(max_level(), LevelFilter::Debug);
        } else {
            assert_eq!(max_level(), LevelFilter::Info);
        }
    }
}
