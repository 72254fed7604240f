//! Browser logging setup.
//!
//! Routes `tracing` events to the browser console. Native builds (unit tests)
//! install nothing.

use tracing::level_filters::LevelFilter;

/// Local-storage key holding a level override such as `debug`.
pub const LOG_LEVEL_KEY: &str = "autocare.log_level";

#[cfg(target_arch = "wasm32")]
static INIT: std::sync::Once = std::sync::Once::new();

/// Level used when no override is stored.
#[must_use]
pub const fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

/// Parse a stored level name, case-insensitively.
#[must_use]
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

/// Install the console subscriber and panic hook. Safe to call repeatedly.
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    INIT.call_once(init_web_logging);
}

#[cfg(target_arch = "wasm32")]
fn init_web_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    console_error_panic_hook::set_once();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time();

    let level = stored_level().unwrap_or_else(default_level);

    tracing_subscriber::registry().with(level).with(fmt_layer).init();
}

#[cfg(target_arch = "wasm32")]
fn stored_level() -> Option<LevelFilter> {
    use gloo_storage::{LocalStorage, Storage};

    let raw: String = LocalStorage::get(LOG_LEVEL_KEY).ok()?;
    parse_level(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels_case_insensitively() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::WARN));
        assert_eq!(parse_level("Off"), Some(LevelFilter::OFF));
        assert_eq!(parse_level("verbose"), None);
        assert_eq!(parse_level(""), None);
    }

    #[test]
    fn level_names_round_trip_through_display() {
        for level in [
            LevelFilter::ERROR,
            LevelFilter::WARN,
            LevelFilter::INFO,
            LevelFilter::DEBUG,
            LevelFilter::TRACE,
        ] {
            assert_eq!(parse_level(&level.to_string()), Some(level));
        }
    }

    #[test]
    fn init_is_a_no_op_natively() {
        init();
        init();
    }
}
