//! Platform-aware logging initialization.
//!
//! In the browser, `tracing` events are routed to the console. The level is
//! read from (and persisted to) localStorage so it can be raised on a live
//! page without a rebuild.

use std::sync::Once;

use tracing::level_filters::LevelFilter;

use crate::storage::{BrowserStorage, StorageType};

static INIT: Once = Once::new();

/// localStorage key holding the persisted log level.
pub const LOG_LEVEL_KEY: &str = "tv_web_log_level";

/// Initialize logging for the current platform.
///
/// Native builds leave subscriber setup to the embedding binary or test
/// harness. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        #[cfg(feature = "web")]
        init_web_logging();
    });
}

#[cfg(feature = "web")]
static RELOAD_HANDLE: std::sync::OnceLock<tracing_subscriber::reload::Handle<LevelFilter, tracing_subscriber::Registry>> =
    std::sync::OnceLock::new();

#[cfg(feature = "web")]
fn init_web_logging() {
    console_error_panic_hook::set_once();
    use tracing_subscriber::prelude::*;
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(MakeWebConsoleWriter::new())
        .without_time(); // WASM doesn't have std::time

    let initial_level = stored_log_level().unwrap_or(LevelFilter::WARN);

    let (filter, handle) = tracing_subscriber::reload::Layer::new(initial_level);
    let _ = RELOAD_HANDLE.set(handle);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

fn stored_log_level() -> Option<LevelFilter> {
    let level = BrowserStorage::new(StorageType::Local).get(LOG_LEVEL_KEY)?;
    parse_level(&level)
}

pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_ascii_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

fn level_name(level: LevelFilter) -> &'static str {
    match level {
        LevelFilter::ERROR => "error",
        LevelFilter::INFO => "info",
        LevelFilter::DEBUG => "debug",
        LevelFilter::TRACE => "trace",
        _ => "warn",
    }
}

/// Change the live log level and persist it for later page loads.
pub fn set_log_level(level: LevelFilter) {
    #[cfg(feature = "web")]
    {
        if let Some(handle) = RELOAD_HANDLE.get() {
            let _ = handle.reload(level);
        }
    }

    if let Err(e) = BrowserStorage::new(StorageType::Local).set(LOG_LEVEL_KEY, level_name(level)) {
        tracing::warn!(error = %e, "could not persist log level");
    }
}

pub fn get_log_level() -> LevelFilter {
    stored_log_level().unwrap_or(if cfg!(feature = "web") { LevelFilter::WARN } else { LevelFilter::INFO })
}
