//! # Native Logging
//!
//! Library code logs through the `log` facade. This module installs the
//! process-wide backend and provides the [`LogSink`] seam used by the JNI
//! entry points.
//!
//! On Android the backend is `android_logger`, so records land in logcat under
//! [`LOG_TAG`]. On other targets `env_logger` writes them to stderr, filtered by
//! `RUST_LOG` (default `info`).

use log::{Level, LevelFilter};
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

/// Tag attached to every record emitted by this library.
pub const LOG_TAG: &str = "HealthHubNative";

/// Error returned by a sink that could not accept a record.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// A destination for diagnostic records.
pub trait LogSink: Send + Sync {
    fn emit(&self, level: Level, tag: &str, message: &str) -> Result<(), SinkError>;
}

/// Sink that forwards records to whichever `log` backend is installed.
pub struct FacadeSink;

impl LogSink for FacadeSink {
    fn emit(&self, level: Level, tag: &str, message: &str) -> Result<(), SinkError> {
        log::log!(target: tag, level, "{}", message);
        Ok(())
    }
}

/// Emits one record through `sink`, tagged with [`LOG_TAG`].
///
/// Logging is fire-and-forget: an error or a panic raised by the sink is
/// reported on stderr and otherwise ignored.
pub fn emit_best_effort(sink: &dyn LogSink, level: Level, message: &str) {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| sink.emit(level, LOG_TAG, message)));
    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            let _ = writeln!(std::io::stderr(), "{}: log emission failed: {}", LOG_TAG, e);
        }
        Err(_) => {
            let _ = writeln!(std::io::stderr(), "{}: log sink panicked", LOG_TAG);
        }
    }
}

/// Maps a `RUST_LOG` value to the logcat level filter. Unset or unknown values select `Info`.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Installs the logging backend.
///
/// Idempotent; called from `JNI_OnLoad` and from every JNI entry point so
/// records are captured however the library was loaded.
pub fn init() {
    static START: Once = Once::new();
    START.call_once(install);
}

#[cfg(target_os = "android")]
fn install() {
    let level = parse_level(std::env::var("RUST_LOG").ok().as_deref());
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(level)
            .with_tag(LOG_TAG),
    );
}

#[cfg(not(target_os = "android"))]
fn install() {
    let env = env_logger::Env::default().default_filter_or("info");
    if let Err(e) = env_logger::Builder::from_env(env).try_init() {
        // Another library in the process already owns the facade.
        let _ = writeln!(std::io::stderr(), "{}: logger already set: {}", LOG_TAG, e);
    }
}
