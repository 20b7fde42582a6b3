//! Native library version label.

use log::Level;

use crate::diagnostics::logging::{self, LogSink};

/// Build label reported to the Android application.
pub const VERSION_LABEL: &str = "HealthHub Native v1.0";

/// Message logged each time the version is queried.
pub const LOADED_MESSAGE: &str = "Native library loaded";

/// Logs the load record through `sink` and returns a fresh copy of [`VERSION_LABEL`].
///
/// Logging is best-effort; the label is returned even if the sink fails.
pub fn native_version(sink: &dyn LogSink) -> String {
    logging::emit_best_effort(sink, Level::Info, LOADED_MESSAGE);
    VERSION_LABEL.to_owned()
}
