//! # Native Diagnostics
//!
//! Native-side logging for the HealthHub library: the sink seam used by the
//! JNI entry points and the process-wide `log` backend.

pub mod logging;
