//! # Core Library Logic
//!
//! Platform-independent bodies of the JNI entry points. Nothing here touches
//! the JVM, so it can be exercised directly from host tests.

pub mod version;
