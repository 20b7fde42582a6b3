//! `RUST_LOG` module directives reach the host backend.

#![cfg(not(target_os = "android"))]

use healthhub_native::diagnostics::logging;
use log::LevelFilter;

#[test]
fn test_module_directive_sets_level() {
    std::env::set_var("RUST_LOG", "healthhub_native=debug");

    logging::init();
    assert_eq!(log::max_level(), LevelFilter::Debug);
}
