//! Fuzz target for swage.toml configuration parsing.
//!
//! Tests that TOML configuration parsing handles arbitrary input
//! without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use swage_config::Config;

fuzz_target!(|data: &str| {
    // The parser should never panic, only return an error
    let _ = Config::from_toml_str(data);
});
