//! Fuzz target for compiler version string parsing.
//!
//! Tests that `SolcVersion::parse` handles arbitrary input without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use swage_config::SolcVersion;

fuzz_target!(|data: &str| {
    // The parser should never panic, only return an error
    let _ = SolcVersion::parse(data);
});
