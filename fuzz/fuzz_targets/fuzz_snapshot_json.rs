//! Fuzz target for snapshot JSON parsing.
//!
//! Snapshots are read back from disk, so the deserializer must handle
//! arbitrary input without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use swage_config::ConfigSnapshot;

fuzz_target!(|data: &str| {
    // The parser should never panic, only return an error; accessors on a
    // parsed snapshot must hold up too
    if let Ok(snapshot) = ConfigSnapshot::from_json(data) {
        let _ = snapshot.short_id();
    }
});
