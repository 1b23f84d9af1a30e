//! Fuzz target for the load pipeline over structured records.
//!
//! Builds configuration records from arbitrary field values and checks
//! that `Config::load` only ever returns a result, never panics.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use swage_config::currency::UnknownCurrencyPolicy;
use swage_config::reporter::GasReporterConfig;
use swage_config::solidity::{OptimizerSettings, SolcConfig, SolidityConfig};
use swage_config::Config;

#[derive(Arbitrary, Debug)]
struct RecordInput {
    versions: Vec<String>,
    optimizer_enabled: bool,
    runs: u32,
    currency: String,
    gas_price: Option<f64>,
    fallback: bool,
}

fuzz_target!(|input: RecordInput| {
    let config = Config {
        solidity: SolidityConfig {
            compilers: input
                .versions
                .iter()
                .map(|version| SolcConfig {
                    version: version.clone(),
                    optimizer: OptimizerSettings {
                        enabled: input.optimizer_enabled,
                        runs: input.runs,
                    },
                    evm_version: None,
                })
                .collect(),
        },
        gas_reporter: GasReporterConfig {
            currency: input.currency.clone(),
            gas_price: input.gas_price,
            unknown_currency: if input.fallback {
                UnknownCurrencyPolicy::Fallback
            } else {
                UnknownCurrencyPolicy::Reject
            },
            ..GasReporterConfig::default()
        },
        ..Config::default()
    };
    // Validation should never panic, only accept or reject the record
    let _ = config.load();
});
