//! Gas reporting options.
//!
//! The reporter itself runs alongside the test suite; this record only
//! carries what it needs: whether to run at all, which currency to quote
//! costs in, and the gas price multiplier.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::currency::{UnknownCurrencyPolicy, DEFAULT_CURRENCY};

/// Gas reporting section of the configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasReporterConfig {
    /// Reporting is opt-in; nothing is measured when disabled.
    pub enabled: bool,

    /// Display currency for cost columns. Declared spelling is preserved.
    pub currency: String,

    /// Price per gas unit in gwei. `None` lets the reporter fetch a live
    /// price at run time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<f64>,

    /// Write the report here instead of stdout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<PathBuf>,

    /// Contract names left out of the report.
    pub exclude_contracts: Vec<String>,

    /// What to do when `currency` is not a code the price feed can quote.
    pub unknown_currency: UnknownCurrencyPolicy,
}

impl Default for GasReporterConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            currency: DEFAULT_CURRENCY.to_string(),
            gas_price: None,
            output_file: None,
            exclude_contracts: Vec::new(),
            unknown_currency: UnknownCurrencyPolicy::default(),
        }
    }
}
