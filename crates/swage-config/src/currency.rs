//! Display currencies recognized by the gas reporter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency used when a declaration does not name one.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// ISO 4217 codes the price feed can quote. Matching is case-insensitive;
/// the declared spelling is preserved in the record.
pub const SUPPORTED_CURRENCIES: &[&str] = &[
    "AED", "AUD", "BRL", "CAD", "CHF", "CNY", "CZK", "DKK", "EUR", "GBP", "HKD", "HUF", "IDR",
    "ILS", "INR", "JPY", "KRW", "MXN", "MYR", "NOK", "NZD", "PHP", "PLN", "SEK", "SGD", "THB",
    "TRY", "TWD", "USD", "ZAR",
];

/// Whether a currency code is recognized, ignoring case.
pub fn is_supported_currency(code: &str) -> bool {
    SUPPORTED_CURRENCIES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(code))
}

/// What to do when a declaration names a currency the price feed cannot quote.
///
/// `Reject` fails the load. `Fallback` substitutes [`DEFAULT_CURRENCY`] into
/// the record at load time and logs a warning; nothing degrades later at
/// report time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownCurrencyPolicy {
    #[default]
    Reject,
    Fallback,
}

impl UnknownCurrencyPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnknownCurrencyPolicy::Reject => "reject",
            UnknownCurrencyPolicy::Fallback => "fallback",
        }
    }
}

impl fmt::Display for UnknownCurrencyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
