//! The root configuration record.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::coverage::CoverageConfig;
use crate::currency::{is_supported_currency, UnknownCurrencyPolicy, DEFAULT_CURRENCY};
use crate::paths::ProjectPaths;
use crate::reporter::GasReporterConfig;
use crate::solidity::SolidityConfig;
use crate::validate::{validate_config, ConfigError, ConfigResult};

/// Complete project configuration.
///
/// Built once at startup, then held as read-only state. Consumers take
/// `&Config`; nothing mutates the record after [`Config::load`] returns, so
/// it can be shared across threads freely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub solidity: SolidityConfig,
    pub gas_reporter: GasReporterConfig,
    pub coverage: CoverageConfig,
    pub paths: ProjectPaths,
}

impl Config {
    /// Read a declaration file.
    pub fn from_file(path: &Path) -> ConfigResult<Config> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse a declaration from TOML text.
    pub fn from_toml_str(toml: &str) -> ConfigResult<Config> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(format!("Invalid TOML: {}", e)))
    }

    /// Finalize the declared configuration into the record consumers read.
    ///
    /// Applies the unknown-currency policy, then validates every invariant.
    /// The first violation aborts the load; on success the returned record
    /// carries the declared values unchanged (apart from a policy-driven
    /// currency substitution, which is logged). Loading an already loaded
    /// record is a no-op: the result is structurally equal.
    pub fn load(mut self) -> ConfigResult<Config> {
        self.apply_unknown_currency_policy();
        validate_config(&self)?;
        Ok(self)
    }

    fn apply_unknown_currency_policy(&mut self) {
        if self.gas_reporter.unknown_currency == UnknownCurrencyPolicy::Fallback
            && !is_supported_currency(&self.gas_reporter.currency)
        {
            warn!(
                declared = %self.gas_reporter.currency,
                substituted = DEFAULT_CURRENCY,
                "Unknown display currency, using the default"
            );
            self.gas_reporter.currency = DEFAULT_CURRENCY.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The classic starter project: one pinned release, gas reporting on.
    const EXAMPLE: &str = r#"
        solidity = "0.8.17"

        [gas_reporter]
        enabled = true
        currency = "CHF"
        gas_price = 21
    "#;

    // ── Parsing ───────────────────────────────────────────────────────

    #[test]
    fn empty_document_is_all_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = Config::from_toml_str("solidity = [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert_eq!(err.code(), 61);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::from_file(Path::new("/nonexistent/swage.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert_eq!(err.code(), 60);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = Config::from_toml_str("unknown_section = 1\n").unwrap();
        assert_eq!(config, Config::default());
    }

    // ── load() semantics ──────────────────────────────────────────────

    #[test]
    fn default_config_loads() {
        assert!(Config::default().load().is_ok());
    }

    #[test]
    fn example_loads_with_values_unchanged() {
        let config = Config::from_toml_str(EXAMPLE).unwrap().load().unwrap();
        assert_eq!(config.solidity.compilers.len(), 1);
        assert_eq!(config.solidity.compilers[0].version, "0.8.17");
        assert!(config.gas_reporter.enabled);
        assert_eq!(config.gas_reporter.currency, "CHF");
        assert_eq!(config.gas_reporter.gas_price, Some(21.0));
    }

    #[test]
    fn load_is_idempotent() {
        let once = Config::from_toml_str(EXAMPLE).unwrap().load().unwrap();
        let twice = once.clone().load().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn equal_declarations_load_equal_records() {
        let a = Config::from_toml_str(EXAMPLE).unwrap().load().unwrap();
        let b = Config::from_toml_str(EXAMPLE).unwrap().load().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn load_rejects_negative_price() {
        let toml = r#"
            [gas_reporter]
            gas_price = -1
        "#;
        let err = Config::from_toml_str(toml).unwrap().load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPrice { value } if value == -1.0));
    }

    #[test]
    fn load_rejects_empty_version() {
        let err = Config::from_toml_str(r#"solidity = """#)
            .unwrap()
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVersion { .. }));
    }

    #[test]
    fn load_rejects_unknown_release() {
        let err = Config::from_toml_str(r#"solidity = "9.9.9""#)
            .unwrap()
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVersion { .. }));
    }

    // ── Unknown-currency policy ───────────────────────────────────────

    #[test]
    fn unknown_currency_rejected_by_default() {
        let toml = r#"
            [gas_reporter]
            currency = "XXX"
        "#;
        let err = Config::from_toml_str(toml).unwrap().load().unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedCurrency { code } if code == "XXX"));
    }

    #[test]
    fn unknown_currency_substituted_under_fallback() {
        let toml = r#"
            [gas_reporter]
            currency = "XXX"
            unknown_currency = "fallback"
        "#;
        let config = Config::from_toml_str(toml).unwrap().load().unwrap();
        assert_eq!(config.gas_reporter.currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn fallback_leaves_supported_currency_alone() {
        let toml = r#"
            [gas_reporter]
            currency = "chf"
            unknown_currency = "fallback"
        "#;
        let config = Config::from_toml_str(toml).unwrap().load().unwrap();
        // Recognized case-insensitively and stored exactly as declared.
        assert_eq!(config.gas_reporter.currency, "chf");
    }

    #[test]
    fn fallback_substitution_is_idempotent() {
        let toml = r#"
            [gas_reporter]
            currency = "XXX"
            unknown_currency = "fallback"
        "#;
        let once = Config::from_toml_str(toml).unwrap().load().unwrap();
        let twice = once.clone().load().unwrap();
        assert_eq!(once, twice);
    }

    // ── Record properties ─────────────────────────────────────────────

    #[test]
    fn record_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Config>();
    }

    #[test]
    fn json_roundtrip_preserves_record() {
        let config = Config::from_toml_str(EXAMPLE).unwrap().load().unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn full_document_parses() {
        let toml = r#"
            [solidity]
            version = "0.8.17"
            evm_version = "paris"

            [solidity.optimizer]
            enabled = true
            runs = 1000

            [gas_reporter]
            enabled = true
            currency = "USD"
            gas_price = 30
            output_file = "gas-report.txt"
            exclude_contracts = ["Migrations"]

            [coverage]
            enabled = true
            skip_files = ["mocks/"]

            [paths]
            sources = "src"
            tests = "spec"
        "#;
        let config = Config::from_toml_str(toml).unwrap().load().unwrap();
        assert!(config.solidity.compilers[0].optimizer.enabled);
        assert_eq!(config.gas_reporter.currency, "USD");
        assert!(config.coverage.enabled);
        assert_eq!(config.paths.sources, "src");
        assert_eq!(config.paths.cache, "cache");
    }
}
