//! Configuration errors and semantic validation.
//!
//! Validation runs eagerly during [`Config::load`](crate::Config::load),
//! before any downstream tool sees the record. The first violation aborts
//! the load; a partially valid configuration is never exposed.

use thiserror::Error;
use tracing::warn;

use crate::coverage::CoverageConfig;
use crate::currency::is_supported_currency;
use crate::paths::ProjectPaths;
use crate::reporter::GasReporterConfig;
use crate::solidity::SolidityConfig;
use crate::version::SolcVersion;

/// Configuration result type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid compiler version \"{value}\": {reason}")]
    InvalidVersion { value: String, reason: String },

    #[error("Invalid gas price {value}: must be a finite number of gwei >= 0")]
    InvalidPrice { value: f64 },

    #[error("Unsupported currency \"{code}\"")]
    UnsupportedCurrency { code: String },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ConfigError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ConfigError::Io(_) => 60,
            ConfigError::Parse(_) => 61,
            ConfigError::InvalidVersion { .. } => 62,
            ConfigError::InvalidPrice { .. } => 63,
            ConfigError::UnsupportedCurrency { .. } => 64,
            ConfigError::InvalidValue { .. } => 65,
        }
    }
}

/// Validate a full configuration semantically.
pub fn validate_config(config: &crate::Config) -> ConfigResult<()> {
    validate_solidity(&config.solidity)?;
    validate_gas_reporter(&config.gas_reporter)?;
    validate_coverage(&config.coverage, &config.solidity)?;
    validate_paths(&config.paths)?;
    Ok(())
}

/// Validate the compiler section.
pub fn validate_solidity(solidity: &SolidityConfig) -> ConfigResult<()> {
    if solidity.compilers.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "solidity.compilers".to_string(),
            message: "at least one compiler is required".to_string(),
        });
    }

    for (index, solc) in solidity.compilers.iter().enumerate() {
        let version = SolcVersion::parse(&solc.version)?;

        if !version.is_supported_release() {
            return Err(ConfigError::InvalidVersion {
                value: solc.version.clone(),
                reason: format!(
                    "not a known release (newest is {})",
                    SolcVersion::latest_supported()
                ),
            });
        }

        if solc.optimizer.enabled && solc.optimizer.runs == 0 {
            return Err(ConfigError::InvalidValue {
                field: format!("solidity.compilers[{}].optimizer.runs", index),
                message: "must be >= 1 when the optimizer is enabled".to_string(),
            });
        }
    }

    Ok(())
}

/// Validate the gas reporting section.
///
/// Expects the unknown-currency policy to have been applied already; an
/// unrecognized currency reaching this point is an error regardless of
/// policy.
pub fn validate_gas_reporter(reporter: &GasReporterConfig) -> ConfigResult<()> {
    if let Some(price) = reporter.gas_price {
        if !price.is_finite() || price < 0.0 {
            return Err(ConfigError::InvalidPrice { value: price });
        }
    }

    if !is_supported_currency(&reporter.currency) {
        return Err(ConfigError::UnsupportedCurrency {
            code: reporter.currency.clone(),
        });
    }

    for entry in &reporter.exclude_contracts {
        if entry.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "gas_reporter.exclude_contracts".to_string(),
                message: "entries must not be empty".to_string(),
            });
        }
    }

    Ok(())
}

/// Validate the coverage section against the compiler settings.
pub fn validate_coverage(
    coverage: &CoverageConfig,
    solidity: &SolidityConfig,
) -> ConfigResult<()> {
    for entry in &coverage.skip_files {
        if entry.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "coverage.skip_files".to_string(),
                message: "entries must not be empty".to_string(),
            });
        }
    }

    if coverage.enabled {
        let optimized: Vec<&str> = solidity
            .compilers
            .iter()
            .filter(|solc| solc.optimizer.enabled)
            .map(|solc| solc.version.as_str())
            .collect();
        if !optimized.is_empty() {
            warn!(
                compilers = ?optimized,
                "Coverage with the optimizer enabled produces unreliable line mappings"
            );
        }
    }

    Ok(())
}

/// Validate the project path section.
pub fn validate_paths(paths: &ProjectPaths) -> ConfigResult<()> {
    let entries = [
        ("paths.sources", &paths.sources),
        ("paths.tests", &paths.tests),
        ("paths.cache", &paths.cache),
        ("paths.artifacts", &paths.artifacts),
    ];

    for (field, value) in entries {
        if value.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                message: "must not be empty".to_string(),
            });
        }
    }

    Ok(())
}
