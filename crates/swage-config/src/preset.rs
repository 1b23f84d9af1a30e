//! Configuration presets for common build scenarios.
//!
//! Provides pre-built configurations for:
//! - Development: fast iteration, optimizer off, no reporting
//! - Production: optimized deployment builds
//! - CI: gas report written to a file for pipeline artifacts
//! - Coverage: instrumented builds with the optimizer forced off

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coverage::CoverageConfig;
use crate::reporter::GasReporterConfig;
use crate::solidity::{OptimizerSettings, SolcConfig, SolidityConfig};
use crate::Config;

/// Available configuration presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetName {
    /// Fast iteration: optimizer off, nothing measured
    Development,
    /// Deployment builds: optimizer on
    Production,
    /// Pipeline runs: gas report written to a file
    Ci,
    /// Instrumented builds: coverage on, optimizer off
    Coverage,
}

impl PresetName {
    /// All available preset names.
    pub const ALL: &'static [PresetName] = &[
        PresetName::Development,
        PresetName::Production,
        PresetName::Ci,
        PresetName::Coverage,
    ];

    /// Get preset name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetName::Development => "development",
            PresetName::Production => "production",
            PresetName::Ci => "ci",
            PresetName::Coverage => "coverage",
        }
    }

    /// Parse preset name from string.
    pub fn parse(s: &str) -> Option<PresetName> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Some(PresetName::Development),
            "production" | "prod" | "release" => Some(PresetName::Production),
            "ci" | "automation" => Some(PresetName::Ci),
            "coverage" | "cov" => Some(PresetName::Coverage),
            _ => None,
        }
    }

    /// Get a description of the preset.
    pub fn description(&self) -> &'static str {
        match self {
            PresetName::Development => "Fast iteration: optimizer off, no reporting",
            PresetName::Production => "Deployment builds: optimizer on, 200 runs",
            PresetName::Ci => "Pipeline runs: gas report written to gas-report.txt",
            PresetName::Coverage => "Instrumented builds: coverage on, optimizer off",
        }
    }
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PresetName {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetName::parse(s).ok_or_else(|| PresetError::UnknownPreset(s.to_string()))
    }
}

/// Errors related to preset operations.
#[derive(Debug, Clone)]
pub enum PresetError {
    /// Unknown preset name.
    UnknownPreset(String),
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::UnknownPreset(name) => {
                write!(
                    f,
                    "Unknown preset '{}'. Available: {}",
                    name,
                    PresetName::ALL
                        .iter()
                        .map(|p| p.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
        }
    }
}

impl std::error::Error for PresetError {}

/// Get the configuration for a preset.
///
/// Every preset passes [`Config::load`](crate::Config::load) unchanged.
pub fn get_preset(name: PresetName) -> Config {
    match name {
        PresetName::Development => development_preset(),
        PresetName::Production => production_preset(),
        PresetName::Ci => ci_preset(),
        PresetName::Coverage => coverage_preset(),
    }
}

/// Development preset: the defaults, tuned for compile speed.
fn development_preset() -> Config {
    Config::default()
}

/// Production preset: optimizer on for deployment bytecode.
fn production_preset() -> Config {
    Config {
        solidity: SolidityConfig {
            compilers: vec![SolcConfig {
                optimizer: OptimizerSettings {
                    enabled: true,
                    runs: 200,
                },
                ..SolcConfig::default()
            }],
        },
        ..Config::default()
    }
}

/// CI preset: gas costs measured and written to a pipeline artifact.
fn ci_preset() -> Config {
    Config {
        gas_reporter: GasReporterConfig {
            enabled: true,
            output_file: Some("gas-report.txt".into()),
            ..GasReporterConfig::default()
        },
        ..Config::default()
    }
}

/// Coverage preset: instrumentation on, optimizer off.
///
/// The instrumenter rewrites sources before compiling; optimized bytecode
/// no longer maps back to the rewritten lines.
fn coverage_preset() -> Config {
    Config {
        solidity: SolidityConfig {
            compilers: vec![SolcConfig {
                optimizer: OptimizerSettings {
                    enabled: false,
                    runs: 200,
                },
                ..SolcConfig::default()
            }],
        },
        coverage: CoverageConfig {
            enabled: true,
            ..CoverageConfig::default()
        },
        ..Config::default()
    }
}

/// Information about a preset for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetInfo {
    pub name: String,
    pub description: String,
    pub compiler_versions: Vec<String>,
    pub optimizer_enabled: bool,
    pub gas_reporting_enabled: bool,
    pub coverage_enabled: bool,
}

impl PresetInfo {
    /// Create info from a preset.
    pub fn from_preset(name: PresetName) -> Self {
        let config = get_preset(name);
        Self {
            name: name.as_str().to_string(),
            description: name.description().to_string(),
            compiler_versions: config
                .solidity
                .compilers
                .iter()
                .map(|solc| solc.version.clone())
                .collect(),
            optimizer_enabled: config
                .solidity
                .compilers
                .iter()
                .any(|solc| solc.optimizer.enabled),
            gas_reporting_enabled: config.gas_reporter.enabled,
            coverage_enabled: config.coverage.enabled,
        }
    }
}

/// List all available presets with summary information.
pub fn list_presets() -> Vec<PresetInfo> {
    PresetName::ALL
        .iter()
        .map(|&name| PresetInfo::from_preset(name))
        .collect()
}
