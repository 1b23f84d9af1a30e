//! Configuration snapshots for build reproducibility.
//!
//! A snapshot captures the exact configuration a build or report ran with,
//! so results can be audited and reproduced later. Two runs with matching
//! snapshots compiled with the same settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::resolve::ConfigLocation;
use crate::Config;

/// A frozen snapshot of a loaded configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    /// When this snapshot was taken.
    pub timestamp: DateTime<Utc>,

    /// Hostname where the snapshot was taken.
    #[serde(default)]
    pub hostname: Option<String>,

    /// SHA-256 hash of the record's canonical JSON encoding.
    pub config_hash: String,

    /// Path the configuration was loaded from, if any.
    #[serde(default)]
    pub config_path: Option<String>,

    /// Where the configuration came from.
    pub config_source: String,

    /// Key configuration values for quick reference.
    pub summary: ConfigSummary,
}

/// Summary of key configuration values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSummary {
    /// Pinned compiler releases, in declaration order.
    pub compiler_versions: Vec<String>,

    /// Whether any compiler has the optimizer on.
    pub optimizer_enabled: bool,

    pub gas_reporting_enabled: bool,

    /// Display currency as it appears in the record.
    pub currency: String,

    pub coverage_enabled: bool,
}

impl ConfigSnapshot {
    /// Snapshot a loaded configuration.
    pub fn new(config: &Config, location: &ConfigLocation) -> Result<Self, serde_json::Error> {
        let canonical = serde_json::to_string(config)?;

        Ok(ConfigSnapshot {
            timestamp: Utc::now(),
            hostname: hostname::get()
                .ok()
                .map(|h| h.to_string_lossy().to_string()),
            config_hash: hash_content(&canonical),
            config_path: location.path.as_ref().map(|p| p.display().to_string()),
            config_source: location.source.to_string(),
            summary: ConfigSummary::from_config(config),
        })
    }

    /// Serialize snapshot to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether this snapshot captured the same configuration as another.
    pub fn matches(&self, other: &ConfigSnapshot) -> bool {
        self.config_hash == other.config_hash
    }

    /// Short identifier for this snapshot (first 12 chars of the hash).
    pub fn short_id(&self) -> &str {
        // A snapshot read from disk can hold any string in the hash field;
        // never slice mid-character.
        self.config_hash.get(..12).unwrap_or(&self.config_hash)
    }
}

impl ConfigSummary {
    /// Pull the summary fields out of a record.
    pub fn from_config(config: &Config) -> Self {
        ConfigSummary {
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
            currency: config.gas_reporter.currency.clone(),
            coverage_enabled: config.coverage.enabled,
        }
    }
}

/// Hash content with SHA-256 and return hex string.
fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
