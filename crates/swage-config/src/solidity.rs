//! Compiler selection and per-compiler settings.
//!
//! A `solidity` declaration comes in three shapes, all normalized to a list
//! of compilers:
//!
//! ```toml
//! solidity = "0.8.17"                 # shorthand: pin one release
//! ```
//!
//! ```toml
//! [solidity]                          # one compiler with settings
//! version = "0.8.17"
//! [solidity.optimizer]
//! enabled = true
//! runs = 1000
//! ```
//!
//! ```toml
//! [[solidity.compilers]]              # several releases side by side
//! version = "0.7.6"
//! [[solidity.compilers]]
//! version = "0.8.17"
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compiler section of the configuration, normalized to a compiler list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SolidityDecl")]
pub struct SolidityConfig {
    pub compilers: Vec<SolcConfig>,
}

impl Default for SolidityConfig {
    fn default() -> Self {
        Self {
            compilers: vec![SolcConfig::default()],
        }
    }
}

/// Accepted declaration shapes. Order matters: a table carrying `compilers`
/// must match before the single-compiler shape, whose fields all default.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SolidityDecl {
    Version(String),
    Multi { compilers: Vec<SolcConfig> },
    Single(SolcConfig),
}

impl From<SolidityDecl> for SolidityConfig {
    fn from(decl: SolidityDecl) -> Self {
        match decl {
            SolidityDecl::Version(version) => SolidityConfig {
                compilers: vec![SolcConfig {
                    version,
                    ..SolcConfig::default()
                }],
            },
            SolidityDecl::Multi { compilers } => SolidityConfig { compilers },
            SolidityDecl::Single(compiler) => SolidityConfig {
                compilers: vec![compiler],
            },
        }
    }
}

/// Settings for one compiler release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolcConfig {
    /// Release identifier, kept as declared until validation.
    pub version: String,

    pub optimizer: OptimizerSettings,

    /// Target hard fork; `None` means the compiler's own default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evm_version: Option<EvmVersion>,
}

impl Default for SolcConfig {
    fn default() -> Self {
        Self {
            version: crate::DEFAULT_SOLC_VERSION.to_string(),
            optimizer: OptimizerSettings::default(),
            evm_version: None,
        }
    }
}

/// Bytecode optimizer settings, matching the compiler's own defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerSettings {
    pub enabled: bool,

    /// Expected number of times each opcode runs over the contract lifetime.
    pub runs: u32,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            runs: 200,
        }
    }
}

/// EVM hard-fork targets the compiler can emit bytecode for, oldest first.
/// Wire form matches the compiler's identifiers (`tangerineWhistle` etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EvmVersion {
    Homestead,
    TangerineWhistle,
    SpuriousDragon,
    Byzantium,
    Constantinople,
    Petersburg,
    Istanbul,
    Berlin,
    London,
    Paris,
    Shanghai,
    Cancun,
    Prague,
}

impl EvmVersion {
    /// All targets, oldest first.
    pub const ALL: &'static [EvmVersion] = &[
        EvmVersion::Homestead,
        EvmVersion::TangerineWhistle,
        EvmVersion::SpuriousDragon,
        EvmVersion::Byzantium,
        EvmVersion::Constantinople,
        EvmVersion::Petersburg,
        EvmVersion::Istanbul,
        EvmVersion::Berlin,
        EvmVersion::London,
        EvmVersion::Paris,
        EvmVersion::Shanghai,
        EvmVersion::Cancun,
        EvmVersion::Prague,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EvmVersion::Homestead => "homestead",
            EvmVersion::TangerineWhistle => "tangerineWhistle",
            EvmVersion::SpuriousDragon => "spuriousDragon",
            EvmVersion::Byzantium => "byzantium",
            EvmVersion::Constantinople => "constantinople",
            EvmVersion::Petersburg => "petersburg",
            EvmVersion::Istanbul => "istanbul",
            EvmVersion::Berlin => "berlin",
            EvmVersion::London => "london",
            EvmVersion::Paris => "paris",
            EvmVersion::Shanghai => "shanghai",
            EvmVersion::Cancun => "cancun",
            EvmVersion::Prague => "prague",
        }
    }

    /// Parse a compiler identifier. Exact match; the compiler is
    /// case-sensitive about these.
    pub fn parse(s: &str) -> Option<EvmVersion> {
        EvmVersion::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

impl fmt::Display for EvmVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
