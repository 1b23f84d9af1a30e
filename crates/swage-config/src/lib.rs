//! Swage project configuration loading and validation.
//!
//! This crate provides:
//! - Typed Rust structs for `swage.toml` declarations
//! - Config resolution (explicit → env → project file → XDG → defaults)
//! - Eager semantic validation with stable error codes
//! - Config snapshots for build reproducibility
//! - Presets for common build scenarios

pub mod config;
pub mod coverage;
pub mod currency;
pub mod paths;
pub mod preset;
pub mod reporter;
pub mod resolve;
pub mod snapshot;
pub mod solidity;
pub mod validate;
pub mod version;

pub use config::Config;
pub use resolve::{load_config, resolve_config, ConfigLocation, ConfigSource};
pub use snapshot::ConfigSnapshot;
pub use validate::{validate_config, ConfigError, ConfigResult};
pub use version::SolcVersion;

/// Name of the project declaration file.
pub const CONFIG_FILE_NAME: &str = "swage.toml";

/// Compiler release used when a declaration does not pin one.
pub const DEFAULT_SOLC_VERSION: &str = "0.8.17";
