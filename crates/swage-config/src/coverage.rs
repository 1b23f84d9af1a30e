//! Coverage instrumentation options.

use serde::{Deserialize, Serialize};

/// Coverage section of the configuration.
///
/// The instrumenter rewrites contracts before compiling, so it only works
/// with the optimizer off; validation warns when both are enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageConfig {
    pub enabled: bool,

    /// Source paths, relative to the sources directory, left uninstrumented.
    pub skip_files: Vec<String>,

    pub measure_statement_coverage: bool,

    pub measure_function_coverage: bool,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            skip_files: Vec::new(),
            measure_statement_coverage: true,
            measure_function_coverage: true,
        }
    }
}
