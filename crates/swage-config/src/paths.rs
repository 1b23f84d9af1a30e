//! Project directory layout.

use serde::{Deserialize, Serialize};

/// Directories the toolchain reads and writes, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectPaths {
    /// Contract sources.
    pub sources: String,

    /// Test suites.
    pub tests: String,

    /// Compilation cache.
    pub cache: String,

    /// Compiled artifacts (ABIs, bytecode).
    pub artifacts: String,
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self {
            sources: "contracts".to_string(),
            tests: "test".to_string(),
            cache: "cache".to_string(),
            artifacts: "artifacts".to_string(),
        }
    }
}
