//! Matrix configuration loader.

use std::path::Path;

use matrix_core::MatrixConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for matrix configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`MatrixConfig::default`].
    pub fn load(path: &Path) -> LoadResult<MatrixConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<MatrixConfig> {
        let config: MatrixConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        tracing::debug!(protected_slots = config.protected_slots, "loaded matrix config");

        Ok(config)
    }
}
