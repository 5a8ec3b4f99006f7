//! Curve constant table loader.

use std::path::Path;

use arena_core::CurveConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for curve constant tables from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a curve table from a TOML file.
    ///
    /// Keys missing from the file keep their stock values. The resulting table is
    /// validated before it is returned.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing a CurveConfig
    pub fn load(path: &Path) -> LoadResult<CurveConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::debug!("ConfigLoader: loaded curve table from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a curve table from TOML text.
    pub fn parse(content: &str) -> LoadResult<CurveConfig> {
        let config: CurveConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse curve config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid curve config [{}]: {}", e.error_code(), e))?;
        Ok(config)
    }
}
