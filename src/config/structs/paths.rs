//! File location overrides.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AliasmanError, Result};

/// File location overrides.
///
/// Unset fields fall back to `~/.aliasman_aliases` and the first existing
/// shell startup file in the home directory.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Managed alias file.
    #[serde(default)]
    pub alias_file: Option<PathBuf>,

    /// Shell startup file that sources the alias file.
    #[serde(default)]
    pub shell_config: Option<PathBuf>,
}

impl PathsConfig {
    /// Validates path overrides.
    pub fn validate(&self) -> Result<()> {
        for (key, path) in [
            ("paths.alias_file", &self.alias_file),
            ("paths.shell_config", &self.shell_config),
        ] {
            if let Some(path) = path
                && path.as_os_str().is_empty()
            {
                return Err(AliasmanError::Config(format!("{} cannot be empty", key)));
            }
        }
        Ok(())
    }
}
