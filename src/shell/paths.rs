//! Location of the alias file and the shell startup file.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::config::PathsConfig;
use crate::constants::shell::SHELL_CONFIG_CANDIDATES;
use crate::constants::store::ALIAS_FILE_NAME;
use crate::error::{AliasmanError, Result};

/// Resolved file locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasmanPaths {
    /// Managed alias file.
    pub alias_file: PathBuf,
    /// Shell startup file, `None` when no candidate exists in the home directory.
    pub shell_config: Option<PathBuf>,
}

impl AliasmanPaths {
    /// Resolve locations against the current user's home directory.
    ///
    /// Fails with [`AliasmanError::HomeDirNotFound`] when the home directory
    /// cannot be determined.
    pub fn resolve(overrides: &PathsConfig) -> Result<Self> {
        let home = BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .ok_or(AliasmanError::HomeDirNotFound)?;
        Ok(Self::resolve_in(&home, overrides))
    }

    /// Resolve locations against `home`.
    pub fn resolve_in(home: &Path, overrides: &PathsConfig) -> Self {
        let alias_file = overrides
            .alias_file
            .clone()
            .unwrap_or_else(|| home.join(ALIAS_FILE_NAME));
        let shell_config = overrides
            .shell_config
            .clone()
            .or_else(|| detect_shell_config(home));

        tracing::debug!(
            "Alias file: {}, shell config: {:?}",
            alias_file.display(),
            shell_config
        );

        Self {
            alias_file,
            shell_config,
        }
    }
}

/// First existing shell startup file in `home`, by priority.
pub fn detect_shell_config(home: &Path) -> Option<PathBuf> {
    SHELL_CONFIG_CANDIDATES
        .iter()
        .map(|name| home.join(name))
        .find(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_detect_none() {
        let home = TempDir::new().unwrap();
        assert_eq!(detect_shell_config(home.path()), None);
    }

    #[test]
    fn test_detect_priority_bashrc_first() {
        let home = TempDir::new().unwrap();
        fs::write(home.path().join(".bash_profile"), "").unwrap();
        fs::write(home.path().join(".zshrc"), "").unwrap();
        fs::write(home.path().join(".bashrc"), "").unwrap();
        assert_eq!(
            detect_shell_config(home.path()),
            Some(home.path().join(".bashrc"))
        );
    }

    #[test]
    fn test_detect_priority_zshrc_before_profile() {
        let home = TempDir::new().unwrap();
        fs::write(home.path().join(".bash_profile"), "").unwrap();
        fs::write(home.path().join(".zshrc"), "").unwrap();
        assert_eq!(
            detect_shell_config(home.path()),
            Some(home.path().join(".zshrc"))
        );
    }

    #[test]
    fn test_resolve_defaults() {
        let home = TempDir::new().unwrap();
        fs::write(home.path().join(".zshrc"), "").unwrap();

        let paths = AliasmanPaths::resolve_in(home.path(), &PathsConfig::default());
        assert_eq!(paths.alias_file, home.path().join(".aliasman_aliases"));
        assert_eq!(paths.shell_config, Some(home.path().join(".zshrc")));
    }

    #[test]
    fn test_resolve_overrides_win() {
        let home = TempDir::new().unwrap();
        fs::write(home.path().join(".bashrc"), "").unwrap();

        let overrides = PathsConfig {
            alias_file: Some(PathBuf::from("/tmp/custom_aliases")),
            shell_config: Some(PathBuf::from("/tmp/custom_rc")),
        };
        let paths = AliasmanPaths::resolve_in(home.path(), &overrides);
        assert_eq!(paths.alias_file, PathBuf::from("/tmp/custom_aliases"));
        assert_eq!(paths.shell_config, Some(PathBuf::from("/tmp/custom_rc")));
    }
}
