//! Shell integration: creates the alias file and hooks it into the shell
//! startup file through a tagged block.
//!
//! "Installed" only means the alias file exists and the shell startup file
//! can be read and is non-empty. The tagged block itself is never looked
//! for, so a startup file that lost the block still counts as installed.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::paths::AliasmanPaths;
use crate::constants::shell::{TAG_END, TAG_START};
use crate::constants::store::{DEFAULT_MODEL, RELOAD_ALIAS};
use crate::error::{AliasmanError, Result};
use crate::ui;

/// Facts behind the installed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallStatus {
    pub alias_file: PathBuf,
    pub alias_file_exists: bool,
    pub shell_config: Option<PathBuf>,
    pub shell_config_readable: bool,
}

impl InstallStatus {
    pub fn is_installed(&self) -> bool {
        self.alias_file_exists && self.shell_config_readable
    }
}

/// What [`install`] changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// The alias file did not exist and was created.
    pub created_alias_file: bool,
    /// Shell startup file that received the tagged block.
    pub shell_config: PathBuf,
}

/// Inspect the current installation.
pub fn install_status(paths: &AliasmanPaths) -> InstallStatus {
    let shell_config_readable = paths
        .shell_config
        .as_deref()
        .and_then(|path| fs::read(path).ok())
        .is_some_and(|content| !content.is_empty());

    InstallStatus {
        alias_file: paths.alias_file.clone(),
        alias_file_exists: paths.alias_file.exists(),
        shell_config: paths.shell_config.clone(),
        shell_config_readable,
    }
}

pub fn is_installed(paths: &AliasmanPaths) -> bool {
    install_status(paths).is_installed()
}

/// Content of a freshly created alias file.
pub fn initial_alias_file(alias_file: &Path) -> String {
    format!(
        "# {{ \"model\": \"{}\" }}\n# Aliasman managed aliases\n\n# Reload aliases\nalias {}='source {}'\n",
        DEFAULT_MODEL,
        RELOAD_ALIAS,
        alias_file.display()
    )
}

/// Tagged block appended to the shell startup file.
pub fn managed_block(alias_file: &Path) -> String {
    format!(
        "\n{}\nsource {}\n{}\n",
        TAG_START,
        alias_file.display(),
        TAG_END
    )
}

/// Create the alias file (if missing) and append the tagged block.
///
/// An existing alias file is left untouched. The shell startup file must
/// already exist; it is opened for append only.
pub fn install(paths: &AliasmanPaths) -> Result<InstallReport> {
    let created_alias_file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&paths.alias_file)
    {
        Ok(mut file) => {
            file.write_all(initial_alias_file(&paths.alias_file).as_bytes())?;
            tracing::debug!("Created alias file {}", paths.alias_file.display());
            true
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            tracing::debug!(
                "Alias file {} already exists, keeping it",
                paths.alias_file.display()
            );
            false
        }
        Err(e) => return Err(e.into()),
    };

    let shell_config = paths.shell_config.clone().ok_or_else(|| {
        AliasmanError::Other(
            "No shell startup file found (.bashrc, .zshrc or .bash_profile)".to_string(),
        )
    })?;

    let mut rc = OpenOptions::new().append(true).open(&shell_config)?;
    rc.write_all(managed_block(&paths.alias_file).as_bytes())?;
    tracing::debug!("Added managed block to {}", shell_config.display());

    Ok(InstallReport {
        created_alias_file,
        shell_config,
    })
}

/// Install when not installed; report failures without propagating them.
///
/// Returns whether an install was attempted.
pub fn ensure_installed(paths: &AliasmanPaths, colored: bool) -> bool {
    if is_installed(paths) {
        tracing::debug!("Already installed");
        return false;
    }

    match install(paths) {
        Ok(report) => {
            if report.created_alias_file {
                ui::success(
                    &format!("Created {}", paths.alias_file.display()),
                    colored,
                );
            }
            ui::success(
                &format!("Sourced aliases from {}", report.shell_config.display()),
                colored,
            );
        }
        Err(e) => {
            ui::error(&format!("Installation failed: {}", e), colored);
        }
    }
    true
}

/// Message shown on exit telling the user how to load new aliases.
pub fn reload_instructions(shell_config: Option<&Path>) -> String {
    let source_target = shell_config
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "~/.bashrc".to_string());
    format!(
        "To reload your aliases in the current shell, you can either:\n1. Run the command: source {}\n2. Or simply use the alias: {}",
        source_target, RELOAD_ALIAS
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{AliasEntry, AliasStore, StoreConfig};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn home_with_rc(rc_content: &str) -> (TempDir, AliasmanPaths) {
        let home = TempDir::new().unwrap();
        let rc = home.path().join(".bashrc");
        fs::write(&rc, rc_content).unwrap();
        let paths = AliasmanPaths {
            alias_file: home.path().join(".aliasman_aliases"),
            shell_config: Some(rc),
        };
        (home, paths)
    }

    #[test]
    fn test_not_installed_without_alias_file() {
        let (_home, paths) = home_with_rc("export X=1\n");
        let status = install_status(&paths);
        assert!(!status.alias_file_exists);
        assert!(status.shell_config_readable);
        assert!(!status.is_installed());
    }

    #[test]
    fn test_install_creates_file_and_block() {
        let (_home, paths) = home_with_rc("export X=1\n");
        let report = install(&paths).unwrap();
        assert!(report.created_alias_file);

        let rc = fs::read_to_string(paths.shell_config.as_ref().unwrap()).unwrap();
        assert_eq!(
            rc,
            format!(
                "export X=1\n\n# START ALIASMAN MANAGED BLOCK\nsource {}\n# END ALIASMAN MANAGED BLOCK\n",
                paths.alias_file.display()
            )
        );
        assert!(is_installed(&paths));
    }

    #[test]
    fn test_initial_file_parses() {
        let (_home, paths) = home_with_rc("x\n");
        install(&paths).unwrap();

        let store = AliasStore::new(&paths.alias_file);
        assert_eq!(store.read_config().unwrap(), StoreConfig::new("llama3:8b"));
        assert_eq!(
            store.entries().unwrap(),
            vec![AliasEntry::alias(
                "aliasman-reload",
                format!("source {}", paths.alias_file.display())
            )]
        );
    }

    #[test]
    fn test_ensure_installed_is_idempotent() {
        let (_home, paths) = home_with_rc("x\n");
        assert!(ensure_installed(&paths, false));
        assert!(!ensure_installed(&paths, false));

        let rc = fs::read_to_string(paths.shell_config.as_ref().unwrap()).unwrap();
        assert_eq!(rc.matches(TAG_START).count(), 1);
    }

    #[test]
    fn test_install_keeps_existing_alias_file() {
        let (_home, paths) = home_with_rc("x\n");
        fs::write(&paths.alias_file, "alias mine='echo mine'\n").unwrap();

        let report = install(&paths).unwrap();
        assert!(!report.created_alias_file);
        assert_eq!(
            fs::read_to_string(&paths.alias_file).unwrap(),
            "alias mine='echo mine'\n"
        );
    }

    #[test]
    fn test_install_without_shell_config_fails_after_creating_file() {
        let home = TempDir::new().unwrap();
        let paths = AliasmanPaths {
            alias_file: home.path().join(".aliasman_aliases"),
            shell_config: None,
        };
        assert!(install(&paths).is_err());
        assert!(paths.alias_file.exists());
        assert!(!is_installed(&paths));
        // 报告错误但不 panic
        assert!(ensure_installed(&paths, false));
    }

    #[test]
    fn test_install_never_creates_shell_config() {
        let home = TempDir::new().unwrap();
        let rc = home.path().join(".zshrc");
        let paths = AliasmanPaths {
            alias_file: home.path().join(".aliasman_aliases"),
            shell_config: Some(rc.clone()),
        };
        assert!(install(&paths).is_err());
        assert!(!rc.exists());
    }

    #[test]
    fn test_empty_shell_config_counts_as_not_installed() {
        let (_home, paths) = home_with_rc("");
        fs::write(&paths.alias_file, "").unwrap();
        assert!(!is_installed(&paths));
    }

    #[test]
    fn test_reload_instructions_mentions_both_options() {
        let text = reload_instructions(Some(Path::new("/home/me/.zshrc")));
        assert!(text.contains("source /home/me/.zshrc"));
        assert!(text.contains("aliasman-reload"));
    }
}
