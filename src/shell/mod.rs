//! Shell integration management.
//!
//! Locates the alias file and the shell startup file, and installs the
//! tagged `source` block that loads the aliases into new shells.

pub mod installer;
pub mod paths;

pub use installer::{
    InstallReport, InstallStatus, ensure_installed, install, install_status, is_installed,
    reload_instructions,
};
pub use paths::{AliasmanPaths, detect_shell_config};
