//! Top-level application configuration and UI settings.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::llm::LLMConfig;
use super::paths::PathsConfig;

/// Application configuration.
///
/// Settings of the `aliasman` program itself. The model used for generation
/// is not stored here: it lives in the config comment of the alias file (see
/// [`StoreConfig`](crate::store::StoreConfig)).
///
/// Effective configuration is merged from multiple sources (low to high):
/// 1. Rust defaults (`Default` + `serde(default)`)
/// 2. User-level config file (platform-specific config directory)
/// 3. `ALIASMAN__*` environment variables
///
/// # Configuration File Locations
/// - Linux: `~/.config/aliasman/config.toml`
/// - macOS: `~/Library/Application Support/aliasman/config.toml`
/// - Windows: `%APPDATA%\aliasman\config\config.toml`
///
/// # Example
/// ```toml
/// [ui]
/// colored = true
///
/// [llm]
/// command = "llm"
///
/// [paths]
/// alias_file = "/home/me/.aliasman_aliases"
/// shell_config = "/home/me/.zshrc"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Terminal UI behavior.
    #[serde(default)]
    pub ui: UIConfig,

    /// External model CLI.
    #[serde(default)]
    pub llm: LLMConfig,

    /// File location overrides.
    #[serde(default)]
    pub paths: PathsConfig,
}

impl AppConfig {
    /// Validates configuration consistency.
    pub fn validate(&self) -> Result<()> {
        self.llm.validate()?;
        self.paths.validate()?;
        Ok(())
    }
}

/// UI configuration.
///
/// # Example
/// ```toml
/// [ui]
/// colored = false
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UIConfig {
    /// Whether to enable color output.
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self { colored: true }
    }
}

fn default_true() -> bool {
    true
}
