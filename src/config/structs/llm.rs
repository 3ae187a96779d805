//! Model CLI configuration.

use serde::{Deserialize, Serialize};

use crate::constants::llm::{DEFAULT_COMMAND, INSTALL_URL};
use crate::error::{AliasmanError, Result};

/// Model CLI configuration.
///
/// # Fields
/// - `command`: executable invoked for generation (default: `"llm"`)
/// - `install_url`: link shown when the executable is missing
///
/// # Example
/// ```toml
/// [llm]
/// command = "/opt/llm/bin/llm"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LLMConfig {
    /// Executable name or path of the model CLI.
    #[serde(default = "default_command")]
    pub command: String,

    /// Install guide for the model CLI.
    #[serde(default = "default_install_url")]
    pub install_url: String,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            install_url: default_install_url(),
        }
    }
}

impl LLMConfig {
    /// Validates model CLI configuration.
    pub fn validate(&self) -> Result<()> {
        if self.command.trim().is_empty() {
            return Err(AliasmanError::Config("llm.command cannot be empty".into()));
        }
        Ok(())
    }
}

fn default_command() -> String {
    DEFAULT_COMMAND.to_string()
}

fn default_install_url() -> String {
    INSTALL_URL.to_string()
}
