//! 全局常量定义

/// Alias store constants
pub mod store {
    /// Managed alias file name, relative to the home directory
    pub const ALIAS_FILE_NAME: &str = ".aliasman_aliases";

    /// Model used when the file carries no usable config line
    pub const DEFAULT_MODEL: &str = "llama3:8b";

    /// Name of the bootstrap alias that re-sources the alias file
    pub const RELOAD_ALIAS: &str = "aliasman-reload";
}

/// Shell integration constants
pub mod shell {
    /// Opening marker of the managed block in the shell startup file
    pub const TAG_START: &str = "# START ALIASMAN MANAGED BLOCK";

    /// Closing marker of the managed block
    pub const TAG_END: &str = "# END ALIASMAN MANAGED BLOCK";

    /// Shell startup files, in detection priority order
    pub const SHELL_CONFIG_CANDIDATES: &[&str] = &[".bashrc", ".zshrc", ".bash_profile"];
}

/// LLM CLI constants
pub mod llm {
    /// Default model CLI executable
    pub const DEFAULT_COMMAND: &str = "llm";

    /// Install guide shown when the model CLI is missing
    pub const INSTALL_URL: &str = "https://llm.datasette.io/en/stable/";
}
