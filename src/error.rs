use thiserror::Error;

pub type Result<T> = std::result::Result<T, AliasmanError>;

#[derive(Error, Debug)]
pub enum AliasmanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parsing error: {0}")]
    ConfigParse(#[from] config::ConfigError),

    #[error("Could not determine the home directory")]
    HomeDirNotFound,

    #[error("The '{0}' command is not available on your system")]
    ModelUnavailable(String),

    #[error("Model command failed: {0}")]
    ModelCommand(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("Interrupted by user")]
    Interrupted,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 通用错误类型，用于不适合其他分类的错误
    #[error("{0}")]
    Other(String),
}

impl From<inquire::InquireError> for AliasmanError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled => AliasmanError::UserCancelled,
            inquire::InquireError::OperationInterrupted => AliasmanError::Interrupted,
            other => AliasmanError::Prompt(other.to_string()),
        }
    }
}

impl AliasmanError {
    /// 获取错误的解决建议
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            AliasmanError::HomeDirNotFound => {
                Some("Set the HOME environment variable, or set paths.alias_file in ~/.config/aliasman/config.toml")
            }
            AliasmanError::ModelUnavailable(_) => Some(
                "Install the llm CLI (https://llm.datasette.io/en/stable/) or set llm.command in ~/.config/aliasman/config.toml",
            ),
            AliasmanError::ModelCommand(msg) if msg.contains("Unknown model") => {
                Some("Run 'aliasman model <name>' with a model listed by 'llm models'")
            }
            AliasmanError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Some("Run 'aliasman install' to create the alias file")
            }
            AliasmanError::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                Some("Check the permissions of the alias file and your shell startup file")
            }
            AliasmanError::ConfigParse(_) => {
                Some("Check the syntax of ~/.config/aliasman/config.toml")
            }
            _ => None,
        }
    }
}
