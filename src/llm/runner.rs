use std::process::{Command, Output};

use super::ModelRunner;
use crate::error::{AliasmanError, Result};

/// Runs the model CLI as a blocking subprocess.
///
/// - generation: `<command> -m <model> <prompt>`
/// - listing: `<command> models`
#[derive(Debug, Clone)]
pub struct LlmCli {
    command: String,
}

impl LlmCli {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        tracing::debug!("Running {} {:?}", self.command, args);
        let output = Command::new(&self.command).args(args).output()?;
        let text = combined_output(&output);

        if output.status.success() {
            Ok(text)
        } else {
            tracing::debug!("{} exited with {}", self.command, output.status);
            Err(AliasmanError::ModelCommand(text.trim().to_string()))
        }
    }
}

impl ModelRunner for LlmCli {
    fn command(&self) -> String {
        self.command.clone()
    }

    fn is_available(&self) -> bool {
        which::which(&self.command).is_ok()
    }

    fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        self.run(&["-m", model, prompt])
    }

    fn list_models(&self) -> Result<String> {
        self.run(&["models"])
    }
}

/// stdout followed by stderr, lossily decoded.
fn combined_output(output: &Output) -> String {
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    text
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_generate_passes_model_and_prompt() {
        let cli = LlmCli::new("echo");
        let out = cli.generate("llama3:8b", "make alias").unwrap();
        assert_eq!(out, "-m llama3:8b make alias\n");
    }

    #[test]
    fn test_list_models_argument() {
        assert_eq!(LlmCli::new("echo").list_models().unwrap(), "models\n");
    }

    #[test]
    fn test_non_zero_exit_is_model_command_error() {
        let err = LlmCli::new("false").generate("m", "x").unwrap_err();
        assert!(matches!(err, AliasmanError::ModelCommand(_)));
    }

    #[test]
    fn test_missing_command_is_unavailable() {
        let cli = LlmCli::new("aliasman-definitely-missing-command");
        assert!(!cli.is_available());
        assert_eq!(cli.command(), "aliasman-definitely-missing-command");
        assert!(matches!(cli.list_models(), Err(AliasmanError::Io(_))));
    }

    #[test]
    fn test_path_lookup() {
        assert!(LlmCli::new("sh").is_available());
    }
}
