//! Language model integration.
//!
//! Generation shells out to an external model CLI (`llm` by default) and
//! scans its output for a fenced code block holding one definition.

/// Definition extraction from model output.
pub mod extract;
/// Prompt construction.
pub mod prompt;
/// Subprocess-backed [`ModelRunner`].
pub mod runner;

pub use extract::extract_entry;
pub use prompt::build_prompt;
pub use runner::LlmCli;

use crate::commands::forms::{AliasForm, FunctionForm};
use crate::error::{AliasmanError, Result};
use crate::store::{AliasEntry, EntryKind};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Interface to a language model command-line tool.
///
/// Production implementation: [`LlmCli`]. Tests use `MockModelRunner`
/// (enabled by the `test-utils` feature).
///
/// # Example
/// ```no_run
/// use aliasman::llm::{LlmCli, ModelRunner};
///
/// # fn main() -> aliasman::error::Result<()> {
/// let cli = LlmCli::new("llm");
/// if cli.is_available() {
///     println!("{}", cli.list_models()?);
/// }
/// # Ok(())
/// # }
/// ```
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ModelRunner {
    /// Command name, used in messages.
    fn command(&self) -> String;

    /// Whether the command can be found on `PATH`.
    fn is_available(&self) -> bool;

    /// Run one prompt against `model`.
    ///
    /// # Returns
    /// - `Ok(output)` - stdout followed by stderr
    /// - `Err(AliasmanError::ModelCommand)` - non-zero exit, carries the output
    /// - `Err(AliasmanError::Io)` - the process could not be spawned
    fn generate(&self, model: &str, prompt: &str) -> Result<String>;

    /// Raw listing of installed models.
    fn list_models(&self) -> Result<String>;
}

/// Outcome of one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// A definition was found in the output.
    Entry(AliasEntry),
    /// Nothing extractable; the full output for display.
    Raw(String),
}

/// Ask `model` for a definition matching `description`.
///
/// Malformed output is not an error: it comes back as [`Generation::Raw`].
/// So does a definition that fails the same validation as manual input,
/// since writing it would break the sourced alias file.
pub fn generate(
    runner: &dyn ModelRunner,
    model: &str,
    description: &str,
) -> Result<Generation> {
    let description = description.trim();
    if description.is_empty() {
        return Err(AliasmanError::InvalidInput(
            "Description cannot be empty".to_string(),
        ));
    }
    if !runner.is_available() {
        return Err(AliasmanError::ModelUnavailable(runner.command()));
    }

    let prompt = build_prompt(description);
    tracing::debug!("Prompt for model {}: {}", model, prompt);

    let output = runner.generate(model, &prompt)?;
    tracing::debug!("Model output ({} bytes)", output.len());

    let Some(entry) = extract_entry(&output) else {
        tracing::debug!("No definition found in model output");
        return Ok(Generation::Raw(output));
    };

    match validate_entry(entry) {
        Ok(entry) => {
            tracing::debug!("Extracted {} '{}'", entry.kind, entry.name);
            Ok(Generation::Entry(entry))
        }
        Err(e) => {
            tracing::debug!("Rejected extracted definition: {}", e);
            Ok(Generation::Raw(output))
        }
    }
}

/// Run an extracted entry through the form matching its kind.
fn validate_entry(entry: AliasEntry) -> Result<AliasEntry> {
    match entry.kind {
        EntryKind::Alias => AliasForm::new(entry.name, entry.body).into_entry(),
        EntryKind::Function => FunctionForm::new(entry.name, entry.body).into_entry(),
    }
}
