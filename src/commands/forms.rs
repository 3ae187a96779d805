//! Typed form input and its validation.
//!
//! The CLI subcommands and the interactive screens both build these forms;
//! validation lives only here.

use crate::error::{AliasmanError, Result};
use crate::store::AliasEntry;

/// Characters allowed in alias and function names besides ASCII alphanumerics.
const NAME_PUNCTUATION: &[char] = &['_', '-', '.', ':', '+', '@'];

/// Input for a new alias.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasForm {
    pub name: String,
    pub command: String,
}

impl AliasForm {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }

    /// Validate and turn into an alias entry.
    ///
    /// The command ends up inside single quotes, so it may not contain one.
    pub fn into_entry(self) -> Result<AliasEntry> {
        let name = validate_name(&self.name)?;
        let command = self.command.trim();
        if command.is_empty() {
            return Err(AliasmanError::InvalidInput(
                "Command cannot be empty".to_string(),
            ));
        }
        if command.contains('\'') {
            return Err(AliasmanError::InvalidInput(
                "Command cannot contain single quotes; use a function instead".to_string(),
            ));
        }
        Ok(AliasEntry::alias(name, command))
    }
}

/// Input for a new function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionForm {
    pub name: String,
    pub body: String,
}

impl FunctionForm {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    /// Validate and turn into a function entry.
    ///
    /// A body line that is exactly `}` would end the function early when the
    /// file is read back, so it is rejected.
    pub fn into_entry(self) -> Result<AliasEntry> {
        let name = validate_name(&self.name)?;
        let body = self.body.trim_end_matches(['\n', '\r']);
        if body.trim().is_empty() {
            return Err(AliasmanError::InvalidInput(
                "Function body cannot be empty".to_string(),
            ));
        }
        if body.lines().any(|line| line == "}") {
            return Err(AliasmanError::InvalidInput(
                "Function body cannot contain a line with only '}'; indent it".to_string(),
            ));
        }
        Ok(AliasEntry::function(name, body))
    }
}

/// Input for the model setting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelForm {
    pub model: String,
}

impl ModelForm {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }

    /// Validated model identifier.
    pub fn into_model(self) -> Result<String> {
        let model = self.model.trim();
        if model.is_empty() {
            return Err(AliasmanError::InvalidInput(
                "Model name cannot be empty".to_string(),
            ));
        }
        if model.chars().any(char::is_whitespace) {
            return Err(AliasmanError::InvalidInput(format!(
                "Model name '{}' cannot contain whitespace",
                model
            )));
        }
        Ok(model.to_string())
    }
}

fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AliasmanError::InvalidInput(
            "Name cannot be empty".to_string(),
        ));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !NAME_PUNCTUATION.contains(c))
    {
        return Err(AliasmanError::InvalidInput(format!(
            "Invalid character '{}' in name '{}'",
            bad, name
        )));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_alias_form_valid() {
        let entry = AliasForm::new(" gs ", " git status ").into_entry().unwrap();
        assert_eq!(entry, AliasEntry::alias("gs", "git status"));
    }

    #[test]
    fn test_alias_form_empty_fields() {
        assert!(AliasForm::new("", "ls").into_entry().is_err());
        assert!(AliasForm::new("ll", "   ").into_entry().is_err());
    }

    #[test]
    fn test_alias_form_rejects_single_quote() {
        let err = AliasForm::new("say", "echo 'hi'").into_entry().unwrap_err();
        assert!(matches!(err, AliasmanError::InvalidInput(_)));
    }

    #[test]
    fn test_name_rules() {
        assert!(validate_name("aliasman-reload").is_ok());
        assert!(validate_name("git.co").is_ok());
        assert!(validate_name("my alias").is_err());
        assert!(validate_name("a=b").is_err());
        assert!(validate_name("f()").is_err());
    }

    #[test]
    fn test_function_form_valid() {
        let entry = FunctionForm::new("mkcd", "  mkdir -p \"$1\"\n  cd \"$1\"\n\n")
            .into_entry()
            .unwrap();
        assert_eq!(
            entry,
            AliasEntry::function("mkcd", "  mkdir -p \"$1\"\n  cd \"$1\"")
        );
    }

    #[test]
    fn test_function_form_rejects_bare_closing_brace() {
        let body = "  if true; then\n    echo hi\n  fi\n}\necho after";
        assert!(FunctionForm::new("f", body).into_entry().is_err());
        assert!(FunctionForm::new("f", "  { echo a; }").into_entry().is_ok());
    }

    #[test]
    fn test_function_form_empty_body() {
        assert!(FunctionForm::new("f", "\n \n").into_entry().is_err());
    }

    #[test]
    fn test_model_form() {
        assert_eq!(ModelForm::new(" gpt-4o ").into_model().unwrap(), "gpt-4o");
        assert!(ModelForm::new("").into_model().is_err());
        assert!(ModelForm::new("two words").into_model().is_err());
    }
}
