use crate::error::{AliasmanError, Result};

/// Template shown when composing a new function body.
pub const FUNCTION_TEMPLATE: &str =
    "# Write the function body below. This line is removed.\n";

/// Call the system editor to edit text
///
/// Use the `edit` crate to automatically select editors by priority:
/// $VISUAL > $EDITOR > Platform default list (nano/vim/vi/emacs/...)
///
/// # Returns
/// * `Ok(String)` - edited content
/// * `Err(AliasmanError::UserCancelled)` - The user cleared the content
/// * `Err(_)` - other errors
pub fn edit_text(initial_content: &str) -> Result<String> {
    let edited = edit::edit(initial_content)?;

    if edited.trim().is_empty() {
        return Err(AliasmanError::UserCancelled);
    }

    Ok(edited)
}

/// Compose a function body in the editor.
///
/// The template line and trailing blank lines are stripped; the user's own
/// comments are kept. An empty result counts as cancellation.
pub fn edit_function_body(initial_body: &str) -> Result<String> {
    let edited = edit_text(&format!("{}{}", FUNCTION_TEMPLATE, initial_body))?;
    let body = strip_template(&edited);
    if body.trim().is_empty() {
        return Err(AliasmanError::UserCancelled);
    }
    Ok(body)
}

fn strip_template(text: &str) -> String {
    let template = FUNCTION_TEMPLATE.trim_end();
    text.lines()
        .filter(|line| line.trim_end() != template)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}
