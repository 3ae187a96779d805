//! Line scanner for the managed alias file
//!
//! Recognises two shapes:
//! - `alias name='body'` on a single line
//! - `function name() {` / `name() {` ... a line that is exactly `}`
//!
//! Everything else (config comment, comments, blank lines, arbitrary shell)
//! is skipped here and left for the serializer to carry through untouched.
//!
//! A function ends at the first standalone `}` line; there is no brace-depth
//! tracking, so a nested block closed on its own line ends the function early.
//! A function still open at end of input is dropped.

use super::{AliasEntry, EntryKind};

const ALIAS_PREFIX: &str = "alias ";
const FUNCTION_PREFIX: &str = "function ";
const FUNCTION_OPEN_SUFFIX: &str = "() {";
const FUNCTION_CLOSE: &str = "}";

/// Parse the whole file content into entries, in file order.
pub fn parse(content: &str) -> Vec<AliasEntry> {
    let mut entries = Vec::new();
    let mut open_function: Option<(String, Vec<&str>)> = None;

    for line in content.lines() {
        if let Some((name, mut body)) = open_function.take() {
            if line == FUNCTION_CLOSE {
                entries.push(AliasEntry::function(name, body.join("\n")));
            } else {
                body.push(line);
                open_function = Some((name, body));
            }
            continue;
        }

        if line.starts_with(ALIAS_PREFIX) {
            if let Some(entry) = parse_alias_line(line) {
                entries.push(entry);
            }
        } else if let Some(name) = function_name(line) {
            open_function = Some((name, Vec::new()));
        }
    }

    if let Some((name, body)) = open_function {
        tracing::debug!(
            "Dropping unterminated function '{}' ({} body lines)",
            name,
            body.len()
        );
    }

    entries
}

/// Parse a single `alias name=body` line.
///
/// Returns `None` when the line is not an alias line or has no `=`.
pub fn parse_alias_line(line: &str) -> Option<AliasEntry> {
    let rest = line.strip_prefix(ALIAS_PREFIX)?;
    let (name, body) = rest.split_once('=')?;
    Some(AliasEntry {
        name: name.trim().to_string(),
        body: strip_one_quote_layer(body.trim()).to_string(),
        kind: EntryKind::Alias,
    })
}

/// Name of the function opened by `line`, if it opens one.
fn function_name(line: &str) -> Option<String> {
    let trimmed = line.trim_end();
    if !line.starts_with(FUNCTION_PREFIX) && !trimmed.ends_with(FUNCTION_OPEN_SUFFIX) {
        return None;
    }

    let name = trimmed.strip_prefix(FUNCTION_PREFIX).unwrap_or(trimmed);
    let name = name.strip_suffix(FUNCTION_OPEN_SUFFIX).unwrap_or(name);
    Some(name.trim().to_string())
}

/// Remove one matching pair of surrounding `'` or `"`.
fn strip_one_quote_layer(value: &str) -> &str {
    for quote in ['\'', '"'] {
        if value.len() >= 2
            && let Some(inner) = value
                .strip_prefix(quote)
                .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
