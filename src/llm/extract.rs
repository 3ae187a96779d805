//! Pull an alias or function definition out of model output.
//!
//! Contract:
//! - A fenced block opens on a line that starts with ```` ``` ```` followed by
//!   nothing or a language tag (`bash`, `sh`, `zsh`, `shell`, any case).
//! - It closes on the next line that is exactly ```` ``` ```` (surrounding
//!   whitespace ignored).
//! - A block qualifies when its content parses to exactly one entry. Alias
//!   bodies must be single-quoted in the block (`alias name='cmd'`).
//! - The first qualifying block wins; anything else yields `None` and the
//!   caller shows the raw text.

use crate::store::{AliasEntry, EntryKind, parse, parser::parse_alias_line};

const FENCE: &str = "```";
const LANGUAGE_TAGS: &[&str] = &["", "bash", "sh", "zsh", "shell"];

/// Extract the definition from model output.
pub fn extract_entry(output: &str) -> Option<AliasEntry> {
    fenced_blocks(output).into_iter().find_map(|block| {
        let entry = entry_from_block(&block);
        if entry.is_none() {
            tracing::debug!("Skipping fenced block without a definition: {:?}", block);
        }
        entry
    })
}

/// Contents of every closed fenced block with an accepted language tag.
///
/// Blocks with another tag are skipped up to their closing fence.
pub fn fenced_blocks(output: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut state = Fence::Outside;

    for line in output.lines() {
        let trimmed = line.trim();
        state = match state {
            Fence::Outside => match trimmed.strip_prefix(FENCE) {
                Some(tag) if is_accepted_tag(tag) => Fence::Collecting(Vec::new()),
                Some(_) => Fence::Skipping,
                None => Fence::Outside,
            },
            Fence::Skipping if trimmed == FENCE => Fence::Outside,
            Fence::Skipping => Fence::Skipping,
            Fence::Collecting(lines) if trimmed == FENCE => {
                blocks.push(lines.join("\n"));
                Fence::Outside
            }
            Fence::Collecting(mut lines) => {
                lines.push(line);
                Fence::Collecting(lines)
            }
        };
    }

    blocks
}

enum Fence<'a> {
    Outside,
    Skipping,
    Collecting(Vec<&'a str>),
}

fn is_accepted_tag(tag: &str) -> bool {
    let tag = tag.trim().to_ascii_lowercase();
    LANGUAGE_TAGS.contains(&tag.as_str())
}

fn entry_from_block(block: &str) -> Option<AliasEntry> {
    let mut entries = parse(block);
    if entries.len() != 1 {
        return None;
    }
    let entry = entries.remove(0);

    if entry.kind == EntryKind::Alias && !is_single_quoted_alias(block, &entry) {
        return None;
    }
    Some(entry)
}

fn is_single_quoted_alias(block: &str, entry: &AliasEntry) -> bool {
    block.lines().any(|line| {
        let (_, value) = line.split_once('=').unwrap_or_default();
        let value = value.trim();
        parse_alias_line(line).as_ref() == Some(entry)
            && value.len() >= 2
            && value.starts_with('\'')
            && value.ends_with('\'')
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_bash_alias() {
        let output = "```bash\nalias ll='ls -la'\n```";
        assert_eq!(extract_entry(output), Some(AliasEntry::alias("ll", "ls -la")));
    }

    #[test]
    fn test_extract_untagged_block_with_chatter() {
        let output = "Sure! Here is your alias:\n\n```\nalias gs='git status'\n```\n\nAdd it to your shell.";
        assert_eq!(
            extract_entry(output),
            Some(AliasEntry::alias("gs", "git status"))
        );
    }

    #[test]
    fn test_extract_function_block() {
        let output = "```bash\nfunction mkcd() {\n  mkdir -p \"$1\"\n  cd \"$1\"\n}\n```\n";
        assert_eq!(
            extract_entry(output),
            Some(AliasEntry::function("mkcd", "  mkdir -p \"$1\"\n  cd \"$1\""))
        );
    }

    #[test]
    fn test_extract_posix_function_block() {
        let output = "```sh\nbackup() {\n  cp \"$1\" \"$1.bak\"\n}\n```";
        assert_eq!(
            extract_entry(output),
            Some(AliasEntry::function("backup", "  cp \"$1\" \"$1.bak\""))
        );
    }

    #[test]
    fn test_extract_no_block_returns_none() {
        assert_eq!(extract_entry("alias ll='ls -la'"), None);
    }

    #[test]
    fn test_extract_unclosed_block_returns_none() {
        assert_eq!(extract_entry("```bash\nalias ll='ls -la'\n"), None);
    }

    #[test]
    fn test_extract_other_language_ignored() {
        assert_eq!(extract_entry("```python\nalias ll='ls -la'\n```"), None);
    }

    #[test]
    fn test_extract_double_quoted_alias_rejected() {
        assert_eq!(extract_entry("```bash\nalias ll=\"ls -la\"\n```"), None);
    }

    #[test]
    fn test_extract_multiple_definitions_rejected() {
        let output = "```bash\nalias a='1'\nalias b='2'\n```";
        assert_eq!(extract_entry(output), None);
    }

    #[test]
    fn test_extract_first_qualifying_block_wins() {
        let output = "```python\nprint('x')\n```\n```bash\n# explanation only\n```\n```bash\nalias first='1'\n```\n```bash\nalias second='2'\n```";
        assert_eq!(extract_entry(output), Some(AliasEntry::alias("first", "1")));
    }

    #[test]
    fn test_extract_allows_comment_lines_in_block() {
        let output = "```bash\n# lists files\nalias ll='ls -la'\n```";
        assert_eq!(extract_entry(output), Some(AliasEntry::alias("ll", "ls -la")));
    }

    #[test]
    fn test_extract_uppercase_tag() {
        let output = "```Bash\nalias ll='ls -la'\n```";
        assert!(extract_entry(output).is_some());
    }

    #[test]
    fn test_closing_fence_of_skipped_block_is_not_an_opener() {
        let output = "```python\nx = 1\n```\nalias ll='ls -la'\n```";
        assert!(fenced_blocks(output).is_empty());
    }

    #[test]
    fn test_fenced_blocks_collects_in_order() {
        let blocks = fenced_blocks("```\na\n```\ntext\n```sh\nb\nc\n```");
        assert_eq!(blocks, vec!["a".to_string(), "b\nc".to_string()]);
    }
}
