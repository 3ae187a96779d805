//! Text transforms behind the write path
//!
//! All functions here are pure; [`AliasStore`](super::AliasStore) does the I/O.
//! Lines are split on `\n` and re-joined with `\n`, so every line that is not
//! the target of a mutation comes back byte-identical.

use super::{AliasEntry, EntryKind, StoreConfig};
use crate::error::Result;

const CONFIG_PREFIX: &str = "# {";
const CONFIG_SUFFIX: &str = "}";

/// Render an entry in the exact shape the parser reads back.
///
/// ```
/// use aliasman::store::{AliasEntry, format::render_entry};
///
/// assert_eq!(
///     render_entry(&AliasEntry::alias("gs", "git status")),
///     "alias gs='git status'\n"
/// );
/// assert_eq!(
///     render_entry(&AliasEntry::function("hi", "  echo hi")),
///     "function hi() {\n  echo hi\n}\n"
/// );
/// ```
pub fn render_entry(entry: &AliasEntry) -> String {
    match entry.kind {
        EntryKind::Alias => format!("alias {}='{}'\n", entry.name, entry.body),
        EntryKind::Function => format!("function {}() {{\n{}\n}}\n", entry.name, entry.body),
    }
}

/// Drop every line that defines an alias called `name`.
///
/// Only lines starting with `alias <name>=` are removed; function blocks are
/// left alone.
pub fn remove_alias_lines(content: &str, name: &str) -> (String, usize) {
    let prefix = format!("alias {}=", name);
    let mut removed = 0;
    let kept: Vec<&str> = content
        .split('\n')
        .filter(|line| {
            let matches = line.starts_with(&prefix);
            if matches {
                removed += 1;
            }
            !matches
        })
        .collect();
    (kept.join("\n"), removed)
}

/// Whether `line` has the shape of an embedded config comment.
pub fn is_config_line(line: &str) -> bool {
    line.starts_with(CONFIG_PREFIX) && line.ends_with(CONFIG_SUFFIX)
}

/// First config-shaped line anywhere in `content` that decodes.
pub fn find_config(content: &str) -> Option<StoreConfig> {
    content
        .lines()
        .filter(|line| is_config_line(line))
        .find_map(|line| match serde_json::from_str::<StoreConfig>(&line[2..]) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::debug!("Ignoring undecodable config line {:?}: {}", line, e);
                None
            }
        })
}

/// Render the config comment line (without trailing newline).
pub fn config_line(config: &StoreConfig) -> Result<String> {
    Ok(format!("# {}", serde_json::to_string(config)?))
}

/// Put `config` on line 0, replacing a config-shaped first line if present.
pub fn with_config_line(content: &str, config: &StoreConfig) -> Result<String> {
    let mut lines = vec![config_line(config)?];
    lines.extend(
        content
            .split('\n')
            .enumerate()
            .filter(|(i, line)| !(*i == 0 && is_config_line(line)))
            .map(|(_, line)| line.to_string()),
    );
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_alias_reparses() {
        let entry = AliasEntry::alias("gco", "git checkout");
        assert_eq!(parse(&render_entry(&entry)), vec![entry]);
    }

    #[test]
    fn test_render_function_reparses() {
        let entry = AliasEntry::function("mkcd", "  mkdir -p \"$1\"\n  cd \"$1\"");
        assert_eq!(parse(&render_entry(&entry)), vec![entry]);
    }

    #[test]
    fn test_remove_alias_lines_example() {
        let (content, removed) =
            remove_alias_lines("alias gs='git status'\nalias gp='git push'\n", "gs");
        assert_eq!(content, "alias gp='git push'\n");
        assert_eq!(removed, 1);
        assert_eq!(parse(&content), vec![AliasEntry::alias("gp", "git push")]);
    }

    #[test]
    fn test_remove_alias_lines_removes_all_duplicates() {
        let (content, removed) = remove_alias_lines("alias a='1'\n# keep\nalias a='2'\n", "a");
        assert_eq!(content, "# keep\n");
        assert_eq!(removed, 2);
    }

    #[test]
    fn test_remove_alias_lines_does_not_match_prefix_names() {
        let (content, removed) = remove_alias_lines("alias g='git'\nalias gs='git status'", "g");
        assert_eq!(content, "alias gs='git status'");
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_remove_alias_lines_preserves_other_bytes() {
        let original = "# { \"model\": \"x\" }\n\n  indented\r\nalias a='1'\nfunction a() {\n}\n";
        let (content, removed) = remove_alias_lines(original, "a");
        assert_eq!(removed, 1);
        assert_eq!(
            content,
            "# { \"model\": \"x\" }\n\n  indented\r\nfunction a() {\n}\n"
        );
    }

    #[test]
    fn test_remove_alias_lines_no_match_is_identity() {
        let original = "alias a='1'\nno trailing newline";
        let (content, removed) = remove_alias_lines(original, "zz");
        assert_eq!(content, original);
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_is_config_line() {
        assert!(is_config_line("# {\"model\": \"llama3:8b\"}"));
        assert!(is_config_line("# { \"model\": \"llama3:8b\" }"));
        assert!(!is_config_line("#{\"model\": \"x\"}"));
        assert!(!is_config_line("# Aliasman managed aliases"));
        assert!(!is_config_line("# {\"model\": \"x\"} "));
    }

    #[test]
    fn test_find_config_first_line() {
        let config = find_config("# {\"model\": \"llama3:8b\"}\nalias a='1'\n").unwrap();
        assert_eq!(config.model, "llama3:8b");
    }

    #[test]
    fn test_find_config_anywhere_first_decodable_wins() {
        let content = "alias a='1'\n# {not json}\n# {\"model\": \"mistral\"}\n# {\"model\": \"later\"}\n";
        assert_eq!(find_config(content).unwrap().model, "mistral");
    }

    #[test]
    fn test_find_config_missing() {
        assert!(find_config("alias a='1'\n").is_none());
    }

    #[test]
    fn test_find_config_without_model_key_uses_default() {
        let config = find_config("# {\"other\": 1}\n").unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_with_config_line_replaces_existing_first_line() {
        let content = "# {\"model\": \"old\"}\n# comment\nalias a='1'\n";
        let updated = with_config_line(content, &StoreConfig::new("new")).unwrap();
        assert_eq!(updated, "# {\"model\":\"new\"}\n# comment\nalias a='1'\n");
    }

    #[test]
    fn test_with_config_line_inserts_when_absent() {
        let content = "# comment\nalias a='1'\n";
        let updated = with_config_line(content, &StoreConfig::new("new")).unwrap();
        assert_eq!(updated, "# {\"model\":\"new\"}\n# comment\nalias a='1'\n");
    }

    #[test]
    fn test_with_config_line_only_drops_line_zero() {
        let content = "alias a='1'\n# {\"model\": \"stale\"}\n";
        let updated = with_config_line(content, &StoreConfig::new("new")).unwrap();
        assert_eq!(
            updated,
            "# {\"model\":\"new\"}\nalias a='1'\n# {\"model\": \"stale\"}\n"
        );
        // 新配置在第 0 行，优先于后面的旧配置
        assert_eq!(find_config(&updated).unwrap().model, "new");
    }

    #[test]
    fn test_with_config_line_empty_file() {
        let updated = with_config_line("", &StoreConfig::new("m")).unwrap();
        assert_eq!(updated, "# {\"model\":\"m\"}\n");
    }
}
