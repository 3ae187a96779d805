/// Fixed instructions sent ahead of the user's description
const ALIAS_PROMPT_RULES: &str = r#"Rules:
- Output a single bash alias in the form: alias name='command'
- If the task needs several statements, output a bash function instead:
  function name() {
    ...
  }
- Put the definition inside one ```bash code block
- Output just the command, no explanation"#;

/// Build the prompt passed to the model CLI
pub fn build_prompt(description: &str) -> String {
    format!(
        "generate alias for {}, output just the command, as a bash command alias, inside a code block\n\n{}",
        description.trim(),
        ALIAS_PROMPT_RULES
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_description() {
        let prompt = build_prompt("  list files by size  ");
        assert!(prompt.starts_with("generate alias for list files by size, "));
    }

    #[test]
    fn test_prompt_asks_for_code_block() {
        let prompt = build_prompt("x");
        assert!(prompt.contains("code block"));
        assert!(prompt.contains("alias name='command'"));
        assert!(prompt.contains("function name()"));
    }
}
