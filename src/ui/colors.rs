use colored::Colorize;

use crate::store::{AliasEntry, EntryKind};

/// 显示成功消息（绿色 ✓）
pub fn success(msg: &str, colored: bool) {
    if colored {
        println!("{} {}", "✓".green().bold(), msg.green());
    } else {
        println!("✓ {}", msg);
    }
}

/// 显示错误消息（红色 ✗）
pub fn error(msg: &str, colored: bool) {
    if colored {
        eprintln!("{} {}", "✗".red().bold(), msg.red());
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// 显示警告消息（黄色 ⚠）
pub fn warning(msg: &str, colored: bool) {
    if colored {
        println!("{} {}", "⚠".yellow().bold(), msg.yellow());
    } else {
        println!("⚠ {}", msg);
    }
}

/// 显示信息消息（蓝色 ℹ）
pub fn info(msg: &str, colored: bool) -> String {
    if colored {
        format!("{} {}", "ℹ".blue().bold(), msg.blue())
    } else {
        format!("ℹ {}", msg)
    }
}

/// 显示步骤提示（灰色）
pub fn step(step: &str, msg: &str, colored: bool) {
    if colored {
        println!(
            "{} {}",
            format!("[{}]", step).bright_black().bold(),
            msg.bright_black()
        );
    } else {
        println!("[{}] {}", step, msg);
    }
}

/// 显示标题（粗体）
pub fn heading(msg: &str, colored: bool) {
    if colored {
        println!("{}", msg.bold());
    } else {
        println!("{}", msg);
    }
}

/// 格式化一条 alias 列表行：`name: body` 或 `name(): a; b`
pub fn format_entry_line(entry: &AliasEntry, colored: bool) -> String {
    let label = match entry.kind {
        EntryKind::Alias => entry.name.clone(),
        EntryKind::Function => format!("{}()", entry.name),
    };
    if colored {
        format!("{}: {}", label.cyan().bold(), entry.one_line_body())
    } else {
        format!("{}: {}", label, entry.one_line_body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_info_plain() {
        assert_eq!(info("hello", false), "ℹ hello");
    }

    #[test]
    fn test_format_alias_line() {
        let entry = AliasEntry::alias("ll", "ls -la");
        assert_eq!(format_entry_line(&entry, false), "ll: ls -la");
    }

    #[test]
    fn test_format_function_line() {
        let entry = AliasEntry::function("mkcd", "  mkdir -p \"$1\"\n  cd \"$1\"");
        assert_eq!(
            format_entry_line(&entry, false),
            "mkcd(): mkdir -p \"$1\"; cd \"$1\""
        );
    }
}
