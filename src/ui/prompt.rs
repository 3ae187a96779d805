use std::fmt::Display;

use inquire::{Confirm, Select, Text};

use crate::error::Result;

/// 交互式确认提示
///
/// # Arguments
/// * `message` - 提示信息
/// * `default` - 默认值（true = Yes, false = No）
///
/// # Returns
/// * `Ok(true)` - 用户选择 Yes
/// * `Ok(false)` - 用户选择 No
/// * `Err(AliasmanError::UserCancelled)` - 用户按下 Esc
/// * `Err(AliasmanError::Interrupted)` - 用户按下 Ctrl-C
pub fn confirm(message: &str, default: bool) -> Result<bool> {
    let result = Confirm::new(message).with_default(default).prompt()?;
    Ok(result)
}

/// 单选菜单，返回被选中的选项
pub fn select<T: Display>(message: &str, options: Vec<T>) -> Result<T> {
    let choice = Select::new(message, options)
        .with_vim_mode(true)
        .prompt()?;
    Ok(choice)
}

/// 单行文本输入
///
/// `default` 作为预填内容；返回值已去除首尾空白。
pub fn text(message: &str, default: Option<&str>) -> Result<String> {
    let mut prompt = Text::new(message);
    if let Some(default) = default {
        prompt = prompt.with_initial_value(default);
    }
    Ok(prompt.prompt()?.trim().to_string())
}

/// 等待用户按 Enter 继续
pub fn pause() -> Result<()> {
    Text::new("Press Enter to continue").prompt()?;
    Ok(())
}
