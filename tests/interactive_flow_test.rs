//! 交互模式状态机流程测试

use aliasman::commands::view_state::{
    MainMenuItem, ManageMenuItem, SettingsItem, ViewEvent, ViewState,
};
use aliasman::llm::Generation;
use aliasman::store::AliasEntry;
use pretty_assertions::assert_eq;

fn run(events: Vec<ViewEvent>) -> ViewState {
    events
        .into_iter()
        .fold(ViewState::MainMenu, |state, event| state.handle(event))
}

/// 管理 -> 列表 -> 选择 -> 确认删除 -> 回到列表
#[test]
fn test_delete_flow() {
    let state = run(vec![
        ViewEvent::Main(MainMenuItem::ManageAliases),
        ViewEvent::Manage(ManageMenuItem::ListAliases),
        ViewEvent::SelectAlias("gs".to_string()),
        ViewEvent::Submitted,
    ]);
    assert_eq!(state, ViewState::AliasList);
}

/// AI 生成失败后重试，成功后回主菜单
#[test]
fn test_ai_flow_with_retry() {
    let state = run(vec![
        ViewEvent::Main(MainMenuItem::GenerateAlias),
        ViewEvent::Generated(Generation::Raw("hmm".to_string())),
        ViewEvent::Acknowledged,
        ViewEvent::Generated(Generation::Entry(AliasEntry::alias("ll", "ls -la"))),
        ViewEvent::Submitted,
    ]);
    assert_eq!(state, ViewState::MainMenu);
}

/// 模型命令出错后显示错误，确认后回到输入界面
#[test]
fn test_ai_failure_returns_to_prompt() {
    let state = run(vec![
        ViewEvent::Main(MainMenuItem::GenerateAlias),
        ViewEvent::Failed("The 'llm' command is not available on your system".to_string()),
    ]);
    assert!(matches!(state, ViewState::Error { .. }));
    assert_eq!(state.handle(ViewEvent::Acknowledged), ViewState::AiPrompt);
}

/// Esc 逐级返回直到退出
#[test]
fn test_escape_all_the_way_out() {
    let state = run(vec![
        ViewEvent::Main(MainMenuItem::Settings),
        ViewEvent::Settings(SettingsItem::ChangeModel),
        ViewEvent::Back,
        ViewEvent::Back,
        ViewEvent::Back,
    ]);
    assert!(state.is_exit());
}

/// 设置 -> 检查安装 -> 返回设置 -> 菜单退出
#[test]
fn test_settings_flow() {
    let state = run(vec![
        ViewEvent::Main(MainMenuItem::Settings),
        ViewEvent::Settings(SettingsItem::CheckInstallation),
        ViewEvent::Acknowledged,
    ]);
    assert_eq!(state, ViewState::Settings);

    let state = run(vec![
        ViewEvent::Main(MainMenuItem::Settings),
        ViewEvent::Settings(SettingsItem::Back),
        ViewEvent::Main(MainMenuItem::Exit),
    ]);
    assert!(state.is_exit());
}
