//! # aliasman
//!
//! 管理 shell alias 与函数的命令行工具，可选通过本地 `llm` CLI 由语言模型生成 alias。
//!
//! ## 功能
//! - **Alias 文件**：所有定义保存在 `~/.aliasman_aliases`，首行嵌入 JSON 配置注释
//! - **Shell 集成**：在 `.bashrc` / `.zshrc` / `.bash_profile` 中追加带标记的 `source` 块
//! - **AI 生成**：调用 `llm -m <model> <prompt>`，从代码块中提取 alias 或函数
//! - **交互模式**：无子命令时进入菜单界面
//!
//! ## 快速开始
//! ```bash
//! aliasman                       # 交互模式
//! aliasman list
//! aliasman add gs git status
//! aliasman add --function mkcd   # 在 $EDITOR 中编写函数体
//! aliasman generate -y show disk usage of this directory
//! aliasman model mistral
//! ```
//!
//! ### 作为库使用
//! ```no_run
//! use aliasman::store::{AliasEntry, AliasStore};
//!
//! # fn main() -> aliasman::error::Result<()> {
//! let store = AliasStore::new("/home/me/.aliasman_aliases");
//! store.append_entry(&AliasEntry::alias("gs", "git status"))?;
//! for entry in store.entries()? {
//!     println!("{}: {}", entry.name, entry.body);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## 核心模块
//! - [`store`] - alias 文件解析与读写
//! - [`shell`] - shell 集成安装
//! - [`llm`] - 语言模型 CLI 封装
//! - [`commands`] - CLI 命令与交互模式
//! - [`config`] - 应用配置
//! - [`error`] - 统一错误类型
//! - [`ui`] - 用户界面工具
//!
//! ## 配置
//! 配置文件位置：
//! - Linux: `~/.config/aliasman/config.toml`
//! - macOS: `~/Library/Application Support/aliasman/config.toml`
//! - Windows: `%APPDATA%\aliasman\config\config.toml`
//!
//! 示例配置：
//! ```toml
//! [ui]
//! colored = true
//!
//! [llm]
//! command = "llm"
//!
//! [paths]
//! alias_file = "/home/me/.aliasman_aliases"
//! shell_config = "/home/me/.zshrc"
//! ```
//!
//! 环境变量覆盖：`ALIASMAN__LLM__COMMAND=ollama-llm`

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod llm;
pub mod shell;
pub mod store;
pub mod ui;
