// Re-export all library modules
use aliasman::*;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use error::AliasmanError;
use llm::LlmCli;
use shell::AliasmanPaths;
use store::AliasStore;

fn main() -> Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    // 根据 verbose 标志设置日志级别
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // 初始化 tracing 日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // 配置损坏时仍可运行，使用默认配置
    let config = config::load_config().unwrap_or_else(|e| {
        tracing::warn!("Ignoring application settings: {}", e);
        config::AppConfig::default()
    });
    let colored = config.ui.colored;

    let paths = match AliasmanPaths::resolve(&config.paths) {
        Ok(paths) => paths,
        Err(e) => exit_with_error(&e, colored),
    };
    let store = AliasStore::new(&paths.alias_file);
    let runner = LlmCli::new(config.llm.command.as_str());

    // list 只读，不触发安装
    if !matches!(cli.command, Some(Commands::List)) {
        shell::ensure_installed(&paths, colored);
    }

    let result = match cli.command {
        Some(Commands::List) => commands::list::run(&store, colored),
        Some(Commands::Add {
            ref name,
            function,
            ref command,
        }) => {
            if function {
                commands::add::run_function(&store, name, colored)
            } else {
                commands::add::run_alias(&store, name, command, colored)
            }
        }
        Some(Commands::Remove { ref name }) => {
            commands::remove::run(&store, name, colored).map(|_| ())
        }
        Some(Commands::Generate {
            yes,
            ref description,
        }) => commands::generate::run(&store, &runner, &description.join(" "), yes, colored)
            .map(|_| ()),
        Some(Commands::Model { ref name }) => {
            commands::model::run(&store, name.as_deref(), colored)
        }
        Some(Commands::Install) => commands::install::run(&paths, colored),
        None => {
            let session = commands::Session {
                paths: &paths,
                store: &store,
                runner: &runner,
                llm: &config.llm,
                colored,
            };
            commands::interactive::run(&session)
        }
    };

    match result {
        Ok(()) => Ok(()),
        // 用户取消不算错误，正常退出
        Err(AliasmanError::UserCancelled | AliasmanError::Interrupted) => std::process::exit(0),
        Err(e) => exit_with_error(&e, colored),
    }
}

/// 输出错误与建议后以状态码 1 退出
fn exit_with_error(e: &AliasmanError, colored: bool) -> ! {
    ui::error(&e.to_string(), colored);
    if let Some(suggestion) = e.suggestion() {
        println!();
        println!("{}", ui::info(suggestion, colored));
    }
    std::process::exit(1);
}
