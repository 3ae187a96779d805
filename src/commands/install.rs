use crate::error::Result;
use crate::shell::{self, AliasmanPaths, InstallStatus};
use crate::ui;

/// `aliasman install`: show the installation state and install if needed.
pub fn run(paths: &AliasmanPaths, colored: bool) -> Result<()> {
    let status = shell::install_status(paths);
    print_status(&status, colored);

    if status.is_installed() {
        ui::success("aliasman is installed", colored);
        return Ok(());
    }

    ui::step("1/1", "Installing shell integration", colored);
    let report = shell::install(paths)?;
    if report.created_alias_file {
        ui::success(&format!("Created {}", paths.alias_file.display()), colored);
    }
    ui::success(
        &format!("Sourced aliases from {}", report.shell_config.display()),
        colored,
    );
    println!();
    println!(
        "{}",
        shell::reload_instructions(paths.shell_config.as_deref())
    );
    Ok(())
}

/// Print the facts behind the installed check.
pub fn print_status(status: &InstallStatus, colored: bool) {
    let yes_no = |b: bool| if b { "yes" } else { "no" };
    let shell_config = status
        .shell_config
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    ui::heading("Installation status", colored);
    println!(
        "{}",
        ui::info(
            &format!(
                "Alias file: {} (exists: {})",
                status.alias_file.display(),
                yes_no(status.alias_file_exists)
            ),
            colored
        )
    );
    println!(
        "{}",
        ui::info(
            &format!(
                "Shell config: {} (readable: {})",
                shell_config,
                yes_no(status.shell_config_readable)
            ),
            colored
        )
    );
}
