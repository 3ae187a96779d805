//! Interactive mode: renders the current [`ViewState`], collects one
//! [`ViewEvent`] and applies the transition table until `Exit`.

use std::fmt;

use super::forms::{AliasForm, FunctionForm};
use super::view_state::{MainMenuItem, ManageMenuItem, SettingsItem, ViewEvent, ViewState};
use super::{add, generate, install, model};
use crate::config::LLMConfig;
use crate::error::{AliasmanError, Result};
use crate::llm::ModelRunner;
use crate::shell::{self, AliasmanPaths};
use crate::store::{AliasEntry, AliasStore};
use crate::ui;

/// Everything the screens need.
pub struct Session<'a> {
    pub paths: &'a AliasmanPaths,
    pub store: &'a AliasStore,
    pub runner: &'a dyn ModelRunner,
    pub llm: &'a LLMConfig,
    pub colored: bool,
}

/// Alias list row for the selection prompt.
struct EntryChoice(AliasEntry);

impl fmt::Display for EntryChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ui::format_entry_line(&self.0, false))
    }
}

/// Run the interactive loop, then print the reload instructions.
pub fn run(session: &Session<'_>) -> Result<()> {
    let mut state = ViewState::MainMenu;

    while !state.is_exit() {
        let event = to_event(render(&state, session));
        tracing::debug!("{:?} <- {:?}", state, event);
        state = state.handle(event);
    }

    println!();
    println!(
        "{}",
        shell::reload_instructions(session.paths.shell_config.as_deref())
    );
    Ok(())
}

/// Map a screen's result onto an event: Esc goes back, Ctrl-C quits and any
/// other error is shown on the error screen.
fn to_event(result: Result<ViewEvent>) -> ViewEvent {
    match result {
        Ok(event) => event,
        Err(AliasmanError::UserCancelled) => ViewEvent::Back,
        Err(AliasmanError::Interrupted) => ViewEvent::Quit,
        Err(e) => {
            tracing::debug!("Screen failed: {:?}", e);
            let message = match e.suggestion() {
                Some(hint) => format!("{}\n{}", e, hint),
                None => e.to_string(),
            };
            ViewEvent::Failed(message)
        }
    }
}

fn render(state: &ViewState, s: &Session<'_>) -> Result<ViewEvent> {
    match state {
        ViewState::MainMenu => {
            let item = ui::select("aliasman", MainMenuItem::ALL.to_vec())?;
            Ok(ViewEvent::Main(item))
        }
        ViewState::ManageMenu => {
            let item = ui::select("Manage aliases", ManageMenuItem::ALL.to_vec())?;
            Ok(ViewEvent::Manage(item))
        }
        ViewState::AliasList => render_alias_list(s),
        ViewState::AddAlias => render_add_alias(s),
        ViewState::AddFunction => render_add_function(s),
        ViewState::ConfirmDelete { name } => render_confirm_delete(s, name),
        ViewState::AiPrompt => {
            let description = ui::text("Describe the alias you want:", None)?;
            let generation = generate::request(s.store, s.runner, &description, s.colored)?;
            Ok(ViewEvent::Generated(generation))
        }
        ViewState::AiConfirm { entry } => {
            generate::print_candidate(entry, s.colored);
            if ui::confirm(&format!("Add this {}?", entry.kind), true)? {
                add::save(s.store, entry, s.colored)?;
                Ok(ViewEvent::Submitted)
            } else {
                Ok(ViewEvent::Declined)
            }
        }
        ViewState::AiRawOutput { output } => {
            generate::print_raw_output(output, s.colored);
            if ui::confirm("Try another description?", true)? {
                Ok(ViewEvent::Acknowledged)
            } else {
                Ok(ViewEvent::Declined)
            }
        }
        ViewState::Settings => {
            let config = s.store.read_config()?;
            println!(
                "{}",
                ui::info(&format!("Current model: {}", config.model), s.colored)
            );
            let item = ui::select("Settings", SettingsItem::ALL.to_vec())?;
            Ok(ViewEvent::Settings(item))
        }
        ViewState::CheckInstallation => render_check_installation(s),
        ViewState::ChangeModel => render_change_model(s),
        ViewState::Error { message, .. } => {
            ui::error(message, s.colored);
            ui::pause()?;
            Ok(ViewEvent::Acknowledged)
        }
        // 循环在 Exit 前已退出
        ViewState::Exit => Ok(ViewEvent::Quit),
    }
}

fn render_alias_list(s: &Session<'_>) -> Result<ViewEvent> {
    loop {
        let entries = s.store.entries()?;
        if entries.is_empty() {
            ui::warning("No aliases yet", s.colored);
            return Ok(ViewEvent::Back);
        }

        let choices: Vec<EntryChoice> = entries.into_iter().map(EntryChoice).collect();
        let EntryChoice(entry) = ui::select("Select an alias to remove (Esc to go back)", choices)?;

        if entry.is_removable() {
            return Ok(ViewEvent::SelectAlias(entry.name));
        }
        ui::warning(
            &format!(
                "'{}' is a function; edit {} to remove it",
                entry.name,
                s.store.path().display()
            ),
            s.colored,
        );
    }
}

fn render_add_alias(s: &Session<'_>) -> Result<ViewEvent> {
    let name = ui::text("Alias name:", None)?;
    let command = ui::text("Command:", None)?;
    let entry = AliasForm { name, command }.into_entry()?;
    add::save(s.store, &entry, s.colored)?;
    Ok(ViewEvent::Submitted)
}

fn render_add_function(s: &Session<'_>) -> Result<ViewEvent> {
    let name = ui::text("Function name:", None)?;
    FunctionForm::new(name.as_str(), "true").into_entry()?;
    let body = ui::edit_function_body("")?;
    let entry = FunctionForm { name, body }.into_entry()?;
    add::save(s.store, &entry, s.colored)?;
    Ok(ViewEvent::Submitted)
}

fn render_confirm_delete(s: &Session<'_>, name: &str) -> Result<ViewEvent> {
    if !ui::confirm(&format!("Remove alias '{}'?", name), false)? {
        return Ok(ViewEvent::Declined);
    }
    s.store.remove_entry(name)?;
    ui::success(&format!("Removed alias '{}'", name), s.colored);
    Ok(ViewEvent::Submitted)
}

fn render_check_installation(s: &Session<'_>) -> Result<ViewEvent> {
    let status = shell::install_status(s.paths);
    install::print_status(&status, s.colored);

    if s.runner.is_available() {
        ui::success(&format!("'{}' command found", s.runner.command()), s.colored);
    } else {
        ui::warning(
            &format!(
                "'{}' command not found; install it from {}",
                s.runner.command(),
                s.llm.install_url
            ),
            s.colored,
        );
    }

    if status.is_installed() {
        ui::success("aliasman is installed", s.colored);
    } else if ui::confirm("aliasman is not installed. Install now?", true)? {
        install::run(s.paths, s.colored)?;
    }
    ui::pause()?;
    Ok(ViewEvent::Acknowledged)
}

fn render_change_model(s: &Session<'_>) -> Result<ViewEvent> {
    let current = s.store.read_config()?.model;

    if s.runner.is_available() {
        let spinner = ui::Spinner::new("Listing models...", s.colored);
        let listing = s.runner.list_models();
        spinner.finish_and_clear();
        match listing {
            Ok(models) => println!("{}", models.trim_end()),
            Err(e) => ui::warning(&format!("Could not list models: {}", e), s.colored),
        }
    }

    let name = ui::text("Model:", Some(&current))?;
    let model = model::set_model(s.store, &name)?;
    ui::success(&format!("Model set to {}", model), s.colored);
    Ok(ViewEvent::Submitted)
}
