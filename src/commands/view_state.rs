//! Interactive mode state machine
//!
//! Pure transition table for the interactive screens. Rendering and I/O
//! happen in `commands/interactive.rs`, which renders the current state,
//! collects one [`ViewEvent`] and feeds it to [`ViewState::handle`].
//!
//! # State transition diagram
//! ```text
//! MainMenu ──> ManageMenu ──> AliasList ──> ConfirmDelete
//!    │             ├──> AddAlias
//!    │             └──> AddFunction
//!    ├──> AiPrompt ──> AiConfirm
//!    │        └──────> AiRawOutput
//!    ├──> Settings ──> CheckInstallation
//!    │        └──────> ChangeModel
//!    └──> Exit
//!
//! any state ──Failed──> Error ──> (back)
//! any state ──Quit────> Exit
//! ```
//!
//! # Usage example
//! ```
//! use aliasman::commands::view_state::{MainMenuItem, ViewEvent, ViewState};
//!
//! let state = ViewState::MainMenu.handle(ViewEvent::Main(MainMenuItem::GenerateAlias));
//! assert_eq!(state, ViewState::AiPrompt);
//!
//! let state = state.handle(ViewEvent::Back);
//! assert_eq!(state, ViewState::MainMenu);
//! ```

use std::fmt;

use crate::llm::Generation;
use crate::store::AliasEntry;

/// Interactive screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    MainMenu,
    ManageMenu,
    /// Alias list; picking an alias asks to delete it.
    AliasList,
    AddAlias,
    AddFunction,
    ConfirmDelete {
        name: String,
    },
    /// Ask for a description to send to the model.
    AiPrompt,
    /// A definition was extracted; ask before saving it.
    AiConfirm {
        entry: AliasEntry,
    },
    /// Nothing was extractable; show the model output as-is.
    AiRawOutput {
        output: String,
    },
    Settings,
    CheckInstallation,
    ChangeModel,
    /// An operation failed; `back` is shown after the error is acknowledged.
    Error {
        message: String,
        back: Box<ViewState>,
    },
    Exit,
}

/// One user-driven outcome of rendering a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Main(MainMenuItem),
    Manage(ManageMenuItem),
    Settings(SettingsItem),
    /// An alias was picked in the list.
    SelectAlias(String),
    /// A form or confirmation was completed and its change saved.
    Submitted,
    /// A confirmation was answered with "no".
    Declined,
    /// An informational screen was dismissed.
    Acknowledged,
    /// The model answered.
    Generated(Generation),
    /// An operation failed with this message.
    Failed(String),
    /// Esc: go one level up.
    Back,
    /// Ctrl-C or the Exit menu item.
    Quit,
}

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuItem {
    ManageAliases,
    GenerateAlias,
    Settings,
    Exit,
}

impl MainMenuItem {
    pub const ALL: [MainMenuItem; 4] = [
        MainMenuItem::ManageAliases,
        MainMenuItem::GenerateAlias,
        MainMenuItem::Settings,
        MainMenuItem::Exit,
    ];
}

impl fmt::Display for MainMenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MainMenuItem::ManageAliases => "Manage aliases",
            MainMenuItem::GenerateAlias => "Generate alias with AI",
            MainMenuItem::Settings => "Settings",
            MainMenuItem::Exit => "Exit",
        };
        f.write_str(label)
    }
}

/// Alias management menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManageMenuItem {
    ListAliases,
    AddAlias,
    AddFunction,
    Back,
}

impl ManageMenuItem {
    pub const ALL: [ManageMenuItem; 4] = [
        ManageMenuItem::ListAliases,
        ManageMenuItem::AddAlias,
        ManageMenuItem::AddFunction,
        ManageMenuItem::Back,
    ];
}

impl fmt::Display for ManageMenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ManageMenuItem::ListAliases => "List / remove aliases",
            ManageMenuItem::AddAlias => "Add alias",
            ManageMenuItem::AddFunction => "Add function",
            ManageMenuItem::Back => "Back",
        };
        f.write_str(label)
    }
}

/// Settings menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsItem {
    CheckInstallation,
    ChangeModel,
    Back,
}

impl SettingsItem {
    pub const ALL: [SettingsItem; 3] = [
        SettingsItem::CheckInstallation,
        SettingsItem::ChangeModel,
        SettingsItem::Back,
    ];
}

impl fmt::Display for SettingsItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SettingsItem::CheckInstallation => "Check installation",
            SettingsItem::ChangeModel => "Change AI model",
            SettingsItem::Back => "Back",
        };
        f.write_str(label)
    }
}

impl ViewState {
    pub fn is_exit(&self) -> bool {
        matches!(self, ViewState::Exit)
    }

    /// Where Esc leads from this state.
    pub fn parent(&self) -> ViewState {
        match self {
            ViewState::MainMenu | ViewState::Exit => ViewState::Exit,
            ViewState::ManageMenu | ViewState::AiPrompt | ViewState::Settings => {
                ViewState::MainMenu
            }
            ViewState::AliasList | ViewState::AddAlias | ViewState::AddFunction => {
                ViewState::ManageMenu
            }
            ViewState::ConfirmDelete { .. } => ViewState::AliasList,
            ViewState::AiConfirm { .. } => ViewState::AiPrompt,
            ViewState::AiRawOutput { .. } => ViewState::MainMenu,
            ViewState::CheckInstallation | ViewState::ChangeModel => ViewState::Settings,
            ViewState::Error { back, .. } => (**back).clone(),
        }
    }

    /// State shown after an error raised while in this state.
    ///
    /// Forms are shown again so the input can be corrected.
    fn after_error(&self) -> ViewState {
        match self {
            ViewState::AddAlias
            | ViewState::AddFunction
            | ViewState::AiPrompt
            | ViewState::ChangeModel => self.clone(),
            ViewState::Error { back, .. } => (**back).clone(),
            other => other.parent(),
        }
    }

    /// Apply one event (pure function).
    ///
    /// `Quit` always exits, `Back` goes to [`parent`](Self::parent) and
    /// `Failed` opens an [`Error`](ViewState::Error) screen. A pair missing
    /// from the table is logged and returns to the main menu.
    ///
    /// # Example
    /// ```
    /// use aliasman::commands::view_state::{ViewEvent, ViewState};
    ///
    /// let state = ViewState::ConfirmDelete { name: "ll".to_string() };
    /// assert_eq!(state.handle(ViewEvent::Submitted), ViewState::AliasList);
    /// ```
    pub fn handle(self, event: ViewEvent) -> ViewState {
        match (self, event) {
            (_, ViewEvent::Quit) => ViewState::Exit,
            (state, ViewEvent::Back) => state.parent(),
            (state, ViewEvent::Failed(message)) => {
                let back = Box::new(state.after_error());
                ViewState::Error { message, back }
            }

            (ViewState::MainMenu, ViewEvent::Main(item)) => match item {
                MainMenuItem::ManageAliases => ViewState::ManageMenu,
                MainMenuItem::GenerateAlias => ViewState::AiPrompt,
                MainMenuItem::Settings => ViewState::Settings,
                MainMenuItem::Exit => ViewState::Exit,
            },

            (ViewState::ManageMenu, ViewEvent::Manage(item)) => match item {
                ManageMenuItem::ListAliases => ViewState::AliasList,
                ManageMenuItem::AddAlias => ViewState::AddAlias,
                ManageMenuItem::AddFunction => ViewState::AddFunction,
                ManageMenuItem::Back => ViewState::MainMenu,
            },

            (ViewState::AliasList, ViewEvent::SelectAlias(name)) => {
                ViewState::ConfirmDelete { name }
            }

            (ViewState::AddAlias | ViewState::AddFunction, ViewEvent::Submitted) => {
                ViewState::AliasList
            }

            (
                ViewState::ConfirmDelete { .. },
                ViewEvent::Submitted | ViewEvent::Declined,
            ) => ViewState::AliasList,

            (ViewState::AiPrompt, ViewEvent::Generated(generation)) => match generation {
                Generation::Entry(entry) => ViewState::AiConfirm { entry },
                Generation::Raw(output) => ViewState::AiRawOutput { output },
            },

            (ViewState::AiConfirm { .. }, ViewEvent::Submitted) => ViewState::MainMenu,
            (ViewState::AiConfirm { .. }, ViewEvent::Declined) => ViewState::AiPrompt,

            (ViewState::AiRawOutput { .. }, ViewEvent::Acknowledged) => ViewState::AiPrompt,
            (ViewState::AiRawOutput { .. }, ViewEvent::Declined) => ViewState::MainMenu,

            (ViewState::Settings, ViewEvent::Settings(item)) => match item {
                SettingsItem::CheckInstallation => ViewState::CheckInstallation,
                SettingsItem::ChangeModel => ViewState::ChangeModel,
                SettingsItem::Back => ViewState::MainMenu,
            },

            (ViewState::CheckInstallation, ViewEvent::Acknowledged) => ViewState::Settings,
            (ViewState::ChangeModel, ViewEvent::Submitted) => ViewState::Settings,

            (ViewState::Error { back, .. }, ViewEvent::Acknowledged) => *back,

            (state, event) => {
                tracing::error!("Invalid transition: {:?} on {:?}", event, state);
                ViewState::MainMenu
            }
        }
    }
}
