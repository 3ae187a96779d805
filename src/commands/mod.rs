//! Command implementations.
//!
//! One module per user operation. Each is callable from the CLI
//! subcommands and from the interactive mode.
//!
//! # Architecture
//! ```text
//! CLI (cli.rs)
//!   ├── commands/list.rs
//!   ├── commands/add.rs ──────┐
//!   ├── commands/remove.rs    ├── commands/forms.rs
//!   ├── commands/model.rs ────┘
//!   ├── commands/generate.rs ──> llm
//!   ├── commands/install.rs ───> shell
//!   └── commands/interactive.rs ─> view_state.rs
//! ```

/// Add alias / function commands.
pub mod add;
/// Typed form input and validation.
pub mod forms;
/// AI-assisted alias generation.
pub mod generate;
/// Shell integration status and install.
pub mod install;
/// Interactive mode dispatcher.
pub mod interactive;
/// Alias listing.
pub mod list;
/// Model setting.
pub mod model;
/// Alias removal.
pub mod remove;
/// Interactive mode state machine.
pub mod view_state;

pub use forms::{AliasForm, FunctionForm, ModelForm};
pub use interactive::Session;
