//! Managed alias file: entries, embedded config, and file-level operations.
//!
//! The file is plain shell script that the user's shell sources. Its first
//! line may carry a JSON config comment:
//!
//! ```text
//! # {"model":"llama3:8b"}
//! # Aliasman managed aliases
//!
//! alias gs='git status'
//! function mkcd() {
//!   mkdir -p "$1" && cd "$1"
//! }
//! ```
//!
//! Reads load the whole file. Removes and config updates rewrite the whole
//! file; adds append. There is no locking, so concurrent writers race and the
//! last one wins.

pub mod format;
pub mod parser;

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::store::DEFAULT_MODEL;
use crate::error::Result;

pub use parser::parse;

/// Kind of a definition in the alias file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// `alias name='body'`
    Alias,
    /// `function name() { body }`
    Function,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Alias => write!(f, "alias"),
            EntryKind::Function => write!(f, "function"),
        }
    }
}

/// One alias or function definition.
///
/// For [`EntryKind::Alias`] the body is the command with its surrounding
/// quotes removed. For [`EntryKind::Function`] it is the lines between the
/// opening line and the closing `}`, joined with `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub name: String,
    pub body: String,
    pub kind: EntryKind,
}

impl AliasEntry {
    pub fn alias(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            kind: EntryKind::Alias,
        }
    }

    pub fn function(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            kind: EntryKind::Function,
        }
    }

    /// Whether this entry can be deleted by [`AliasStore::remove_entry`].
    pub fn is_removable(&self) -> bool {
        self.kind == EntryKind::Alias
    }

    /// Body on one line (function lines joined with `; `).
    pub fn one_line_body(&self) -> String {
        match self.kind {
            EntryKind::Alias => self.body.clone(),
            EntryKind::Function => self
                .body
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Config embedded as the first-line comment of the alias file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Model passed to the LLM CLI for AI-assisted creation.
    #[serde(default = "default_model")]
    pub model: String,
}

impl StoreConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// Handle on the managed alias file.
#[derive(Debug, Clone)]
pub struct AliasStore {
    path: PathBuf,
}

impl AliasStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse all entries, in file order.
    pub fn entries(&self) -> Result<Vec<AliasEntry>> {
        let content = fs::read_to_string(&self.path)?;
        let entries = parse(&content);
        tracing::debug!(
            "Parsed {} entries from {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }

    /// Append an entry at the end of the file.
    ///
    /// The file must already exist. A newline is written first when the file
    /// does not end with one.
    pub fn append_entry(&self, entry: &AliasEntry) -> Result<()> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;

        let content = fs::read(&self.path)?;
        let mut text = String::new();
        if content.last().is_some_and(|b| *b != b'\n') {
            text.push('\n');
        }
        text.push_str(&format::render_entry(entry));

        file.write_all(text.as_bytes())?;
        tracing::debug!("Added {} '{}'", entry.kind, entry.name);
        Ok(())
    }

    /// Remove every `alias <name>=` line and rewrite the file.
    ///
    /// Returns the number of lines removed. Function entries are not
    /// matched.
    pub fn remove_entry(&self, name: &str) -> Result<usize> {
        let content = fs::read_to_string(&self.path)?;
        let (updated, removed) = format::remove_alias_lines(&content, name);
        fs::write(&self.path, updated)?;
        tracing::debug!("Removed {} line(s) for alias '{}'", removed, name);
        Ok(removed)
    }

    /// Read the embedded config, falling back to the default model.
    pub fn read_config(&self) -> Result<StoreConfig> {
        let content = fs::read_to_string(&self.path)?;
        Ok(format::find_config(&content).unwrap_or_default())
    }

    /// Write `config` as the first line and rewrite the file.
    pub fn update_config(&self, config: &StoreConfig) -> Result<()> {
        let content = fs::read_to_string(&self.path)?;
        let updated = format::with_config_line(&content, config)?;
        fs::write(&self.path, updated)?;
        tracing::debug!("Model set to '{}'", config.model);
        Ok(())
    }
}
