use crate::error::Result;
use crate::store::{AliasEntry, AliasStore};
use crate::ui;

/// Header printed above the alias list.
pub const LIST_HEADER: &str = "Available aliases:";

/// Print every entry in file order.
///
/// A file that cannot be read is reported, not propagated: `list` is the
/// one command scripts call before anything is installed.
pub fn run(store: &AliasStore, colored: bool) -> Result<()> {
    let entries = match store.entries() {
        Ok(entries) => entries,
        Err(e) => {
            ui::error(&format!("Error loading aliases: {}", e), colored);
            if let Some(suggestion) = e.suggestion() {
                println!("{}", ui::info(suggestion, colored));
            }
            return Ok(());
        }
    };
    tracing::debug!("Listing {} entries from {}", entries.len(), store.path().display());
    print!("{}", render_list(&entries, colored));
    Ok(())
}

/// Header plus one `name: body` (or `name(): a; b`) line per entry.
pub fn render_list(entries: &[AliasEntry], colored: bool) -> String {
    let mut out = format!("{}\n", LIST_HEADER);
    for entry in entries {
        out.push_str(&ui::format_entry_line(entry, colored));
        out.push('\n');
    }
    out
}
