use crate::error::Result;
use crate::store::AliasStore;
use crate::ui;

/// `aliasman remove NAME`
///
/// Only alias lines are removed; a function with that name is left in place
/// and a warning says so.
pub fn run(store: &AliasStore, name: &str, colored: bool) -> Result<usize> {
    let name = name.trim();
    let entries = store.entries()?;
    let is_function = entries
        .iter()
        .any(|e| e.name == name && !e.is_removable());

    let removed = store.remove_entry(name)?;
    tracing::debug!("Removed {} line(s) for '{}'", removed, name);

    if removed > 0 {
        ui::success(&format!("Removed alias '{}'", name), colored);
    } else if is_function {
        ui::warning(
            &format!(
                "'{}' is a function; edit {} to remove it",
                name,
                store.path().display()
            ),
            colored,
        );
    } else {
        ui::warning(&format!("No alias named '{}'", name), colored);
    }
    Ok(removed)
}
