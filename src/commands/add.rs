use super::forms::{AliasForm, FunctionForm};
use crate::error::Result;
use crate::store::{AliasEntry, AliasStore};
use crate::ui;

/// `aliasman add NAME COMMAND...`
pub fn run_alias(store: &AliasStore, name: &str, command: &[String], colored: bool) -> Result<()> {
    let entry = AliasForm::new(name, command.join(" ")).into_entry()?;
    save(store, &entry, colored)
}

/// `aliasman add --function NAME`: the body is composed in the editor.
pub fn run_function(store: &AliasStore, name: &str, colored: bool) -> Result<()> {
    // 先校验名称，避免用户写完函数体后才报错
    FunctionForm::new(name, "true").into_entry()?;

    let body = ui::edit_function_body("")?;
    let entry = FunctionForm::new(name, body).into_entry()?;
    save(store, &entry, colored)
}

/// Append `entry` and report it.
pub fn save(store: &AliasStore, entry: &AliasEntry, colored: bool) -> Result<()> {
    store.append_entry(entry)?;
    ui::success(&format!("Added {} '{}'", entry.kind, entry.name), colored);
    Ok(())
}
