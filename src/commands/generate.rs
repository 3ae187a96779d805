use super::add;
use crate::error::Result;
use crate::llm::{self, Generation, ModelRunner};
use crate::store::{AliasEntry, AliasStore, format::render_entry};
use crate::ui;

/// `aliasman generate DESCRIPTION... [--yes]`
///
/// Returns the saved entry, `None` when nothing was saved.
pub fn run(
    store: &AliasStore,
    runner: &dyn ModelRunner,
    description: &str,
    yes: bool,
    colored: bool,
) -> Result<Option<AliasEntry>> {
    match request(store, runner, description, colored)? {
        Generation::Entry(entry) => {
            print_candidate(&entry, colored);
            if yes || ui::confirm(&format!("Add this {}?", entry.kind), true)? {
                add::save(store, &entry, colored)?;
                Ok(Some(entry))
            } else {
                println!("{}", ui::info("Nothing added", colored));
                Ok(None)
            }
        }
        Generation::Raw(output) => {
            print_raw_output(&output, colored);
            Ok(None)
        }
    }
}

/// Ask the configured model, with a spinner while it runs.
pub fn request(
    store: &AliasStore,
    runner: &dyn ModelRunner,
    description: &str,
    colored: bool,
) -> Result<Generation> {
    let model = store.read_config()?.model;
    let spinner = ui::Spinner::new(&format!("Asking {}...", model), colored);
    let result = llm::generate(runner, &model, description);
    spinner.finish_and_clear();
    result
}

/// Show an extracted definition the way it will be written.
pub fn print_candidate(entry: &AliasEntry, colored: bool) {
    println!("{}", ui::info(&format!("Suggested {}:", entry.kind), colored));
    print!("{}", render_entry(entry));
}

pub fn print_raw_output(output: &str, colored: bool) {
    ui::warning("Could not find an alias in the model output:", colored);
    println!("{}", output.trim_end());
}
