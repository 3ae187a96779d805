use super::forms::ModelForm;
use crate::error::Result;
use crate::store::{AliasStore, StoreConfig};
use crate::ui;

/// `aliasman model [NAME]`: show or set the model used for generation.
pub fn run(store: &AliasStore, name: Option<&str>, colored: bool) -> Result<()> {
    match name {
        None => {
            let config = store.read_config()?;
            println!("{}", ui::info(&format!("Current model: {}", config.model), colored));
            Ok(())
        }
        Some(name) => {
            let model = set_model(store, name)?;
            ui::success(&format!("Model set to {}", model), colored);
            Ok(())
        }
    }
}

/// Validate `name` and write it to the config line.
pub fn set_model(store: &AliasStore, name: &str) -> Result<String> {
    let model = ModelForm::new(name).into_model()?;
    store.update_config(&StoreConfig::new(model.clone()))?;
    Ok(model)
}
