//! Application settings.
//!
//! These are the settings of the tool itself (colours, model CLI, file
//! locations). The model used for generation is stored separately, in the
//! config comment of the alias file.

mod loader;
mod structs;


pub use loader::{get_config_dir, get_config_path, load_config, load_config_from};
pub use structs::*;
