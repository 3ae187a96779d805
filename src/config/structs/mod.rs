mod app;
mod llm;
mod paths;

pub use app::{AppConfig, UIConfig};
pub use llm::LLMConfig;
pub use paths::PathsConfig;
