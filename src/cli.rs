use clap::{Parser, Subcommand, builder::styling};

const STYLES: styling::Styles = styling::Styles::styled()
    .header(styling::AnsiColor::Green.on_default().bold())
    .usage(styling::AnsiColor::Green.on_default().bold())
    .literal(styling::AnsiColor::Cyan.on_default().bold())
    .placeholder(styling::AnsiColor::Cyan.on_default());

/// Manage shell aliases and functions, optionally generated by a language model.
///
/// Run without a subcommand for interactive mode.
#[derive(Parser)]
#[command(name = "aliasman")]
#[command(author, version, about, long_about = None)]
#[command(styles = STYLES)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print all aliases and functions
    List,

    /// Add an alias, or a function composed in your editor
    Add {
        /// Alias or function name
        name: String,

        /// Compose a function body in $EDITOR instead of an alias
        #[arg(short, long, conflicts_with = "command")]
        function: bool,

        /// Command the alias runs
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Remove an alias by name
    Remove {
        /// Alias name
        name: String,
    },

    /// Generate an alias from a description with the language model
    Generate {
        /// Save without asking for confirmation
        #[arg(short = 'y', long)]
        yes: bool,

        /// What the alias should do
        #[arg(trailing_var_arg = true, required = true)]
        description: Vec<String>,
    },

    /// Show or set the model used for generation
    Model {
        /// New model name
        name: Option<String>,
    },

    /// Check the shell integration and install it if missing
    Install,
}
