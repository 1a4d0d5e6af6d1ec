use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "mascot-registry")]
#[command(about = "Ring category taxonomy and mascot trigger lookup")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.mascot-registry)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Registry definition file (overrides registry.file)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Do not layer builtin triggers under the definition file
    #[arg(long, global = true)]
    pub no_builtin: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the category taxonomy
    Taxonomy {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up the mascot trigger for a combination
    Lookup {
        /// Ring type (e.g., engagement, cocktail)
        ring_type: String,

        /// Material (e.g., platinum, yellow_gold)
        material: String,

        /// Gemstone (e.g., diamond, amethyst)
        gemstone: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all registered triggers
    Triggers {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a registry definition file
    Validate {
        /// Definition file (default: --file or registry.file)
        path: Option<PathBuf>,
    },

    /// Print the registry as a TOML definition
    Export,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., registry.file)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., registry.include_builtin)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Create config file with default template
    Init,
}
