//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use crate::config::Config;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Paramshape CLI - build, extract and eject mappings from parameter files
///
/// Reads JSON or YAML parameter files and reshapes them with the same
/// field-specification language the library uses.
#[derive(Parser, Debug)]
#[command(
    name = "paramshape",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PARAMSHAPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results (defaults to the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a mapping from a file of flattened (source, spec) arguments
    Build(BuildArgs),

    /// Extract fields, with optional defaults, from a parameter file
    Extract(ExtractArgs),

    /// Remove keys from a parameter file and print their values
    Eject(EjectArgs),

    /// Manage configuration files and settings
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the build command
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// File holding the argument array (JSON or YAML, `-` for stdin)
    #[arg(value_name = "ARGS")]
    pub input: PathBuf,

    /// Output file path (stdout if not specified)
    #[arg(long = "save-to")]
    pub output_file: Option<PathBuf>,
}

/// Arguments for the extract command
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Parameter file (JSON or YAML object, `-` for stdin)
    #[arg(value_name = "PARAM")]
    pub param: PathBuf,

    /// Field to extract; `key=default` parses the default as JSON when possible
    #[arg(short, long = "field", value_name = "KEY[=DEFAULT]")]
    pub fields: Vec<String>,

    /// Return the values as a list instead of a mapping
    #[arg(long)]
    pub list: bool,
}

/// Arguments for the eject command
#[derive(Parser, Debug)]
pub struct EjectArgs {
    /// Parameter file (JSON or YAML object)
    #[arg(value_name = "PARAM")]
    pub param: PathBuf,

    /// Keys to eject, in order
    #[arg(value_name = "KEY", required = true)]
    pub keys: Vec<String>,

    /// Also print the mapping left after ejecting
    #[arg(long)]
    pub show_remaining: bool,

    /// Write the remaining mapping back to PARAM
    #[arg(long)]
    pub write: bool,
}

/// Arguments for config management
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Configuration action to perform
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show(ConfigShowArgs),

    /// Write a default project configuration file
    Init(ConfigInitArgs),

    /// List the configuration file locations that are searched
    Path,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,
}

/// Arguments for config init
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file (defaults to .paramshape.toml)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Force overwrite existing config files
    #[arg(long)]
    pub force: bool,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Resolve the output format: flag first, then configuration
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        self.output
            .or_else(|| OutputFormat::from_str(&config.output.format, true).ok())
            .unwrap_or(OutputFormat::Human)
    }

    /// Check if colored output should be used
    pub fn use_color(&self, config: &Config) -> bool {
        !self.no_color && config.output.color && std::io::stdout().is_terminal()
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
