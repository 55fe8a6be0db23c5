//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod build;
mod completions;
mod config;
mod eject;
mod extract;
pub mod utils;

pub use build::handle_build;
pub use completions::handle_completions;
pub use config::handle_config;
pub use eject::handle_eject;
pub use extract::handle_extract;
