//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigInitArgs, ConfigShowArgs};
use crate::config::{Config, PROJECT_CONFIG_FILE};
use crate::error::Result;
use crate::output::OutputWriter;
use std::path::PathBuf;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Show(show_args) => handle_config_show(show_args, config, output),
        ConfigAction::Init(init_args) => handle_config_init(init_args, output),
        ConfigAction::Path => handle_config_path(output),
    }
}

/// Handle config show subcommand
fn handle_config_show(
    args: ConfigShowArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let content = config.render(args.format)?;
    output.write(&content)?;
    if !content.ends_with('\n') {
        output.writeln("")?;
    }
    Ok(())
}

/// Handle config init subcommand
fn handle_config_init(args: ConfigInitArgs, output: &mut OutputWriter) -> Result<()> {
    let path = args
        .path
        .unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG_FILE));

    if path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        ))?;
        return Ok(());
    }

    Config::default().save(&path)?;
    output.success(&format!("✓ Created config at {}", path.display()))?;
    output.info("Edit it to customize output and logging settings.")
}

/// Handle config path subcommand
fn handle_config_path(output: &mut OutputWriter) -> Result<()> {
    for path in Config::default_config_paths() {
        let marker = if path.exists() { "*" } else { " " };
        output.writeln(&format!("{} {}", marker, path.display()))?;
    }
    Ok(())
}
