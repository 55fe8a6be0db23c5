//! Build command handler

use super::utils::{is_yaml, read_text, save_document};
use crate::cli::BuildArgs;
use crate::error::{Error, Result};
use crate::logging::{redaction, timing::Timer};
use crate::output::OutputWriter;
use serde_json::Value;
use std::path::Path;

/// Handle the build command
pub fn handle_build(args: BuildArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("build", &args.input.display().to_string());

    let arguments = load_arguments(&args.input)?;
    tracing::debug!(
        count = arguments.len(),
        arguments = %serde_json::Value::Array(arguments.iter().map(redaction::redacted).collect()),
        "Loaded builder arguments"
    );

    if arguments.len() % 2 == 1 {
        output.warning("Odd number of arguments; the trailing source is ignored")?;
    }

    let result = paramshape_core::build_flat(&arguments)?;
    output.info(&format!(
        "Built mapping with {} key(s) from {} argument(s)",
        result.len(),
        arguments.len()
    ))?;

    match args.output_file {
        Some(path) => {
            save_document(&path, &Value::Object(result))?;
            output.success(&format!("✓ Saved mapping to {}", path.display()))
        }
        None => output.mapping(&result),
    }
}

/// Read the flattened argument array from JSON or YAML
fn load_arguments(path: &Path) -> Result<Vec<Value>> {
    let content = read_text(path)?;

    if !is_yaml(path) {
        return Ok(paramshape_core::parse_arguments(&content)?);
    }

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Array(items) => Ok(items),
        _ => Err(Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "a list of builder arguments".to_string(),
        }),
    }
}
