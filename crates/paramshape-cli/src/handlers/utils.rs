//! Shared utilities for command handlers

use crate::error::{Error, Result};
use paramshape_core::{FieldDescriptor, Mapping};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Path argument that stands for standard input
pub const STDIN_PATH: &str = "-";

/// Whether a path names a YAML file
pub fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false)
}

/// Read the raw text of an input file, or stdin for `-`
pub fn read_text(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }

    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    Ok(fs::read_to_string(path)?)
}

/// Parse input text as YAML or JSON depending on the path
///
/// Syntax errors keep the parser's line and column.
pub fn parse_document(path: &Path, content: &str) -> Result<Value> {
    if is_yaml(path) {
        Ok(serde_yaml::from_str(content)?)
    } else {
        Ok(serde_json::from_str(content)?)
    }
}

/// Load a parameter file that must hold a mapping
pub fn load_mapping(path: &Path) -> Result<Mapping> {
    let content = read_text(path)?;
    match parse_document(path, &content)? {
        Value::Object(map) => Ok(map),
        _ => Err(Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "a mapping at the top level".to_string(),
        }),
    }
}

/// Write a value back to a file, as YAML or pretty JSON depending on the path
pub fn save_document(path: &Path, value: &Value) -> Result<()> {
    if path.as_os_str() == STDIN_PATH {
        return Err(Error::invalid_args("cannot write back to standard input"));
    }

    let content = if is_yaml(path) {
        serde_yaml::to_string(value)?
    } else {
        let mut text = serde_json::to_string_pretty(value)?;
        text.push('\n');
        text
    };

    fs::write(path, content)?;
    Ok(())
}

/// Parse a `KEY` or `KEY=DEFAULT` field argument
///
/// The default is read as JSON when it parses (`3`, `true`, `[1,2]`),
/// otherwise it is taken as a plain string.
pub fn parse_field(argument: &str) -> Result<FieldDescriptor> {
    let descriptor = match argument.split_once('=') {
        Some((key, default)) => {
            let default = serde_json::from_str(default)
                .unwrap_or_else(|_| Value::String(default.to_string()));
            FieldDescriptor::with_default(key, default)
        }
        None => FieldDescriptor::from(argument),
    };

    if descriptor.key().is_empty() {
        return Err(Error::invalid_args(format!(
            "field '{}' has an empty key",
            argument
        )));
    }

    Ok(descriptor)
}
