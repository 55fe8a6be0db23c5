//! Logging utilities for the Paramshape CLI
//!
//! This module provides:
//! - Request ID generation and tracking
//! - Sensitive data redaction for logged parameter files
//! - Performance timing spans
//! - Structured logging setup with console or file output

use crate::config::LoggingConfig;
use crate::error::{Error, Result};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::{field, Span};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Global request ID for the current session
static REQUEST_ID: OnceLock<String> = OnceLock::new();

/// Effective logging settings after verbosity, configuration and environment
#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
    /// Log level filter
    pub level: String,
    /// Output format: compact, full, json
    pub format: LogFormat,
    /// Enable console output
    pub console: bool,
    /// Optional file output path
    pub file: Option<PathBuf>,
    /// Include thread IDs
    pub thread_ids: bool,
    /// Include file and line numbers
    pub source_location: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact format for everyday use
    Compact,
    /// Full format with all details
    Full,
    /// JSON structured format
    Json,
}

impl LogFormat {
    /// Parse a format name, case-insensitively
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "compact" => Some(Self::Compact),
            "full" => Some(Self::Full),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            console: true,
            file: None,
            thread_ids: false,
            source_location: false,
        }
    }
}

impl LogSettings {
    /// Create logging settings from verbosity level
    pub fn from_verbosity(verbosity: u8) -> Self {
        let mut settings = Self::default();

        match verbosity {
            0 => {}
            1 => {
                settings.level = "info".to_string();
            }
            2 => {
                settings.level = "debug".to_string();
                settings.source_location = true;
            }
            _ => {
                settings.level = "trace".to_string();
                settings.format = LogFormat::Full;
                settings.source_location = true;
                settings.thread_ids = true;
            }
        }

        settings
    }

    /// Resolve settings from the command line verbosity and the config file
    ///
    /// An explicit `-v` wins over the configured level; format and file
    /// always come from the configuration unless the environment overrides them.
    pub fn resolve(verbosity: u8, config: &LoggingConfig) -> Self {
        let mut settings = Self::from_verbosity(verbosity);

        if verbosity == 0 {
            settings.level = config.level.clone();
        }
        if let Some(format) = LogFormat::parse(&config.format) {
            if verbosity < 3 {
                settings.format = format;
            }
        }
        if config.file.is_some() {
            settings.file = config.file.clone();
        }

        settings.merge_with_env();
        settings
    }

    /// Apply environment overrides
    pub fn merge_with_env(&mut self) {
        // RUST_LOG takes precedence
        if let Ok(rust_log) = std::env::var("RUST_LOG") {
            self.level = rust_log;
        }

        if let Ok(format) = std::env::var("PARAMSHAPE_LOG_FORMAT") {
            match LogFormat::parse(&format) {
                Some(format) => self.format = format,
                None => eprintln!("Warning: Invalid log format: {}, using default", format),
            }
        }

        if let Ok(file) = std::env::var("PARAMSHAPE_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }

        if let Ok(console) = std::env::var("PARAMSHAPE_LOG_CONSOLE") {
            self.console = console.to_lowercase() == "true" || console == "1";
        }
    }
}

/// Initialize the global logging system
///
/// The returned guard flushes the log file when dropped; keep it alive
/// for the whole run.
pub fn init_logging(settings: LogSettings) -> Result<Option<WorkerGuard>> {
    let env_filter = create_env_filter(&settings);

    let (writer, guard, ansi) = match &settings.file {
        Some(path) => {
            let file_name = path.file_name().ok_or_else(|| {
                Error::config(format!("log file path has no file name: {}", path.display()))
            })?;
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard), false)
        }
        None if settings.console => (
            BoxMakeWriter::new(std::io::stderr),
            None,
            std::io::stderr().is_terminal(),
        ),
        None => (BoxMakeWriter::new(std::io::sink), None, false),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_target(true)
        .with_thread_ids(settings.thread_ids)
        .with_file(settings.source_location)
        .with_line_number(settings.source_location);

    let installed = match settings.format {
        LogFormat::Compact => {
            tracing::subscriber::set_global_default(builder.with_ansi(ansi).compact().finish())
        }
        LogFormat::Json => {
            tracing::subscriber::set_global_default(builder.with_ansi(false).json().finish())
        }
        LogFormat::Full => tracing::subscriber::set_global_default(builder.with_ansi(ansi).finish()),
    };
    installed.map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))?;

    let request_id = REQUEST_ID.get_or_init(generate_request_id);

    tracing::debug!(
        request_id = %request_id,
        settings = ?settings,
        "Logging system initialized"
    );

    Ok(guard)
}

/// Create environment filter based on settings
fn create_env_filter(settings: &LogSettings) -> EnvFilter {
    EnvFilter::try_new(&settings.level).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Generate a unique request ID for this session
pub fn generate_request_id() -> String {
    format!("req_{}", Uuid::new_v4().simple())
}

/// Get the current request ID
pub fn current_request_id() -> Option<&'static str> {
    REQUEST_ID.get().map(|s| s.as_str())
}

/// Create a span with request ID and timing
pub fn create_operation_span(operation: &str, details: Option<&str>) -> Span {
    tracing::info_span!(
        "operation",
        operation = operation,
        request_id = current_request_id().unwrap_or("unknown"),
        details = details.unwrap_or(""),
        duration_ms = field::Empty,
    )
}

/// Sensitive data redaction utilities
pub mod redaction {
    use regex::Regex;
    use serde_json::Value;
    use std::sync::OnceLock;

    const PATTERNS: [&str; 3] = [
        r#"(?i)(api[_-]?key|apikey)[=:\s]+['"]?([a-zA-Z0-9_-]{10,})['"]?"#,
        r#"(?i)(token|bearer)[=:\s]+['"]?([a-zA-Z0-9_.-]{10,})['"]?"#,
        r#"(?i)(password|passwd|pwd)[=:\s]+['"]?([^\s'"]{3,})['"]?"#,
    ];

    fn patterns() -> &'static [Regex] {
        static COMPILED: OnceLock<Vec<Regex>> = OnceLock::new();
        COMPILED.get_or_init(|| PATTERNS.iter().filter_map(|p| Regex::new(p).ok()).collect())
    }

    /// Redact sensitive information from a string
    pub fn redact_sensitive(input: &str) -> String {
        patterns().iter().fold(input.to_string(), |text, regex| {
            regex.replace_all(&text, "$1=***").into_owned()
        })
    }

    /// Redact sensitive information from JSON values
    pub fn redact_json_value(value: &mut Value) {
        match value {
            Value::Object(map) => {
                for (key, val) in map.iter_mut() {
                    if is_sensitive_key(key) {
                        *val = Value::String("***".to_string());
                    } else {
                        redact_json_value(val);
                    }
                }
            }
            Value::Array(arr) => {
                for item in arr.iter_mut() {
                    redact_json_value(item);
                }
            }
            Value::String(s) => {
                *s = redact_sensitive(s);
            }
            _ => {}
        }
    }

    /// Redacted copy of a value, for logging
    pub fn redacted(value: &Value) -> Value {
        let mut copy = value.clone();
        redact_json_value(&mut copy);
        copy
    }

    /// Check if a mapping key names a secret
    pub fn is_sensitive_key(key: &str) -> bool {
        let key_lower = key.to_lowercase();
        key_lower.contains("api_key")
            || key_lower.contains("apikey")
            || key_lower.contains("token")
            || key_lower.contains("password")
            || key_lower.contains("passwd")
            || key_lower.contains("secret")
            || key_lower.contains("credential")
            || key_lower.contains("authorization")
    }
}

/// Performance timing utilities
pub mod timing {
    use std::time::Instant;
    use tracing::Span;

    /// A timer that logs its duration when dropped
    pub struct Timer {
        start: Instant,
        span: Span,
        operation: String,
    }

    impl Timer {
        /// Start timing `operation` inside a new operation span
        pub fn new(operation: &str) -> Self {
            Self::start(operation, None)
        }

        /// Start timing `operation`, recording `details` on the span
        pub fn with_details(operation: &str, details: &str) -> Self {
            Self::start(operation, Some(details))
        }

        fn start(operation: &str, details: Option<&str>) -> Self {
            Self {
                start: Instant::now(),
                span: super::create_operation_span(operation, details),
                operation: operation.to_string(),
            }
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            let duration = self.start.elapsed();
            self.span.record("duration_ms", duration.as_millis() as u64);

            tracing::debug!(
                operation = %self.operation,
                duration_ms = duration.as_millis() as u64,
                "Operation completed"
            );
        }
    }
}
