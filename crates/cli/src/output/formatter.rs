//! Output formatter for human-readable and JSON output
//!
//! Ensures consistent output formatting across all commands. When JSON mode
//! is enabled, all output is strict JSON without colors.

use serde::Serialize;

use super::OutputConfig;

/// Formatter for CLI output
#[derive(Debug, Clone)]
pub struct Formatter {
    config: OutputConfig,
}

impl Formatter {
    /// Create a new formatter with the given configuration
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Check if JSON output mode is enabled
    pub fn is_json(&self) -> bool {
        self.config.json
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.config.quiet
    }

    /// Check if colors are enabled
    pub fn colors_enabled(&self) -> bool {
        !self.config.no_color && !self.config.json && console::colors_enabled()
    }

    /// Print a block of human-readable text
    ///
    /// Suppressed in quiet and JSON modes.
    pub fn text(&self, text: &str) {
        if self.config.quiet || self.config.json {
            return;
        }
        println!("{text}");
    }

    /// Serialize a value as pretty JSON
    ///
    /// Only emits in JSON mode; human rendering is each command's job.
    pub fn json<T: Serialize>(&self, value: &T) {
        if !self.config.json || self.config.quiet {
            return;
        }
        match serde_json::to_string_pretty(value) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error serializing output: {e}"),
        }
    }

    /// Output an error message
    ///
    /// Errors are always printed, even in quiet mode.
    pub fn error(&self, message: &str) {
        if self.config.json {
            let error = serde_json::json!({ "error": message });
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&error).unwrap_or_else(|_| message.to_string())
            );
        } else if self.colors_enabled() {
            eprintln!("{} {message}", console::style("✗").red());
        } else {
            eprintln!("✗ {message}");
        }
    }
}
