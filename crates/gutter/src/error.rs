//! Error types for gutter configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading gutter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or structure.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A field parsed but holds an unusable value.
	#[error("invalid value for '{field}': {reason}")]
	Invalid {
		/// Kebab-case field name as written in the file.
		field: &'static str,
		/// What is wrong with it.
		reason: String,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
