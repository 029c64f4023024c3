//! Gutter configuration.
//!
//! Loaded from a small TOML file. Every field is optional and defaults to
//! the look of the stock gutter:
//!
//! ```toml
//! foreground = "#888"
//! bold = true
//! min-column-digits = 2
//! z-index = 10
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Fewest digits reserved for the caret column in a label.
pub const DEFAULT_MIN_COLUMN_DIGITS: usize = 2;

/// Stacking order of the label overlay above the text layer.
pub const DEFAULT_Z_INDEX: u16 = 10;

/// User-facing gutter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct GutterConfig {
	/// Label text color, in any form the host understands (usually `#rgb`).
	pub foreground: String,
	/// Draw labels in bold.
	pub bold: bool,
	/// Column digits always reserved, so moving from column 9 to 10 does not
	/// widen the gutter.
	pub min_column_digits: usize,
	/// Stacking order of the overlay.
	pub z_index: u16,
}

impl Default for GutterConfig {
	fn default() -> Self {
		Self {
			foreground: "#888".to_string(),
			bold: true,
			min_column_digits: DEFAULT_MIN_COLUMN_DIGITS,
			z_index: DEFAULT_Z_INDEX,
		}
	}
}

impl GutterConfig {
	/// Parses and validates configuration from TOML text.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Loads configuration from `path`.
	///
	/// A missing file yields the defaults. A file that exists but does not
	/// parse is an error.
	pub fn load(path: &Path) -> Result<Self> {
		let content = match std::fs::read_to_string(path) {
			Ok(content) => content,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				tracing::debug!(path = %path.display(), "No gutter config, using defaults");
				return Ok(Self::default());
			}
			Err(error) => {
				return Err(ConfigError::Io {
					path: path.to_path_buf(),
					error,
				});
			}
		};
		Self::from_toml_str(&content)
	}

	/// Checks value ranges that the type system does not.
	pub fn validate(&self) -> Result<()> {
		if self.foreground.trim().is_empty() {
			return Err(ConfigError::Invalid {
				field: "foreground",
				reason: "must not be empty".to_string(),
			});
		}
		if !(1..=9).contains(&self.min_column_digits) {
			return Err(ConfigError::Invalid {
				field: "min-column-digits",
				reason: format!("expected 1..=9, got {}", self.min_column_digits),
			});
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn empty_input_gives_defaults() {
		assert_eq!(GutterConfig::from_toml_str("").unwrap(), GutterConfig::default());
	}

	#[test]
	fn partial_override_keeps_other_defaults() {
		let config = GutterConfig::from_toml_str("bold = false\nz-index = 3").unwrap();
		assert!(!config.bold);
		assert_eq!(config.z_index, 3);
		assert_eq!(config.foreground, "#888");
		assert_eq!(config.min_column_digits, DEFAULT_MIN_COLUMN_DIGITS);
	}

	#[test]
	fn unknown_field_is_rejected() {
		let err = GutterConfig::from_toml_str("colour = \"red\"").unwrap_err();
		assert!(matches!(err, ConfigError::Toml(_)));
	}

	#[test]
	fn out_of_range_digits_are_rejected() {
		let err = GutterConfig::from_toml_str("min-column-digits = 0").unwrap_err();
		assert!(matches!(
			err,
			ConfigError::Invalid {
				field: "min-column-digits",
				..
			}
		));
	}

	#[test]
	fn blank_foreground_is_rejected() {
		let err = GutterConfig::from_toml_str("foreground = \"  \"").unwrap_err();
		assert!(matches!(err, ConfigError::Invalid { field: "foreground", .. }));
	}

	#[test]
	fn load_missing_file_gives_defaults() {
		let dir = tempfile::tempdir().unwrap();
		let config = GutterConfig::load(&dir.path().join("gutter.toml")).unwrap();
		assert_eq!(config, GutterConfig::default());
	}

	#[test]
	fn load_reads_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("gutter.toml");
		let mut file = std::fs::File::create(&path).unwrap();
		writeln!(file, "foreground = \"#abcdef\"\nmin-column-digits = 3").unwrap();

		let config = GutterConfig::load(&path).unwrap();
		assert_eq!(config.foreground, "#abcdef");
		assert_eq!(config.min_column_digits, 3);
	}

	#[test]
	fn load_malformed_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("gutter.toml");
		std::fs::write(&path, "bold = ").unwrap();
		assert!(GutterConfig::load(&path).is_err());
	}
}
