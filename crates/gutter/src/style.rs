//! Decoration type registered once with the host.

use crate::config::GutterConfig;

/// Look shared by every label of the gutter.
///
/// The host registers one decoration type from this and every render reuses
/// it, so label sets can be replaced wholesale without re-registering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecorationStyle {
	/// Label text color.
	pub foreground: String,
	/// Bold label text.
	pub bold: bool,
	/// Decoration spans the whole line, so the label stays put when the
	/// caret moves within it.
	pub whole_line: bool,
}

impl DecorationStyle {
	/// Builds the decoration style for a configuration.
	pub fn from_config(config: &GutterConfig) -> Self {
		Self {
			foreground: config.foreground.clone(),
			bold: config.bold,
			whole_line: true,
		}
	}
}

impl Default for DecorationStyle {
	fn default() -> Self {
		Self::from_config(&GutterConfig::default())
	}
}
