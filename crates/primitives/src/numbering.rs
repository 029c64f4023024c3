use std::fmt;

use serde::{Deserialize, Serialize};

/// How the host editor draws its native line numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberingMode {
	/// Absolute number on every line.
	#[default]
	On,
	/// Distance from the caret line.
	Relative,
	/// No native numbers.
	Off,
	/// A number every few lines.
	Interval,
}

impl NumberingMode {
	/// Returns true if the host draws any native numbers in this mode.
	pub fn is_visible(self) -> bool {
		!matches!(self, Self::Off)
	}

	/// Kebab-case name, matching the serialized form.
	pub fn name(self) -> &'static str {
		match self {
			Self::On => "on",
			Self::Relative => "relative",
			Self::Off => "off",
			Self::Interval => "interval",
		}
	}
}

impl fmt::Display for NumberingMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
