use crate::numbering::NumberingMode;

/// Snapshot of an editor's options.
///
/// Values are never mutated in place. To change one field, build a new
/// snapshot from the current one (see [`EditorOptions::with_numbering`]) and
/// hand the whole value back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
	/// Native line-number display mode.
	pub numbering: NumberingMode,
	/// Width of a tab stop in columns.
	pub tab_size: u32,
	/// Whether indentation inserts spaces instead of tabs.
	pub insert_spaces: bool,
}

impl EditorOptions {
	/// Returns a copy of these options with a different numbering mode.
	#[must_use]
	pub fn with_numbering(self, numbering: NumberingMode) -> Self {
		Self { numbering, ..self }
	}
}

impl Default for EditorOptions {
	fn default() -> Self {
		Self {
			numbering: NumberingMode::On,
			tab_size: 4,
			insert_spaces: true,
		}
	}
}
