use crate::range::LineIdx;

/// Primary caret position.
///
/// `line` is zero-based. `column` is one-based: it is the caret's character
/// offset within the line plus one, and is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaretPosition {
	line: LineIdx,
	column: usize,
}

impl CaretPosition {
	/// Creates a caret from a zero-based line and one-based column.
	///
	/// A column of zero is bumped to one.
	pub fn new(line: LineIdx, column: usize) -> Self {
		Self {
			line,
			column: column.max(1),
		}
	}

	/// Creates a caret from a zero-based line and zero-based character offset.
	pub fn from_offset(line: LineIdx, character: usize) -> Self {
		Self::new(line, character.saturating_add(1))
	}

	/// Zero-based line index.
	#[inline]
	pub fn line(&self) -> LineIdx {
		self.line
	}

	/// One-based column.
	#[inline]
	pub fn column(&self) -> usize {
		self.column
	}

	/// Zero-based character offset within the line.
	#[inline]
	pub fn character(&self) -> usize {
		self.column - 1
	}

	/// Returns a caret whose line is at most `max_line`.
	pub fn clamp_line(self, max_line: LineIdx) -> Self {
		Self {
			line: self.line.min(max_line),
			column: self.column,
		}
	}
}

impl Default for CaretPosition {
	fn default() -> Self {
		Self::new(0, 1)
	}
}
