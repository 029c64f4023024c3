use std::ops::RangeInclusive;

/// A zero-based line index into a document.
pub type LineIdx = usize;

/// A contiguous span of lines as reported by the host, inclusive on both ends.
///
/// Host reports are not trusted: `start` may be negative, `end` may run past
/// the last line, and `start > end` denotes an empty span. Use
/// [`LineRange::clamp`] to get indices that are valid for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineRange {
	/// First line of the span.
	pub start: isize,
	/// Last line of the span (inclusive).
	pub end: isize,
}

impl LineRange {
	/// Creates a new range from `start` to `end`, both inclusive.
	pub fn new(start: isize, end: isize) -> Self {
		Self { start, end }
	}

	/// Creates a range covering a single line.
	pub fn line(line: isize) -> Self {
		Self::new(line, line)
	}

	/// Returns true if the range covers no lines before clamping.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start > self.end
	}

	/// Clamps the range to a document of `line_count` lines.
	///
	/// Returns `None` when nothing of the range falls inside `[0, line_count - 1]`.
	pub fn clamp(&self, line_count: usize) -> Option<RangeInclusive<LineIdx>> {
		if line_count == 0 || self.end < 0 {
			return None;
		}
		let last = line_count - 1;
		let start = usize::try_from(self.start.max(0)).ok()?;
		let end = usize::try_from(self.end).ok()?.min(last);
		(start <= end).then_some(start..=end)
	}
}

impl From<RangeInclusive<isize>> for LineRange {
	fn from(range: RangeInclusive<isize>) -> Self {
		Self::new(*range.start(), *range.end())
	}
}
