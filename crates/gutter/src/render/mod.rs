//! Label computation for the simulated gutter.
//!
//! [`render`] is stateless: it reads a document's line count, the caret and
//! the host's visible ranges, and produces one label per visible line. The
//! label width is recomputed on every call, so a document crossing a power
//! of ten or a caret moving to a wider column reflows every label at once.

use std::collections::BTreeSet;

use colgutter_primitives::{CaretPosition, LineIdx, LineRange};

use crate::config::{DEFAULT_MIN_COLUMN_DIGITS, GutterConfig};
use crate::layout::LabelLayout;


/// Everything a render reads from the editor.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
	/// Lines in the document.
	pub line_count: usize,
	/// Primary caret.
	pub caret: CaretPosition,
	/// Visible spans as reported by the host, unclamped.
	pub visible_ranges: &'a [LineRange],
}

/// One label, ready for the host's decoration sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GutterLabel {
	/// Line the label is anchored to.
	pub line: LineIdx,
	/// `line-column` on the caret line, blank padding elsewhere.
	pub text: String,
	/// Overlay presentation.
	pub layout: LabelLayout,
}

impl GutterLabel {
	/// Returns true for padding labels (every line but the caret line).
	pub fn is_blank(&self) -> bool {
		self.text.bytes().all(|b| b == b' ')
	}
}

/// Labels sorted strictly ascending by line.
pub type LabelList = Vec<GutterLabel>;

/// Number of decimal digits in `n`; zero counts as one digit.
#[inline]
pub fn digits(n: usize) -> usize {
	n.max(1).ilog10() as usize + 1
}

/// Characters needed for a `line-column` label with the stock column reserve.
///
/// `digits(line_count) + 1 + max(2, digits(column))`.
pub fn label_width(line_count: usize, column: usize) -> usize {
	label_width_with(line_count, column, DEFAULT_MIN_COLUMN_DIGITS)
}

/// [`label_width`] with a custom minimum column reserve.
pub fn label_width_with(line_count: usize, column: usize, min_column_digits: usize) -> usize {
	digits(line_count) + 1 + digits(column).max(min_column_digits)
}

/// Lines that need a label, ascending and deduplicated.
///
/// Each range is clamped to the document and dropped if nothing remains.
/// When no range survives in a non-empty document the caret line is used,
/// so folded or zero-height views still show the caret label.
pub fn visible_lines(line_count: usize, caret_line: LineIdx, ranges: &[LineRange]) -> BTreeSet<LineIdx> {
	let mut lines: BTreeSet<LineIdx> = ranges
		.iter()
		.filter_map(|range| range.clamp(line_count))
		.flatten()
		.collect();

	if lines.is_empty() && line_count > 0 {
		lines.insert(caret_line.min(line_count - 1));
	}
	lines
}

/// Computes the gutter labels for one editor.
pub fn render(input: &RenderInput<'_>, config: &GutterConfig) -> LabelList {
	if input.line_count == 0 {
		tracing::trace!("Empty document, no gutter labels");
		return LabelList::new();
	}

	let caret = input.caret.clamp_line(input.line_count - 1);
	if caret.line() != input.caret.line() {
		tracing::trace!(
			caret_line = input.caret.line(),
			line_count = input.line_count,
			"Caret past end of document, clamping"
		);
	}

	let width = label_width_with(input.line_count, caret.column(), config.min_column_digits);
	let layout = LabelLayout::new(width, config.z_index);
	let blank = " ".repeat(width);

	let labels: LabelList = visible_lines(input.line_count, caret.line(), input.visible_ranges)
		.into_iter()
		.map(|line| GutterLabel {
			line,
			text: if line == caret.line() {
				format!("{}-{}", line + 1, caret.column())
			} else {
				blank.clone()
			},
			layout,
		})
		.collect();

	tracing::trace!(
		line_count = input.line_count,
		caret_line = caret.line(),
		column = caret.column(),
		width,
		labels = labels.len(),
		"Rendered gutter labels"
	);
	labels
}
