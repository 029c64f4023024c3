//! Presentation contract for a single label overlay.

/// How the host must draw a label.
///
/// Every label is a fixed-width box anchored to column 0 of its line. Text is
/// right-aligned inside the box, the box never wraps or reflows with the
/// line's text, and it is painted with the editor background so it reads as
/// a gutter rather than inline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelLayout {
	/// Box width in character cells (label width plus one cell of padding).
	pub width: usize,
	/// Cells of padding between the label text and the line's text.
	pub padding_right: usize,
	/// Stacking order above the text layer.
	pub z_index: u16,
}

impl LabelLayout {
	/// Layout for labels of `label_width` characters.
	pub fn new(label_width: usize, z_index: u16) -> Self {
		Self {
			width: label_width + 1,
			padding_right: 1,
			z_index,
		}
	}

	/// Renders the layout as an inline style string for webview-based hosts.
	///
	/// The leading `none;` closes the `text-decoration` property the string
	/// is injected into.
	pub fn css(&self) -> String {
		format!(
			"none; left: 0; z-index: {}; display: inline-block; width: {}ch; text-align: right; padding-right: {}ch; background-color: var(--vscode-editor-background);",
			self.z_index, self.width, self.padding_right
		)
	}
}
