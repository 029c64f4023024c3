//! Collaborator traits implemented by the editor host.
//!
//! The gutter never talks to an editor directly. It reads
//! [`EditorSnapshot`]s through [`EditorState`], hands labels to a
//! [`DecorationSink`], and flips native numbering through
//! [`NumberingModeControl`]. [`EditorHost`] bundles all three.

use colgutter_gutter::{DecorationStyle, GutterLabel, RenderInput};
pub use colgutter_gutter::NumberingModeControl;
use colgutter_primitives::{
	CaretPosition, DecorationTypeId, DocumentIdentity, EditorId, EditorOptions, HostError, LineRange,
};
use smallvec::SmallVec;

/// Read-only view of one editor at the time of a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSnapshot {
	/// Editor this snapshot was taken from.
	pub editor: EditorId,
	/// Document shown in the editor.
	pub document: DocumentIdentity,
	/// Lines in the document.
	pub line_count: usize,
	/// Primary caret.
	pub caret: CaretPosition,
	/// Visible spans, as reported by the host.
	pub visible_ranges: SmallVec<[LineRange; 2]>,
	/// Current editor options, including the native numbering mode.
	pub options: EditorOptions,
}

impl EditorSnapshot {
	/// Borrows the fields the renderer reads.
	pub fn render_input(&self) -> RenderInput<'_> {
		RenderInput {
			line_count: self.line_count,
			caret: self.caret,
			visible_ranges: &self.visible_ranges,
		}
	}
}

/// Read access to the host's editors.
pub trait EditorState {
	/// Editors currently on screen, in host order.
	fn visible_editors(&self) -> Vec<EditorId>;

	/// Editor with keyboard focus, if any.
	fn active_editor(&self) -> Option<EditorId>;

	/// Snapshot of `editor`, or an error if it is gone.
	fn editor_state(&self, editor: EditorId) -> Result<EditorSnapshot, HostError>;
}

/// Consumer of rendered labels.
pub trait DecorationSink {
	/// Registers the decoration type every label set is drawn with.
	fn create_decoration_type(&mut self, style: &DecorationStyle) -> DecorationTypeId;

	/// Replaces all of `editor`'s decorations of type `decoration` with `labels`.
	///
	/// Not incremental: the previous label set for the editor is discarded.
	fn set_decorations(
		&mut self,
		editor: EditorId,
		decoration: DecorationTypeId,
		labels: &[GutterLabel],
	) -> Result<(), HostError>;

	/// Unregisters a decoration type, removing its labels from every editor.
	fn dispose_decoration_type(&mut self, decoration: DecorationTypeId);
}

/// Everything the gutter needs from a host.
pub trait EditorHost: EditorState + DecorationSink + NumberingModeControl {}

impl<T> EditorHost for T where T: EditorState + DecorationSink + NumberingModeControl + ?Sized {}
