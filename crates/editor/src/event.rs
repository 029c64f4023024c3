//! Editor notifications.

use colgutter_primitives::{DocumentIdentity, EditorId};

/// A change in the host that may affect gutter labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
	/// The caret or selection moved in an editor.
	SelectionChanged(EditorId),
	/// Focus moved to another editor, or away from all editors.
	ActiveEditorChanged(Option<EditorId>),
	/// An editor scrolled, resized, or folded.
	VisibleRangesChanged(EditorId),
	/// A document's content changed.
	DocumentChanged(DocumentIdentity),
	/// The set of on-screen editors changed.
	VisibleEditorsChanged(Vec<EditorId>),
}

impl EditorEvent {
	/// Routes the event to the matching handler method.
	pub fn dispatch<H, T>(self, handler: &mut T, host: &mut H)
	where
		H: ?Sized,
		T: EditorEventHandler<H> + ?Sized,
	{
		match self {
			Self::SelectionChanged(editor) => handler.selection_changed(host, editor),
			Self::ActiveEditorChanged(editor) => handler.active_editor_changed(host, editor),
			Self::VisibleRangesChanged(editor) => handler.visible_ranges_changed(host, editor),
			Self::DocumentChanged(document) => handler.document_changed(host, &document),
			Self::VisibleEditorsChanged(editors) => handler.visible_editors_changed(host, &editors),
		}
	}
}

/// One handler per event kind.
pub trait EditorEventHandler<H: ?Sized> {
	/// See [`EditorEvent::SelectionChanged`].
	fn selection_changed(&mut self, host: &mut H, editor: EditorId);
	/// See [`EditorEvent::ActiveEditorChanged`].
	fn active_editor_changed(&mut self, host: &mut H, editor: Option<EditorId>);
	/// See [`EditorEvent::VisibleRangesChanged`].
	fn visible_ranges_changed(&mut self, host: &mut H, editor: EditorId);
	/// See [`EditorEvent::DocumentChanged`].
	fn document_changed(&mut self, host: &mut H, document: &DocumentIdentity);
	/// See [`EditorEvent::VisibleEditorsChanged`].
	fn visible_editors_changed(&mut self, host: &mut H, editors: &[EditorId]);
}

/// Producer of editor notifications.
pub trait EditorEventSource {
	/// Next pending event, or `None` when the source is drained.
	fn next_event(&mut self) -> Option<EditorEvent>;
}
