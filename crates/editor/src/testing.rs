//! In-memory editor host.
//!
//! [`MemoryHost`] implements every host trait over plain data so the gutter
//! can be driven without a real editor. It records every options write and
//! can be told to fail calls for chosen editors, which is how closed-editor
//! races are simulated. [`EventQueue`] is a FIFO [`EditorEventSource`].

use std::collections::{BTreeMap, VecDeque};

use colgutter_gutter::{DecorationStyle, GutterLabel, LabelList};
use colgutter_primitives::{
	CaretPosition, DecorationTypeId, DocumentIdentity, EditorId, EditorOptions, HostError, LineRange,
	NumberingMode,
};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::event::{EditorEvent, EditorEventSource};
use crate::host::{DecorationSink, EditorSnapshot, EditorState, NumberingModeControl};

/// State of one simulated editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEditor {
	/// Document shown.
	pub document: DocumentIdentity,
	/// Lines in the document.
	pub line_count: usize,
	/// Primary caret.
	pub caret: CaretPosition,
	/// Visible spans.
	pub visible_ranges: SmallVec<[LineRange; 2]>,
	/// Current options.
	pub options: EditorOptions,
}

impl MemoryEditor {
	/// Editor on `document` with the caret at 1:1 and nothing visible.
	pub fn new(document: impl Into<DocumentIdentity>, line_count: usize) -> Self {
		Self {
			document: document.into(),
			line_count,
			caret: CaretPosition::default(),
			visible_ranges: SmallVec::new(),
			options: EditorOptions::default(),
		}
	}

	/// Sets the caret.
	pub fn with_caret(mut self, caret: CaretPosition) -> Self {
		self.caret = caret;
		self
	}

	/// Replaces the visible ranges.
	pub fn with_visible(mut self, ranges: impl IntoIterator<Item = LineRange>) -> Self {
		self.visible_ranges = ranges.into_iter().collect();
		self
	}

	/// Sets the native numbering mode.
	pub fn with_numbering(mut self, numbering: NumberingMode) -> Self {
		self.options = self.options.with_numbering(numbering);
		self
	}
}

/// Host backed by in-memory editors.
#[derive(Debug, Default)]
pub struct MemoryHost {
	editors: BTreeMap<EditorId, MemoryEditor>,
	visible: Vec<EditorId>,
	active: Option<EditorId>,
	decoration_types: FxHashMap<DecorationTypeId, DecorationStyle>,
	decorations: FxHashMap<EditorId, (DecorationTypeId, LabelList)>,
	next_decoration: u64,
	option_writes: Vec<(EditorId, EditorOptions)>,
	decoration_writes: usize,
	failing: FxHashSet<EditorId>,
}

impl MemoryHost {
	/// Creates a host with no editors.
	pub fn new() -> Self {
		Self::default()
	}

	/// Opens `editor` on screen. The first editor opened becomes active.
	pub fn open(&mut self, id: EditorId, editor: MemoryEditor) -> &mut Self {
		self.editors.insert(id, editor);
		if !self.visible.contains(&id) {
			self.visible.push(id);
		}
		self.active.get_or_insert(id);
		self
	}

	/// Takes `editor` off screen and forgets it.
	pub fn close(&mut self, id: EditorId) {
		self.editors.remove(&id);
		self.visible.retain(|&visible| visible != id);
		self.decorations.remove(&id);
		if self.active == Some(id) {
			self.active = self.visible.first().copied();
		}
	}

	/// Hides `editor` without closing it.
	pub fn hide(&mut self, id: EditorId) {
		self.visible.retain(|&visible| visible != id);
	}

	/// Focuses `editor`.
	pub fn focus(&mut self, id: Option<EditorId>) {
		self.active = id;
	}

	/// Makes every host call for `editor` fail as if it had just closed.
	pub fn fail_editor(&mut self, id: EditorId) {
		self.failing.insert(id);
	}

	/// Mutable access to an editor's state.
	pub fn editor_mut(&mut self, id: EditorId) -> Option<&mut MemoryEditor> {
		self.editors.get_mut(&id)
	}

	/// Current labels drawn in `editor`.
	pub fn labels(&self, id: EditorId) -> Option<&[GutterLabel]> {
		self.decorations.get(&id).map(|(_, labels)| labels.as_slice())
	}

	/// Native numbering mode currently applied to `editor`.
	pub fn numbering(&self, id: EditorId) -> Option<NumberingMode> {
		self.editors.get(&id).map(|editor| editor.options.numbering)
	}

	/// Every options write in order.
	pub fn option_writes(&self) -> &[(EditorId, EditorOptions)] {
		&self.option_writes
	}

	/// Number of `set_decorations` calls that succeeded.
	pub fn decoration_writes(&self) -> usize {
		self.decoration_writes
	}

	/// Registered decoration types that have not been disposed.
	pub fn live_decoration_types(&self) -> usize {
		self.decoration_types.len()
	}

	/// Style of a registered decoration type.
	pub fn decoration_style(&self, id: DecorationTypeId) -> Option<&DecorationStyle> {
		self.decoration_types.get(&id)
	}

	fn check(&self, editor: EditorId) -> Result<(), HostError> {
		if self.failing.contains(&editor) || !self.editors.contains_key(&editor) {
			return Err(HostError::EditorClosed(editor));
		}
		Ok(())
	}
}

impl EditorState for MemoryHost {
	fn visible_editors(&self) -> Vec<EditorId> {
		self.visible.clone()
	}

	fn active_editor(&self) -> Option<EditorId> {
		self.active
	}

	fn editor_state(&self, editor: EditorId) -> Result<EditorSnapshot, HostError> {
		self.check(editor)?;
		let state = self.editors.get(&editor).ok_or(HostError::EditorClosed(editor))?;
		Ok(EditorSnapshot {
			editor,
			document: state.document.clone(),
			line_count: state.line_count,
			caret: state.caret,
			visible_ranges: state.visible_ranges.clone(),
			options: state.options,
		})
	}
}

impl DecorationSink for MemoryHost {
	fn create_decoration_type(&mut self, style: &DecorationStyle) -> DecorationTypeId {
		self.next_decoration += 1;
		let id = DecorationTypeId(self.next_decoration);
		self.decoration_types.insert(id, style.clone());
		id
	}

	fn set_decorations(
		&mut self,
		editor: EditorId,
		decoration: DecorationTypeId,
		labels: &[GutterLabel],
	) -> Result<(), HostError> {
		self.check(editor)?;
		if !self.decoration_types.contains_key(&decoration) {
			return Err(HostError::Rejected {
				editor,
				reason: format!("unknown decoration type {}", decoration.0),
			});
		}
		self.decorations.insert(editor, (decoration, labels.to_vec()));
		self.decoration_writes += 1;
		Ok(())
	}

	fn dispose_decoration_type(&mut self, decoration: DecorationTypeId) {
		self.decoration_types.remove(&decoration);
		self.decorations.retain(|_, (kind, _)| *kind != decoration);
	}
}

impl NumberingModeControl for MemoryHost {
	fn set_options(&mut self, editor: EditorId, options: EditorOptions) -> Result<(), HostError> {
		self.check(editor)?;
		let state = self.editors.get_mut(&editor).ok_or(HostError::EditorClosed(editor))?;
		state.options = options;
		self.option_writes.push((editor, options));
		Ok(())
	}
}

/// FIFO queue of pending editor events.
#[derive(Debug, Default)]
pub struct EventQueue {
	events: VecDeque<EditorEvent>,
}

impl EventQueue {
	/// Creates an empty queue.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends an event.
	pub fn push(&mut self, event: EditorEvent) -> &mut Self {
		self.events.push_back(event);
		self
	}

	/// Number of pending events.
	pub fn len(&self) -> usize {
		self.events.len()
	}

	/// Returns true if no events are pending.
	pub fn is_empty(&self) -> bool {
		self.events.is_empty()
	}
}

impl EditorEventSource for EventQueue {
	fn next_event(&mut self) -> Option<EditorEvent> {
		self.events.pop_front()
	}
}

impl FromIterator<EditorEvent> for EventQueue {
	fn from_iter<I: IntoIterator<Item = EditorEvent>>(iter: I) -> Self {
		Self {
			events: iter.into_iter().collect(),
		}
	}
}
