//! Common utilities for gutter integration tests.

use colgutter_editor::testing::{MemoryEditor, MemoryHost};
use colgutter_editor::{GutterConfig, LineColumnGutter};
use colgutter_primitives::{CaretPosition, EditorId, LineRange, NumberingMode};

pub const MAIN: EditorId = EditorId(10);
pub const SPLIT: EditorId = EditorId(11);
pub const OTHER: EditorId = EditorId(20);

pub const MAIN_DOC: &str = "file:///workspace/src/main.rs";
pub const OTHER_DOC: &str = "file:///workspace/README.md";

/// Host with the same document in two splits plus one unrelated editor.
pub fn workspace_host() -> MemoryHost {
	let _ = tracing_subscriber::fmt::try_init();
	let mut host = MemoryHost::new();
	host.open(
		MAIN,
		MemoryEditor::new(MAIN_DOC, 100)
			.with_caret(CaretPosition::new(5, 3))
			.with_visible([LineRange::new(0, 20)]),
	)
	.open(
		SPLIT,
		MemoryEditor::new(MAIN_DOC, 100)
			.with_caret(CaretPosition::new(60, 1))
			.with_visible([LineRange::new(50, 70)]),
	)
	.open(
		OTHER,
		MemoryEditor::new(OTHER_DOC, 8)
			.with_numbering(NumberingMode::Interval)
			.with_visible([LineRange::new(0, 7)]),
	);
	host
}

/// Activates the gutter with default settings.
pub fn activate(host: &mut MemoryHost) -> LineColumnGutter {
	LineColumnGutter::activate(GutterConfig::default(), host)
}

/// `(line, text)` pairs currently drawn in `editor`.
pub fn drawn(host: &MemoryHost, editor: EditorId) -> Vec<(usize, String)> {
	host.labels(editor)
		.unwrap_or_default()
		.iter()
		.map(|label| (label.line, label.text.clone()))
		.collect()
}
