use colgutter_editor::EditorEvent;
use colgutter_editor::testing::{EventQueue, MemoryEditor};
use colgutter_primitives::{CaretPosition, EditorId, LineRange, NumberingMode};
use pretty_assertions::assert_eq;

use crate::common::{MAIN, MAIN_DOC, OTHER, OTHER_DOC, SPLIT, activate, drawn, workspace_host};

#[test]
fn native_numbers_are_suppressed_then_restored() {
	let mut host = workspace_host();
	let gutter = activate(&mut host);

	for editor in [MAIN, SPLIT, OTHER] {
		assert_eq!(host.numbering(editor), Some(NumberingMode::Off));
	}
	assert_eq!(gutter.suppressor().original_mode(&MAIN_DOC.into()), Some(NumberingMode::On));
	assert_eq!(gutter.suppressor().original_mode(&OTHER_DOC.into()), Some(NumberingMode::Interval));

	let report = gutter.deactivate(&mut host);

	assert_eq!(report.restored, 3);
	assert_eq!(host.numbering(MAIN), Some(NumberingMode::On));
	assert_eq!(host.numbering(SPLIT), Some(NumberingMode::On));
	assert_eq!(host.numbering(OTHER), Some(NumberingMode::Interval));
}

#[test]
fn splits_on_one_document_get_independent_labels() {
	let mut host = workspace_host();
	let _gutter = activate(&mut host);

	let main = drawn(&host, MAIN);
	let split = drawn(&host, SPLIT);
	assert_eq!(main.len(), 21);
	assert_eq!(split.len(), 21);
	assert_eq!(main[5], (5, "6-3".to_string()));
	assert_eq!(split[10], (60, "61-1".to_string()));
}

#[test]
fn burst_of_events_leaves_last_state_drawn() {
	let mut host = workspace_host();
	let mut gutter = activate(&mut host);

	let mut queue = EventQueue::new();
	for line in [6, 7, 8] {
		host.editor_mut(MAIN).unwrap().caret = CaretPosition::new(line, 1);
		queue.push(EditorEvent::SelectionChanged(MAIN));
	}
	host.editor_mut(MAIN).unwrap().visible_ranges = [LineRange::new(4, 12)].into_iter().collect();
	queue
		.push(EditorEvent::VisibleRangesChanged(MAIN))
		.push(EditorEvent::DocumentChanged(MAIN_DOC.into()));

	assert_eq!(gutter.pump(&mut host, &mut queue), 5);

	let labels = drawn(&host, MAIN);
	assert_eq!(labels.first().map(|(line, _)| *line), Some(4));
	assert_eq!(labels.last().map(|(line, _)| *line), Some(12));
	let active: Vec<_> = labels.iter().filter(|(_, text)| !text.trim().is_empty()).collect();
	assert_eq!(active, vec![&(8, "9-1".to_string())]);
}

#[test]
fn newly_shown_editor_is_picked_up() {
	let mut host = workspace_host();
	let mut gutter = activate(&mut host);

	let fresh = EditorId(30);
	host.open(
		fresh,
		MemoryEditor::new("file:///workspace/notes.txt", 2).with_numbering(NumberingMode::Relative),
	);
	let mut queue: EventQueue = [EditorEvent::VisibleEditorsChanged(vec![MAIN, SPLIT, OTHER, fresh])]
		.into_iter()
		.collect();
	gutter.pump(&mut host, &mut queue);

	assert_eq!(drawn(&host, fresh), vec![(0, "1-1".to_string())]);
	assert_eq!(host.numbering(fresh), Some(NumberingMode::Off));

	gutter.deactivate(&mut host);
	assert_eq!(host.numbering(fresh), Some(NumberingMode::Relative));
}

#[test]
fn closed_editor_mid_burst_does_not_block_others() {
	let mut host = workspace_host();
	let mut gutter = activate(&mut host);

	host.close(SPLIT);
	host.editor_mut(MAIN).unwrap().caret = CaretPosition::new(2, 4);
	let mut queue: EventQueue = [
		EditorEvent::SelectionChanged(SPLIT),
		EditorEvent::SelectionChanged(MAIN),
	]
	.into_iter()
	.collect();
	gutter.pump(&mut host, &mut queue);

	assert_eq!(drawn(&host, MAIN)[2], (2, "3-4".to_string()));
	assert!(host.labels(SPLIT).is_none());
}
