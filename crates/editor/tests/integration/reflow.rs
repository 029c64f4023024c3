use colgutter_editor::EditorEvent;
use colgutter_editor::testing::EventQueue;
use colgutter_primitives::{CaretPosition, LineRange};
use pretty_assertions::assert_eq;

use crate::common::{MAIN, MAIN_DOC, OTHER, activate, drawn, workspace_host};

fn widths(host: &colgutter_editor::testing::MemoryHost, editor: colgutter_primitives::EditorId) -> Vec<usize> {
	host.labels(editor)
		.unwrap_or_default()
		.iter()
		.map(|label| label.layout.width)
		.collect()
}

#[test]
fn growing_past_a_power_of_ten_widens_every_label() {
	let mut host = workspace_host();
	let mut gutter = activate(&mut host);
	assert!(widths(&host, OTHER).iter().all(|&width| width == 5));

	host.editor_mut(OTHER).unwrap().line_count = 10;
	let mut queue: EventQueue = [EditorEvent::DocumentChanged("file:///workspace/README.md".into())]
		.into_iter()
		.collect();
	gutter.pump(&mut host, &mut queue);

	assert!(widths(&host, OTHER).iter().all(|&width| width == 6));
	assert!(drawn(&host, OTHER)[1..].iter().all(|(_, text)| text == "     "));
}

#[test]
fn wide_column_reflows_then_shrinks_back() {
	let mut host = workspace_host();
	let mut gutter = activate(&mut host);

	host.editor_mut(MAIN).unwrap().caret = CaretPosition::new(5, 250);
	gutter.refresh_editor(&mut host, MAIN).unwrap();
	assert!(widths(&host, MAIN).iter().all(|&width| width == 8));
	assert_eq!(drawn(&host, MAIN)[5].1, "6-250");

	host.editor_mut(MAIN).unwrap().caret = CaretPosition::new(5, 9);
	gutter.refresh_editor(&mut host, MAIN).unwrap();
	assert!(widths(&host, MAIN).iter().all(|&width| width == 7));
}

#[test]
fn folded_view_falls_back_to_caret_line() {
	let mut host = workspace_host();
	let mut gutter = activate(&mut host);

	host.editor_mut(MAIN).unwrap().visible_ranges = [LineRange::new(9, 3)].into_iter().collect();
	let mut queue: EventQueue = [EditorEvent::DocumentChanged(MAIN_DOC.into())].into_iter().collect();
	gutter.pump(&mut host, &mut queue);

	assert_eq!(drawn(&host, MAIN), vec![(5, "6-3".to_string())]);
}
