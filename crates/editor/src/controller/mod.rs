//! Event-driven gutter controller.

use colgutter_gutter::{DecorationStyle, GutterConfig, NumberingSuppressor, RestoreReport, render};
use colgutter_primitives::{DecorationTypeId, DocumentIdentity, EditorId, HostError};
use tracing::{trace, warn};

use crate::event::{EditorEventHandler, EditorEventSource};
use crate::host::{EditorHost, EditorSnapshot};


/// The line:column gutter attached to a host.
///
/// Owns the decoration type handle and the record of original numbering
/// modes. Created by [`LineColumnGutter::activate`] and consumed by
/// [`LineColumnGutter::deactivate`].
#[derive(Debug)]
pub struct LineColumnGutter {
	config: GutterConfig,
	decoration: DecorationTypeId,
	suppressor: NumberingSuppressor,
}

impl LineColumnGutter {
	/// Registers the decoration type and draws labels in every visible editor.
	pub fn activate<H>(config: GutterConfig, host: &mut H) -> Self
	where
		H: EditorHost + ?Sized,
	{
		let decoration = host.create_decoration_type(&DecorationStyle::from_config(&config));
		let mut gutter = Self {
			config,
			decoration,
			suppressor: NumberingSuppressor::new(),
		};
		let refreshed = gutter.refresh_visible(host);
		tracing::debug!(?decoration, refreshed, "Line:column gutter activated");
		gutter
	}

	/// Active configuration.
	pub fn config(&self) -> &GutterConfig {
		&self.config
	}

	/// Decoration type every label set is drawn with.
	pub fn decoration_type(&self) -> DecorationTypeId {
		self.decoration
	}

	/// Record of original numbering modes.
	pub fn suppressor(&self) -> &NumberingSuppressor {
		&self.suppressor
	}

	/// Suppresses native numbers in `editor` and replaces its labels.
	///
	/// Returns the number of labels drawn.
	pub fn refresh_editor<H>(&mut self, host: &mut H, editor: EditorId) -> Result<usize, HostError>
	where
		H: EditorHost + ?Sized,
	{
		let snapshot = host.editor_state(editor)?;
		self.apply(host, &snapshot)
	}

	/// Refreshes every visible editor. Returns how many succeeded.
	pub fn refresh_visible<H>(&mut self, host: &mut H) -> usize
	where
		H: EditorHost + ?Sized,
	{
		let editors = host.visible_editors();
		self.refresh_each(host, &editors)
	}

	/// Drains `source`, handling each event in order. Returns the event count.
	pub fn pump<H, S>(&mut self, host: &mut H, source: &mut S) -> usize
	where
		H: EditorHost + ?Sized,
		S: EditorEventSource + ?Sized,
	{
		let mut handled = 0;
		while let Some(event) = source.next_event() {
			trace!(?event, "Handling editor event");
			event.dispatch(self, host);
			handled += 1;
		}
		handled
	}

	/// Restores native numbering in every visible editor and drops the
	/// decoration type.
	pub fn deactivate<H>(self, host: &mut H) -> RestoreReport
	where
		H: EditorHost + ?Sized,
	{
		let mut unreachable = 0;
		let open: Vec<_> = host
			.visible_editors()
			.into_iter()
			.filter_map(|editor| match host.editor_state(editor) {
				Ok(snapshot) => Some((editor, snapshot.document, snapshot.options)),
				Err(e) => {
					warn!(%editor, error = %e, "Cannot read editor during teardown");
					unreachable += 1;
					None
				}
			})
			.collect();

		let mut report = self.suppressor.restore_all(open, host);
		report.failed += unreachable;
		host.dispose_decoration_type(self.decoration);

		tracing::debug!(?report, "Line:column gutter deactivated");
		report
	}

	fn apply<H>(&mut self, host: &mut H, snapshot: &EditorSnapshot) -> Result<usize, HostError>
	where
		H: EditorHost + ?Sized,
	{
		self.suppressor
			.ensure_suppressed(&snapshot.document, snapshot.editor, snapshot.options, host)?;

		let labels = render(&snapshot.render_input(), &self.config);
		host.set_decorations(snapshot.editor, self.decoration, &labels)?;
		Ok(labels.len())
	}

	fn refresh_each<H>(&mut self, host: &mut H, editors: &[EditorId]) -> usize
	where
		H: EditorHost + ?Sized,
	{
		editors
			.iter()
			.filter(|&&editor| self.refresh_or_skip(host, editor))
			.count()
	}

	/// Refreshes `editor`, logging and swallowing host failures.
	fn refresh_or_skip<H>(&mut self, host: &mut H, editor: EditorId) -> bool
	where
		H: EditorHost + ?Sized,
	{
		match self.refresh_editor(host, editor) {
			Ok(labels) => {
				trace!(%editor, labels, "Refreshed gutter");
				true
			}
			Err(e) => {
				warn!(%editor, error = %e, "Skipping gutter refresh");
				false
			}
		}
	}
}

impl<H> EditorEventHandler<H> for LineColumnGutter
where
	H: EditorHost + ?Sized,
{
	fn selection_changed(&mut self, host: &mut H, editor: EditorId) {
		self.refresh_or_skip(host, editor);
	}

	fn active_editor_changed(&mut self, host: &mut H, editor: Option<EditorId>) {
		if let Some(editor) = editor {
			self.refresh_or_skip(host, editor);
		}
	}

	fn visible_ranges_changed(&mut self, host: &mut H, editor: EditorId) {
		self.refresh_or_skip(host, editor);
	}

	fn document_changed(&mut self, host: &mut H, document: &DocumentIdentity) {
		for editor in host.visible_editors() {
			let snapshot = match host.editor_state(editor) {
				Ok(snapshot) => snapshot,
				Err(e) => {
					warn!(%editor, error = %e, "Skipping gutter refresh");
					continue;
				}
			};
			if &snapshot.document != document {
				continue;
			}
			if let Err(e) = self.apply(host, &snapshot) {
				warn!(%editor, error = %e, "Skipping gutter refresh");
			}
		}
	}

	fn visible_editors_changed(&mut self, host: &mut H, editors: &[EditorId]) {
		self.refresh_each(host, editors);
	}
}
