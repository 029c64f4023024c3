//! Native line-number suppression.
//!
//! The first time a document is seen its numbering mode is recorded, then
//! the host is told to switch numbers off. The record is never overwritten,
//! so later observations (which will see `Off`) cannot clobber the original.
//! At teardown the suppressor is consumed and each record is written back.

use colgutter_primitives::{DocumentIdentity, EditorId, EditorOptions, HostError, NumberingMode};
use rustc_hash::FxHashMap;


/// Setter for an editor's options.
///
/// Implementations replace the editor's options with `options` as a whole.
pub trait NumberingModeControl {
	/// Applies `options` to `editor`.
	fn set_options(&mut self, editor: EditorId, options: EditorOptions) -> Result<(), HostError>;
}

/// Outcome of [`NumberingSuppressor::ensure_suppressed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Suppression {
	/// A record was created for the document by this call.
	pub recorded: bool,
	/// The host was asked to switch numbering off.
	pub forced_off: bool,
}

/// Tally of a teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RestoreReport {
	/// Editors whose numbering mode was written back.
	pub restored: usize,
	/// Editors showing a document with no record.
	pub skipped: usize,
	/// Editors the host failed to update.
	pub failed: usize,
}

/// Per-document record of original numbering modes.
#[derive(Debug, Default)]
pub struct NumberingSuppressor {
	originals: FxHashMap<DocumentIdentity, NumberingMode>,
}

impl NumberingSuppressor {
	/// Creates an empty suppressor.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records `document`'s original mode if unseen, then forces numbers off.
	///
	/// `current` is the editor's options as the host reports them right now.
	/// The record is written before the host is touched, so a failing host
	/// call still leaves a record to restore from.
	pub fn ensure_suppressed<C>(
		&mut self,
		document: &DocumentIdentity,
		editor: EditorId,
		current: EditorOptions,
		control: &mut C,
	) -> Result<Suppression, HostError>
	where
		C: NumberingModeControl + ?Sized,
	{
		let mut outcome = Suppression::default();

		if !self.originals.contains_key(document) {
			tracing::debug!(%document, original = %current.numbering, "Recording native numbering mode");
			self.originals.insert(document.clone(), current.numbering);
			outcome.recorded = true;
		}

		if current.numbering.is_visible() {
			control.set_options(editor, current.with_numbering(NumberingMode::Off))?;
			outcome.forced_off = true;
		}

		Ok(outcome)
	}

	/// Original mode recorded for `document`, if it has been seen.
	pub fn original_mode(&self, document: &DocumentIdentity) -> Option<NumberingMode> {
		self.originals.get(document).copied()
	}

	/// Returns true if `document` has a record.
	pub fn is_suppressed(&self, document: &DocumentIdentity) -> bool {
		self.originals.contains_key(document)
	}

	/// Number of documents with a record.
	pub fn len(&self) -> usize {
		self.originals.len()
	}

	/// Returns true if no document has been seen.
	pub fn is_empty(&self) -> bool {
		self.originals.is_empty()
	}

	/// Writes every recorded mode back to the open editors showing it.
	///
	/// `open` yields each open editor with its document and current options.
	/// Editors whose document was never seen are skipped. A host failure on
	/// one editor is logged and counted, and the rest are still attempted.
	pub fn restore_all<C, I>(self, open: I, control: &mut C) -> RestoreReport
	where
		C: NumberingModeControl + ?Sized,
		I: IntoIterator<Item = (EditorId, DocumentIdentity, EditorOptions)>,
	{
		let mut report = RestoreReport::default();

		for (editor, document, current) in open {
			let Some(original) = self.originals.get(&document).copied() else {
				report.skipped += 1;
				continue;
			};

			match control.set_options(editor, current.with_numbering(original)) {
				Ok(()) => {
					tracing::debug!(%editor, %document, %original, "Restored native numbering mode");
					report.restored += 1;
				}
				Err(e) => {
					tracing::warn!(%editor, %document, error = %e, "Failed to restore native numbering mode");
					report.failed += 1;
				}
			}
		}

		report
	}
}
