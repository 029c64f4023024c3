//! Errors raised at the host boundary.

use thiserror::Error;

use crate::ids::{DocumentIdentity, EditorId};

/// A host call that could not be completed.
///
/// These never escape event handling: the caller skips the affected editor
/// for the current refresh and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
	/// The editor was closed between the event and the host call.
	#[error("{0} is no longer open")]
	EditorClosed(EditorId),

	/// The document was closed or disposed.
	#[error("document {0} is no longer open")]
	DocumentClosed(DocumentIdentity),

	/// The host refused the request.
	#[error("{editor} rejected the request: {reason}")]
	Rejected {
		/// Editor the request was aimed at.
		editor: EditorId,
		/// Host-provided explanation.
		reason: String,
	},
}
