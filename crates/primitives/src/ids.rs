use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable key for a document: its canonical location string.
///
/// Only ever used for lookups. Nothing reads document content through it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentIdentity(String);

impl DocumentIdentity {
	/// Wraps a canonical location string (usually a URI).
	pub fn new(location: impl Into<String>) -> Self {
		Self(location.into())
	}

	/// Returns the underlying location string.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for DocumentIdentity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for DocumentIdentity {
	fn from(location: &str) -> Self {
		Self::new(location)
	}
}

impl From<String> for DocumentIdentity {
	fn from(location: String) -> Self {
		Self(location)
	}
}

/// Host-assigned handle for an open editor view.
///
/// Several editors may show the same document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EditorId(pub u64);

impl fmt::Display for EditorId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "editor#{}", self.0)
	}
}

/// Handle for a decoration type registered with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecorationTypeId(pub u64);
