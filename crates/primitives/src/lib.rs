//! Value types for the line:column gutter: identities, caret and range
//! coordinates, native numbering modes, and editor option snapshots.

/// Caret coordinates.
pub mod caret;
/// Host boundary errors.
pub mod error;
/// Identifier types for documents and editors.
pub mod ids;
/// Native line-numbering modes.
pub mod numbering;
/// Immutable editor option snapshots.
pub mod options;
/// Visible line ranges as reported by the host.
pub mod range;

pub use caret::CaretPosition;
pub use error::HostError;
pub use ids::{DecorationTypeId, DocumentIdentity, EditorId};
pub use numbering::NumberingMode;
pub use options::EditorOptions;
pub use range::{LineIdx, LineRange};
