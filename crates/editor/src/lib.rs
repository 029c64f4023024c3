#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Host wiring for the line:column gutter.
//!
//! This crate connects the gutter core in `colgutter-gutter` to an editor
//! host. The host is modeled by the traits in [`host`]; notifications
//! arrive as [`event::EditorEvent`]s and are handled by
//! [`LineColumnGutter`].
//!
//! # Lifecycle
//!
//! ```text
//! activate   -> register decoration type, refresh every visible editor
//! event      -> suppress native numbers, render labels, replace decorations
//! deactivate -> restore native numbers, dispose decoration type
//! ```
//!
//! Everything runs on the host's event thread. Nothing here blocks, and a
//! failing host call only skips the affected editor.

/// Gutter controller driven by editor events.
pub mod controller;
/// Editor notifications and their dispatch.
pub mod event;
/// Host collaborator traits.
pub mod host;
/// In-memory host for tests and headless use.
pub mod testing;

pub use colgutter_gutter::{DecorationStyle, GutterConfig, GutterLabel, LabelList, RestoreReport};
pub use controller::LineColumnGutter;
pub use event::{EditorEvent, EditorEventHandler, EditorEventSource};
pub use host::{DecorationSink, EditorHost, EditorSnapshot, EditorState, NumberingModeControl};
