//! Simulated `line-column` gutter.
//!
//! The host editor's native line numbers are switched off and replaced by
//! one overlay label per visible line: the caret line shows `line-column`,
//! every other visible line shows blank padding of the same width so the
//! text column never shifts.
//!
//! # Components
//!
//! - [`suppress::NumberingSuppressor`] remembers each document's original
//!   numbering mode, forces it off, and puts it back at teardown.
//! - [`render::render`] turns a line count, caret and visible ranges into
//!   an ordered [`render::LabelList`].
//!
//! Configuration lives in [`config::GutterConfig`]; the decoration type the
//! host registers once is described by [`style::DecorationStyle`].

pub mod config;
pub mod error;
pub mod layout;
pub mod render;
pub mod style;
pub mod suppress;

pub use config::GutterConfig;
pub use error::{ConfigError, Result};
pub use layout::LabelLayout;
pub use render::{GutterLabel, LabelList, RenderInput, label_width, render, visible_lines};
pub use style::DecorationStyle;
pub use suppress::{NumberingModeControl, NumberingSuppressor, RestoreReport, Suppression};
