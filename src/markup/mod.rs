//! Lightweight inline markup for the manual's text blocks.
//!
//! A text block is a run of `\n`-separated lines. Each line is classified on
//! its own, in order:
//! - empty lines become spacing
//! - `•` lines become bullets, with `**bold**` spans resolved into typed spans
//! - `**Title**` lines become subheadings
//! - anything else is a paragraph
//!
//! Rendering is total: malformed markers degrade to paragraph text.

mod parser;
mod types;

pub use parser::{BOLD_MARKER, BULLET_MARKER, classify_line, render};
pub use types::{DisplayNode, InlineSpan, NodeKind};
