// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. markup::NodeKind)
    clippy::module_name_repetitions
)]

//! # devops-landing
//!
//! A terminal landing page for the Cloud DevOps practice project.
//!
//! The page shows a hero banner, feature cards, the tech stack and a
//! "Get Started" button that opens a scrollable CI/CD manual. Manual
//! sections are written in a tiny line-oriented markup:
//! - blank lines are kept as spacing
//! - `•` starts a bullet, with optional `**bold**` emphasis inside
//! - a line opening with `**Title:**` is a subheading
//! - anything else is a paragraph
//!
//! ## Architecture
//!
//! The TUI uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`markup`]: Manual markup to display nodes
//! - [`content`]: Static page and manual content
//! - [`landing`]: Landing page layout
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Persistent flag files
//! - [`perf`]: Timing and debug logging

pub mod app;
pub mod config;
pub mod content;
pub mod landing;
pub mod markup;
pub mod perf;
pub mod ui;
pub mod wrap;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::markup::{DisplayNode, InlineSpan, render};
    pub use crate::ui::viewport::Viewport;
}
