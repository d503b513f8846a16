//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Scroll position over the landing page
//! - [`style`]: Theming and colors
//! - [`icons`]: Glyphs for catalog icons

pub mod icons;
pub mod style;
pub mod viewport;

mod overlays;
mod render;
mod status;

pub use overlays::{
    manual_close_rect, manual_content_rect, manual_lines, manual_max_scroll, manual_popup_rect,
};
pub use render::{page_height, render, split_screen};
