//! Scroll state for the landing page.
//!
//! The [`Viewport`] tracks the rows of the page that are on screen and
//! derives the scroll progress shown in the top bar.

use std::ops::Range;

/// The visible window over the landing page.
///
/// # Example
///
/// ```
/// use devops_landing::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 20, 120);
/// vp.scroll_down(50);
/// assert_eq!(vp.visible_range(), 50..70);
/// assert!((vp.progress_percent() - 50.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    total_lines: usize,
}

impl Viewport {
    /// Create a viewport of `width` x `height` over `total_lines` rows.
    pub const fn new(width: u16, height: u16, total_lines: usize) -> Self {
        Self {
            width,
            height,
            offset: 0,
            total_lines,
        }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Rows currently on screen, clamped to the page.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset + self.height as usize).min(self.total_lines);
        self.offset.min(end)..end
    }

    /// How far down the page the viewport is, in `[0, 100]`.
    ///
    /// A page that fits on screen has nothing to scroll and reports 0.
    pub fn progress_percent(&self) -> f64 {
        let max_offset = self.max_offset();
        if max_offset == 0 {
            return 0.0;
        }
        // Row counts stay far below f64's exact integer range
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.offset as f64 / max_offset as f64;
        (ratio * 100.0).clamp(0.0, 100.0)
    }

    pub const fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = self.offset.saturating_add(n).min(self.max_offset());
    }

    pub const fn page_up(&mut self) {
        self.scroll_up(self.height as usize);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height as usize);
    }

    pub const fn go_to_top(&mut self) {
        self.offset = 0;
    }

    pub const fn go_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Resize, keeping the offset inside the page.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the page length after a relayout.
    pub fn set_total_lines(&mut self, total: usize) {
        self.total_lines = total;
        self.offset = self.offset.min(self.max_offset());
    }

    const fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height as usize)
    }
}
