use crate::landing::{self, Page};
use crate::ui::viewport::Viewport;

/// The complete application state.
///
/// All state lives here - no global or scattered state. The manual flag and
/// the scroll progress change only through the named transitions below.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Landing page laid out for the current width
    pub page: Page,
    /// Viewport over the landing page
    pub viewport: Viewport,
    /// Scroll offset inside the manual overlay
    pub manual_scroll_offset: usize,
    /// Whether the app should quit
    pub should_quit: bool,
    manual_visible: bool,
    scroll_progress: u8,
    terminal_size: (u16, u16),
}

impl Model {
    /// Create a model laid out for a terminal of `terminal_size` (width, height).
    pub fn new(terminal_size: (u16, u16)) -> Self {
        let (width, height) = terminal_size;
        let page = landing::layout(width);
        let viewport = Viewport::new(width, crate::ui::page_height(height), page.line_count());
        Self {
            page,
            viewport,
            manual_scroll_offset: 0,
            should_quit: false,
            manual_visible: false,
            scroll_progress: 0,
            terminal_size,
        }
    }

    pub const fn manual_visible(&self) -> bool {
        self.manual_visible
    }

    /// Scroll progress through the landing page, 0-100.
    pub const fn scroll_progress(&self) -> u8 {
        self.scroll_progress
    }

    pub const fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Show the manual, starting from its top.
    pub const fn open_manual(&mut self) {
        self.manual_visible = true;
        self.manual_scroll_offset = 0;
    }

    pub const fn close_manual(&mut self) {
        self.manual_visible = false;
    }

    /// Set the progress bar, clamped to 0-100. NaN counts as 0.
    pub fn set_scroll_progress(&mut self, percent: f64) {
        let clamped = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        };
        // Clamped to 0-100 above
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            self.scroll_progress = clamped.round() as u8;
        }
    }

    /// Recompute the progress bar from the viewport.
    pub(super) fn sync_scroll_progress(&mut self) {
        self.set_scroll_progress(self.viewport.progress_percent());
    }

    pub(super) fn manual_max_scroll(&self) -> usize {
        crate::ui::manual_max_scroll(self.terminal_size.0, self.terminal_size.1)
    }

    /// Lay the page out again for a new terminal size.
    pub(super) fn relayout(&mut self, width: u16, height: u16) {
        let _scope = crate::perf::scope("app.relayout");
        self.terminal_size = (width, height);
        if self.page.width() != width {
            self.page = landing::layout(width);
        }
        self.viewport.set_total_lines(self.page.line_count());
        self.viewport.resize(width, crate::ui::page_height(height));
        self.manual_scroll_offset = self.manual_scroll_offset.min(self.manual_max_scroll());
        self.sync_scroll_progress();
    }
}

// Implement Default for Model to allow std::mem::take
impl Default for Model {
    fn default() -> Self {
        Self::new((80, 24))
    }
}
