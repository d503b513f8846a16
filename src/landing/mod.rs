//! Landing page layout.
//!
//! Composes the static catalog into rows for a given terminal width. The
//! page is laid out again whenever the width changes.

use crate::content::{
    CTA_LABEL, FEATURES, FOOTER, HERO_SUBTITLE, HERO_TAGLINE, HERO_TITLE, STATS, TECH_STACK,
};
use crate::ui::icons::glyph;
use crate::wrap::{center, wrap_text};

use unicode_width::UnicodeWidthStr;

/// Columns kept free on each side of wrapped text.
const SIDE_MARGIN: usize = 2;

/// Gap between tech stack chips.
const CHIP_GAP: &str = "  ";

/// Type of a page row, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLineKind {
    HeroTitle,
    HeroTagline,
    HeroSubtitle,
    CallToAction,
    SectionTitle,
    FeatureTitle,
    FeatureText,
    TechItems,
    Stat,
    Footer,
    Empty,
}

/// A single laid-out row of the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLine {
    content: String,
    kind: PageLineKind,
}

impl PageLine {
    pub const fn new(content: String, kind: PageLineKind) -> Self {
        Self { content, kind }
    }

    fn empty() -> Self {
        Self::new(String::new(), PageLineKind::Empty)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub const fn kind(&self) -> PageLineKind {
        self.kind
    }
}

/// The landing page laid out for one width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    lines: Vec<PageLine>,
    cta_line: usize,
    width: u16,
}

impl Page {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[PageLine] {
        &self.lines
    }

    pub fn line_at(&self, index: usize) -> Option<&PageLine> {
        self.lines.get(index)
    }

    /// Lines from `offset` to `offset + count`.
    pub fn visible_lines(&self, offset: usize, count: usize) -> &[PageLine] {
        let start = offset.min(self.lines.len());
        let end = offset.saturating_add(count).min(self.lines.len());
        &self.lines[start..end]
    }

    /// Row index of the call-to-action button.
    pub const fn cta_line(&self) -> usize {
        self.cta_line
    }

    pub const fn width(&self) -> u16 {
        self.width
    }
}

impl Default for Page {
    fn default() -> Self {
        layout(80)
    }
}

/// Lay out the landing page for `width` columns.
pub fn layout(width: u16) -> Page {
    let full = usize::from(width.max(1));
    let text_width = full.saturating_sub(SIDE_MARGIN * 2).max(1);
    let mut lines = Vec::new();

    let push_centered = |lines: &mut Vec<PageLine>, text: &str, kind: PageLineKind| {
        for row in wrap_text(text, text_width) {
            lines.push(PageLine::new(center(&row, full), kind));
        }
    };

    // Hero
    lines.push(PageLine::empty());
    lines.push(PageLine::empty());
    push_centered(&mut lines, HERO_TITLE, PageLineKind::HeroTitle);
    push_centered(&mut lines, HERO_TAGLINE, PageLineKind::HeroTagline);
    lines.push(PageLine::empty());
    push_centered(&mut lines, HERO_SUBTITLE, PageLineKind::HeroSubtitle);
    lines.push(PageLine::empty());
    let cta_line = lines.len();
    lines.push(PageLine::new(
        center(&format!("[ {CTA_LABEL} ]"), full),
        PageLineKind::CallToAction,
    ));
    lines.push(PageLine::empty());
    lines.push(PageLine::empty());

    // Features
    push_centered(&mut lines, "Features", PageLineKind::SectionTitle);
    lines.push(PageLine::empty());
    for feature in FEATURES {
        let title = format!("{} {}", glyph(feature.icon), feature.title);
        push_centered(&mut lines, &title, PageLineKind::FeatureTitle);
        push_centered(&mut lines, feature.description, PageLineKind::FeatureText);
        lines.push(PageLine::empty());
    }
    lines.push(PageLine::empty());

    // Tech stack
    push_centered(&mut lines, "Tech Stack", PageLineKind::SectionTitle);
    lines.push(PageLine::empty());
    for row in chip_rows(TECH_STACK, text_width) {
        lines.push(PageLine::new(center(&row, full), PageLineKind::TechItems));
    }
    lines.push(PageLine::empty());
    lines.push(PageLine::empty());

    // Stats
    for stat in STATS {
        let text = format!("{}  {}", glyph(stat.icon), stat.label);
        push_centered(&mut lines, &text, PageLineKind::Stat);
        lines.push(PageLine::empty());
    }
    lines.push(PageLine::empty());

    push_centered(&mut lines, FOOTER, PageLineKind::Footer);
    lines.push(PageLine::empty());

    Page {
        lines,
        cta_line,
        width,
    }
}

/// Pack `[ item ]` chips into rows no wider than `width`.
fn chip_rows(items: &[&str], width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    for item in items {
        let chip = format!("[ {item} ]");
        if !current.is_empty() && current.width() + CHIP_GAP.len() + chip.width() > width {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push_str(CHIP_GAP);
        }
        current.push_str(&chip);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}
