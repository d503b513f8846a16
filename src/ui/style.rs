//! Theming and color definitions.
//!
//! Uses ANSI colors that adapt to the terminal's palette, with a light and
//! a dark variant picked from the configured or detected background.

use std::sync::{Mutex, OnceLock};

use ratatui::style::{Color, Modifier, Style};

use crate::landing::PageLineKind;
use crate::markup::NodeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Light,
    Dark,
}

static BACKGROUND_OVERRIDE: OnceLock<Mutex<Option<Background>>> = OnceLock::new();

/// Force a background, or `None` to detect it from `COLORFGBG`.
pub fn set_background_mode(mode: Option<Background>) {
    let lock = BACKGROUND_OVERRIDE.get_or_init(|| Mutex::new(None));
    if let Ok(mut guard) = lock.lock() {
        *guard = mode;
    }
}

pub fn background_mode() -> Background {
    let lock = BACKGROUND_OVERRIDE.get_or_init(|| Mutex::new(None));
    if let Ok(guard) = lock.lock()
        && let Some(mode) = *guard
    {
        return mode;
    }
    background_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}

pub fn is_light_background() -> bool {
    background_mode() == Background::Light
}

fn background_from_colorfgbg(colorfgbg: Option<&str>) -> Background {
    let Some(value) = colorfgbg else {
        return Background::Dark;
    };
    let bg_str = value.rsplit(';').next().unwrap_or(value);
    let Ok(bg) = bg_str.parse::<u8>() else {
        return Background::Dark;
    };

    if bg >= 7 {
        Background::Light
    } else {
        Background::Dark
    }
}

/// Accent used for titles and the progress bar.
pub fn accent() -> Color {
    if is_light_background() {
        Color::Indexed(25)
    } else {
        Color::Cyan
    }
}

fn secondary() -> Color {
    if is_light_background() {
        Color::Indexed(90)
    } else {
        Color::Magenta
    }
}

fn muted() -> Color {
    if is_light_background() {
        Color::Indexed(241)
    } else {
        Color::Indexed(245)
    }
}

/// Style for a landing page row.
pub fn style_for_page_line(kind: PageLineKind) -> Style {
    match kind {
        // "Gradient" text: bold accent
        PageLineKind::HeroTitle | PageLineKind::SectionTitle => Style::default()
            .fg(accent())
            .add_modifier(Modifier::BOLD),
        PageLineKind::HeroTagline => Style::default().add_modifier(Modifier::BOLD),
        PageLineKind::HeroSubtitle | PageLineKind::FeatureText => Style::default().fg(muted()),
        PageLineKind::CallToAction => Style::default()
            .fg(secondary())
            .add_modifier(Modifier::BOLD),
        PageLineKind::FeatureTitle | PageLineKind::Stat => Style::default()
            .fg(secondary())
            .add_modifier(Modifier::BOLD),
        PageLineKind::TechItems => Style::default().fg(accent()),
        PageLineKind::Footer => Style::default().fg(muted()).add_modifier(Modifier::DIM),
        PageLineKind::Empty => Style::default(),
    }
}

/// Style for a manual display node.
pub fn style_for_node(kind: NodeKind) -> Style {
    match kind {
        NodeKind::Subheading => Style::default()
            .fg(if is_light_background() {
                Color::Indexed(58)
            } else {
                Color::Yellow
            })
            .add_modifier(Modifier::BOLD),
        NodeKind::Bullet | NodeKind::Paragraph | NodeKind::Blank => Style::default(),
    }
}

/// Style for a bullet span, merged onto the bullet's base style.
pub fn style_for_span(base: Style, emphasis: bool) -> Style {
    if emphasis {
        base.add_modifier(Modifier::BOLD)
    } else {
        base
    }
}

/// Style for a manual section header (icon + title).
pub fn section_header_style() -> Style {
    Style::default()
        .fg(accent())
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn bullet_marker_style() -> Style {
    Style::default().fg(secondary())
}

pub fn hint_style() -> Style {
    Style::default().fg(muted())
}
