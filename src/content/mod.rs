//! Static page content.
//!
//! Everything shown on the landing page and in the manual is fixed at build
//! time. The records here are plain data; the UI decides how to draw them.

mod catalog;

use serde::Serialize;

use crate::markup::{self, DisplayNode};

pub use catalog::{
    CTA_LABEL, FEATURES, FOOTER, HERO_SUBTITLE, HERO_TAGLINE, HERO_TITLE, MANUAL_SECTIONS,
    MANUAL_TITLE, STATS, TECH_STACK,
};

/// Icon names from the external icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Cloud,
    Bolt,
    Palette,
    Rocket,
    CheckCircle,
    Tachometer,
    Magic,
    Times,
    GitAlt,
    Docker,
    Aws,
}

/// A manual section: a titled block of raw markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub icon: Icon,
    /// Raw text block, rendered with [`markup::render`]
    pub content: &'static str,
}

/// A feature card on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

/// A stat tile on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub icon: Icon,
    pub label: &'static str,
}

/// A manual section after its content has been rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSection {
    pub title: &'static str,
    pub icon: Icon,
    pub nodes: Vec<DisplayNode>,
}

impl Section {
    pub fn render(&self) -> RenderedSection {
        RenderedSection {
            title: self.title,
            icon: self.icon,
            nodes: markup::render(self.content),
        }
    }
}

/// The whole manual, rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedManual {
    pub title: &'static str,
    pub sections: Vec<RenderedSection>,
}

/// Render every manual section in catalog order.
pub fn render_manual() -> RenderedManual {
    RenderedManual {
        title: MANUAL_TITLE,
        sections: MANUAL_SECTIONS.iter().map(Section::render).collect(),
    }
}
