//! Display node types.

use serde::Serialize;

/// A run of bullet text, either plain or emphasized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", content = "text", rename_all = "snake_case")]
pub enum InlineSpan {
    /// Text shown as-is
    Plain(String),
    /// Text originally wrapped in `**`, shown bold
    Emphasis(String),
}

impl InlineSpan {
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Emphasis(text) => text,
        }
    }

    pub const fn is_emphasis(&self) -> bool {
        matches!(self, Self::Emphasis(_))
    }
}

/// One renderable unit derived from one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayNode {
    /// Vertical spacing
    Blank,
    /// List item
    Bullet {
        spans: Vec<InlineSpan>,
        /// Whether any span is emphasized and needs bold sub-span rendering
        has_emphasis: bool,
    },
    /// Standalone emphasized heading
    Subheading { text: String },
    /// Plain text line
    Paragraph { text: String },
}

/// Discriminant of a [`DisplayNode`], used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Blank,
    Bullet,
    Subheading,
    Paragraph,
}

impl DisplayNode {
    /// Build a bullet with no emphasis.
    pub fn plain_bullet(text: impl Into<String>) -> Self {
        let text = text.into();
        let spans = if text.is_empty() {
            Vec::new()
        } else {
            vec![InlineSpan::Plain(text)]
        };
        Self::Bullet {
            spans,
            has_emphasis: false,
        }
    }

    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Blank => NodeKind::Blank,
            Self::Bullet { .. } => NodeKind::Bullet,
            Self::Subheading { .. } => NodeKind::Subheading,
            Self::Paragraph { .. } => NodeKind::Paragraph,
        }
    }

    /// Bullet spans, if this is a bullet.
    pub fn spans(&self) -> Option<&[InlineSpan]> {
        match self {
            Self::Bullet { spans, .. } => Some(spans),
            _ => None,
        }
    }

    /// Text content with emphasis resolved away.
    pub fn plain_text(&self) -> String {
        match self {
            Self::Blank => String::new(),
            Self::Bullet { spans, .. } => spans.iter().map(InlineSpan::text).collect(),
            Self::Subheading { text } | Self::Paragraph { text } => text.clone(),
        }
    }
}
