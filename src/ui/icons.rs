//! Terminal glyphs for catalog icons.

use crate::content::Icon;

/// Glyph drawn for an icon name.
pub const fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Cloud => "☁",
        Icon::Bolt => "ϟ",
        Icon::Palette => "✎",
        Icon::Rocket => "➶",
        Icon::CheckCircle => "✔",
        Icon::Tachometer => "◔",
        Icon::Magic => "✦",
        Icon::Times => "✕",
        Icon::GitAlt => "⎇",
        Icon::Docker => "▣",
        Icon::Aws => "▲",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_glyphs_are_single_column() {
        let all = [
            Icon::Cloud,
            Icon::Bolt,
            Icon::Palette,
            Icon::Rocket,
            Icon::CheckCircle,
            Icon::Tachometer,
            Icon::Magic,
            Icon::Times,
            Icon::GitAlt,
            Icon::Docker,
            Icon::Aws,
        ];
        for icon in all {
            assert_eq!(glyph(icon).width(), 1, "{icon:?}");
        }
    }
}
