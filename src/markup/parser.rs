//! Line-by-line classification of text blocks.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{DisplayNode, InlineSpan};

/// Leading marker of a bullet line.
pub const BULLET_MARKER: char = '•';

/// Delimiter of an emphasized span.
pub const BOLD_MARKER: &str = "**";

// Non-greedy so several spans on one line stay separate.
static EMPHASIS_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("emphasis pattern is valid"));

static SUBHEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*(.*?)\*\*(.*)$").expect("subheading pattern is valid"));

/// Render a text block into display nodes, one per line.
///
/// # Example
///
/// ```
/// use devops_landing::markup::{render, DisplayNode};
///
/// let nodes = render("A\n\nB");
/// assert_eq!(nodes.len(), 3);
/// assert_eq!(nodes[1], DisplayNode::Blank);
/// ```
pub fn render(content: &str) -> Vec<DisplayNode> {
    content.split('\n').map(classify_line).collect()
}

/// Classify a single raw line.
///
/// Precedence is fixed: blank, bullet, subheading, paragraph. A line that
/// looks like a subheading but does not match the pattern is a paragraph.
pub fn classify_line(line: &str) -> DisplayNode {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return DisplayNode::Blank;
    }

    if let Some(rest) = trimmed.strip_prefix(BULLET_MARKER) {
        return render_bullet(rest.trim());
    }

    if trimmed.starts_with(BOLD_MARKER)
        && trimmed != BOLD_MARKER
        && let Some(title) = subheading_title(trimmed)
    {
        return DisplayNode::Subheading { text: title };
    }

    DisplayNode::Paragraph {
        text: trimmed.to_string(),
    }
}

fn render_bullet(text: &str) -> DisplayNode {
    match emphasis_spans(text) {
        Some(spans) => DisplayNode::Bullet {
            spans,
            has_emphasis: true,
        },
        None => DisplayNode::plain_bullet(text),
    }
}

/// Split `text` around every `**X**` pair. Returns `None` when there is no
/// complete pair.
fn emphasis_spans(text: &str) -> Option<Vec<InlineSpan>> {
    let mut spans = Vec::new();
    let mut last_end = 0;
    let mut matched = false;

    for caps in EMPHASIS_SPAN.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        matched = true;
        push_plain(&mut spans, &text[last_end..whole.start()]);
        if !inner.as_str().is_empty() {
            spans.push(InlineSpan::Emphasis(inner.as_str().to_string()));
        }
        last_end = whole.end();
    }

    if !matched {
        return None;
    }
    push_plain(&mut spans, &text[last_end..]);
    Some(spans)
}

fn push_plain(spans: &mut Vec<InlineSpan>, text: &str) {
    if !text.is_empty() {
        spans.push(InlineSpan::Plain(text.to_string()));
    }
}

/// Title between the first marker pair, inner spacing kept. Anything after
/// the closing marker is dropped, as is a single colon closing the title.
fn subheading_title(line: &str) -> Option<String> {
    let caps = SUBHEADING.captures(line)?;
    let title = caps.get(1)?.as_str();
    Some(title.strip_suffix(':').unwrap_or(title).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> InlineSpan {
        InlineSpan::Plain(text.to_string())
    }

    fn strong(text: &str) -> InlineSpan {
        InlineSpan::Emphasis(text.to_string())
    }

    fn paragraph(text: &str) -> DisplayNode {
        DisplayNode::Paragraph {
            text: text.to_string(),
        }
    }

    fn subheading(text: &str) -> DisplayNode {
        DisplayNode::Subheading {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_blank_line_between_paragraphs() {
        assert_eq!(
            render("A\n\nB"),
            vec![paragraph("A"), DisplayNode::Blank, paragraph("B")]
        );
    }

    #[test]
    fn test_empty_input_is_one_blank() {
        assert_eq!(render(""), vec![DisplayNode::Blank]);
    }

    #[test]
    fn test_whitespace_only_line_is_blank() {
        assert_eq!(render("   \t  "), vec![DisplayNode::Blank]);
    }

    #[test]
    fn test_trailing_newline_yields_trailing_blank() {
        assert_eq!(render("A\n"), vec![paragraph("A"), DisplayNode::Blank]);
    }

    #[test]
    fn test_plain_bullet() {
        assert_eq!(
            render("• item one"),
            vec![DisplayNode::Bullet {
                spans: vec![plain("item one")],
                has_emphasis: false,
            }]
        );
    }

    #[test]
    fn test_bullet_with_leading_emphasis() {
        assert_eq!(
            render("• **Key**: value"),
            vec![DisplayNode::Bullet {
                spans: vec![strong("Key"), plain(": value")],
                has_emphasis: true,
            }]
        );
    }

    #[test]
    fn test_bullet_with_multiple_emphasis_spans() {
        let nodes = render("• use **fast** and **safe** builds");
        assert_eq!(
            nodes,
            vec![DisplayNode::Bullet {
                spans: vec![
                    plain("use "),
                    strong("fast"),
                    plain(" and "),
                    strong("safe"),
                    plain(" builds"),
                ],
                has_emphasis: true,
            }]
        );
    }

    #[test]
    fn test_bullet_with_unpaired_marker_stays_plain() {
        assert_eq!(
            render("• a ** b"),
            vec![DisplayNode::Bullet {
                spans: vec![plain("a ** b")],
                has_emphasis: false,
            }]
        );
    }

    #[test]
    fn test_bullet_with_odd_marker_count_keeps_remainder_plain() {
        assert_eq!(
            render("• **one** two ** three"),
            vec![DisplayNode::Bullet {
                spans: vec![strong("one"), plain(" two ** three")],
                has_emphasis: true,
            }]
        );
    }

    #[test]
    fn test_bullet_takes_precedence_over_subheading() {
        let nodes = render("• **Workflows**");
        assert_eq!(nodes[0].kind(), crate::markup::NodeKind::Bullet);
    }

    #[test]
    fn test_bare_bullet_marker_is_empty_bullet() {
        assert_eq!(render("•"), vec![DisplayNode::plain_bullet("")]);
    }

    #[test]
    fn test_bullet_marker_without_space() {
        assert_eq!(render("•tight"), vec![DisplayNode::plain_bullet("tight")]);
    }

    #[test]
    fn test_padded_bullet_matches_unpadded() {
        assert_eq!(render("   • padded   "), render("• padded"));
    }

    #[test]
    fn test_subheading_drops_colon_inside_markers() {
        assert_eq!(render("**Core Concepts:**"), vec![subheading("Core Concepts")]);
    }

    #[test]
    fn test_subheading_keeps_inner_spacing() {
        assert_eq!(render("** padded **"), vec![subheading(" padded ")]);
        assert_eq!(render("** Note: **"), vec![subheading(" Note: ")]);
    }

    #[test]
    fn test_subheading_drops_trailing_text() {
        assert_eq!(
            render("**Core Concepts**: the basics"),
            vec![subheading("Core Concepts")]
        );
    }

    #[test]
    fn test_subheading_uses_first_closing_marker() {
        assert_eq!(render("**A** and **B**"), vec![subheading("A")]);
    }

    #[test]
    fn test_unterminated_bold_is_paragraph() {
        assert_eq!(
            render("**unterminated bold"),
            vec![paragraph("**unterminated bold")]
        );
    }

    #[test]
    fn test_bare_marker_is_paragraph() {
        assert_eq!(render("**"), vec![paragraph("**")]);
    }

    #[test]
    fn test_three_asterisks_is_paragraph() {
        assert_eq!(render("***"), vec![paragraph("***")]);
    }

    #[test]
    fn test_four_asterisks_is_empty_subheading() {
        assert_eq!(render("****"), vec![subheading("")]);
    }

    #[test]
    fn test_bold_in_middle_of_line_is_paragraph() {
        assert_eq!(
            render("Use **Lambda** for glue"),
            vec![paragraph("Use **Lambda** for glue")]
        );
    }

    #[test]
    fn test_paragraph_is_trimmed() {
        assert_eq!(render("   hello world  "), vec![paragraph("hello world")]);
    }

    #[test]
    fn test_carriage_returns_are_trimmed() {
        assert_eq!(
            render("A\r\n• b\r\n"),
            vec![
                paragraph("A"),
                DisplayNode::plain_bullet("b"),
                DisplayNode::Blank
            ]
        );
    }

    #[test]
    fn test_indented_block_keeps_line_order() {
        let block = "
        Intro text.

        **Key Benefits:**
        • **Scalability**: Auto-scaling
        • Plain item
      ";
        let nodes = render(block);
        assert_eq!(nodes.len(), block.split('\n').count());
        assert_eq!(nodes[0], DisplayNode::Blank);
        assert_eq!(nodes[1], paragraph("Intro text."));
        assert_eq!(nodes[2], DisplayNode::Blank);
        assert_eq!(nodes[3], subheading("Key Benefits"));
        assert_eq!(
            nodes[4],
            DisplayNode::Bullet {
                spans: vec![strong("Scalability"), plain(": Auto-scaling")],
                has_emphasis: true,
            }
        );
        assert_eq!(nodes[5], DisplayNode::plain_bullet("Plain item"));
        assert_eq!(nodes[6], DisplayNode::Blank);
    }

    #[test]
    fn test_render_is_deterministic() {
        let block = "**Docker Benefits:**\n• Lightweight\n\nText";
        assert_eq!(render(block), render(block));
    }
}
