use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;
use crate::content::{self, RenderedManual};
use crate::markup::{DisplayNode, NodeKind};
use crate::wrap::{wrap_runs, wrap_text};

use super::icons::glyph;
use super::style;

const BULLET_PREFIX: &str = "  • ";
const BULLET_HANG: &str = "    ";
const CLOSE_LABEL: &str = "[x]";
const CLOSE_WIDTH: u16 = 3;

/// Largest popup width; wider terminals get side margins.
const MAX_POPUP_WIDTH: u16 = 100;

pub fn manual_popup_rect(area: Rect) -> Rect {
    let popup_width = area.width.saturating_sub(8).clamp(40, MAX_POPUP_WIDTH);
    let popup_height = area.height.saturating_sub(4).max(10);
    centered_popup_rect(popup_width, popup_height, area)
}

/// Area inside the border and horizontal padding.
fn manual_inner_rect(popup: Rect) -> Rect {
    Rect::new(
        popup.x + 2,
        popup.y + 1,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(2),
    )
}

/// Hit area of the close control, top-right of the header row.
pub fn manual_close_rect(popup: Rect) -> Rect {
    let inner = manual_inner_rect(popup);
    let width = CLOSE_WIDTH.min(inner.width);
    Rect::new(inner.x + inner.width - width, inner.y, width, 1.min(inner.height))
}

/// Scrollable body area: below the header and its rule, above the hint row.
pub fn manual_content_rect(popup: Rect) -> Rect {
    let inner = manual_inner_rect(popup);
    Rect::new(
        inner.x,
        inner.y + 2,
        inner.width,
        inner.height.saturating_sub(3),
    )
}

/// Lay out the rendered manual as terminal lines `width` columns wide.
pub fn manual_lines(manual: &RenderedManual, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();

    for (idx, section) in manual.sections.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::raw(""));
        }
        let header = format!("{}  {}", glyph(section.icon), section.title);
        for row in wrap_text(&header, width) {
            lines.push(Line::styled(row, style::section_header_style()));
        }
        for node in &section.nodes {
            lines.extend(node_lines(node, width));
        }
    }

    lines
}

fn node_lines(node: &DisplayNode, width: usize) -> Vec<Line<'static>> {
    let base = style::style_for_node(node.kind());
    match node {
        DisplayNode::Blank => vec![Line::raw("")],
        DisplayNode::Subheading { text } | DisplayNode::Paragraph { text } => {
            wrap_text(text, width)
                .into_iter()
                .map(|row| Line::styled(row, base))
                .collect()
        }
        DisplayNode::Bullet { spans, .. } => {
            let runs: Vec<(String, bool)> = spans
                .iter()
                .map(|span| (span.text().to_string(), span.is_emphasis()))
                .collect();
            wrap_runs(&runs, width, BULLET_PREFIX, BULLET_HANG, false)
                .into_iter()
                .enumerate()
                .map(|(row_idx, row)| bullet_row(row, row_idx == 0, base))
                .collect()
        }
    }
}

fn bullet_row(row: Vec<(String, bool)>, first: bool, base: Style) -> Line<'static> {
    let spans: Vec<Span<'static>> = row
        .into_iter()
        .enumerate()
        .map(|(idx, (text, emphasis))| {
            if idx == 0 && first {
                Span::styled(text, style::bullet_marker_style())
            } else {
                Span::styled(text, style::style_for_span(base, emphasis))
            }
        })
        .collect();
    Line::from(spans)
}

/// Largest scroll offset for the manual on a `width` x `height` terminal.
pub fn manual_max_scroll(width: u16, height: u16) -> usize {
    let popup = manual_popup_rect(Rect::new(0, 0, width, height));
    let body = manual_content_rect(popup);
    let total = manual_lines(&content::render_manual(), body.width).len();
    total.saturating_sub(body.height as usize)
}

pub fn render_manual_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let _scope = crate::perf::scope("ui.manual_overlay");
    let popup = manual_popup_rect(area);
    let manual = content::render_manual();

    let block = Block::default()
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .border_style(Style::default().fg(style::accent()))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    let inner = manual_inner_rect(popup);
    if inner.height < 4 {
        return;
    }

    // Header: title on the left, close control on the right
    let close = manual_close_rect(popup);
    let title_area = Rect::new(inner.x, inner.y, inner.width.saturating_sub(close.width), 1);
    frame.render_widget(
        Paragraph::new(Line::styled(
            manual.title,
            Style::default()
                .fg(style::accent())
                .add_modifier(Modifier::BOLD),
        )),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            CLOSE_LABEL,
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        close,
    );
    let rule_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);
    frame.render_widget(
        Paragraph::new(Line::styled(
            "─".repeat(inner.width as usize),
            style::hint_style(),
        )),
        rule_area,
    );

    let body = manual_content_rect(popup);
    let all_lines = manual_lines(&manual, body.width);
    let max_scroll = all_lines.len().saturating_sub(body.height as usize);
    let scroll = model.manual_scroll_offset.min(max_scroll);
    let end = (scroll + body.height as usize).min(all_lines.len());
    frame.render_widget(Paragraph::new(all_lines[scroll..end].to_vec()), body);

    let footer_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    let position = if max_scroll == 0 {
        String::new()
    } else {
        format!("  {}/{}", scroll, max_scroll)
    };
    let footer = Line::styled(
        format!("j/k scroll \u{2502} Esc closes{position}"),
        style::hint_style(),
    );
    frame.render_widget(Paragraph::new(footer), footer_area);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
