use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;
use crate::landing::PageLineKind;

use super::{overlays, status, style};

/// Split the screen into progress bar, page and status bar rows.
pub fn split_screen(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Rows left for the landing page on a terminal `total_height` rows tall.
pub const fn page_height(total_height: u16) -> u16 {
    total_height.saturating_sub(2)
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let [progress_area, page_area, status_area] = split_screen(area);

    render_progress_bar(model, frame, progress_area);
    render_page(model, frame, page_area);
    status::render_status_bar(model, frame, status_area);

    if model.manual_visible() {
        overlays::render_manual_overlay(model, frame, area);
    }
}

fn render_progress_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let width = usize::from(area.width);
    let filled = width * usize::from(model.scroll_progress()) / 100;
    let bar = Line::from(vec![
        Span::styled("━".repeat(filled), Style::default().fg(style::accent())),
        Span::styled(
            "─".repeat(width.saturating_sub(filled)),
            style::hint_style().add_modifier(Modifier::DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(bar), area);
}

fn render_page(model: &Model, frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = model
        .page
        .visible_lines(model.viewport.offset(), area.height as usize)
        .iter()
        .map(|line| {
            let base = style::style_for_page_line(line.kind());
            if line.kind() == PageLineKind::CallToAction {
                cta_line(line.content(), base)
            } else {
                Line::styled(line.content().to_string(), base)
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

// Keep the centring spaces unstyled so only the button is highlighted.
fn cta_line(content: &str, base: Style) -> Line<'static> {
    let label = content.trim_start();
    let indent = &content[..content.len() - label.len()];
    Line::from(vec![
        Span::raw(indent.to_string()),
        Span::styled(label.to_string(), base.reversed()),
    ])
}
