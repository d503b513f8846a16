use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let status = if model.manual_visible() {
        " Manual  j/k:scroll  Esc:close  Ctrl-c:quit".to_string()
    } else {
        let range = model.viewport.visible_range();
        format!(
            " devops-landing  [{}%]  Rows {}-{}/{}  Enter:manual  q:quit",
            model.scroll_progress(),
            range.start + 1,
            range.end,
            model.viewport.total_lines()
        )
    };

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}
