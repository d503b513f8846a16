use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, Message, Model};

use super::event_loop::ResizeDebouncer;

/// Rows moved per mouse wheel notch.
const WHEEL_STEP: usize = 3;

impl App {
    pub(super) fn handle_event(
        &self,
        event: &Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) => handle_key(*key, model),
            Event::Mouse(mouse) if self.mouse_enabled => handle_mouse(*mouse, model),
            Event::Resize(w, h) => {
                crate::perf::log_event("event.resize.queue", format!("width={w} height={h}"));
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }
}

pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c' | 'q'))
    {
        return Some(Message::Quit);
    }

    if model.manual_visible() {
        return handle_manual_key(key, model);
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(Message::ScrollDown(1)),
        KeyCode::Char('k') | KeyCode::Up => Some(Message::ScrollUp(1)),
        KeyCode::Char(' ') | KeyCode::PageDown => Some(Message::PageDown),
        KeyCode::Char('b') | KeyCode::PageUp => Some(Message::PageUp),
        KeyCode::Char('g') | KeyCode::Home => Some(Message::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(Message::GoToBottom),
        KeyCode::Enter => Some(Message::OpenManual),
        KeyCode::Char('m') => Some(Message::ToggleManual),
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
        _ => None,
    }
}

fn handle_manual_key(key: KeyEvent, model: &Model) -> Option<Message> {
    let page = usize::from(crate::ui::page_height(model.terminal_size().1)).max(1);
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(Message::ManualScrollDown(1)),
        KeyCode::Char('k') | KeyCode::Up => Some(Message::ManualScrollUp(1)),
        KeyCode::Char(' ') | KeyCode::PageDown => Some(Message::ManualScrollDown(page)),
        KeyCode::Char('b') | KeyCode::PageUp => Some(Message::ManualScrollUp(page)),
        KeyCode::Char('g') | KeyCode::Home => Some(Message::ManualScrollUp(usize::MAX)),
        KeyCode::Char('G') | KeyCode::End => Some(Message::ManualScrollDown(usize::MAX)),
        KeyCode::Esc | KeyCode::Char('q') => Some(Message::CloseManual),
        KeyCode::Char('m') => Some(Message::ToggleManual),
        _ => None,
    }
}

pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
    let (width, height) = model.terminal_size();
    let area = Rect::new(0, 0, width, height);

    if model.manual_visible() {
        let popup = crate::ui::manual_popup_rect(area);
        return match mouse.kind {
            MouseEventKind::ScrollDown => Some(Message::ManualScrollDown(WHEEL_STEP)),
            MouseEventKind::ScrollUp => Some(Message::ManualScrollUp(WHEEL_STEP)),
            MouseEventKind::Up(MouseButton::Left) => {
                let close = crate::ui::manual_close_rect(popup);
                if point_in_rect(mouse.column, mouse.row, close)
                    || !point_in_rect(mouse.column, mouse.row, popup)
                {
                    Some(Message::CloseManual)
                } else {
                    // Clicks on the manual itself do not reach the page.
                    None
                }
            }
            _ => None,
        };
    }

    let [_, page_area, _] = crate::ui::split_screen(area);
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(Message::ScrollDown(WHEEL_STEP)),
        MouseEventKind::ScrollUp => Some(Message::ScrollUp(WHEEL_STEP)),
        MouseEventKind::Up(MouseButton::Left) if point_in_rect(mouse.column, mouse.row, page_area) => {
            let line = model.viewport.offset() + usize::from(mouse.row - page_area.y);
            (line == model.page.cta_line()).then_some(Message::OpenManual)
        }
        _ => None,
    }
}

const fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}
