use crate::app::Model;

/// All possible events and actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Landing page
    /// Scroll up by n rows
    ScrollUp(usize),
    /// Scroll down by n rows
    ScrollDown(usize),
    /// Scroll up one page
    PageUp,
    /// Scroll down one page
    PageDown,
    /// Go to the hero
    GoToTop,
    /// Go to the footer
    GoToBottom,

    // Manual
    /// Show the manual overlay
    OpenManual,
    /// Hide the manual overlay
    CloseManual,
    /// Show or hide the manual overlay
    ToggleManual,
    /// Scroll the manual up by n rows
    ManualScrollUp(usize),
    /// Scroll the manual down by n rows
    ManualScrollDown(usize),

    // Window
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::ScrollUp(n) => {
            model.viewport.scroll_up(n);
            model.sync_scroll_progress();
        }
        Message::ScrollDown(n) => {
            model.viewport.scroll_down(n);
            model.sync_scroll_progress();
        }
        Message::PageUp => {
            model.viewport.page_up();
            model.sync_scroll_progress();
        }
        Message::PageDown => {
            model.viewport.page_down();
            model.sync_scroll_progress();
        }
        Message::GoToTop => {
            model.viewport.go_to_top();
            model.sync_scroll_progress();
        }
        Message::GoToBottom => {
            model.viewport.go_to_bottom();
            model.sync_scroll_progress();
        }

        Message::OpenManual => model.open_manual(),
        Message::CloseManual => model.close_manual(),
        Message::ToggleManual => {
            if model.manual_visible() {
                model.close_manual();
            } else {
                model.open_manual();
            }
        }
        Message::ManualScrollUp(n) => {
            model.manual_scroll_offset = model.manual_scroll_offset.saturating_sub(n);
        }
        Message::ManualScrollDown(n) => {
            model.manual_scroll_offset = model
                .manual_scroll_offset
                .saturating_add(n)
                .min(model.manual_max_scroll());
        }

        Message::Resize(width, height) => model.relayout(width, height),
        Message::Quit => model.should_quit = true,
    }

    model
}
