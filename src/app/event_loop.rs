use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, update};

pub(super) struct ResizeDebouncer {
    delay_ms: u64,
    pending: Option<(u16, u16, u64)>,
}

impl ResizeDebouncer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub(super) const fn queue(&mut self, width: u16, height: u16, now_ms: u64) {
        self.pending = Some((width, height, now_ms));
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> Option<(u16, u16)> {
        let (width, height, queued_at) = self.pending?;
        if now_ms.saturating_sub(queued_at) >= self.delay_ms {
            self.pending = None;
            Some((width, height))
        } else {
            None
        }
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized or the event
    /// loop hits an I/O failure.
    pub fn run(&self) -> Result<()> {
        let _run_scope = crate::perf::scope("app.run.total");

        let init_scope = crate::perf::scope("app.ratatui_init");
        let mut terminal = ratatui::try_init().context(
            "Failed to initialize terminal - devops-landing requires an interactive terminal",
        )?;
        let size = terminal.size()?;
        drop(init_scope);

        let mut model = Model::new((size.width, size.height));
        if self.manual_open {
            model = update(model, Message::OpenManual);
        }
        tracing::debug!(
            width = size.width,
            height = size.height,
            page_lines = model.page.line_count(),
            "landing page laid out"
        );

        if self.mouse_enabled
            && let Err(err) = execute!(stdout(), EnableMouseCapture)
        {
            tracing::warn!("mouse capture unavailable: {err}");
        }

        let result = self.event_loop(&mut terminal, &mut model);

        if self.mouse_enabled {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
        ratatui::restore();

        result
    }

    fn apply(model: &mut Model, msg: Message) {
        let was_open = model.manual_visible();
        *model = update(std::mem::take(model), msg);
        if was_open != model.manual_visible() {
            tracing::info!(open = model.manual_visible(), "manual visibility changed");
        }
    }

    fn event_loop(&self, terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let start = Instant::now();
        let mut resize_debouncer = ResizeDebouncer::new(100);
        let mut frame_idx: u64 = 0;
        let mut needs_render = true;

        loop {
            let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            if let Some((width, height)) = resize_debouncer.take_ready(now_ms) {
                crate::perf::log_event(
                    "event.resize.apply",
                    format!("frame={frame_idx} width={width} height={height}"),
                );
                Self::apply(model, Message::Resize(width, height));
                needs_render = true;
            }

            let poll_ms = if needs_render {
                0
            } else if resize_debouncer.is_pending() {
                10
            } else {
                250
            };
            if event::poll(Duration::from_millis(poll_ms))? {
                // Coalesce key repeat bursts into a single render.
                loop {
                    let event_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                    let msg =
                        self.handle_event(&event::read()?, model, event_ms, &mut resize_debouncer);
                    if let Some(msg) = msg {
                        crate::perf::log_event(
                            "event.message",
                            format!("frame={frame_idx} msg={msg:?}"),
                        );
                        Self::apply(model, msg);
                        needs_render = true;
                    }
                    if !event::poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }

            if needs_render {
                frame_idx += 1;
                let draw_start = Instant::now();
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                crate::perf::log_event(
                    "frame.draw",
                    format!(
                        "frame={} draw_ms={:.3} offset={} progress={} manual={}",
                        frame_idx,
                        draw_start.elapsed().as_secs_f64() * 1000.0,
                        model.viewport.offset(),
                        model.scroll_progress(),
                        model.manual_visible()
                    ),
                );
                needs_render = false;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}
