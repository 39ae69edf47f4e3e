//! Main TUI application state and event loop

use crate::session::Session;
use crate::ui::panes::{
    render_data_pane, render_source_pane, render_status_bar, render_variables_pane,
    SourceScrollState, StatusRenderData,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::warn;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Data,
    Variables,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> data -> variables)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Data,
            FocusedPane::Data => FocusedPane::Variables,
            FocusedPane::Variables => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Variables,
            FocusedPane::Data => FocusedPane::Source,
            FocusedPane::Variables => FocusedPane::Data,
        }
    }
}

/// The main application state
pub struct App {
    pub session: Session,

    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: SourceScrollState,
    pub data_scroll: usize,
    pub variables_scroll: usize,

    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            session,
            focused_pane: FocusedPane::Data,
            source_scroll: SourceScrollState::default(),
            data_scroll: 0,
            variables_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.session.playback.tick(Instant::now()) && !self.session.playback.is_playing() {
                self.status_message = "Playback complete".to_string();
            }

            // Poll with a timeout so autoplay keeps ticking
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        // Source (left) | Data over Variables (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(main_chunks[0]);
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[1]);

        let trace = self.session.trace();
        let algorithm = trace.algorithm();
        let position = self.session.playback.position();
        let step = trace.step(position);
        let title = format!(
            "{} [{}] · time {} · space {}",
            algorithm.name, algorithm.category, algorithm.complexity.time, algorithm.complexity.space
        );

        render_source_pane(
            frame,
            columns[0],
            &title,
            algorithm.code,
            step.and_then(|s| s.line_number),
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        render_data_pane(
            frame,
            right_rows[0],
            trace,
            position,
            self.focused_pane == FocusedPane::Data,
            &mut self.data_scroll,
        );

        render_variables_pane(
            frame,
            right_rows[1],
            step,
            self.focused_pane == FocusedPane::Variables,
            &mut self.variables_scroll,
        );

        render_status_bar(
            frame,
            main_chunks[1],
            &StatusRenderData {
                message: &self.status_message,
                position,
                total_steps: trace.len(),
                is_playing: self.session.playback.is_playing(),
                interval: self.session.playback.interval(),
                payload_size: trace.payload_size(),
            },
        );
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        let playback = &mut self.session.playback;
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).map_or(1, |d| d as usize);
                let before = playback.position();
                playback.step_by(n);
                let stepped = match (before, playback.position()) {
                    (Some(b), Some(a)) => a - b,
                    (None, Some(a)) => a + 1,
                    _ => 0,
                };
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Right => {
                self.status_message = if playback.step_forward() {
                    "Stepped forward".to_string()
                } else {
                    "Already at the last step".to_string()
                };
            }
            KeyCode::Left => {
                self.status_message = if playback.step_backward() {
                    "Stepped backward".to_string()
                } else {
                    "Already at the start".to_string()
                };
            }
            KeyCode::Char(' ') => {
                playback.toggle(Instant::now());
                self.status_message = if playback.is_playing() {
                    "Playing...".to_string()
                } else {
                    "Paused".to_string()
                };
            }
            KeyCode::Enter => {
                playback.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                playback.jump_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                playback.faster();
                self.status_message = format!("Interval {} ms", playback.interval().as_millis());
            }
            KeyCode::Char('-') => {
                playback.slower();
                self.status_message = format!("Interval {} ms", playback.interval().as_millis());
            }
            KeyCode::Char('n') => {
                let result = self.session.select_next();
                self.after_switch(result);
            }
            KeyCode::Char('p') => {
                let result = self.session.select_prev();
                self.after_switch(result);
            }
            KeyCode::Char('r') => {
                let result = self.session.randomize();
                self.after_switch(result);
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Data => self.data_scroll = self.data_scroll.saturating_sub(1),
                FocusedPane::Variables => {
                    self.variables_scroll = self.variables_scroll.saturating_sub(1)
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Data => self.data_scroll = self.data_scroll.saturating_add(1),
                FocusedPane::Variables => {
                    self.variables_scroll = self.variables_scroll.saturating_add(1)
                }
            },
            _ => {}
        }
    }

    /// Update scroll state and the status line after the trace was replaced
    fn after_switch(&mut self, result: Result<(), crate::errors::TraceError>) {
        match result {
            Ok(()) => {
                self.data_scroll = 0;
                self.variables_scroll = 0;
                let trace = self.session.trace();
                self.status_message = format!(
                    "{}: {} steps recorded",
                    trace.algorithm().name,
                    trace.len()
                );
            }
            Err(err) => {
                warn!(error = %err, "could not record trace");
                self.status_message = format!("Error: {}", err);
            }
        }
    }
}
