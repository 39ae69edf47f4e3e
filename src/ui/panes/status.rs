//! Status bar rendering with keybindings and playback indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;

/// Everything the status bar shows
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub position: Option<usize>,
    pub total_steps: usize,
    pub is_playing: bool,
    pub interval: Duration,
    pub payload_size: usize,
}

/// "Step 3/40" with position `None` shown as step 0
fn step_text(position: Option<usize>, total: usize) -> String {
    format!(" Step {}/{} ", position.map_or(0, |p| p + 1), total)
}

/// Human-readable byte count
fn format_bytes(bytes: usize) -> String {
    match bytes {
        b if b >= 1024 * 1024 => format!("{:.1} MiB", b as f64 / (1024.0 * 1024.0)),
        b if b >= 1024 => format!("{:.1} KiB", b as f64 / 1024.0),
        b => format!("{} B", b),
    }
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let bar_bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
    let left_spans = vec![
        Span::styled(
            step_text(data.position, data.total_steps),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", bar_bg.fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!("{} ms · {} ", data.interval.as_millis(), format_bytes(data.payload_size)),
            bar_bg.fg(DEFAULT_THEME.comment),
        ),
        Span::styled(format!(" {} ", data.message), bar_bg.fg(DEFAULT_THEME.fg)),
    ];
    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(bar_bg)
            .alignment(Alignment::Left),
        layout[0],
    );

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar_bg.fg(DEFAULT_THEME.fg);
    let sep_style = bar_bg.fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    for (keys, desc) in [
        (" ←/→ ", " step "),
        (" ⎵ ", " play "),
        (" +/- ", " speed "),
        (" n/p ", " algo "),
        (" r ", " shuffle "),
        (" ↵ / ⌫ ", " end/start "),
        ("q", " quit "),
    ] {
        if !right_spans.is_empty() {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(keys, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    let at_end = data.total_steps > 0 && data.position == Some(data.total_steps - 1);
    let indicator = if data.is_playing {
        Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
    } else if at_end {
        Some((" END ", DEFAULT_THEME.error))
    } else if data.position.is_none() {
        Some((" START ", DEFAULT_THEME.success))
    } else {
        None
    };
    if let Some((label, color)) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(bar_bg)
            .alignment(Alignment::Right),
        layout[1],
    );
}
