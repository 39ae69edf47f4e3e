//! Variables pane: the current step's description and auxiliary snapshot

use crate::step::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use serde_json::Value;

/// Compact single-line rendering of a snapshot value; `null` reads as ∞
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "∞".to_string(),
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(format_value).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Object(map) => {
            let inner: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", k, format_value(v)))
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
        other => other.to_string(),
    }
}

pub fn render_variables_pane(
    frame: &mut Frame,
    area: Rect,
    step: Option<&Step>,
    is_focused: bool,
    scroll: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };
    let block = Block::default()
        .title(" Variables ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut lines = Vec::new();
    match step {
        None => lines.push(Line::styled(
            "Press → or space to start",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Some(step) => {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", step.kind.label()),
                    Style::default()
                        .bg(DEFAULT_THEME.step_color(step.kind))
                        .fg(ratatui::style::Color::Black)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(step.description.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            ]));
            if !step.indices.is_empty() {
                lines.push(Line::styled(
                    format!("indices: {:?}", step.indices),
                    Style::default().fg(DEFAULT_THEME.comment),
                ));
            }
            lines.push(Line::default());

            for (name, value) in step.variables.iter().flatten() {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{}: ", name),
                        Style::default().fg(DEFAULT_THEME.type_name),
                    ),
                    Span::styled(format_value(value), Style::default().fg(DEFAULT_THEME.number)),
                ]));
            }
        }
    }

    *scroll = (*scroll).min(lines.len().saturating_sub(1));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, area);
}
