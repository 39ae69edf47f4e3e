//! Source listing pane
//!
//! Shows the algorithm's listing with line numbers, light Rust syntax
//! highlighting and the current step's line marked. The current line is kept
//! at a fixed visual row while stepping; ↑/↓ move that row.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Simple syntax highlighting for the Rust listings
fn highlight_source_code(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Comments run to end of line
        if c == '/' && chars.get(i + 1) == Some(&'/') {
            if !current_word.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current_word)));
            }
            let rest: String = chars[i..].iter().collect();
            spans.push(Span::styled(rest, Style::default().fg(DEFAULT_THEME.comment)));
            break;
        }

        if c == '"' {
            if !current_word.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current_word)));
            }
            let mut end = i + 1;
            while end < chars.len() && chars[end] != '"' {
                end += if chars[end] == '\\' { 2 } else { 1 };
            }
            let end = (end + 1).min(chars.len());
            let literal: String = chars[i..end].iter().collect();
            spans.push(Span::styled(literal, Style::default().fg(DEFAULT_THEME.string)));
            i = end;
            continue;
        }

        if !c.is_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                let style = get_keyword_style(&current_word, c == '(' || c == '!');
                spans.push(Span::styled(std::mem::take(&mut current_word), style));
            }

            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = get_keyword_style(&current_word, false);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn get_keyword_style(word: &str, is_call: bool) -> Style {
    match word {
        "usize" | "isize" | "i64" | "u64" | "u32" | "u8" | "bool" | "char" | "Vec" | "Option"
        | "Some" | "None" | "Self" | "BTreeMap" | "VecDeque" | "FxHashSet" => {
            Style::default().fg(DEFAULT_THEME.type_name)
        }
        "fn" | "let" | "mut" | "if" | "else" | "while" | "for" | "in" | "loop" | "return"
        | "break" | "continue" | "match" | "as" | "pub" | "struct" | "impl" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "true" | "false" => Style::default().fg(DEFAULT_THEME.number),
        _ if word.chars().all(|ch| ch.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if is_call => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    /// Visual row the current line is pinned to (None = center on first render)
    pub target_line_row: Option<usize>,
}

/// Render the source listing pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    source_code: &str,
    current_line: Option<usize>,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<&str> = source_code.lines().collect();
    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    if let Some(line) = current_line.filter(|&l| l > 0 && l <= total_lines) {
        scroll_state.offset = (line - 1).saturating_sub(target_row);
        scroll_state.offset = scroll_state
            .offset
            .min(total_lines.saturating_sub(visible_height));
    } else {
        scroll_state.offset = 0;
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = current_line == Some(line_num);

            let (num_style, marker) = if is_current {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                    "▶",
                )
            } else {
                (Style::default().fg(DEFAULT_THEME.comment), " ")
            };

            let mut content = highlight_source_code(line);
            if is_current {
                let bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content.spans {
                    span.style = span.style.patch(bg);
                }
            }

            let mut spans = vec![Span::styled(format!("{}{:3} ", marker, line_num), num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);
}
