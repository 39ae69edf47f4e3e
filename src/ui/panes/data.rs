//! Data pane: the reconstructed state at the current position
//!
//! Array algorithms draw one horizontal bar per cell, graph algorithms draw the
//! fixture on a canvas, DP algorithms draw the table and greedy algorithms draw
//! a timeline or a coin tally. Cells touched by the current step are colored
//! by its kind.

use crate::algorithms::graph::{EDGES, NODES};
use crate::algorithms::{AlgorithmInput, InputKind};
use crate::step::{Step, Variables};
use crate::trace::{DisplayState, NodeStatus, Trace};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};
use serde_json::Value;

/// Canvas extents covering the fixture coordinates
const GRAPH_WIDTH: f64 = 500.0;
const GRAPH_HEIGHT: f64 = 300.0;

/// Render the data pane for `position`
pub fn render_data_pane(
    frame: &mut Frame,
    area: Rect,
    trace: &Trace,
    position: Option<usize>,
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
        .title(" Data ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let step = trace.step(position);

    let lines = match trace.display_state(position) {
        DisplayState::Array { values, .. } => array_lines(&values, step, area.width),
        DisplayState::Graph { nodes, .. } => {
            render_graph(frame, area, block, &nodes);
            return;
        }
        DisplayState::Snapshot { variables } => match trace.algorithm().input {
            InputKind::Strings | InputKind::Knapsack => {
                table_lines(trace.input(), variables.as_ref())
            }
            InputKind::Activities => activity_lines(variables.as_ref()),
            _ => coin_lines(variables.as_ref()),
        },
    };

    let visible = area.height.saturating_sub(2) as usize;
    *scroll = (*scroll).min(lines.len().saturating_sub(visible));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

/// One bar per array cell, scaled to the pane width
fn array_lines(values: &[i64], step: Option<&Step>, width: u16) -> Vec<Line<'static>> {
    if values.is_empty() {
        return vec![Line::styled(
            "(empty array)",
            Style::default().fg(DEFAULT_THEME.comment),
        )];
    }

    let low = values.iter().copied().min().unwrap_or(0).min(0);
    let high = values.iter().copied().max().unwrap_or(0).max(1);
    // i128 so the full i64 range cannot overflow
    let low = i128::from(low);
    let span = (i128::from(high) - low).max(1) as f64;
    // index column, separator, value column, borders
    let room = width.saturating_sub(18).max(4) as f64;

    values
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            let touched = step.filter(|s| s.indices.contains(&idx));
            let color = touched.map_or(DEFAULT_THEME.bar, |s| DEFAULT_THEME.step_color(s.kind));
            let len = (((i128::from(value) - low) as f64 / span) * room).round().max(1.0) as usize;
            let mut value_style = Style::default().fg(color);
            if touched.is_some() {
                value_style = value_style.add_modifier(Modifier::BOLD);
            }
            Line::from(vec![
                Span::styled(format!("{:>3} │ ", idx), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled("█".repeat(len), Style::default().fg(color)),
                Span::styled(format!(" {}", value), value_style),
            ])
        })
        .collect()
}

fn render_graph(frame: &mut Frame, area: Rect, block: Block, nodes: &[NodeStatus]) {
    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, GRAPH_WIDTH])
        .y_bounds([0.0, GRAPH_HEIGHT])
        .paint(|ctx| {
            for edge in &EDGES {
                let (from, to) = (&NODES[edge.source], &NODES[edge.target]);
                let (x1, y1) = (f64::from(from.x), GRAPH_HEIGHT - f64::from(from.y));
                let (x2, y2) = (f64::from(to.x), GRAPH_HEIGHT - f64::from(to.y));
                ctx.draw(&CanvasLine::new(x1, y1, x2, y2, DEFAULT_THEME.border_normal));
                ctx.print(
                    (x1 + x2) / 2.0,
                    (y1 + y2) / 2.0,
                    Span::styled(edge.weight.to_string(), Style::default().fg(DEFAULT_THEME.comment)),
                );
            }
            ctx.layer();
            for node in &NODES {
                let status = nodes.get(node.id).copied().unwrap_or(NodeStatus::Unvisited);
                ctx.print(
                    f64::from(node.x),
                    GRAPH_HEIGHT - f64::from(node.y),
                    Span::styled(
                        format!("({})", node.label),
                        Style::default()
                            .fg(DEFAULT_THEME.node_color(status))
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });
    frame.render_widget(canvas, area);
}

fn as_usize(value: Option<&Value>) -> Option<usize> {
    value.and_then(Value::as_u64).map(|v| v as usize)
}

/// Cells listed in `variables.path`
fn path_cells(vars: Option<&Variables>) -> Vec<(usize, usize)> {
    vars.and_then(|v| v.get("path"))
        .and_then(Value::as_array)
        .map(|cells| {
            cells
                .iter()
                .filter_map(|cell| Some((as_usize(cell.get(0))?, as_usize(cell.get(1))?)))
                .collect()
        })
        .unwrap_or_default()
}

/// DP table with row/column headers, the current cell and the backtracking path
fn table_lines(input: &AlgorithmInput, vars: Option<&Variables>) -> Vec<Line<'static>> {
    let Some(table) = vars.and_then(|v| v.get("table")).and_then(Value::as_array) else {
        return Vec::new();
    };
    let cols = table.first().and_then(Value::as_array).map_or(0, Vec::len);

    let (row_labels, col_labels): (Vec<String>, Vec<String>) = match input {
        AlgorithmInput::Strings { first, second } => (
            std::iter::once("-".to_string())
                .chain(first.chars().map(String::from))
                .collect(),
            std::iter::once("-".to_string())
                .chain(second.chars().map(String::from))
                .collect(),
        ),
        _ => (
            (0..table.len())
                .map(|i| if i == 0 { "-".to_string() } else { format!("#{}", i) })
                .collect(),
            (0..cols).map(|w| w.to_string()).collect(),
        ),
    };

    let current = vars.and_then(|v| {
        let row = as_usize(v.get("i"))?;
        let col = as_usize(v.get("j").or_else(|| v.get("w")))?;
        Some((row, col))
    });
    let path = path_cells(vars);

    let header_style = Style::default().fg(DEFAULT_THEME.type_name);
    let mut lines = vec![Line::from(
        std::iter::once(Span::raw("     "))
            .chain(
                col_labels
                    .iter()
                    .map(|label| Span::styled(format!("{:>4}", label), header_style)),
            )
            .collect::<Vec<_>>(),
    )];

    for (r, row) in table.iter().enumerate() {
        let label = row_labels.get(r).cloned().unwrap_or_default();
        let mut spans = vec![Span::styled(format!("{:>4} ", label), header_style)];
        for (c, cell) in row.as_array().into_iter().flatten().enumerate() {
            let style = if current == Some((r, c)) {
                Style::default()
                    .fg(DEFAULT_THEME.function)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if path.contains(&(r, c)) {
                Style::default()
                    .fg(DEFAULT_THEME.path)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            spans.push(Span::styled(format!("{:>4}", cell.to_string()), style));
        }
        lines.push(Line::from(spans));
    }

    for key in ["lcs", "chosenItems"] {
        if let Some(value) = vars.and_then(|v| v.get(key)) {
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("{}: {}", key, value),
                Style::default().fg(DEFAULT_THEME.success),
            ));
        }
    }
    lines
}

/// Timeline with one row per activity in sorted order
fn activity_lines(vars: Option<&Variables>) -> Vec<Line<'static>> {
    let Some(activities) = vars.and_then(|v| v.get("activities")).and_then(Value::as_array) else {
        return Vec::new();
    };
    let selected: Vec<u64> = vars
        .and_then(|v| v.get("selectedIds"))
        .and_then(Value::as_array)
        .map(|ids| ids.iter().filter_map(Value::as_u64).collect())
        .unwrap_or_default();
    let current = vars.and_then(|v| v.get("currentId")).and_then(Value::as_u64);
    let conflict = vars.and_then(|v| v.get("conflict")).is_some();

    activities
        .iter()
        .filter_map(|activity| {
            let id = activity.get("id")?.as_u64()?;
            let start = as_usize(activity.get("start"))?;
            let end = as_usize(activity.get("end"))?;
            let color = if current == Some(id) && conflict {
                DEFAULT_THEME.error
            } else if current == Some(id) {
                DEFAULT_THEME.function
            } else if selected.contains(&id) {
                DEFAULT_THEME.success
            } else {
                DEFAULT_THEME.comment
            };
            Some(Line::from(vec![
                Span::styled(
                    format!("#{:<3}[{:>2},{:>2}) ", id, start, end),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                Span::raw(" ".repeat(start)),
                Span::styled(
                    "▬".repeat(end.saturating_sub(start).max(1)),
                    Style::default().fg(color),
                ),
            ]))
        })
        .collect()
}

/// Remaining amount plus one row per denomination
fn coin_lines(vars: Option<&Variables>) -> Vec<Line<'static>> {
    let Some(vars) = vars else {
        return Vec::new();
    };
    let remaining = vars.get("remaining").and_then(Value::as_u64).unwrap_or(0);
    let current = vars.get("currentCoin").and_then(Value::as_u64);
    let mut lines = vec![
        Line::styled(
            format!("Remaining: {}", remaining),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::default(),
    ];

    let mut coins: Vec<(u64, u64)> = vars
        .get("selectedCoins")
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(coin, count)| Some((coin.parse().ok()?, count.as_u64()?)))
                .collect()
        })
        .unwrap_or_default();
    coins.sort_unstable_by(|a, b| b.0.cmp(&a.0));

    for (coin, count) in coins {
        let color = if current == Some(coin) {
            DEFAULT_THEME.function
        } else if count > 0 {
            DEFAULT_THEME.success
        } else {
            DEFAULT_THEME.comment
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>5} × {:<3}", coin, count), Style::default().fg(color)),
            Span::styled("●".repeat(count.min(40) as usize), Style::default().fg(color)),
        ]));
    }
    lines
}
