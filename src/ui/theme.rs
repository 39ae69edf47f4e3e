//! Catppuccin-style palette shared by every pane

use crate::step::StepKind;
use crate::trace::NodeStatus;
use ratatui::style::Color;

pub struct Theme {
    // Chrome
    pub fg: Color,
    pub comment: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,

    // Listing syntax
    pub keyword: Color,
    pub function: Color,
    pub type_name: Color,
    pub string: Color,
    pub number: Color,

    // Trace state
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub error: Color,
    /// Array cells no step is touching
    pub bar: Color,
    pub visited: Color,
    /// Cells on the DP backtracking path
    pub path: Color,
}

const BLUE: Color = Color::Rgb(137, 180, 250);
const PEACH: Color = Color::Rgb(250, 179, 135);
const YELLOW: Color = Color::Rgb(249, 226, 175);
const OVERLAY: Color = Color::Rgb(108, 112, 134);

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    comment: OVERLAY,
    border_focused: YELLOW,
    border_normal: OVERLAY,
    current_line_bg: Color::Rgb(50, 50, 70),

    keyword: BLUE,
    function: YELLOW,
    type_name: Color::Rgb(148, 226, 213),
    string: PEACH,
    number: PEACH,

    primary: BLUE,
    secondary: PEACH,
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    bar: Color::Rgb(116, 199, 236),
    visited: Color::Rgb(203, 166, 247),
    path: Color::Rgb(245, 194, 231),
};

impl Theme {
    /// Color for array cells touched by a step of this kind
    pub fn step_color(&self, kind: StepKind) -> Color {
        match kind {
            StepKind::Comparison => self.function,
            StepKind::Swap => self.error,
            StepKind::Overwrite => self.secondary,
            StepKind::Highlight => self.success,
            StepKind::Auxiliary => self.visited,
            StepKind::Variable => self.primary,
        }
    }

    pub fn node_color(&self, status: NodeStatus) -> Color {
        match status {
            NodeStatus::Unvisited => self.comment,
            NodeStatus::Visited => self.visited,
            NodeStatus::Finished => self.success,
            NodeStatus::Active => self.secondary,
            NodeStatus::Checking => self.function,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutations_stand_out_from_reads() {
        let theme = &DEFAULT_THEME;
        assert_ne!(
            theme.step_color(StepKind::Swap),
            theme.step_color(StepKind::Comparison)
        );
        assert_ne!(theme.node_color(NodeStatus::Unvisited), theme.node_color(NodeStatus::Finished));
    }
}
