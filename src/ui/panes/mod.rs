//! TUI pane rendering modules
//!
//! - [`source`]: algorithm listing with syntax highlighting and current line indicator
//! - [`data`]: reconstructed array, graph, table or greedy state at the current step
//! - [`variables`]: the current step's description and snapshot values
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane module exports a primary `render_*` function; panes hold no state
//! beyond the scroll offsets the app passes in.

pub mod data;
pub mod source;
pub mod status;
pub mod variables;

pub use data::render_data_pane;
pub use source::{render_source_pane, SourceScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use variables::render_variables_pane;
