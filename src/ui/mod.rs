//! Terminal trace viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: event loop, pane focus, key bindings; drives a [`Session`]
//! - **[`panes`]**: stateless render functions for each visible pane (source
//!   listing, data view, variables, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! [`Session`]: crate::session::Session

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
