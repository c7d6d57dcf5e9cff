//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: the bar chart for the current frame, with highlighted indices
//! - [`legend`]: what each highlight color means for the selected algorithm
//! - [`status`]: status bar with step counter, keybindings and playback state
//!
//! Each module exports a stateless `render_*` function; all state lives in
//! [`App`](crate::ui::App).

pub mod bars;
pub mod legend;
pub mod status;

// Re-export render functions for convenience
pub use bars::{render_bars_pane, BarRole, BarsRenderData};
pub use legend::render_legend;
pub use status::{render_status_bar, StatusRenderData};
