//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — playback state, keyboard event loop, restart and algorithm switching
//! - **[`panes`]** — stateless render functions for the bar chart, legend and status bar
//! - **[`theme`]** — dark and light color palettes used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Config`](crate::config::Config) and call [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
