//! Terminal frontend (crossterm + ratatui).
//!
//! Kept apart from `ui` so the window core can be driven by other frontends (or headless, through
//! `ui::backend::raster`) without depending on terminal crates.

pub mod app;
pub mod crossterm;
pub mod terminal_guard;

pub use app::run;
