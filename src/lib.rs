//! Persona Select - "Pick Your Player" portfolio carousel (TUI Edition)
//!
//! Core library providing the persona roster, the selection state machine,
//! ring animation and the ratatui views that present them.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
