//! foyer: a single-page personal site rendered in the terminal.
//!
//! A themeable shell with category navigation, a post list with sort
//! and expand/collapse, a profile card with a visit counter, and a
//! mailto-based contact form. All state is local; persistence is a
//! small JSON key-value file.

pub mod app;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod input;
pub mod markdown;
pub mod profile;
pub mod store;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
