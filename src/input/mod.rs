//! Keyboard input handling.
//!
//! Key events are translated to a [`Command`] by the [`KeybindingConfig`]
//! and executed by the application. Keys with no binding fall through to
//! the focused text input when the contact form is active.

pub mod command;
pub mod keybindings;

pub use command::Command;
pub use keybindings::{category_shortcut, KeyCombo, KeybindingConfig};
