//! Default keybindings for the application.
//!
//! Maps key combinations to commands, with a global table that is always
//! active and per-focus tables that apply to the focused panel. Focus
//! tables win over the global table so typing in the contact form never
//! collides with navigation shortcuts.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use crate::app::Focus;
use crate::content::{Category, ALL_CATEGORIES};

/// A key combination (key code plus modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with the Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with the Shift modifier.
    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

impl From<&KeyEvent> for KeyCombo {
    fn from(event: &KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Always-active bindings.
    pub global: HashMap<KeyCombo, Command>,
    /// Bindings per focused panel.
    pub focus: HashMap<Focus, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates the default binding tables.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            focus: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_focus_bindings();

        config
    }

    /// Resolve a key event to a command for the given focus.
    ///
    /// Focus-specific bindings take precedence over global ones.
    pub fn resolve(&self, event: &KeyEvent, focus: Focus) -> Option<Command> {
        let combo = KeyCombo::from(event);
        if let Some(command) = self.focus.get(&focus).and_then(|map| map.get(&combo)) {
            return Some(*command);
        }
        self.global.get(&combo).copied()
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
    }

    fn setup_focus_bindings(&mut self) {
        // Bindings shared by the two browse panels, where plain letters
        // are free to act as shortcuts.
        let mut browse = HashMap::new();
        browse.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        browse.insert(KeyCombo::plain(KeyCode::Char('t')), Command::ToggleTheme);
        browse.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        browse.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        browse.insert(KeyCombo::plain(KeyCode::Char('k')), Command::MoveUp);
        browse.insert(KeyCombo::plain(KeyCode::Char('j')), Command::MoveDown);
        browse.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
        browse.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        for category in ALL_CATEGORIES {
            browse.insert(
                KeyCombo::plain(KeyCode::Char(category_shortcut(category))),
                Command::SelectCategory(category),
            );
        }

        let mut categories = browse.clone();
        categories.insert(KeyCombo::plain(KeyCode::Tab), Command::MoveDown);
        self.focus.insert(Focus::Categories, categories);

        let mut posts = browse;
        posts.insert(
            KeyCombo::plain(KeyCode::Char('s')),
            Command::ToggleSortOrder,
        );
        posts.insert(KeyCombo::plain(KeyCode::Left), Command::PreviousPost);
        posts.insert(KeyCombo::plain(KeyCode::Right), Command::NextPost);
        self.focus.insert(Focus::Posts, posts);

        // Form bindings stay minimal; unbound keys fall through to the
        // focused text input.
        let mut form = HashMap::new();
        form.insert(KeyCombo::plain(KeyCode::Tab), Command::NextField);
        form.insert(KeyCombo::shift(KeyCode::BackTab), Command::PreviousField);
        form.insert(KeyCombo::plain(KeyCode::BackTab), Command::PreviousField);
        form.insert(KeyCombo::ctrl(KeyCode::Char('s')), Command::SubmitForm);
        form.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        self.focus.insert(Focus::Form, form);
    }
}

/// Map a category to its 1-based shortcut key.
///
/// The browse keymaps and the footer hint both derive their digits from
/// here, so the two cannot drift apart.
pub fn category_shortcut(category: Category) -> char {
    char::from_digit(category.position() as u32 + 1, 10).unwrap_or('1')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        let mut event = KeyEvent::new(code, modifiers);
        event.kind = KeyEventKind::Press;
        event
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let config = KeybindingConfig::new();
        let event = key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for focus in [Focus::Categories, Focus::Posts, Focus::Form] {
            assert_eq!(config.resolve(&event, focus), Some(Command::Quit));
        }
    }

    #[test]
    fn test_plain_q_does_not_quit_in_form() {
        let config = KeybindingConfig::new();
        let event = key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(config.resolve(&event, Focus::Posts), Some(Command::Quit));
        assert_eq!(config.resolve(&event, Focus::Form), None);
    }

    #[test]
    fn test_sort_toggle_only_in_posts() {
        let config = KeybindingConfig::new();
        let event = key(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(
            config.resolve(&event, Focus::Posts),
            Some(Command::ToggleSortOrder)
        );
        assert_eq!(config.resolve(&event, Focus::Categories), None);
    }

    #[test]
    fn test_digit_shortcuts_cover_all_categories() {
        let config = KeybindingConfig::new();
        for category in ALL_CATEGORIES {
            let event = key(
                KeyCode::Char(category_shortcut(category)),
                KeyModifiers::NONE,
            );
            assert_eq!(
                config.resolve(&event, Focus::Categories),
                Some(Command::SelectCategory(category))
            );
        }
    }

    #[test]
    fn test_form_tab_cycles_fields() {
        let config = KeybindingConfig::new();
        let event = key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(config.resolve(&event, Focus::Form), Some(Command::NextField));
    }
}
