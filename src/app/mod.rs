//! Root application state and event handling.
//!
//! `App` owns the active category, focus, theme mode, post list,
//! hover preview, contact form, and the persisted store. The event
//! loop feeds it key, mouse, and tick events; rendering reads it.

mod types;

pub use types::Focus;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::config::SiteConfig;
use crate::contact::{ContactForm, FieldId, MailLauncher, SystemLauncher};
use crate::content::{Category, HoverPreview, NavDirection, PostListState, CATALOG};
use crate::input::{Command, KeybindingConfig};
use crate::profile::{ProfileInfo, ViewCounter};
use crate::store::KvStore;
use crate::theme::ThemeMode;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};

/// Top-level application state.
pub struct App {
    /// Static site configuration.
    pub config: SiteConfig,
    /// Persisted key-value store (theme, view counter).
    pub store: Box<dyn KvStore>,
    /// Active color scheme.
    pub theme_mode: ThemeMode,
    /// The category whose content is shown.
    pub active_category: Category,
    /// Keyboard cursor position in the category list.
    pub category_cursor: usize,
    /// Which panel keyboard input goes to.
    pub focus: Focus,
    /// Post list state for the ai/ml category.
    pub post_list: PostListState,
    /// Transient category hover preview.
    pub preview: HoverPreview,
    /// Contact form state.
    pub contact: ContactForm,
    /// Profile shown in the sidebar card.
    pub profile: ProfileInfo,
    /// Formatted visit count for the profile card.
    pub views: String,
    /// Hands mailto URIs to the system mail client.
    pub mailer: Box<dyn MailLauncher>,
    /// Key-to-command tables.
    pub keybindings: KeybindingConfig,
    /// Clickable regions registered by the last draw.
    pub hit_areas: HitAreaRegistry,
    /// Whether the next loop iteration should redraw.
    pub needs_redraw: bool,
    /// Set when the user asks to exit.
    pub should_quit: bool,
}

impl App {
    /// Build the application from a config and an opened store.
    ///
    /// Loads the persisted theme and bumps the view counter for this
    /// visit.
    pub fn new(config: SiteConfig, mut store: Box<dyn KvStore>) -> Self {
        let theme_mode = ThemeMode::load(store.as_ref());
        let counter = ViewCounter::initialize(store.as_mut(), chrono::Utc::now());
        let profile = config.profile.clone();

        Self {
            config,
            store,
            theme_mode,
            active_category: Category::default(),
            category_cursor: Category::default().position(),
            focus: Focus::default(),
            post_list: PostListState::new(CATALOG.clone()),
            preview: HoverPreview::new(),
            contact: ContactForm::new(),
            profile,
            views: counter.display(),
            mailer: Box::new(SystemLauncher),
            keybindings: KeybindingConfig::new(),
            hit_areas: HitAreaRegistry::new(),
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Replace the mail launcher. Used by tests to observe hand-offs.
    pub fn with_mailer(mut self, mailer: Box<dyn MailLauncher>) -> Self {
        self.mailer = mailer;
        self
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance time-based state. Called roughly every 16ms.
    pub fn tick(&mut self) {
        if self.preview.tick(Instant::now()) {
            self.needs_redraw = true;
        }
    }

    // ========================================================================
    // Keyboard
    // ========================================================================

    /// Handle a key event.
    pub fn handle_key(&mut self, event: &KeyEvent) {
        if event.kind == KeyEventKind::Release {
            return;
        }

        if let Some(command) = self.keybindings.resolve(event, self.focus) {
            self.execute(command);
            return;
        }

        if self.focus == Focus::Form {
            self.handle_form_key(event);
        }
    }

    /// Unbound keys edit the focused contact form field.
    fn handle_form_key(&mut self, event: &KeyEvent) {
        let multiline = self.contact.focused() == FieldId::Message;
        match event.code {
            KeyCode::Char(c) if !event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.contact.focused_field_mut().insert_char(c);
            }
            KeyCode::Backspace => self.contact.focused_field_mut().backspace(),
            KeyCode::Delete => self.contact.focused_field_mut().delete_char(),
            KeyCode::Left => self.contact.focused_field_mut().move_left(),
            KeyCode::Right => self.contact.focused_field_mut().move_right(),
            KeyCode::Home => self.contact.focused_field_mut().move_home(),
            KeyCode::End => self.contact.focused_field_mut().move_end(),
            KeyCode::Enter if multiline => self.contact.focused_field_mut().insert_newline(),
            KeyCode::Enter => self.contact.focus_next(),
            _ => return,
        }
        self.needs_redraw = true;
    }

    /// Execute a resolved command.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Quit => {
                self.should_quit = true;
                return;
            }
            Command::ToggleTheme => self.toggle_theme(),
            Command::MoveUp => self.move_cursor(-1),
            Command::MoveDown => self.move_cursor(1),
            Command::Activate => self.activate(),
            Command::Back => self.back(),
            Command::SelectCategory(category) => self.select_category(category),
            Command::ToggleSortOrder => {
                let next = self.post_list.order().toggled();
                self.post_list.set_sort_order(next);
            }
            Command::PreviousPost => self.post_list.navigate(NavDirection::Previous),
            Command::NextPost => self.post_list.navigate(NavDirection::Next),
            Command::NextField => self.contact.focus_next(),
            Command::PreviousField => self.contact.focus_previous(),
            Command::SubmitForm => {
                self.contact
                    .submit(&self.config.contact_recipient, self.mailer.as_ref());
            }
        }
        self.needs_redraw = true;
    }

    fn move_cursor(&mut self, delta: i32) {
        match self.focus {
            Focus::Categories => {
                let len = crate::content::ALL_CATEGORIES.len();
                let cursor = self.category_cursor as i32 + delta;
                self.category_cursor = cursor.clamp(0, len as i32 - 1) as usize;
                // Arming the preview on keyboard movement mirrors mouse
                // hover for keyboard-only use.
                if let Some(category) = Category::at_position(self.category_cursor) {
                    self.preview.hover_enter(category);
                }
            }
            Focus::Posts => {
                if delta < 0 {
                    self.post_list.cursor_up();
                } else {
                    self.post_list.cursor_down();
                }
            }
            Focus::Form => {}
        }
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Categories => {
                if let Some(category) = Category::at_position(self.category_cursor) {
                    self.select_category(category);
                }
            }
            Focus::Posts => {
                if let Some(id) = self.post_list.post_at_cursor().map(|p| p.id) {
                    self.post_list.select_post(id);
                }
            }
            Focus::Form => {}
        }
    }

    fn back(&mut self) {
        match self.focus {
            Focus::Posts => {
                if self.post_list.expanded().is_some() {
                    self.post_list.close_expanded();
                } else {
                    self.focus = Focus::Categories;
                }
            }
            Focus::Form => self.focus = Focus::Categories,
            Focus::Categories => {
                self.preview.hover_leave(Instant::now());
            }
        }
    }

    /// Switch the active category and move focus into its panel.
    pub fn select_category(&mut self, category: Category) {
        tracing::debug!(category = category.id(), "category selected");
        self.active_category = category;
        self.category_cursor = category.position();
        self.focus = match category {
            Category::AiMl => Focus::Posts,
            Category::Contact => Focus::Form,
            _ => Focus::Categories,
        };
        self.preview.hover_leave(Instant::now());
        self.needs_redraw = true;
    }

    /// Flip the theme and persist the choice.
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        tracing::debug!(theme = self.theme_mode.as_str(), "theme toggled");
        self.theme_mode.save(self.store.as_mut());
        self.needs_redraw = true;
    }

    // ========================================================================
    // Mouse
    // ========================================================================

    /// Handle a mouse event: clicks resolve against the hit areas,
    /// movement drives hover styling and the category preview.
    pub fn handle_mouse(&mut self, event: &MouseEvent) {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_areas.hit_test(event.column, event.row) {
                    self.handle_click(action);
                }
            }
            MouseEventKind::Moved => {
                if self.hit_areas.update_hover(event.column, event.row) {
                    self.needs_redraw = true;
                }
                self.sync_preview_with_hover();
            }
            _ => {}
        }
    }

    /// Execute a resolved click action.
    pub fn handle_click(&mut self, action: ClickAction) {
        match action {
            ClickAction::SelectCategory(category) => self.select_category(category),
            ClickAction::ToggleTheme => self.toggle_theme(),
            ClickAction::SelectPost(id) => {
                self.focus = Focus::Posts;
                self.post_list.select_post(id);
            }
            ClickAction::CloseExpanded => self.post_list.close_expanded(),
            ClickAction::PreviousPost => self.post_list.navigate(NavDirection::Previous),
            ClickAction::NextPost => self.post_list.navigate(NavDirection::Next),
            ClickAction::SetSortOrder(order) => self.post_list.set_sort_order(order),
            ClickAction::FocusField(field) => {
                self.focus = Focus::Form;
                self.contact.focus(field);
            }
            ClickAction::SubmitForm => {
                self.contact
                    .submit(&self.config.contact_recipient, self.mailer.as_ref());
            }
        }
        self.needs_redraw = true;
    }

    fn sync_preview_with_hover(&mut self) {
        match self.hit_areas.hovered_action() {
            Some(ClickAction::SelectCategory(category)) => {
                if self.preview.category() != Some(category) || !self.preview.is_active() {
                    self.preview.hover_enter(category);
                    self.needs_redraw = true;
                }
            }
            _ => {
                if self.preview.is_active() {
                    self.preview.hover_leave(Instant::now());
                    self.needs_redraw = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::RecordingLauncher;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    fn test_app() -> App {
        App::new(SiteConfig::new(), Box::new(MemoryStore::new()))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_starts_on_me_category_with_light_theme() {
        let app = test_app();
        assert_eq!(app.active_category, Category::Me);
        assert_eq!(app.theme_mode, ThemeMode::Light);
        assert_eq!(app.focus, Focus::Categories);
    }

    #[test]
    fn test_toggle_theme_persists() {
        let mut app = test_app();
        app.execute(Command::ToggleTheme);
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert_eq!(
            app.store.get(crate::store::KEY_THEME).as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_selecting_ai_ml_moves_focus_to_posts() {
        let mut app = test_app();
        app.select_category(Category::AiMl);
        assert_eq!(app.focus, Focus::Posts);
        assert_eq!(app.category_cursor, Category::AiMl.position());
    }

    #[test]
    fn test_selecting_contact_moves_focus_to_form() {
        let mut app = test_app();
        app.select_category(Category::Contact);
        assert_eq!(app.focus, Focus::Form);
    }

    #[test]
    fn test_category_cursor_clamps_at_ends() {
        let mut app = test_app();
        app.execute(Command::MoveUp);
        assert_eq!(app.category_cursor, 0);
        for _ in 0..10 {
            app.execute(Command::MoveDown);
        }
        assert_eq!(
            app.category_cursor,
            crate::content::ALL_CATEGORIES.len() - 1
        );
    }

    #[test]
    fn test_enter_expands_post_under_cursor() {
        let mut app = test_app();
        app.select_category(Category::AiMl);
        let expected = app.post_list.post_at_cursor().map(|p| p.id);
        app.execute(Command::Activate);
        assert_eq!(app.post_list.expanded(), expected);
    }

    #[test]
    fn test_esc_collapses_then_leaves_posts() {
        let mut app = test_app();
        app.select_category(Category::AiMl);
        app.execute(Command::Activate);
        assert!(app.post_list.expanded().is_some());

        app.execute(Command::Back);
        assert_eq!(app.post_list.expanded(), None);
        assert_eq!(app.focus, Focus::Posts);

        app.execute(Command::Back);
        assert_eq!(app.focus, Focus::Categories);
    }

    #[test]
    fn test_typing_reaches_the_focused_field() {
        let mut app = test_app();
        app.select_category(Category::Contact);
        for c in "Ada".chars() {
            app.handle_key(&press(KeyCode::Char(c)));
        }
        assert_eq!(app.contact.field(FieldId::Name).content(), "Ada");
    }

    #[test]
    fn test_submit_command_uses_configured_recipient() {
        let launcher = Arc::new(RecordingLauncher::default());
        let mut app = test_app().with_mailer(Box::new(Arc::clone(&launcher)));
        app.select_category(Category::Contact);

        app.contact.focus(FieldId::Name);
        app.contact.focused_field_mut().insert_str("Ada");
        app.contact.focus(FieldId::Email);
        app.contact.focused_field_mut().insert_str("ada@example.com");
        app.contact.focus(FieldId::Subject);
        app.contact.focused_field_mut().insert_str("Hello");
        app.contact.focus(FieldId::Message);
        app.contact.focused_field_mut().insert_str("Hi there");

        app.execute(Command::SubmitForm);
        let launched = launcher.launched();
        assert_eq!(launched.len(), 1);
        assert!(launched[0].starts_with("mailto:henrychao553@gmail.com?"));
    }

    #[test]
    fn test_keyboard_cursor_arms_preview() {
        let mut app = test_app();
        app.execute(Command::MoveDown);
        assert!(app.preview.is_active());
        assert_eq!(app.preview.category(), Some(Category::AiMl));
    }
}
