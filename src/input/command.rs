//! The [`Command`] enum listing every action a key press can trigger.

use crate::content::Category;

/// A user action produced by resolving a key press against the
/// keybinding configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Exit the application.
    Quit,
    /// Switch between light and dark mode.
    ToggleTheme,
    /// Move the cursor up in the focused list.
    MoveUp,
    /// Move the cursor down in the focused list.
    MoveDown,
    /// Activate the item under the cursor.
    Activate,
    /// Collapse the expanded post or clear transient state.
    Back,
    /// Jump directly to a category panel.
    SelectCategory(Category),
    /// Flip the post list between newest-first and oldest-first.
    ToggleSortOrder,
    /// Move to the previous post while one is expanded.
    PreviousPost,
    /// Move to the next post while one is expanded.
    NextPost,
    /// Move focus to the next contact form field.
    NextField,
    /// Move focus to the previous contact form field.
    PreviousField,
    /// Validate and submit the contact form.
    SubmitForm,
}
