//! Core application state types.

/// Which panel keyboard input is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    /// The category navigation list.
    #[default]
    Categories,
    /// The post list in the content panel.
    Posts,
    /// The contact form fields.
    Form,
}
