//! Profile card data and view counting.

mod view_counter;

pub use view_counter::{format_views, ViewCounter, SESSION_WINDOW_MS};

/// Static content for the profile card.
#[derive(Debug, Clone)]
pub struct ProfileInfo {
    /// Display name
    pub name: String,
    /// One-line role or tagline
    pub role: String,
    /// Short bio paragraphs
    pub bio: Vec<String>,
}

impl Default for ProfileInfo {
    fn default() -> Self {
        Self {
            name: "Henry Chao".to_string(),
            role: "Software engineer, ML tinkerer".to_string(),
            bio: vec![
                "Building small machine learning projects end to end.".to_string(),
                "Writing occasional notes on what breaks along the way.".to_string(),
            ],
        }
    }
}
