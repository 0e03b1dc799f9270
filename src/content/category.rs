//! The fixed set of navigation categories.

/// One of the site's navigation sections.
///
/// The set is closed: content rendering, navigation, and previews all
/// match exhaustively on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Me,
    AiMl,
    Ideas,
    Contact,
}

/// All categories in display order.
pub const ALL_CATEGORIES: [Category; 4] = [
    Category::Me,
    Category::AiMl,
    Category::Ideas,
    Category::Contact,
];

impl Category {
    /// Stable identifier, used in logs.
    pub fn id(self) -> &'static str {
        match self {
            Category::Me => "me",
            Category::AiMl => "ai-ml",
            Category::Ideas => "ideas",
            Category::Contact => "contact",
        }
    }

    /// Full label for the navigation panel.
    pub fn label(self) -> &'static str {
        match self {
            Category::Me => "Me",
            Category::AiMl => "AI/ML",
            Category::Ideas => "Ideas & Thoughts",
            Category::Contact => "Contact Me",
        }
    }

    /// Short label for compact terminals.
    pub fn short_label(self) -> &'static str {
        match self {
            Category::Me => "Me",
            Category::AiMl => "AI/ML",
            Category::Ideas => "Ideas",
            Category::Contact => "Contact",
        }
    }

    /// Static preview text shown while the category is hovered.
    pub fn preview_text(self) -> &'static str {
        match self {
            Category::Me => "Who I am and what I work on.",
            Category::AiMl => "Posts on machine learning and AI projects.",
            Category::Ideas => "Loose thoughts on technology and its direction.",
            Category::Contact => "Send me a message by email.",
        }
    }

    /// Display position within [`ALL_CATEGORIES`].
    pub fn position(self) -> usize {
        ALL_CATEGORIES
            .iter()
            .position(|&c| c == self)
            .unwrap_or(0)
    }

    /// Category at a display position, if in range.
    pub fn at_position(pos: usize) -> Option<Category> {
        ALL_CATEGORIES.get(pos).copied()
    }
}
