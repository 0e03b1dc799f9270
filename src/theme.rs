//! Color themes for the site shell.
//!
//! The site is themeable between a light and a dark palette. The active
//! mode is owned by the root [`App`](crate::app::App), persisted under
//! the `theme` key, and the matching [`Palette`] is passed down to every
//! render function. No component reads theme state on its own.

use crate::store::{KvStore, KEY_THEME};
use ratatui::style::Color;

/// Which of the two palettes is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Flip between light and dark.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// The string persisted in the store.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Load the persisted mode. Missing or unrecognized values default
    /// to light.
    pub fn load(store: &dyn KvStore) -> Self {
        match store.get(KEY_THEME).as_deref() {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    /// Persist this mode.
    pub fn save(self, store: &mut dyn KvStore) {
        store.set(KEY_THEME, self.as_str());
    }

    /// The palette for this mode.
    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}

/// The full color set a palette provides to the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Whole-frame background
    pub surface: Color,
    /// Panel and widget borders
    pub border: Color,
    /// Highlights and the selected-item marker
    pub accent: Color,
    /// The site title in the header
    pub header: Color,
    /// Primary body text
    pub text: Color,
    /// Secondary text (dates, previews, hints)
    pub dim: Color,
    /// Active category and expanded-post indicators
    pub active: Color,
    /// Validation errors
    pub error: Color,
    /// Confirmation notices (form submitted)
    pub success: Color,
    /// Background for text input boxes
    pub input_bg: Color,
    /// Background highlight for hovered rows
    pub hover_bg: Color,
}

/// Light palette: dark ink on the terminal's default background.
pub const LIGHT: Palette = Palette {
    surface: Color::Rgb(250, 250, 248),
    border: Color::Gray,
    accent: Color::Blue,
    header: Color::Black,
    text: Color::Black,
    dim: Color::DarkGray,
    active: Color::Blue,
    error: Color::Red,
    success: Color::Green,
    input_bg: Color::Rgb(235, 235, 240),
    hover_bg: Color::Rgb(220, 225, 235),
};

/// Dark palette: the minimal dark look.
pub const DARK: Palette = Palette {
    surface: Color::Rgb(12, 12, 18),
    border: Color::DarkGray,
    accent: Color::Cyan,
    header: Color::White,
    text: Color::White,
    dim: Color::DarkGray,
    active: Color::LightCyan,
    error: Color::LightRed,
    success: Color::LightGreen,
    input_bg: Color::Rgb(20, 20, 30),
    hover_bg: Color::Rgb(40, 45, 60),
};
