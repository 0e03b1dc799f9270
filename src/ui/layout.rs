//! Responsive layout helpers.
//!
//! `LayoutContext` wraps the current terminal dimensions and answers the
//! layout questions render code asks: whether the three body panels fit
//! side by side or need to stack, and when chrome should be dropped
//! entirely.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 90 columns)
    pub const SM_WIDTH: u16 = 90;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
}

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive decisions.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    /// Create a new layout context with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Whether the terminal is too narrow for comfortable side-by-side
    /// panels.
    pub fn is_compact(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Whether the terminal is small enough that chrome should be
    /// dropped entirely.
    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Whether the three body panels should stack vertically instead of
    /// rendering as columns.
    pub fn should_stack_panels(&self) -> bool {
        self.is_compact()
    }
}
