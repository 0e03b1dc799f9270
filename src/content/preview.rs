//! Transient category hover preview.
//!
//! Hovering a category shows its preview text immediately; un-hovering
//! starts a short grace window before the text clears, so quick mouse
//! movement between rows does not flicker the preview in and out. A new
//! hover inside the window cancels the pending clear.
//!
//! Time is injected (`Instant` parameters) rather than read internally,
//! keeping the timing behavior deterministic under test.

use super::category::Category;
use std::time::{Duration, Instant};

/// How long an un-hovered preview lingers before it clears.
pub const PREVIEW_CLEAR_DELAY: Duration = Duration::from_millis(300);

/// State of the category hover preview.
#[derive(Debug, Clone, Default)]
pub struct HoverPreview {
    /// The category whose text is (still) showing
    category: Option<Category>,
    /// True while the pointer is over a category row
    active: bool,
    /// Armed clear deadline; `None` while hovering or after the clear
    clear_at: Option<Instant>,
}

impl HoverPreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// The category whose preview text should render, if any.
    ///
    /// Remains set during the fade window after the hover ends.
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Whether the pointer is currently over a category row.
    ///
    /// When false but [`category`](Self::category) is still set, the
    /// preview is fading out.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Pointer entered a category row: show its text immediately and
    /// cancel any pending clear.
    pub fn hover_enter(&mut self, category: Category) {
        self.category = Some(category);
        self.active = true;
        self.clear_at = None;
    }

    /// Pointer left the category rows: deactivate immediately, arm the
    /// delayed clear.
    pub fn hover_leave(&mut self, now: Instant) {
        if !self.active && self.clear_at.is_some() {
            // Already fading; keep the original deadline.
            return;
        }
        self.active = false;
        if self.category.is_some() {
            self.clear_at = Some(now + PREVIEW_CLEAR_DELAY);
        }
    }

    /// Fire the armed clear if its deadline has passed.
    ///
    /// Returns true when the preview state changed (a redraw is needed).
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.clear_at {
            Some(deadline) if now >= deadline => {
                self.clear_at = None;
                self.category = None;
                true
            }
            _ => false,
        }
    }
}
