//! Hit area registry for mouse interactions.
//!
//! Panels register clickable regions while rendering, and the event loop
//! queries the registry to resolve mouse clicks and hover movement. The
//! registry is cleared and rebuilt on every draw so it always matches
//! what is on screen.

use crate::contact::FieldId;
use crate::content::{Category, SortOrder};
use ratatui::layout::Rect;
use ratatui::style::Style;

/// An action triggered by clicking a hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Switch the content panel to a category.
    SelectCategory(Category),
    /// Flip between light and dark mode.
    ToggleTheme,
    /// Expand a post, or collapse it if already expanded.
    SelectPost(u32),
    /// Collapse the expanded post.
    CloseExpanded,
    /// Step to the previous post while one is expanded.
    PreviousPost,
    /// Step to the next post while one is expanded.
    NextPost,
    /// Re-sort the post list.
    SetSortOrder(SortOrder),
    /// Focus a contact form field.
    FocusField(FieldId),
    /// Validate and submit the contact form.
    SubmitForm,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone, PartialEq)]
pub struct HitArea {
    /// The rectangular region that responds to clicks.
    pub rect: Rect,
    /// The action to trigger when this area is clicked.
    pub action: ClickAction,
    /// Optional style to apply while the mouse is over this area.
    pub hover_style: Option<Style>,
}

impl HitArea {
    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry of hit areas for the current frame.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// Registered areas in registration order. Later areas sit on top
    /// of earlier ones when regions overlap.
    areas: Vec<HitArea>,
    /// Snapshot of the hovered area. A snapshot rather than an index:
    /// the areas are cleared and re-registered on every draw, and render
    /// code asks for hover styling while the new list is still being
    /// built.
    hovered: Option<HitArea>,
}

impl HitAreaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas.
    ///
    /// Call this at the start of each render cycle. Hover state is kept
    /// so areas re-registered at the same position stay highlighted; it
    /// is revalidated on the next mouse move.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area.
    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    /// Resolve a click at the given position.
    ///
    /// Checks areas in reverse registration order so the topmost area
    /// wins for overlapping regions.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action)
    }

    /// Update the hover state from a mouse position.
    ///
    /// Returns true if the hovered area changed, which means a redraw is
    /// needed.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let new_hovered = self
            .areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .cloned();
        let changed = new_hovered != self.hovered;
        self.hovered = new_hovered;
        changed
    }

    /// The action of the currently hovered area, if any.
    pub fn hovered_action(&self) -> Option<ClickAction> {
        self.hovered.as_ref().map(|area| area.action)
    }

    /// Get the hover style for a rect if it is the hovered area.
    ///
    /// Lets render code apply hover styling without tracking hover state
    /// itself.
    pub fn get_hover_style(&self, rect: Rect) -> Option<Style> {
        let hovered = self.hovered.as_ref()?;
        if hovered.rect == rect {
            hovered.hover_style
        } else {
            None
        }
    }

    /// Check if any area is currently hovered.
    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    /// Number of registered areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Whether the registry has no areas.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
