//! Mouse interaction support.
//!
//! Clickable regions are registered during rendering and resolved by the
//! event loop through the [`HitAreaRegistry`].

pub mod hit_area;

pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
