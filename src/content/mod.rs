//! Content domain: categories, posts, the post list state, and the
//! hover preview.

mod category;
mod post;
mod post_list;
mod preview;

pub use category::{Category, ALL_CATEGORIES};
pub use post::{Post, CATALOG};
pub use post_list::{NavDirection, PostListState, SortOrder};
pub use preview::{HoverPreview, PREVIEW_CLEAR_DELAY};
