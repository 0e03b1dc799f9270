//! Post list state: sort order, single-post expansion, and navigation.
//!
//! This is the state behind the AI/ML content panel. The collection is
//! fixed at construction; the state tracks a user-selectable display
//! order over `published_at`, at most one expanded post, and a keyboard
//! cursor over the displayed sequence.
//!
//! Every operation is a total function over well-defined state. There is
//! no I/O here and nothing persists across runs.

use super::post::Post;

/// Chronological display order over `published_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Oldest first
    Ascending,
    /// Newest first (the site default)
    #[default]
    Descending,
}

impl SortOrder {
    /// The other order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Direction for moving between posts while one is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
}

/// State for the sortable, single-expansion post list.
#[derive(Debug, Clone)]
pub struct PostListState {
    /// The fixed collection, in authoring order
    posts: Vec<Post>,
    /// Current display order
    order: SortOrder,
    /// Indices into `posts`, in display order
    sequence: Vec<usize>,
    /// Id of the expanded post, if any
    expanded: Option<u32>,
    /// Keyboard cursor position within `sequence`
    cursor: usize,
}

impl PostListState {
    /// Create the state over a fixed collection, sorted descending.
    pub fn new(posts: Vec<Post>) -> Self {
        let mut state = Self {
            sequence: (0..posts.len()).collect(),
            posts,
            order: SortOrder::default(),
            expanded: None,
            cursor: 0,
        };
        state.resort();
        state
    }

    /// The current sort order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Id of the expanded post, if any.
    pub fn expanded(&self) -> Option<u32> {
        self.expanded
    }

    /// The expanded post itself, if any.
    pub fn expanded_post(&self) -> Option<&Post> {
        self.expanded.and_then(|id| self.post_by_id(id))
    }

    /// Keyboard cursor position within the displayed sequence.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of posts in the collection.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Posts in the current display order.
    pub fn sequence(&self) -> impl Iterator<Item = &Post> {
        self.sequence.iter().map(|&i| &self.posts[i])
    }

    /// Change the display order and re-derive the sequence.
    ///
    /// Sorting is stable: posts with equal timestamps keep their
    /// original collection order. The expanded post is untouched.
    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.order = order;
        self.resort();
        // Keep the cursor on the expanded post if there is one.
        if let Some(id) = self.expanded {
            if let Some(pos) = self.position_of(id) {
                self.cursor = pos;
            }
        }
    }

    /// Toggle expansion of the post with the given id.
    ///
    /// Selecting the expanded post collapses it; selecting any other
    /// post expands it and implicitly collapses the previous one, as a
    /// single transition. The id must exist in the collection; an
    /// unknown id is a caller error and leaves the state collapsed.
    pub fn select_post(&mut self, id: u32) {
        if self.expanded == Some(id) {
            self.expanded = None;
            return;
        }
        debug_assert!(self.post_by_id(id).is_some(), "unknown post id {id}");
        self.expanded = self.post_by_id(id).map(|p| p.id);
        if let Some(pos) = self.position_of(id) {
            self.cursor = pos;
        }
    }

    /// Collapse whatever is expanded.
    pub fn close_expanded(&mut self) {
        self.expanded = None;
    }

    /// Move to the adjacent post in the current display order.
    ///
    /// No-op when nothing is expanded. Clamped at both ends: `Previous`
    /// on the first post and `Next` on the last are no-ops.
    pub fn navigate(&mut self, direction: NavDirection) {
        let Some(id) = self.expanded else {
            return;
        };
        let Some(pos) = self.position_of(id) else {
            return;
        };

        let target = match direction {
            NavDirection::Previous => pos.checked_sub(1),
            NavDirection::Next => {
                if pos + 1 < self.sequence.len() {
                    Some(pos + 1)
                } else {
                    None
                }
            }
        };

        if let Some(target) = target {
            self.expanded = Some(self.posts[self.sequence[target]].id);
            self.cursor = target;
        }
    }

    /// Move the keyboard cursor up one row, clamped at the top.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the keyboard cursor down one row, clamped at the bottom.
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.sequence.len() {
            self.cursor += 1;
        }
    }

    /// The post under the keyboard cursor, if the list is non-empty.
    pub fn post_at_cursor(&self) -> Option<&Post> {
        self.sequence.get(self.cursor).map(|&i| &self.posts[i])
    }

    /// Position of a post id within the displayed sequence.
    fn position_of(&self, id: u32) -> Option<usize> {
        self.sequence
            .iter()
            .position(|&i| self.posts[i].id == id)
    }

    fn post_by_id(&self, id: u32) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Re-derive the display sequence. `sort_by` is stable, so equal
    /// timestamps keep authoring order in both directions.
    fn resort(&mut self) {
        let posts = &self.posts;
        match self.order {
            SortOrder::Ascending => self
                .sequence
                .sort_by(|&a, &b| posts[a].published_at.cmp(&posts[b].published_at)),
            SortOrder::Descending => self
                .sequence
                .sort_by(|&a, &b| posts[b].published_at.cmp(&posts[a].published_at)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn post(id: u32, epoch_secs: i64) -> Post {
        Post {
            id,
            title: format!("Post {id}"),
            description: String::new(),
            content: String::new(),
            published_at: Utc.timestamp_opt(epoch_secs, 0).unwrap(),
            read_time: "1 min read".to_string(),
            tags: vec![],
        }
    }

    fn state() -> PostListState {
        // Authoring order: ids 1..=4; 2 and 3 share a timestamp.
        PostListState::new(vec![
            post(1, 100),
            post(2, 300),
            post(3, 300),
            post(4, 200),
        ])
    }

    fn ids(s: &PostListState) -> Vec<u32> {
        s.sequence().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_order_is_descending() {
        let s = state();
        assert_eq!(s.order(), SortOrder::Descending);
        assert_eq!(ids(&s), vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_ascending_is_stable_for_equal_timestamps() {
        let mut s = state();
        s.set_sort_order(SortOrder::Ascending);
        // 2 and 3 tie; authoring order 2-before-3 is preserved.
        assert_eq!(ids(&s), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_descending_is_stable_for_equal_timestamps() {
        let mut s = state();
        s.set_sort_order(SortOrder::Descending);
        assert_eq!(ids(&s), vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_sort_does_not_touch_expansion() {
        let mut s = state();
        s.select_post(4);
        s.set_sort_order(SortOrder::Ascending);
        assert_eq!(s.expanded(), Some(4));
        s.set_sort_order(SortOrder::Descending);
        assert_eq!(s.expanded(), Some(4));
    }

    #[test]
    fn test_select_toggles_to_none() {
        let mut s = state();
        s.select_post(2);
        assert_eq!(s.expanded(), Some(2));
        s.select_post(2);
        assert_eq!(s.expanded(), None);
    }

    #[test]
    fn test_select_other_post_swaps_expansion() {
        let mut s = state();
        s.select_post(1);
        s.select_post(3);
        // Exactly one post expanded, and it is the new one.
        assert_eq!(s.expanded(), Some(3));
    }

    #[test]
    fn test_close_expanded_is_unconditional() {
        let mut s = state();
        s.close_expanded();
        assert_eq!(s.expanded(), None);
        s.select_post(1);
        s.close_expanded();
        assert_eq!(s.expanded(), None);
    }

    #[test]
    fn test_navigate_noop_when_collapsed() {
        let mut s = state();
        s.navigate(NavDirection::Next);
        s.navigate(NavDirection::Previous);
        assert_eq!(s.expanded(), None);
    }

    #[test]
    fn test_navigate_moves_in_display_order() {
        let mut s = state();
        // Descending: [2, 3, 4, 1]
        s.select_post(3);
        s.navigate(NavDirection::Next);
        assert_eq!(s.expanded(), Some(4));
        s.navigate(NavDirection::Previous);
        assert_eq!(s.expanded(), Some(3));
    }

    #[test]
    fn test_navigate_clamps_at_ends() {
        let mut s = state();
        // Descending: [2, 3, 4, 1]
        s.select_post(2);
        s.navigate(NavDirection::Previous);
        assert_eq!(s.expanded(), Some(2), "previous at the first post is a no-op");

        s.select_post(1);
        assert_eq!(s.expanded(), Some(1));
        s.navigate(NavDirection::Next);
        assert_eq!(s.expanded(), Some(1), "next at the last post is a no-op");
    }

    #[test]
    fn test_navigate_follows_current_order() {
        let mut s = state();
        s.select_post(1);
        s.set_sort_order(SortOrder::Ascending);
        // Ascending: [1, 4, 2, 3]; from 1, next is 4.
        s.navigate(NavDirection::Next);
        assert_eq!(s.expanded(), Some(4));
    }

    #[test]
    fn test_cursor_clamps() {
        let mut s = state();
        s.cursor_up();
        assert_eq!(s.cursor(), 0);
        for _ in 0..10 {
            s.cursor_down();
        }
        assert_eq!(s.cursor(), 3);
        assert_eq!(s.post_at_cursor().map(|p| p.id), Some(1));
    }

    #[test]
    fn test_empty_collection_is_safe() {
        let mut s = PostListState::new(vec![]);
        assert!(s.is_empty());
        s.cursor_down();
        s.navigate(NavDirection::Next);
        assert_eq!(s.post_at_cursor(), None);
        assert_eq!(s.expanded(), None);
    }
}
