//! Bounded timeline store.
//!
//! A [`Timeline`] holds posts in insertion order, up to a fixed capacity,
//! and tracks at most one selected post. Edit, like and delete only act on
//! the selected post.

use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::post::{bound_text, Post, PostId};

/// Errors reported by timeline operations.
///
/// The messages are shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimelineError {
    #[error("Timeline is full")]
    Full,

    #[error("No tweet is selected")]
    NoSelection,

    #[error("Timeline is empty")]
    Empty,

    #[error("ID was not found.")]
    NotFound,

    #[error("No post ids left")]
    IdsExhausted,
}

/// One line of the rendered timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow<'a> {
    /// Whether this post is the current selection.
    pub selected: bool,
    pub id: PostId,
    pub likes: u32,
    pub text: &'a str,
}

/// An ordered, capacity-bounded list of posts with an optional selection.
#[derive(Debug, Clone)]
pub struct Timeline {
    posts: Vec<Post>,
    selected: Option<PostId>,
    capacity: usize,
    max_text_len: usize,
    first_id: PostId,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Timeline {
    /// Create an empty timeline with the default limits and the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self::from_config(&Config {
            capacity,
            ..Config::default()
        })
    }

    /// Create an empty timeline using the limits from `config`.
    ///
    /// Seed posts are not added; see [`Timeline::seed`].
    pub fn from_config(config: &Config) -> Self {
        Self {
            posts: Vec::new(),
            selected: None,
            capacity: config.capacity,
            max_text_len: config.max_text_len,
            first_id: config.first_id,
        }
    }

    /// Add each text in order and select the last post added.
    ///
    /// Stops quietly once the timeline is full. Returns how many were added.
    pub fn seed<S: AsRef<str>>(&mut self, texts: &[S]) -> usize {
        let mut added = 0;
        for text in texts {
            match self.add(text.as_ref()) {
                Ok(id) => {
                    self.selected = Some(id);
                    added += 1;
                }
                Err(e) => {
                    debug!(error = %e, "stopped seeding");
                    break;
                }
            }
        }
        added
    }

    /// Append a new post and return its id.
    ///
    /// Fails with [`TimelineError::Full`] at capacity, leaving the timeline
    /// untouched. The selection is not changed.
    pub fn add(&mut self, text: &str) -> Result<PostId, TimelineError> {
        if self.is_full() {
            return Err(TimelineError::Full);
        }
        let id = self.next_id()?;
        self.posts.push(Post::new(id, text, self.max_text_len));
        debug!(id, len = self.posts.len(), "added post");
        Ok(id)
    }

    /// Select the post with `id` and return it.
    ///
    /// On failure the previous selection is kept.
    pub fn select(&mut self, id: PostId) -> Result<&Post, TimelineError> {
        if self.posts.is_empty() {
            return Err(TimelineError::Empty);
        }
        let pos = self.position(id).ok_or(TimelineError::NotFound)?;
        self.selected = Some(id);
        debug!(id, "selected post");
        Ok(&self.posts[pos])
    }

    /// Replace the text of the selected post `id`.
    pub fn edit(&mut self, id: PostId, text: &str) -> Result<(), TimelineError> {
        let pos = self.selected_position(id)?;
        self.posts[pos].text = bound_text(text, self.max_text_len);
        debug!(id, "edited post");
        Ok(())
    }

    /// Add one like to the selected post `id`.
    pub fn like(&mut self, id: PostId) -> Result<(), TimelineError> {
        let pos = self.selected_position(id)?;
        let post = &mut self.posts[pos];
        post.likes = post.likes.saturating_add(1);
        debug!(id, likes = post.likes, "liked post");
        Ok(())
    }

    /// Remove the selected post `id` and clear the selection.
    ///
    /// Later posts shift left to keep insertion order.
    pub fn delete(&mut self, id: PostId) -> Result<Post, TimelineError> {
        let pos = self.selected_position(id)?;
        let removed = self.posts.remove(pos);
        self.selected = None;
        debug!(id, len = self.posts.len(), "deleted post");
        Ok(removed)
    }

    /// [`Timeline::edit`] on the current selection.
    pub fn edit_selected(&mut self, text: &str) -> Result<(), TimelineError> {
        let id = self.selection().ok_or(TimelineError::NoSelection)?;
        self.edit(id, text)
    }

    /// [`Timeline::like`] on the current selection.
    pub fn like_selected(&mut self) -> Result<(), TimelineError> {
        let id = self.selection().ok_or(TimelineError::NoSelection)?;
        self.like(id)
    }

    /// [`Timeline::delete`] on the current selection.
    pub fn delete_selected(&mut self) -> Result<Post, TimelineError> {
        let id = self.selection().ok_or(TimelineError::NoSelection)?;
        self.delete(id)
    }

    /// Rows for display, in timeline order.
    pub fn display(&self) -> Vec<DisplayRow<'_>> {
        self.posts
            .iter()
            .map(|post| DisplayRow {
                selected: self.selected == Some(post.id),
                id: post.id,
                likes: post.likes,
                text: &post.text,
            })
            .collect()
    }

    /// Id the next added post will receive.
    ///
    /// One past the highest id present, or the first id when empty.
    pub fn next_id(&self) -> Result<PostId, TimelineError> {
        match self.posts.iter().map(|p| p.id).max() {
            Some(max) => max.checked_add(1).ok_or(TimelineError::IdsExhausted),
            None => Ok(self.first_id),
        }
    }

    /// Currently selected post id, if any.
    pub fn selection(&self) -> Option<PostId> {
        self.selected
    }

    /// Look up a post by id.
    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// All posts in timeline order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.posts.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn position(&self, id: PostId) -> Option<usize> {
        self.posts.iter().position(|p| p.id == id)
    }

    /// Position of `id`, provided it is the current selection.
    fn selected_position(&self, id: PostId) -> Result<usize, TimelineError> {
        if self.selected != Some(id) {
            return Err(TimelineError::NoSelection);
        }
        self.position(id).ok_or(TimelineError::NoSelection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(count: usize) -> Timeline {
        let mut timeline = Timeline::new(10);
        for i in 0..count {
            timeline.add(&format!("post {i}")).unwrap();
        }
        timeline
    }

    #[test]
    fn test_worked_example() {
        let mut timeline = Timeline::default();
        assert_eq!(timeline.add("hello"), Ok(100));
        assert_eq!(timeline.add("world"), Ok(101));

        timeline.select(100).unwrap();
        timeline.like(100).unwrap();
        assert_eq!(timeline.get(100).unwrap().likes, 1);

        timeline.delete(100).unwrap();
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.selection(), None);
        assert_eq!(timeline.posts()[0].text, "world");
    }

    #[test]
    fn test_add_does_not_change_selection() {
        let mut timeline = filled(2);
        assert_eq!(timeline.selection(), None);

        timeline.select(100).unwrap();
        timeline.add("third").unwrap();
        assert_eq!(timeline.selection(), Some(100));
    }

    #[test]
    fn test_add_to_full_timeline_leaves_state_unchanged() {
        let mut timeline = filled(10);
        timeline.select(104).unwrap();
        let before = timeline.posts().to_vec();

        assert_eq!(timeline.add("overflow"), Err(TimelineError::Full));
        assert_eq!(timeline.posts(), before.as_slice());
        assert_eq!(timeline.selection(), Some(104));
        assert_eq!(timeline.next_id(), Ok(110));
    }

    #[test]
    fn test_ids_strictly_increase_from_100() {
        let mut timeline = Timeline::new(10);
        let ids: Vec<PostId> = (0..10).map(|_| timeline.add("x").unwrap()).collect();
        assert_eq!(ids, (100..110).collect::<Vec<_>>());
    }

    #[test]
    fn test_next_id_follows_highest_remaining() {
        let mut timeline = filled(3);
        timeline.select(101).unwrap();
        timeline.delete(101).unwrap();
        assert_eq!(timeline.add("new"), Ok(103));

        timeline.select(103).unwrap();
        timeline.delete(103).unwrap();
        timeline.select(102).unwrap();
        timeline.delete(102).unwrap();
        assert_eq!(timeline.next_id(), Ok(101));
    }

    #[test]
    fn test_next_id_resets_when_empty() {
        let mut timeline = filled(1);
        timeline.select(100).unwrap();
        timeline.delete(100).unwrap();
        assert!(timeline.is_empty());
        assert_eq!(timeline.add("again"), Ok(100));
    }

    #[test]
    fn test_next_id_exhausted() {
        let mut timeline = Timeline::from_config(&Config {
            first_id: PostId::MAX,
            ..Config::default()
        });
        assert_eq!(timeline.add("last"), Ok(PostId::MAX));
        assert_eq!(timeline.add("one more"), Err(TimelineError::IdsExhausted));
        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn test_huge_capacity_does_not_preallocate() {
        let mut timeline = Timeline::from_config(&Config {
            capacity: usize::MAX,
            ..Config::default()
        });
        assert_eq!(timeline.capacity(), usize::MAX);
        assert_eq!(timeline.add("still works"), Ok(100));
        assert!(!timeline.is_full());
    }

    #[test]
    fn test_select_empty() {
        let mut timeline = Timeline::default();
        assert_eq!(timeline.select(100).unwrap_err(), TimelineError::Empty);
    }

    #[test]
    fn test_select_not_found_keeps_selection() {
        let mut timeline = filled(2);
        timeline.select(101).unwrap();
        assert_eq!(timeline.select(999).unwrap_err(), TimelineError::NotFound);
        assert_eq!(timeline.selection(), Some(101));
    }

    #[test]
    fn test_select_returns_post() {
        let mut timeline = filled(2);
        let post = timeline.select(101).unwrap();
        assert_eq!(post.text, "post 1");
    }

    #[test]
    fn test_mutations_require_selection() {
        let mut timeline = filled(2);
        assert_eq!(timeline.like(100), Err(TimelineError::NoSelection));
        assert_eq!(timeline.edit(100, "x"), Err(TimelineError::NoSelection));
        assert_eq!(timeline.delete(100), Err(TimelineError::NoSelection));
        assert_eq!(timeline.like_selected(), Err(TimelineError::NoSelection));
        assert_eq!(timeline.edit_selected("x"), Err(TimelineError::NoSelection));
        assert_eq!(timeline.delete_selected(), Err(TimelineError::NoSelection));
        assert_eq!(timeline.len(), 2);
    }

    #[test]
    fn test_mutations_reject_unselected_id() {
        let mut timeline = filled(2);
        timeline.select(100).unwrap();
        assert_eq!(timeline.like(101), Err(TimelineError::NoSelection));
        assert_eq!(timeline.get(101).unwrap().likes, 0);
    }

    #[test]
    fn test_like_only_touches_selected() {
        let mut timeline = filled(3);
        timeline.select(101).unwrap();
        timeline.like(101).unwrap();
        timeline.like_selected().unwrap();

        let likes: Vec<u32> = timeline.posts().iter().map(|p| p.likes).collect();
        assert_eq!(likes, vec![0, 2, 0]);
    }

    #[test]
    fn test_edit_bounds_text() {
        let mut timeline = Timeline::from_config(&Config {
            max_text_len: 5,
            ..Config::default()
        });
        let id = timeline.add("far too long").unwrap();
        assert_eq!(timeline.get(id).unwrap().text, "far t");

        timeline.select(id).unwrap();
        timeline.edit_selected("edited text").unwrap();
        assert_eq!(timeline.get(id).unwrap().text, "edite");
    }

    #[test]
    fn test_delete_shifts_and_clears_selection() {
        let mut timeline = filled(4);
        timeline.select(101).unwrap();

        let removed = timeline.delete_selected().unwrap();
        assert_eq!(removed.id, 101);
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.selection(), None);

        let ids: Vec<PostId> = timeline.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![100, 102, 103]);

        // Deleted id can no longer be selected
        assert_eq!(timeline.select(101).unwrap_err(), TimelineError::NotFound);
    }

    #[test]
    fn test_display_marks_selection() {
        let mut timeline = filled(3);
        timeline.select(102).unwrap();
        timeline.like(102).unwrap();

        let rows = timeline.display();
        assert_eq!(rows.len(), 3);
        assert!(!rows[0].selected);
        assert!(rows[2].selected);
        assert_eq!(
            rows[2],
            DisplayRow {
                selected: true,
                id: 102,
                likes: 1,
                text: "post 2",
            }
        );
    }

    #[test]
    fn test_seed_selects_last_added() {
        let mut timeline = Timeline::default();
        let added = timeline.seed(&Config::default().seed_posts);
        assert_eq!(added, 3);
        assert_eq!(timeline.selection(), Some(102));
    }

    #[test]
    fn test_seed_stops_when_full() {
        let mut timeline = Timeline::new(2);
        let added = timeline.seed(&["a", "b", "c"]);
        assert_eq!(added, 2);
        assert!(timeline.is_full());
        assert_eq!(timeline.selection(), Some(101));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(TimelineError::Full.to_string(), "Timeline is full");
        assert_eq!(TimelineError::NoSelection.to_string(), "No tweet is selected");
        assert_eq!(TimelineError::Empty.to_string(), "Timeline is empty");
        assert_eq!(TimelineError::NotFound.to_string(), "ID was not found.");
    }
}
