//! Post model for the chirp timeline.

/// Identifier assigned to a post when it is added to a timeline.
pub type PostId = u32;

/// A single timeline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Unique id within the timeline.
    pub id: PostId,

    /// Message body, already bounded to the timeline's text limit.
    pub text: String,

    /// Number of likes. Only ever increases.
    pub likes: u32,
}

impl Post {
    /// Create a post with zero likes, truncating `text` to `max_len` characters.
    pub fn new(id: PostId, text: &str, max_len: usize) -> Self {
        Self {
            id,
            text: bound_text(text, max_len),
            likes: 0,
        }
    }
}

/// Truncate `text` to at most `max_len` characters.
///
/// Cuts on a character boundary, so multi-byte input never splits.
pub fn bound_text(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}
