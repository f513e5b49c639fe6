//! Node types for the user-movie graph.

use serde::{Deserialize, Serialize};

/// A node in the bipartite rating graph.
///
/// Node identity lives in the graph's key space, not here; this enum only
/// carries the kind tag and kind-specific attributes. Users have no
/// attributes beyond their id. Movies carry the genre recorded the first
/// time the title appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    User,
    Movie { genre: String },
}

impl Node {
    /// True for user-kind nodes
    pub fn is_user(&self) -> bool {
        matches!(self, Node::User)
    }

    /// True for movie-kind nodes
    pub fn is_movie(&self) -> bool {
        matches!(self, Node::Movie { .. })
    }

    /// The movie's genre, or `None` for user nodes
    pub fn genre(&self) -> Option<&str> {
        match self {
            Node::User => None,
            Node::Movie { genre } => Some(genre),
        }
    }
}
