//! Jaccard similarity between users over their watched-movie sets.

use graph::RatingGraph;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Default number of entries returned by the queries in this crate.
pub const DEFAULT_TOP_N: usize = 3;

/// A user judged similar to the query target, with its Jaccard score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserMatch {
    pub user_id: String,
    /// Jaccard similarity, always in (0, 1]
    pub score: f32,
}

/// Find the users most similar to `target` by Jaccard overlap of watched
/// movies, sorted by score descending and truncated to `top_n`.
///
/// Candidates with an empty union (neither side watched anything) have no
/// comparable basis and are omitted rather than scored zero; candidates
/// with zero overlap carry no recommendation signal and are omitted too,
/// so every returned score is strictly positive. The target itself is
/// never a candidate.
///
/// An unknown target is reported, not fatal: the result is simply empty.
/// Equal scores keep node insertion order (the sort is stable and users
/// are visited in the order they first appeared in the input).
#[instrument(skip(graph))]
pub fn similar_users(graph: &RatingGraph, target: &str, top_n: usize) -> Vec<UserMatch> {
    if !graph.contains(target) {
        warn!(user = target, "Target user not found in graph");
        return Vec::new();
    }

    let target_movies = graph.watched(target);
    let mut matches = Vec::new();

    for user in graph.users() {
        if user == target {
            continue;
        }
        let other_movies = graph.watched(user);
        let union = target_movies.union(&other_movies).count();
        if union == 0 {
            // No comparable basis on either side
            continue;
        }
        let intersection = target_movies.intersection(&other_movies).count();
        let score = intersection as f32 / union as f32;
        if score > 0.0 {
            matches.push(UserMatch {
                user_id: user.to_string(),
                score,
            });
        }
    }

    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches.truncate(top_n);
    debug!(
        user = target,
        matches = matches.len(),
        "Computed similar users"
    );
    matches
}
