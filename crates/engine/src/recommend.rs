//! Recommendation scoring from similar users' ratings.

use crate::similarity::{similar_users, DEFAULT_TOP_N};
use graph::{Node, RatingGraph};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// A recommended movie with its accumulated score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: String,
    /// Sum of similarity * rating over every similar user who rated it
    pub score: f32,
}

/// Recommend unseen movies for `target`, sorted by score descending and
/// truncated to `top_n`.
///
/// The similarity pool is always the top [`DEFAULT_TOP_N`] users, no
/// matter what `top_n` the caller asks for; `top_n` only controls how many
/// of the scored movies are returned. This matches the behavior the
/// system has always had and callers rank against.
///
/// Each candidate movie's score is `similarity * rating` summed across
/// every pooled user who rated it, so a movie backed by several similar
/// users accumulates additively rather than averaging. Movies the target
/// has already watched are never returned. Equal scores order by title to
/// keep output deterministic.
#[instrument(skip(graph))]
pub fn recommend(graph: &RatingGraph, target: &str, top_n: usize) -> Vec<Recommendation> {
    let similar = similar_users(graph, target, DEFAULT_TOP_N);
    if similar.is_empty() {
        debug!(user = target, "No similar users; nothing to recommend");
        return Vec::new();
    }

    let watched = graph.watched(target);
    let mut scores: HashMap<&str, f32> = HashMap::new();

    for neighbor in &similar {
        for (movie, rating) in graph.neighbors(&neighbor.user_id) {
            if !graph.node(movie).is_some_and(Node::is_movie) || watched.contains(movie) {
                continue;
            }
            *scores.entry(movie).or_insert(0.0) += neighbor.score * rating;
        }
    }

    let mut recommendations: Vec<Recommendation> = scores
        .into_iter()
        .map(|(title, score)| Recommendation {
            title: title.to_string(),
            score,
        })
        .collect();
    recommendations.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.title.cmp(&b.title))
    });
    recommendations.truncate(top_n);
    debug!(
        user = target,
        recommendations = recommendations.len(),
        "Scored recommendations"
    );
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::RatingRecord;

    fn record(user: &str, movie: &str, rating: f32, genre: &str) -> RatingRecord {
        RatingRecord::new(user, movie, rating, genre)
    }

    #[test]
    fn test_single_contributor() {
        let graph = RatingGraph::from_records(vec![
            record("U1", "M1", 5.0, "Action"),
            record("U2", "M1", 4.0, "Action"),
            record("U2", "M2", 5.0, "Drama"),
            record("U1", "M3", 3.0, "Drama"),
        ]);

        // U2 is similar at 1/3 and rated the unseen M2 at 5
        let recs = recommend(&graph, "U1", DEFAULT_TOP_N);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "M2");
        assert!((recs[0].score - 5.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_watched_movies_excluded() {
        let graph = RatingGraph::from_records(vec![
            record("U1", "M1", 5.0, "Action"),
            record("U2", "M1", 4.0, "Action"),
            record("U2", "M2", 5.0, "Drama"),
        ]);
        let recs = recommend(&graph, "U1", 10);
        assert!(recs.iter().all(|r| r.title != "M1"));
    }

    #[test]
    fn test_scores_accumulate_across_contributors() {
        // U2 and U3 both overlap with U1 on M1 and both rated M2
        let graph = RatingGraph::from_records(vec![
            record("U1", "M1", 5.0, "Action"),
            record("U2", "M1", 4.0, "Action"),
            record("U2", "M2", 4.0, "Drama"),
            record("U3", "M1", 3.0, "Action"),
            record("U3", "M2", 2.0, "Drama"),
        ]);

        let recs = recommend(&graph, "U1", DEFAULT_TOP_N);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "M2");
        // Both similarities are 1/2: 0.5*4 + 0.5*2
        assert!((recs[0].score - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_no_similar_users_yields_empty() {
        let graph = RatingGraph::from_records(vec![
            record("U1", "M1", 5.0, "Action"),
            record("U2", "M2", 4.0, "Drama"),
        ]);
        assert!(recommend(&graph, "U1", DEFAULT_TOP_N).is_empty());
    }

    #[test]
    fn test_unknown_target_yields_empty() {
        let graph = RatingGraph::from_records(vec![record("U1", "M1", 5.0, "Action")]);
        assert!(recommend(&graph, "U9", DEFAULT_TOP_N).is_empty());
    }

    #[test]
    fn test_empty_graph_yields_empty() {
        let graph = RatingGraph::new();
        assert!(recommend(&graph, "U1", DEFAULT_TOP_N).is_empty());
    }

    #[test]
    fn test_similarity_pool_is_fixed_at_default() {
        // Four candidate users with distinct similarities to T; only the
        // top three may contribute, whatever top_n the caller passes.
        let mut records = vec![record("T", "A", 5.0, "Action")];
        let unique: [(&str, &[&str]); 4] = [
            ("U1", &["B1"]),
            ("U2", &["B2", "B3"]),
            ("U3", &["B4", "B5", "B6"]),
            ("U4", &["B7", "B8", "B9", "B10"]),
        ];
        for (user, movies) in unique {
            records.push(record(user, "A", 4.0, "Action"));
            for &movie in movies {
                records.push(record(user, movie, 4.0, "Action"));
            }
        }
        let graph = RatingGraph::from_records(records);

        // Similarities: U1 = 1/2, U2 = 1/3, U3 = 1/4, U4 = 1/5
        let recs = recommend(&graph, "T", 20);
        let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(recs.len(), 6);
        for excluded in ["B7", "B8", "B9", "B10"] {
            assert!(!titles.contains(&excluded));
        }
        for included in ["B1", "B2", "B3", "B4", "B5", "B6"] {
            assert!(titles.contains(&included));
        }
    }

    #[test]
    fn test_ranking_and_truncation() {
        let graph = RatingGraph::from_records(vec![
            record("U1", "M1", 5.0, "Action"),
            record("U2", "M1", 4.0, "Action"),
            record("U2", "M2", 5.0, "Drama"),
            record("U2", "M3", 2.0, "Drama"),
            record("U2", "M4", 4.0, "Drama"),
        ]);

        let recs = recommend(&graph, "U1", 2);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].title, "M2");
        assert_eq!(recs[1].title, "M4");
        assert!(recs[0].score >= recs[1].score);
    }
}
