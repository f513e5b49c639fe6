//! The bipartite user-movie rating graph.
//!
//! Storage is an explicit adjacency structure: one map from node id to its
//! kind tag, and one map from node id to its weighted neighbor set. The
//! graph is undirected, so every edge is stored from both endpoints.
//!
//! Node ids share a single key space across both kinds. A string used as
//! both a user id and a movie title would collide; the input format keeps
//! the two columns disjoint in practice, and the graph does not try to
//! resolve such a collision.

use crate::node::Node;
use data_loader::RatingRecord;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// In-memory bipartite graph of users and movies joined by rating edges.
///
/// Built once per run and treated as read-only afterwards: both query
/// functions in the engine crate take `&RatingGraph`, so queries can run
/// freely against the same built graph.
///
/// Node insertion order is recorded and drives `users()` iteration, which
/// keeps query output deterministic for a fixed record order (equal-score
/// ties downstream resolve to first-inserted-first).
#[derive(Debug, Clone, Default)]
pub struct RatingGraph {
    /// Node id -> kind tag and attributes
    nodes: HashMap<String, Node>,
    /// Node id -> (neighbor id -> edge weight), mirrored for both endpoints
    adjacency: HashMap<String, HashMap<String, f32>>,
    /// Node ids in first-insertion order
    order: Vec<String>,
    /// Count of distinct (user, movie) edges
    edge_count: usize,
}

impl RatingGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a sequence of rating records.
    ///
    /// Nodes are created lazily on first appearance. Re-rating the same
    /// (user, movie) pair overwrites the edge weight, so for duplicate
    /// pairs the last record wins. No rating-range validation happens here.
    pub fn from_records(records: impl IntoIterator<Item = RatingRecord>) -> Self {
        let mut graph = Self::new();
        for record in records {
            graph.insert_rating(&record);
        }
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Built rating graph"
        );
        graph
    }

    /// Insert a user node. No-op if the id already has a node.
    pub fn insert_user(&mut self, user_id: &str) {
        if !self.nodes.contains_key(user_id) {
            self.nodes.insert(user_id.to_string(), Node::User);
            self.order.push(user_id.to_string());
        }
    }

    /// Insert a movie node. No-op if the title already has a node, which
    /// also means the genre stored at first insertion is never updated.
    pub fn insert_movie(&mut self, title: &str, genre: &str) {
        if !self.nodes.contains_key(title) {
            self.nodes.insert(
                title.to_string(),
                Node::Movie {
                    genre: genre.to_string(),
                },
            );
            self.order.push(title.to_string());
        }
    }

    /// Insert one rating: ensures both endpoint nodes exist, then upserts
    /// the edge with the record's rating as weight.
    pub fn insert_rating(&mut self, record: &RatingRecord) {
        self.insert_user(&record.user_id);
        self.insert_movie(&record.movie_title, &record.genre);
        self.upsert_edge(&record.user_id, &record.movie_title, record.rating);
    }

    fn upsert_edge(&mut self, a: &str, b: &str, weight: f32) {
        let fresh = self
            .adjacency
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), weight)
            .is_none();
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string(), weight);
        if fresh {
            self.edge_count += 1;
        }
    }

    /// Whether a node with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// The node's kind tag and attributes, if present
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Iterate the node's neighbors with their edge weights.
    ///
    /// Yields nothing for unknown ids. Because the graph is bipartite, a
    /// user's neighbors are exactly its rated movies and vice versa.
    pub fn neighbors(&self, id: &str) -> impl Iterator<Item = (&str, f32)> {
        self.adjacency
            .get(id)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(n, w)| (n.as_str(), *w)))
    }

    /// The rating on the edge between two nodes, if one exists
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f32> {
        self.adjacency.get(a).and_then(|edges| edges.get(b)).copied()
    }

    /// Iterate user-kind node ids in insertion order
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .filter(|id| self.nodes.get(*id).is_some_and(Node::is_user))
            .map(String::as_str)
    }

    /// The set of movies a user has rated (empty for unknown ids)
    pub fn watched(&self, user_id: &str) -> HashSet<&str> {
        self.neighbors(user_id).map(|(movie, _)| movie).collect()
    }

    /// Total node count across both kinds
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Count of distinct (user, movie) edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// (users, movies, edges) counts for summaries and diagnostics
    pub fn counts(&self) -> (usize, usize, usize) {
        let users = self.nodes.values().filter(|n| n.is_user()).count();
        (users, self.nodes.len() - users, self.edge_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(user: &str, movie: &str, rating: f32, genre: &str) -> RatingRecord {
        RatingRecord::new(user, movie, rating, genre)
    }

    #[test]
    fn test_empty_graph() {
        let graph = RatingGraph::new();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.contains("U1"));
        assert_eq!(graph.neighbors("U1").count(), 0);
        assert!(graph.watched("U1").is_empty());
    }

    #[test]
    fn test_build_from_records() {
        let graph = RatingGraph::from_records(vec![
            record("U1", "M1", 5.0, "Action"),
            record("U2", "M1", 4.0, "Action"),
            record("U2", "M2", 5.0, "Drama"),
            record("U1", "M3", 3.0, "Drama"),
        ]);

        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.counts(), (2, 3, 4));
        assert_eq!(graph.edge_weight("U1", "M1"), Some(5.0));
        assert_eq!(graph.edge_weight("M1", "U1"), Some(5.0));
        assert_eq!(graph.edge_weight("U1", "M2"), None);
        assert_eq!(graph.watched("U2"), ["M1", "M2"].into_iter().collect());
    }

    #[test]
    fn test_node_kinds() {
        let graph = RatingGraph::from_records(vec![record("U1", "M1", 5.0, "Action")]);
        assert!(graph.node("U1").is_some_and(Node::is_user));
        assert!(graph.node("M1").is_some_and(Node::is_movie));
        assert_eq!(graph.node("M1").and_then(Node::genre), Some("Action"));
        assert!(graph.node("nobody").is_none());
    }

    #[test]
    fn test_duplicate_pair_overwrites_weight() {
        let graph = RatingGraph::from_records(vec![
            record("U1", "M1", 2.0, "Action"),
            record("U1", "M1", 4.5, "Action"),
        ]);
        // Still a simple graph: one edge, last rating wins
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight("U1", "M1"), Some(4.5));
    }

    #[test]
    fn test_first_seen_genre_wins() {
        let graph = RatingGraph::from_records(vec![
            record("U1", "M1", 5.0, "Action"),
            record("U2", "M1", 3.0, "Thriller"),
        ]);
        assert_eq!(graph.node("M1").and_then(Node::genre), Some("Action"));
    }

    #[test]
    fn test_users_iterate_in_insertion_order() {
        let graph = RatingGraph::from_records(vec![
            record("U3", "M1", 1.0, "Action"),
            record("U1", "M1", 2.0, "Action"),
            record("U2", "M1", 3.0, "Action"),
        ]);
        let users: Vec<&str> = graph.users().collect();
        assert_eq!(users, vec!["U3", "U1", "U2"]);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let records = vec![
            record("U1", "M1", 5.0, "Action"),
            record("U2", "M2", 4.0, "Drama"),
        ];
        let a = RatingGraph::from_records(records.clone());
        let b = RatingGraph::from_records(records);

        assert_eq!(a.node_count(), b.node_count());
        assert_eq!(a.edge_count(), b.edge_count());
        for user in a.users() {
            for (movie, weight) in a.neighbors(user) {
                assert_eq!(b.edge_weight(user, movie), Some(weight));
            }
        }
    }
}
