//! # Graph Crate
//!
//! Bipartite user-movie graph construction and queries.
//!
//! ## Main Components
//!
//! - **node**: The `Node` kind tag (user vs. movie with genre)
//! - **graph**: `RatingGraph` storage, builder, and neighbor queries
//!
//! ## Example Usage
//!
//! ```ignore
//! use graph::RatingGraph;
//!
//! let graph = RatingGraph::from_records(records);
//! let (users, movies, edges) = graph.counts();
//! for (movie, rating) in graph.neighbors("U1") {
//!     println!("U1 rated {movie} at {rating}");
//! }
//! ```
//!
//! The graph is built once from the full record sequence and never mutated
//! afterwards; the engine crate runs all its queries against a shared
//! borrow of it.

// Public modules
pub mod graph;
pub mod node;

// Re-export commonly used types
pub use graph::RatingGraph;
pub use node::Node;
