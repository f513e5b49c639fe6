//! # Engine Crate
//!
//! Similarity and recommendation queries over the rating graph.
//!
//! ## Components
//!
//! - **similarity**: Jaccard similarity between users over watched sets
//! - **recommend**: score unseen movies from similar users' ratings
//!
//! ## Example Usage
//!
//! ```ignore
//! use engine::{recommend, similar_users, DEFAULT_TOP_N};
//!
//! let matches = similar_users(&graph, "U1", DEFAULT_TOP_N);
//! let recs = recommend(&graph, "U1", 10);
//! ```
//!
//! Both queries are pure functions over a shared `&RatingGraph`: no state
//! is carried between calls, and neither ever fails — an unknown user or
//! an empty graph just produces an empty result.

// Public modules
pub mod recommend;
pub mod similarity;

// Re-export commonly used types
pub use recommend::{recommend, Recommendation};
pub use similarity::{similar_users, UserMatch, DEFAULT_TOP_N};
