//! Core domain types for the rating dataset.

use serde::{Deserialize, Serialize};

/// A single user-movie rating, one per CSV data row.
///
/// Identity is string-based on both sides: users and movies are both keyed
/// by the raw text of their CSV columns. The record is immutable once
/// produced; downstream code only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub user_id: String,
    pub movie_title: String,
    /// Rating value as given in the source data (no range validation)
    pub rating: f32,
    pub genre: String,
}

impl RatingRecord {
    pub fn new(
        user_id: impl Into<String>,
        movie_title: impl Into<String>,
        rating: f32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            movie_title: movie_title.into(),
            rating,
            genre: genre.into(),
        }
    }
}
