//! # Data Loader Crate
//!
//! This crate handles loading the user-movie rating dataset.
//!
//! ## Main Components
//!
//! - **types**: The `RatingRecord` domain type
//! - **reader**: Parse the ratings CSV into records
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::load_ratings;
//! use std::path::Path;
//!
//! let records = load_ratings(Path::new("ratings.csv"))?;
//! println!("Loaded {} ratings", records.len());
//! ```
//!
//! The loader is the only place that touches the filesystem. Everything
//! downstream (graph construction, the query engine) consumes the record
//! sequence it produces and never does I/O of its own.

// Public modules
pub mod error;
pub mod reader;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{LoadError, Result};
pub use reader::load_ratings;
pub use types::RatingRecord;
