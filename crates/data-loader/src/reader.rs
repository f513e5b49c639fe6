//! CSV reader for the ratings file.
//!
//! Expected layout, with a header row: User_ID, Movie_Title, Rating, Genre.
//! Columns are read by position, so the header text itself is never
//! inspected. Rows with too few fields or an unparseable rating are logged
//! and skipped; loading only fails when the file itself cannot be read.

use crate::error::{LoadError, Result};
use crate::types::RatingRecord;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, warn};

/// Number of columns a well-formed data row carries.
const FIELD_COUNT: usize = 4;

/// Read rating records from a headered CSV file.
///
/// Returns every row that parsed; malformed rows are reported via `warn!`
/// with their line number and dropped. An empty or header-only file yields
/// an empty vec, which downstream code treats as an empty graph.
pub fn load_ratings(path: &Path) -> Result<Vec<RatingRecord>> {
    let file = File::open(path).map_err(|source| LoadError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        // Line 1 is the header, so data rows start at line 2
        let line_no = idx + 2;
        let row = row?;

        if row.len() < FIELD_COUNT {
            warn!(
                line = line_no,
                found = row.len(),
                expected = FIELD_COUNT,
                "Skipping row with too few fields"
            );
            continue;
        }

        // Indexing is safe after the length check above
        let user_id = &row[0];
        let movie_title = &row[1];
        let rating = match row[2].trim().parse::<f32>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    line = line_no,
                    value = &row[2],
                    "Skipping row with unparseable rating"
                );
                continue;
            }
        };
        let genre = &row[3];

        if user_id.is_empty() || movie_title.is_empty() {
            warn!(line = line_no, "Skipping row with empty user or movie id");
            continue;
        }

        records.push(RatingRecord::new(user_id, movie_title, rating, genre));
    }

    debug!(count = records.len(), path = %path.display(), "Loaded rating records");
    Ok(records)
}
