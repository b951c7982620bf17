use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{ReviewRow, SitterResult};

/// Errors that can occur reading reviews or writing results
#[derive(Debug, Error)]
pub enum TabularError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV writer error: {0}")]
    Flush(#[from] std::io::Error),
}

/// Read every review row from a CSV source
///
/// Columns are matched by header name (`sitter_email`, `sitter`, `rating`),
/// so extra columns and column order do not matter.
pub fn read_reviews<R: Read>(reader: R) -> Result<Vec<ReviewRow>, TabularError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let rows = csv_reader
        .deserialize::<ReviewRow>()
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!("Read {} review rows", rows.len());
    Ok(rows)
}

/// Read every review row from a CSV file
pub fn read_reviews_file(path: &Path) -> Result<Vec<ReviewRow>, TabularError> {
    let file = File::open(path).map_err(|source| TabularError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_reviews(file)
}

/// Write ranked results as CSV with a header row
///
/// Columns: `email,name,profile_score,ratings_score,search_score`.
pub fn write_results<W: Write>(writer: W, results: &[SitterResult]) -> Result<(), TabularError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Written by hand so an empty result set still gets a header
    csv_writer.write_record(SitterResult::HEADERS)?;
    for result in results {
        csv_writer.serialize(result)?;
    }
    csv_writer.flush()?;

    tracing::debug!("Wrote {} result rows", results.len());
    Ok(())
}

/// Write ranked results to a CSV file, replacing it if present
pub fn write_results_file(path: &Path, results: &[SitterResult]) -> Result<(), TabularError> {
    let file = File::create(path).map_err(|source| TabularError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_results(file, results)
}
