//! Review export in, ranked sitter list out
//!
//! Reading, ranking and writing are strict phases: nothing is written until
//! every row has been read and aggregated.

use std::io::{Read, Write};
use std::path::Path;

use crate::core::{RankResult, Ranker};
use crate::services::{read_reviews, read_reviews_file, write_results, write_results_file, TabularError};

/// Rank reviews from any reader and write the result to any writer
pub fn process_reviews<R: Read, W: Write>(
    input: R,
    output: W,
    ranker: &Ranker,
) -> Result<RankResult, TabularError> {
    let rows = read_reviews(input)?;
    let result = ranker.rank_reviews(rows);
    write_results(output, &result.sitters)?;
    Ok(result)
}

/// Rank the reviews in `input_file` and write them to `output_file`
pub fn process_reviews_csv(
    input_file: &Path,
    output_file: &Path,
    ranker: &Ranker,
) -> Result<RankResult, TabularError> {
    tracing::info!("Reading reviews from {}", input_file.display());
    let rows = read_reviews_file(input_file)?;

    let result = ranker.rank_reviews(rows);
    tracing::info!(
        "Ranked {} sitters from {} reviews",
        result.sitters.len(),
        result.total_reviews
    );

    write_results_file(output_file, &result.sitters)?;
    tracing::info!("Wrote rankings to {}", output_file.display());

    Ok(result)
}
