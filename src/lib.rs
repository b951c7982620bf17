//! Sitter Rank - search ranking for pet sitters
//!
//! This library turns a CSV export of sitter reviews into a ranked sitter list.
//! Rows are grouped by sitter email, each sitter gets a profile score, a
//! ratings score and a blended search score, and the list is sorted by
//! search score.

pub mod config;
pub mod core;
pub mod models;
pub mod pipeline;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_profile_score, calculate_ratings_score, calculate_search_score, Ranker};
pub use models::{ReviewRow, ScoringParams, SitterAggregate, SitterResult};
pub use pipeline::{process_reviews, process_reviews_csv};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert_eq!(calculate_profile_score("Ilka A."), 0.77);
        assert_eq!(calculate_search_score(2.5, 5.0, 0), 2.5);
    }
}
