// Core algorithm exports
pub mod aggregator;
pub mod ranker;
pub mod scoring;

pub use aggregator::{aggregate_reviews, Aggregator};
pub use ranker::{compare_results, RankResult, Ranker};
pub use scoring::{
    calculate_profile_score, calculate_profile_score_with, calculate_ratings_score,
    calculate_search_score, calculate_search_score_with, round2,
};
