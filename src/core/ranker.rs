use std::cmp::Ordering;

use crate::core::{
    aggregator::Aggregator,
    scoring::{calculate_profile_score_with, calculate_ratings_score, calculate_search_score_with},
};
use crate::models::{ReviewRow, ScoringParams, SitterAggregate, SitterResult};

/// Result of a ranking pass
#[derive(Debug)]
pub struct RankResult {
    pub sitters: Vec<SitterResult>,
    pub total_reviews: usize,
}

/// Ranking orchestrator: aggregate, then score, then sort
///
/// # Pipeline Stages
/// 1. Group every review row by sitter email
/// 2. Score each sitter from its complete ratings list
/// 3. Sort by search score (descending), then name (ascending)
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    params: ScoringParams,
}

impl Ranker {
    pub fn new(params: ScoringParams) -> Self {
        Self { params }
    }

    pub fn with_default_params() -> Self {
        Self::default()
    }

    pub fn params(&self) -> &ScoringParams {
        &self.params
    }

    /// Score a single sitter
    ///
    /// The search score is weighted by the full ratings count, including
    /// entries the ratings score skipped as non-numeric.
    pub fn score(&self, sitter: SitterAggregate) -> SitterResult {
        let profile_score = calculate_profile_score_with(&sitter.name, &self.params);
        let ratings_score = calculate_ratings_score(&sitter.ratings);
        let search_score = calculate_search_score_with(
            profile_score,
            ratings_score,
            sitter.ratings_count(),
            &self.params,
        );

        tracing::debug!(
            "Scored {}: profile={} ratings={} search={} ({} ratings)",
            sitter.email,
            profile_score,
            ratings_score,
            search_score,
            sitter.ratings_count()
        );

        SitterResult {
            email: sitter.email,
            name: sitter.name,
            profile_score,
            ratings_score,
            search_score,
        }
    }

    /// Score and sort already aggregated sitters
    pub fn rank(&self, sitters: Vec<SitterAggregate>) -> Vec<SitterResult> {
        let mut results: Vec<SitterResult> = sitters
            .into_iter()
            .map(|sitter| self.score(sitter))
            .collect();

        // Stable, so equal (score, name) pairs keep first-seen order
        results.sort_by(compare_results);
        results
    }

    /// Run all three stages over raw review rows
    pub fn rank_reviews<I>(&self, rows: I) -> RankResult
    where
        I: IntoIterator<Item = ReviewRow>,
    {
        let mut aggregator = Aggregator::new();
        aggregator.extend(rows);
        let total_reviews = aggregator.rows_seen();

        RankResult {
            sitters: self.rank(aggregator.finish()),
            total_reviews,
        }
    }
}

/// Output order: search score descending, then name ascending
///
/// Names compare case-insensitively first; names equal up to case fall back
/// to plain string order, so the sort stays total.
pub fn compare_results(a: &SitterResult, b: &SitterResult) -> Ordering {
    b.search_score
        .partial_cmp(&a.search_score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| compare_names(&a.name, &b.name))
}

fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = |name: &str| name.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
    folded(a).cmp(&folded(b)).then_with(|| a.cmp(b))
}
