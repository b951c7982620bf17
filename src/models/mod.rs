// Model exports
pub mod domain;

pub use domain::{parse_rating, ReviewRow, ScoringParams, SitterAggregate, SitterResult};
