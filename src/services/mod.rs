// Service exports
pub mod tabular;

pub use tabular::{read_reviews, read_reviews_file, write_results, write_results_file, TabularError};
