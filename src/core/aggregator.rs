use std::collections::HashMap;

use crate::models::{ReviewRow, SitterAggregate};

/// Groups review rows by sitter email
///
/// Ratings for one sitter may be spread anywhere in the input, so every row
/// has to be ingested before [`Aggregator::finish`] hands out the groups.
/// Groups come out in the order their email was first seen.
#[derive(Debug, Default)]
pub struct Aggregator {
    sitters: Vec<SitterAggregate>,
    index: HashMap<String, usize>,
    rows: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one row into its sitter's group
    ///
    /// The first row seen for an email fixes the sitter's name; later rows
    /// only contribute their rating.
    pub fn ingest(&mut self, row: ReviewRow) {
        self.rows += 1;
        let rating = row.parsed_rating();
        if rating.is_none() {
            tracing::warn!("Non-numeric rating {:?} for {}", row.rating, row.email);
        }

        match self.index.get(&row.email) {
            Some(&position) => self.sitters[position].ratings.push(rating),
            None => {
                self.index.insert(row.email.clone(), self.sitters.len());
                self.sitters.push(SitterAggregate::new(row.email, row.name, rating));
            }
        }
    }

    /// Rows ingested so far
    pub fn rows_seen(&self) -> usize {
        self.rows
    }

    /// Distinct sitters seen so far
    pub fn sitter_count(&self) -> usize {
        self.sitters.len()
    }

    pub fn finish(self) -> Vec<SitterAggregate> {
        self.sitters
    }
}

impl Extend<ReviewRow> for Aggregator {
    fn extend<I: IntoIterator<Item = ReviewRow>>(&mut self, rows: I) {
        for row in rows {
            self.ingest(row);
        }
    }
}

/// Group a full set of rows in one call
pub fn aggregate_reviews<I>(rows: I) -> Vec<SitterAggregate>
where
    I: IntoIterator<Item = ReviewRow>,
{
    let mut aggregator = Aggregator::new();
    aggregator.extend(rows);
    aggregator.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merges_rows_with_same_email() {
        let sitters = aggregate_reviews(vec![
            ReviewRow::new("a@x", "Ilka A.", "4"),
            ReviewRow::new("a@x", "Ilka A.", "5"),
        ]);

        assert_eq!(sitters.len(), 1);
        assert_eq!(sitters[0].email, "a@x");
        assert_eq!(sitters[0].ratings, vec![Some(4.0), Some(5.0)]);
    }

    #[test]
    fn test_first_seen_name_wins() {
        let sitters = aggregate_reviews(vec![
            ReviewRow::new("a@x", "Ilka A.", "4"),
            ReviewRow::new("a@x", "Ilka Andersson", "5"),
        ]);

        assert_eq!(sitters[0].name, "Ilka A.");
    }

    #[test]
    fn test_keeps_first_seen_order_for_non_adjacent_rows() {
        let sitters = aggregate_reviews(vec![
            ReviewRow::new("b@x", "Bob", "3"),
            ReviewRow::new("a@x", "Amy", "4"),
            ReviewRow::new("b@x", "Bob", "5"),
        ]);

        let emails: Vec<&str> = sitters.iter().map(|s| s.email.as_str()).collect();
        assert_eq!(emails, vec!["b@x", "a@x"]);
        assert_eq!(sitters[0].ratings, vec![Some(3.0), Some(5.0)]);
    }

    #[test]
    fn test_unparseable_rating_is_kept_as_non_numeric() {
        let sitters = aggregate_reviews(vec![
            ReviewRow::new("a@x", "Amy", "Fido"),
            ReviewRow::new("a@x", "Amy", "5"),
        ]);

        assert_eq!(sitters[0].ratings, vec![None, Some(5.0)]);
    }

    #[test]
    fn test_counts() {
        let mut aggregator = Aggregator::new();
        aggregator.extend(vec![
            ReviewRow::new("a@x", "Amy", "4"),
            ReviewRow::new("b@x", "Bob", "4"),
            ReviewRow::new("a@x", "Amy", "2"),
        ]);

        assert_eq!(aggregator.rows_seen(), 3);
        assert_eq!(aggregator.sitter_count(), 2);
    }
}
