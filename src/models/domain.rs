use serde::{Deserialize, Serialize, Serializer};

/// One review line from the input export
///
/// The rating is kept as raw text here; it is parsed when the row is
/// folded into a [`SitterAggregate`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewRow {
    #[serde(rename = "sitter_email")]
    pub email: String,
    #[serde(rename = "sitter", default)]
    pub name: String,
    #[serde(default)]
    pub rating: String,
}

impl ReviewRow {
    pub fn new(email: impl Into<String>, name: impl Into<String>, rating: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            rating: rating.into(),
        }
    }

    /// Parse the rating text, `None` if it is not a finite number
    pub fn parsed_rating(&self) -> Option<f64> {
        parse_rating(&self.rating)
    }
}

/// Parse rating text into a numeric rating
///
/// Surrounding whitespace is ignored. NaN and infinities count as non-numeric.
pub fn parse_rating(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// All ratings collected for one sitter, keyed by email
#[derive(Debug, Clone, PartialEq)]
pub struct SitterAggregate {
    pub email: String,
    pub name: String,
    /// Ratings in input order; `None` marks an unparseable rating
    pub ratings: Vec<Option<f64>>,
}

impl SitterAggregate {
    pub fn new(email: impl Into<String>, name: impl Into<String>, rating: Option<f64>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            ratings: vec![rating],
        }
    }

    /// Number of ratings recorded, numeric or not
    pub fn ratings_count(&self) -> usize {
        self.ratings.len()
    }
}

/// Scored sitter, one output line
///
/// Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitterResult {
    pub email: String,
    pub name: String,
    #[serde(serialize_with = "serialize_score")]
    pub profile_score: f64,
    #[serde(serialize_with = "serialize_score")]
    pub ratings_score: f64,
    #[serde(serialize_with = "serialize_score")]
    pub search_score: f64,
}

impl SitterResult {
    /// Output header row
    pub const HEADERS: [&'static str; 5] =
        ["email", "name", "profile_score", "ratings_score", "search_score"];
}

// Shortest display form: `5` rather than `5.0`.
fn serialize_score<S: Serializer>(score: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(score)
}

/// Tunable constants of the scoring formulas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringParams {
    /// Profile score of a name that uses every letter a-z
    pub profile_scale: f64,
    /// Ratings count from which the search score is the ratings score alone
    pub ratings_threshold: usize,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            profile_scale: 5.0,
            ratings_threshold: 10,
        }
    }
}
