use crate::models::ScoringParams;

/// Number of letters a name can draw on for its profile score
const ALPHABET_SIZE: u32 = 26;

/// Round half away from zero to two decimal places
///
/// Values that round to zero come back as `0.0`, never `-0.0`.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

/// Calculate the profile score (0-5) of a display name
///
/// The score is the fraction of the alphabet a-z used by the name,
/// case-insensitive, scaled to 5. Anything that is not a Latin letter is
/// ignored, so an empty or letter-free name scores 0.
pub fn calculate_profile_score(name: &str) -> f64 {
    calculate_profile_score_with(name, &ScoringParams::default())
}

/// [`calculate_profile_score`] with an explicit scale
pub fn calculate_profile_score_with(name: &str, params: &ScoringParams) -> f64 {
    let distinct_letters = distinct_letter_count(name);
    let alphabet_fraction = distinct_letters as f64 / ALPHABET_SIZE as f64;

    round2(params.profile_scale * alphabet_fraction)
}

#[inline]
fn distinct_letter_count(name: &str) -> u32 {
    let mut seen: u32 = 0;
    for byte in name.bytes().filter(u8::is_ascii_alphabetic) {
        seen |= 1 << (byte.to_ascii_lowercase() - b'a');
    }
    seen.count_ones()
}

/// Calculate the ratings score: the mean of the numeric ratings
///
/// `None` and non-finite entries are skipped for both the sum and the
/// divisor. With no numeric entry at all the score is 0.
pub fn calculate_ratings_score(ratings: &[Option<f64>]) -> f64 {
    let (total, count) = ratings
        .iter()
        .flatten()
        .filter(|rating| rating.is_finite())
        .fold((0.0, 0usize), |(total, count), rating| (total + rating, count + 1));

    if count == 0 {
        return 0.0;
    }

    round2(total / count as f64)
}

/// Calculate the search score used for ranking
///
/// Blends profile and ratings scores by how many ratings the sitter has:
/// - no ratings: profile score only
/// - 10 or more ratings: ratings score only
/// - in between: linear interpolation, weight `ratings_count / 10`
///
/// A non-finite score argument yields 0.
pub fn calculate_search_score(profile_score: f64, ratings_score: f64, ratings_count: usize) -> f64 {
    calculate_search_score_with(profile_score, ratings_score, ratings_count, &ScoringParams::default())
}

/// [`calculate_search_score`] with an explicit ratings threshold
pub fn calculate_search_score_with(
    profile_score: f64,
    ratings_score: f64,
    ratings_count: usize,
    params: &ScoringParams,
) -> f64 {
    if !profile_score.is_finite() || !ratings_score.is_finite() {
        return 0.0;
    }

    let search_score = if ratings_count == 0 {
        profile_score
    } else if ratings_count >= params.ratings_threshold {
        ratings_score
    } else {
        let weight = ratings_count as f64 / params.ratings_threshold as f64;
        profile_score + (ratings_score - profile_score) * weight
    };

    round2(search_score)
}
