use crate::finder::constants::{MULTIPLIER_STEP, STAR_THRESHOLDS};

/// Star rating for a flavor total: index of the rightmost threshold not above it.
///
/// Totals below zero rate 0 stars.
pub fn star_rating(flavor_total: i64) -> u8 {
    let reached = STAR_THRESHOLDS.partition_point(|&t| t <= flavor_total);
    reached.saturating_sub(1) as u8
}

/// Bonus multiplier for a star rating: 1.0 + 0.1 * stars.
pub fn star_multiplier(stars: u8) -> f64 {
    1.0 + MULTIPLIER_STEP * stars as f64
}

/// `floor(value * multiplier)` computed in integers to avoid float drift.
pub fn bonus_value(value: u64, stars: u8) -> u64 {
    value * (10 + stars as u64) / 10
}
