/// Flavor thresholds for 0 through 5 stars, ascending.
pub const STAR_THRESHOLDS: [i64; 6] = [0, 120, 240, 400, 700, 960];

/// Highest star rating a donut can reach.
pub const MAX_STARS: u8 = 5;

/// Bonus multiplier gained per star (1.0 + 0.1 * stars).
pub const MULTIPLIER_STEP: f64 = 0.1;

/// Smallest donut the search accepts.
pub const MIN_DONUT_BERRIES: u32 = 2;

/// Largest donut the search accepts.
pub const MAX_DONUT_BERRIES: u32 = 8;

/// Default size range swept by the CLI.
pub const DEFAULT_MIN_BERRIES: u32 = 3;
pub const DEFAULT_MAX_BERRIES: u32 = 8;

/// Default flavor threshold (a 3-star donut).
pub const DEFAULT_TARGET_FLAVOR: i64 = 400;

/// Jaro-Winkler similarity required to suggest a berry name.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Burn time shown for a 5-star donut: one second per ten calories.
pub const CALORIES_PER_BURN_SECOND: u64 = 10;
