pub mod brute_force;
pub mod constants;
pub mod filters;
pub mod rating;
pub mod search;
pub mod sweep;

pub use brute_force::{brute_force, total_combinations};
pub use constants::*;
pub use filters::{DonutFilter, FlavorFilter, Selector, StarFilter};
pub use rating::{bonus_value, star_multiplier, star_rating};
pub use search::{SearchConfig, SearchOutcome, SearchStats, search, sort_by_flavor, validate_size};
pub use sweep::{SweepOutcome, sweep, validate_sizes};
