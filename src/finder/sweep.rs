use std::ops::RangeInclusive;
use std::time::Duration;

use tracing::info;

use crate::error::{DonutError, Result};
use crate::finder::search::{SearchConfig, SearchStats, search, validate_size};
use crate::models::{Berry, Donut};

/// Combined results of searching several donut sizes.
#[derive(Debug, Clone, Default)]
pub struct SweepOutcome {
    pub donuts: Vec<Donut>,
    /// Stats for each size searched, smallest first.
    pub per_size: Vec<SearchStats>,
    /// Matching donuts found for each size, parallel to `per_size`.
    pub found_per_size: Vec<usize>,
}

impl SweepOutcome {
    pub fn total_elapsed(&self) -> Duration {
        self.per_size.iter().map(|s| s.elapsed).sum()
    }

    pub fn total_visited(&self) -> u64 {
        self.per_size.iter().map(|s| s.visited).sum()
    }
}

/// Check that `sizes` is non-empty and every size in it is legal.
pub fn validate_sizes(sizes: &RangeInclusive<u32>) -> Result<()> {
    if sizes.is_empty() {
        return Err(DonutError::EmptySizeRange {
            min: *sizes.start(),
            max: *sizes.end(),
        });
    }
    sizes.clone().try_for_each(validate_size)
}

/// Run the search once per size in `sizes` and concatenate the results.
///
/// Every size is validated before any search starts.
pub fn sweep(
    berries: &[Berry],
    sizes: RangeInclusive<u32>,
    config: &SearchConfig,
) -> Result<SweepOutcome> {
    validate_sizes(&sizes)?;

    let mut outcome = SweepOutcome::default();
    for size in sizes {
        info!(size, target = config.target_flavor, "searching donuts");
        let result = search(berries, size, config)?;
        outcome.found_per_size.push(result.donuts.len());
        outcome.per_size.push(result.stats);
        outcome.donuts.extend(result.donuts);
    }

    Ok(outcome)
}
