use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::{DonutError, Result};
use crate::finder::constants::{DEFAULT_TARGET_FLAVOR, MAX_DONUT_BERRIES, MIN_DONUT_BERRIES};
use crate::finder::filters::DonutFilter;
use crate::models::{Berry, Donut};

/// Knobs for a single search run.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum flavor total a donut must reach.
    pub target_flavor: i64,
    /// Cap each berry's quantity at its inventory count.
    pub inventory_aware: bool,
    pub filter: DonutFilter,
    /// Raise the threshold to the best flavor found so far.
    pub ratchet: bool,
    /// Materialize qualifying recipes on the rayon pool.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            target_flavor: DEFAULT_TARGET_FLAVOR,
            inventory_aware: true,
            filter: DonutFilter::default(),
            ratchet: false,
            parallel: false,
        }
    }
}

/// Diagnostics for one search run.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    pub size: u32,
    /// Zero means there was nothing to search, as opposed to nothing found.
    pub catalog_size: usize,
    /// Branches popped off the traversal stack.
    pub visited: u64,
    /// Completed recipes that cleared the threshold, before filters.
    pub candidates: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Matching donuts in discovery order.
    pub donuts: Vec<Donut>,
    pub stats: SearchStats,
}

/// Reject sizes outside `[MIN_DONUT_BERRIES, MAX_DONUT_BERRIES]`.
pub fn validate_size(size: u32) -> Result<()> {
    if (MIN_DONUT_BERRIES..=MAX_DONUT_BERRIES).contains(&size) {
        Ok(())
    } else {
        Err(DonutError::InvalidSize {
            size,
            min: MIN_DONUT_BERRIES,
            max: MAX_DONUT_BERRIES,
        })
    }
}

/// Copy of `berries` ordered by flavor total, highest first.
///
/// Ties keep catalog order.
pub fn sort_by_flavor(berries: &[Berry]) -> Vec<Berry> {
    let mut sorted = berries.to_vec();
    sorted.sort_by(|a, b| b.flavor_total.cmp(&a.flavor_total));
    sorted
}

/// One pending branch of the traversal.
struct Frame {
    /// Next berry position to decide.
    pos: usize,
    /// Slots still to fill.
    remaining: u32,
    flavor: i64,
    /// Nonzero takes so far, as (position, quantity).
    path: Vec<(usize, u32)>,
    /// Best flavor reachable by the parent with more of the same berry.
    /// Checked against the threshold when the frame is popped; `None` for the maximal take.
    guard: Option<i64>,
}

/// Find every donut of exactly `size` berries whose flavor total reaches the target.
///
/// Depth-first over berries sorted by flavor, deciding how many units of each
/// to take. A branch is cut once its flavor plus the current berry's flavor in
/// every open slot cannot reach the threshold; later berries never score higher.
pub fn search(berries: &[Berry], size: u32, config: &SearchConfig) -> Result<SearchOutcome> {
    validate_size(size)?;

    let start = Instant::now();
    let mut stats = SearchStats {
        size,
        catalog_size: berries.len(),
        ..Default::default()
    };

    if berries.is_empty() {
        warn!(size, "empty catalog, nothing to search");
        stats.elapsed = start.elapsed();
        return Ok(SearchOutcome {
            donuts: Vec::new(),
            stats,
        });
    }

    let sorted = sort_by_flavor(berries);
    let mut threshold = config.target_flavor;
    let mut qualifying: Vec<Vec<(usize, u32)>> = Vec::new();

    let mut stack = vec![Frame {
        pos: 0,
        remaining: size,
        flavor: 0,
        path: Vec::new(),
        guard: None,
    }];

    while let Some(frame) = stack.pop() {
        stats.visited += 1;

        if frame.guard.is_some_and(|bound| bound < threshold) {
            continue;
        }

        // All slots filled; the remaining berries take zero units.
        if frame.remaining == 0 {
            if frame.flavor >= threshold {
                qualifying.push(frame.path);
                if config.ratchet && frame.flavor > threshold {
                    debug!(from = threshold, to = frame.flavor, "raising flavor threshold");
                    threshold = frame.flavor;
                }
            }
            continue;
        }

        // Ran out of berries with slots left.
        if frame.pos == sorted.len() {
            continue;
        }

        let berry = &sorted[frame.pos];
        let remaining = frame.remaining;

        if frame.flavor + berry.flavor_total * (remaining as i64) < threshold {
            continue;
        }

        let max_take = if config.inventory_aware {
            berry.cap(remaining)
        } else {
            remaining
        };

        // Push in reverse so smaller takes are explored first.
        for take in (0..=max_take).rev() {
            debug_assert!(
                !config.inventory_aware || berry.count.is_none_or(|c| take <= c),
                "take {} of {} exceeds inventory {:?}",
                take,
                berry.name,
                berry.count
            );

            let flavor = frame.flavor + berry.flavor_total * take as i64;
            let guard = (take < max_take)
                .then(|| flavor + berry.flavor_total * (remaining - take) as i64);

            let mut path = frame.path.clone();
            if take > 0 {
                path.push((frame.pos, take));
            }

            stack.push(Frame {
                pos: frame.pos + 1,
                remaining: remaining - take,
                flavor,
                path,
                guard,
            });
        }
    }

    stats.candidates = qualifying.len();
    let donuts = materialize(&sorted, &qualifying, config);
    stats.elapsed = start.elapsed();

    info!(
        size,
        target = config.target_flavor,
        found = donuts.len(),
        candidates = stats.candidates,
        visited = stats.visited,
        elapsed_ms = stats.elapsed.as_millis() as u64,
        "search finished"
    );

    Ok(SearchOutcome { donuts, stats })
}

/// Build donuts for the qualifying paths and apply the result filters.
///
/// Order follows `paths` in both modes.
fn materialize(sorted: &[Berry], paths: &[Vec<(usize, u32)>], config: &SearchConfig) -> Vec<Donut> {
    if config.parallel {
        paths
            .par_iter()
            .map(|path| Donut::from_counts(sorted, path))
            .filter(|donut| config.filter.admits(donut))
            .collect()
    } else {
        paths
            .iter()
            .map(|path| Donut::from_counts(sorted, path))
            .filter(|donut| config.filter.admits(donut))
            .collect()
    }
}
