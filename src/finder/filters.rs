use std::collections::BTreeSet;
use std::str::FromStr;

use crate::error::{DonutError, Result};
use crate::finder::constants::MAX_STARS;
use crate::models::{Donut, Flavor};

/// Either admits everything or only the listed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T: Ord> {
    All,
    Only(BTreeSet<T>),
}

impl<T: Ord> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: Ord> Selector<T> {
    pub fn only(values: impl IntoIterator<Item = T>) -> Self {
        Selector::Only(values.into_iter().collect())
    }

    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(set) => set.contains(value),
        }
    }
}

/// Star ratings a donut may have.
pub type StarFilter = Selector<u8>;

/// Dominant flavors a donut may have.
pub type FlavorFilter = Selector<Flavor>;

/// Both result filters together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonutFilter {
    pub stars: StarFilter,
    pub flavors: FlavorFilter,
}

impl DonutFilter {
    pub fn admits(&self, donut: &Donut) -> bool {
        self.stars.admits(&donut.stars) && self.flavors.admits(&donut.dominant)
    }
}

/// Parse `all` or a comma-separated list with `parse_item`.
fn parse_selector<T, F>(input: &str, parse_item: F) -> Result<Selector<T>>
where
    T: Ord,
    F: Fn(&str) -> Result<T>,
{
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("all") {
        return Ok(Selector::All);
    }

    let values = trimmed
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse_item)
        .collect::<Result<BTreeSet<T>>>()?;

    if values.is_empty() {
        return Err(DonutError::InvalidFilter(format!(
            "'{}' lists no values (use 'all' to disable the filter)",
            input
        )));
    }

    Ok(Selector::Only(values))
}

impl FromStr for StarFilter {
    type Err = DonutError;

    fn from_str(s: &str) -> Result<Self> {
        parse_selector(s, |part| {
            let stars: u8 = part
                .parse()
                .map_err(|_| DonutError::InvalidFilter(format!("'{}' is not a star rating", part)))?;
            if stars > MAX_STARS {
                return Err(DonutError::InvalidFilter(format!(
                    "star rating {} is above {}",
                    stars, MAX_STARS
                )));
            }
            Ok(stars)
        })
    }
}

impl FromStr for FlavorFilter {
    type Err = DonutError;

    fn from_str(s: &str) -> Result<Self> {
        parse_selector(s, Flavor::from_str)
    }
}
