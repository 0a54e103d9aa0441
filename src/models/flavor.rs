use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::DonutError;

/// One of the five flavor categories, in fixed tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Flavor {
    Sweet,
    Spicy,
    Sour,
    Bitter,
    Fresh,
}

impl Flavor {
    /// All categories in tie-break order.
    pub const ALL: [Flavor; 5] = [
        Flavor::Sweet,
        Flavor::Spicy,
        Flavor::Sour,
        Flavor::Bitter,
        Flavor::Fresh,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Flavor::Sweet => "Sweet",
            Flavor::Spicy => "Spicy",
            Flavor::Sour => "Sour",
            Flavor::Bitter => "Bitter",
            Flavor::Fresh => "Fresh",
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Flavor {
    type Err = DonutError;

    /// Case-insensitive; accepts both `sour` and `Sour Score`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let word = lowered.strip_suffix(" score").unwrap_or(&lowered).trim();

        Flavor::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(word))
            .ok_or_else(|| DonutError::InvalidFilter(format!("unknown flavor '{}'", s.trim())))
    }
}

/// Per-category flavor scores, indexed by `Flavor::index`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FlavorProfile(pub [i64; 5]);

impl FlavorProfile {
    pub fn get(&self, flavor: Flavor) -> i64 {
        self.0[flavor.index()]
    }

    pub fn total(&self) -> i64 {
        self.0.iter().sum()
    }

    /// Adds `quantity` copies of `other` to this profile.
    pub fn add_scaled(&mut self, other: &FlavorProfile, quantity: u32) {
        for (acc, v) in self.0.iter_mut().zip(other.0.iter()) {
            *acc += v * quantity as i64;
        }
    }

    /// Highest-scoring category; ties go to the earliest in `Flavor::ALL`.
    pub fn dominant(&self) -> (Flavor, i64) {
        let mut best = (Flavor::Sweet, self.0[0]);
        for flavor in Flavor::ALL.into_iter().skip(1) {
            let value = self.get(flavor);
            if value > best.1 {
                best = (flavor, value);
            }
        }
        best
    }
}
