use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::flavor::{Flavor, FlavorProfile};

static HYPER_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Hyper (\w+) Berry").expect("hyper berry pattern is valid"));

/// Shorten `Hyper <X> Berry` to `H-<X>`; other names are only trimmed.
pub fn canonical_name(raw: &str) -> String {
    let trimmed = raw.trim();
    match HYPER_NAME.captures(trimmed) {
        Some(caps) => format!("H-{}", &caps[1]),
        None => trimmed.to_string(),
    }
}

/// A berry from the catalog. Read-only once loaded.
///
/// `count` is the available inventory; `None` means no cap applies.
#[derive(Debug, Clone, Serialize)]
pub struct Berry {
    /// Display ordinal from the source catalog.
    pub index: u32,
    pub name: String,
    pub flavors: FlavorProfile,
    pub flavor_total: i64,
    pub levels: u32,
    pub calories: u32,
    pub count: Option<u32>,
}

impl Berry {
    pub fn new(
        index: u32,
        name: impl Into<String>,
        flavors: [i64; 5],
        levels: u32,
        calories: u32,
        count: Option<u32>,
    ) -> Self {
        let flavors = FlavorProfile(flavors);
        Self {
            index,
            name: name.into(),
            flavor_total: flavors.total(),
            flavors,
            levels,
            calories,
            count,
        }
    }

    #[inline]
    pub fn flavor(&self, flavor: Flavor) -> i64 {
        self.flavors.get(flavor)
    }

    /// Most units a recipe of `slots` berries may use when inventory applies.
    #[inline]
    pub fn cap(&self, slots: u32) -> u32 {
        self.count.map_or(slots, |c| c.min(slots))
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn debug_string(&self) -> String {
        format!(
            "{}: flavor {} (Sw:{} Sp:{} So:{} Bi:{} Fr:{}), {} lv, {} cal, count {}",
            self.name,
            self.flavor_total,
            self.flavor(Flavor::Sweet),
            self.flavor(Flavor::Spicy),
            self.flavor(Flavor::Sour),
            self.flavor(Flavor::Bitter),
            self.flavor(Flavor::Fresh),
            self.levels,
            self.calories,
            self.count
                .map_or_else(|| "unlimited".to_string(), |c| c.to_string())
        )
    }
}

impl PartialEq for Berry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Berry {}
