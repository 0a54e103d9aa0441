use std::collections::BTreeMap;

use serde::Serialize;

use crate::finder::rating::{bonus_value, star_multiplier, star_rating};
use crate::models::berry::Berry;
use crate::models::flavor::{Flavor, FlavorProfile};

/// A finished donut recipe: a multiset of berries plus its derived metrics.
///
/// Built once from a composition and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Donut {
    /// Berry name to quantity.
    pub berries: BTreeMap<String, u32>,
    pub berry_count: u32,
    pub flavors: FlavorProfile,
    pub flavor_total: i64,
    pub levels_total: u64,
    pub calories_total: u64,
    pub stars: u8,
    pub multiplier: f64,
    pub bonus_levels: u64,
    pub bonus_calories: u64,
    pub dominant: Flavor,
    pub dominant_value: i64,
    pub unique_berries: usize,
    /// Sum of the inventory counts of each distinct berry used (uncapped berries add 0).
    pub inventory_sum: u64,
}

impl Donut {
    /// Materialize a donut from `(berry index, quantity)` pairs into `berries`.
    ///
    /// Zero quantities are ignored.
    pub fn from_counts(berries: &[Berry], counts: &[(usize, u32)]) -> Self {
        let mut composition = BTreeMap::new();
        let mut flavors = FlavorProfile::default();
        let mut berry_count = 0;
        let mut levels_total = 0u64;
        let mut calories_total = 0u64;
        let mut inventory_sum = 0u64;

        for &(idx, qty) in counts.iter().filter(|(_, qty)| *qty > 0) {
            let berry = &berries[idx];
            *composition.entry(berry.name.clone()).or_insert(0) += qty;
            flavors.add_scaled(&berry.flavors, qty);
            berry_count += qty;
            levels_total += berry.levels as u64 * qty as u64;
            calories_total += berry.calories as u64 * qty as u64;
        }

        // Inventory is counted once per distinct berry, not per unit.
        for name in composition.keys() {
            if let Some(berry) = berries.iter().find(|b| &b.name == name) {
                inventory_sum += berry.count.unwrap_or(0) as u64;
            }
        }

        let flavor_total = flavors.total();
        let stars = star_rating(flavor_total);
        let (dominant, dominant_value) = flavors.dominant();

        Self {
            unique_berries: composition.len(),
            berries: composition,
            berry_count,
            flavors,
            flavor_total,
            levels_total,
            calories_total,
            stars,
            multiplier: star_multiplier(stars),
            bonus_levels: bonus_value(levels_total, stars),
            bonus_calories: bonus_value(calories_total, stars),
            dominant,
            dominant_value,
            inventory_sum,
        }
    }

    /// Quantity of the named berry in this recipe.
    pub fn quantity(&self, name: &str) -> u32 {
        self.berries.get(name).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    fn sample_berries() -> Vec<Berry> {
        vec![
            Berry::new(1, "H-Sitrus", [0, 0, 100, 20, 0], 3, 300, Some(4)),
            Berry::new(2, "H-Cheri", [0, 90, 0, 0, 10], 2, 250, Some(7)),
            Berry::new(3, "Oran", [10, 10, 10, 10, 10], 1, 100, None),
        ]
    }

    #[test]
    fn test_from_counts_totals() {
        let berries = sample_berries();
        let donut = Donut::from_counts(&berries, &[(0, 2), (1, 1)]);

        assert_eq!(donut.berry_count, 3);
        assert_eq!(donut.flavor_total, 340);
        assert_eq!(donut.flavors, FlavorProfile([0, 90, 200, 40, 10]));
        assert_eq!(donut.levels_total, 8);
        assert_eq!(donut.calories_total, 850);
        assert_eq!(donut.unique_berries, 2);
        assert_eq!(donut.inventory_sum, 11);
        assert_eq!(donut.quantity("H-Sitrus"), 2);
        assert_eq!(donut.quantity("Oran"), 0);
    }

    #[test]
    fn test_from_counts_derived_metrics() {
        let berries = sample_berries();
        // 340 flavor -> 2 stars -> 1.2x
        let donut = Donut::from_counts(&berries, &[(0, 2), (1, 1)]);
        assert_eq!(donut.stars, 2);
        assert_float_absolute_eq!(donut.multiplier, 1.2, 1e-9);
        assert_eq!(donut.bonus_levels, 9); // floor(8 * 1.2)
        assert_eq!(donut.bonus_calories, 1020);
        assert_eq!(donut.dominant, Flavor::Sour);
        assert_eq!(donut.dominant_value, 200);
    }

    #[test]
    fn test_uncapped_berry_adds_no_inventory() {
        let berries = sample_berries();
        let donut = Donut::from_counts(&berries, &[(2, 3), (0, 0)]);
        assert_eq!(donut.inventory_sum, 0);
        assert_eq!(donut.unique_berries, 1);
        assert_eq!(donut.stars, 1); // 150 flavor
    }
}
