use std::collections::BTreeMap;

use proptest::prelude::*;

use donut_finder_rs::finder::{
    DonutFilter, SearchConfig, Selector, brute_force, search, sweep,
};
use donut_finder_rs::models::{Berry, Donut, Flavor};

fn make_berry(name: &str, flavor: i64, count: u32) -> Berry {
    Berry::new(0, name, [flavor, 0, 0, 0, 0], 2, 100, Some(count))
}

fn abc(c_count: u32) -> Vec<Berry> {
    vec![
        make_berry("A", 50, 5),
        make_berry("B", 80, 5),
        make_berry("C", 100, c_count),
    ]
}

fn compositions(donuts: &[Donut]) -> Vec<BTreeMap<String, u32>> {
    let mut recipes: Vec<_> = donuts.iter().map(|d| d.berries.clone()).collect();
    recipes.sort();
    recipes
}

fn recipe(parts: &[(&str, u32)]) -> BTreeMap<String, u32> {
    parts.iter().map(|(n, q)| (n.to_string(), *q)).collect()
}

fn target(flavor: i64) -> SearchConfig {
    SearchConfig {
        target_flavor: flavor,
        ..Default::default()
    }
}

#[test]
fn test_three_berry_scenario_returns_every_qualifying_recipe() {
    let outcome = search(&abc(5), 3, &target(240)).unwrap();
    let recipes = compositions(&outcome.donuts);

    assert!(recipes.contains(&recipe(&[("C", 3)])));
    assert!(recipes.contains(&recipe(&[("B", 1), ("C", 2)])));
    assert_eq!(recipes.len(), 5);

    let best = outcome
        .donuts
        .iter()
        .find(|d| d.berries == recipe(&[("C", 3)]))
        .unwrap();
    assert_eq!(best.flavor_total, 300);
    assert_eq!(best.stars, 2);
    assert!(outcome.donuts.iter().all(|d| d.flavor_total >= 240));
}

#[test]
fn test_inventory_scenario_excludes_overdrawn_recipes() {
    let outcome = search(&abc(1), 3, &target(240)).unwrap();

    assert!(!outcome.donuts.is_empty());
    assert!(outcome.donuts.iter().all(|d| d.quantity("C") <= 1));
    assert!(
        !compositions(&outcome.donuts).contains(&recipe(&[("C", 3)])),
        "C:3 clears the flavor target but needs 3 of a berry with 1 in stock"
    );
}

#[test]
fn test_empty_catalog_scenario() {
    let outcome = search(&[], 3, &target(240)).unwrap();
    assert!(outcome.donuts.is_empty());
    assert_eq!(outcome.stats.visited, 0);
    assert_eq!(outcome.stats.catalog_size, 0);
}

#[test]
fn test_sour_filter_excludes_other_dominant_flavors() {
    let berries = vec![
        Berry::new(1, "Sour", [0, 0, 90, 10, 0], 1, 50, Some(8)),
        Berry::new(2, "Spicy", [0, 120, 0, 0, 0], 1, 50, Some(8)),
        Berry::new(3, "Mixed", [30, 30, 30, 30, 30], 1, 50, Some(8)),
    ];
    let config = SearchConfig {
        filter: DonutFilter {
            flavors: Selector::only([Flavor::Sour]),
            ..Default::default()
        },
        ..target(300)
    };

    let outcome = search(&berries, 3, &config).unwrap();

    assert!(!outcome.donuts.is_empty());
    assert!(outcome.donuts.iter().all(|d| d.dominant == Flavor::Sour));
    assert!(outcome.stats.candidates > outcome.donuts.len());
}

#[test]
fn test_search_is_idempotent() {
    let berries = abc(3);
    let first = search(&berries, 4, &target(300)).unwrap();
    let second = search(&berries, 4, &target(300)).unwrap();
    assert_eq!(compositions(&first.donuts), compositions(&second.donuts));
}

#[test]
fn test_parallel_materialization_matches_sequential() {
    let berries: Vec<Berry> = (0..8)
        .map(|i| {
            Berry::new(
                i,
                format!("B{}", i),
                [10 * i as i64, 20, 5, 0, 15],
                i,
                40 + i,
                Some(3),
            )
        })
        .collect();

    let sequential = sweep(&berries, 3..=6, &target(250)).unwrap();
    let parallel = sweep(
        &berries,
        3..=6,
        &SearchConfig {
            parallel: true,
            ..target(250)
        },
    )
    .unwrap();

    assert!(!sequential.donuts.is_empty());
    assert_eq!(sequential.donuts, parallel.donuts);
}

#[test]
fn test_pruning_visits_fewer_branches_for_high_targets() {
    let berries: Vec<Berry> = (0..12)
        .map(|i| make_berry(&format!("B{}", i), 20 * i as i64, 8))
        .collect();

    let low = search(&berries, 6, &target(0)).unwrap();
    let high = search(&berries, 6, &target(1200)).unwrap();

    assert!(high.stats.visited < low.stats.visited);
    assert!(high.donuts.iter().all(|d| d.flavor_total >= 1200));
}

fn arb_catalog() -> impl Strategy<Value = Vec<Berry>> {
    prop::collection::vec(
        (
            prop::array::uniform5(-20i64..120),
            prop::option::of(0u32..5),
            0u32..20,
            0u32..300,
        ),
        0..=7,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (flavors, count, levels, calories))| {
                Berry::new(i as u32, format!("B{}", i), flavors, levels, calories, count)
            })
            .collect()
    })
}

fn arb_filter() -> impl Strategy<Value = DonutFilter> {
    (
        prop::option::of(0u8..=5),
        prop::option::of(prop::sample::select(Flavor::ALL.to_vec())),
    )
        .prop_map(|(stars, flavor)| DonutFilter {
            stars: stars.map_or(Selector::All, |s| Selector::only([s])),
            flavors: flavor.map_or(Selector::All, |f| Selector::only([f])),
        })
}

proptest! {
    #[test]
    fn pruned_search_matches_exhaustive_enumeration(
        berries in arb_catalog(),
        size in 2u32..=5,
        target_flavor in -50i64..1500,
        inventory_aware in any::<bool>(),
        filter in arb_filter(),
    ) {
        let config = SearchConfig {
            target_flavor,
            inventory_aware,
            filter,
            ..Default::default()
        };

        let pruned = search(&berries, size, &config).unwrap();
        let (naive, _) = brute_force(&berries, size, &config);

        prop_assert_eq!(compositions(&pruned.donuts), compositions(&naive));

        for donut in &pruned.donuts {
            prop_assert_eq!(donut.berry_count, size);
            prop_assert!(donut.flavor_total >= target_flavor);
            if inventory_aware {
                for berry in &berries {
                    prop_assert!(donut.quantity(&berry.name) <= berry.count.unwrap_or(u32::MAX));
                }
            }
        }
    }
}
