use crate::catalog::Catalog;
use crate::finder::constants::CALORIES_PER_BURN_SECOND;
use crate::finder::sweep::SweepOutcome;
use crate::models::{Donut, Flavor};

/// Longest recipe text shown before truncating.
const MAX_RECIPE_WIDTH: usize = 120;

/// Recipe text in catalog display order, e.g. `2 H-Sitrus, 1 H-Cheri`.
pub fn recipe_string(donut: &Donut, catalog: &Catalog) -> String {
    let parts: Vec<String> = catalog
        .berries()
        .iter()
        .filter_map(|berry| match donut.quantity(&berry.name) {
            0 => None,
            qty => Some(format!("{} {}", qty, berry.name)),
        })
        .collect();

    let text = parts.join(", ");
    if text.chars().count() > MAX_RECIPE_WIDTH {
        let cut: String = text.chars().take(MAX_RECIPE_WIDTH - 3).collect();
        format!("{}...", cut)
    } else {
        text
    }
}

/// Sort for display: most inventory first, then most calories.
pub fn sort_for_display(donuts: &mut [Donut]) {
    donuts.sort_by(|a, b| {
        b.inventory_sum
            .cmp(&a.inventory_sum)
            .then(b.bonus_calories.cmp(&a.bonus_calories))
    });
}

/// Display donut recipes, one per line, optionally limited to the first `limit`.
pub fn display_donuts(donuts: &[Donut], catalog: &Catalog, limit: Option<usize>) {
    if donuts.is_empty() {
        println!("No matching recipes found.");
        return;
    }

    let mut rows = donuts.to_vec();
    sort_for_display(&mut rows);
    let shown = limit.unwrap_or(rows.len()).min(rows.len());

    println!();
    println!(
        "{:>7} | {:>2} | {:<14} | {:>6} | {:>8} | {:>6} | {:>9} | {:>6} | Recipe",
        "Count", "★", "Dominant", "Flavor", "Calories", "Time", "Inventory", "Levels"
    );

    for donut in rows.iter().take(shown) {
        let dominant = format!("{} ({})", donut.dominant, donut.dominant_value);
        println!(
            "{:>7} | {:>1}★ | {:<14} | {:>6} | {:>8} | {:>5}s | {:>9} | {:>6} | {}",
            format!("{} ({})", donut.berry_count, donut.unique_berries),
            donut.stars,
            dominant,
            donut.flavor_total,
            donut.bonus_calories,
            donut.bonus_calories / CALORIES_PER_BURN_SECOND,
            donut.inventory_sum,
            donut.bonus_levels,
            recipe_string(donut, catalog)
        );
    }

    if shown < rows.len() {
        println!("... {} more not shown", rows.len() - shown);
    }
    println!();
}

/// Display one donut with its full breakdown.
pub fn display_donut(donut: &Donut, catalog: &Catalog) {
    println!();
    println!("=== Donut ===");
    println!("Recipe: {}", recipe_string(donut, catalog));
    println!(
        "Berries: {} ({} unique)",
        donut.berry_count, donut.unique_berries
    );
    println!(
        "Flavor: {} ({}★, x{:.1})",
        donut.flavor_total, donut.stars, donut.multiplier
    );
    for flavor in Flavor::ALL {
        let marker = if flavor == donut.dominant { " *" } else { "" };
        println!("  {:<6} {:>5}{}", flavor, donut.flavors.get(flavor), marker);
    }
    println!(
        "Levels: {} => {} with bonus",
        donut.levels_total, donut.bonus_levels
    );
    println!(
        "Calories: {} => {} with bonus ({}s burn)",
        donut.calories_total,
        donut.bonus_calories,
        donut.bonus_calories / CALORIES_PER_BURN_SECOND
    );
    println!();
}

/// Display the catalog in display order.
pub fn display_catalog(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("Catalog: (none)");
        return;
    }

    println!();
    println!("=== Catalog ({} berries) ===", catalog.len());
    println!();

    for berry in catalog.berries() {
        println!("  {:>3}. {}", berry.index, berry.debug_string());
    }

    println!();
}

/// Summary of a multi-size sweep.
pub fn display_sweep_summary(outcome: &SweepOutcome, target: i64) {
    println!("--- Summary ---");
    for (stats, found) in outcome.per_size.iter().zip(&outcome.found_per_size) {
        println!(
            "{}-berry donuts >= {} flavor: {} found in {:.2}s ({} branches)",
            stats.size,
            target,
            found,
            stats.elapsed.as_secs_f64(),
            stats.visited
        );
    }
    println!("Total recipes found: {}", outcome.donuts.len());
    println!("Total search time: {:.2}s", outcome.total_elapsed().as_secs_f64());
    if let Some(best) = outcome.donuts.iter().map(|d| d.flavor_total).max() {
        println!("Best flavor found: {}", best);
    }
}
