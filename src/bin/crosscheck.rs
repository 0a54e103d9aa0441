use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use donut_finder_rs::catalog::{MissingCount, load_berries};
use donut_finder_rs::finder::{
    SearchConfig, brute_force, search, total_combinations, validate_sizes,
};
use donut_finder_rs::init_logging;
use donut_finder_rs::models::Donut;

#[derive(Parser, Debug)]
#[command(name = "crosscheck")]
#[command(about = "Compare the pruned donut search against exhaustive enumeration")]
struct Args {
    /// Path to the berry catalog CSV
    #[arg(long, default_value = "hyper_berries.csv")]
    file: PathBuf,

    /// Minimum flavor total
    #[arg(long, default_value = "400")]
    target: i64,

    /// Smallest donut size
    #[arg(long, default_value = "2")]
    min: u32,

    /// Largest donut size
    #[arg(long, default_value = "4")]
    max: u32,

    /// Allow more of a berry than the inventory holds
    #[arg(long)]
    ignore_inventory: bool,

    /// How to treat a berry with no inventory count
    #[arg(long, value_enum, default_value_t = MissingCount::Zero)]
    missing_count: MissingCount,
}

fn compositions(donuts: &[Donut]) -> Vec<BTreeMap<String, u32>> {
    let mut recipes: Vec<_> = donuts.iter().map(|d| d.berries.clone()).collect();
    recipes.sort();
    recipes
}

fn main() {
    let args = Args::parse();
    init_logging(false);

    let sizes = args.min..=args.max;
    if let Err(e) = validate_sizes(&sizes) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let report = match load_berries(&args.file, args.missing_count) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error reading catalog {:?}: {}", args.file, e);
            std::process::exit(1);
        }
    };

    println!(
        "Loaded {} berries from {:?} ({} skipped)",
        report.berries.len(),
        args.file,
        report.skipped
    );

    let config = SearchConfig {
        target_flavor: args.target,
        inventory_aware: !args.ignore_inventory,
        ..Default::default()
    };

    let mut mismatches = 0;

    for size in sizes {
        let pruned = match search(&report.berries, size, &config) {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };

        let start = Instant::now();
        let (naive, checked) = brute_force(&report.berries, size, &config);
        let naive_elapsed = start.elapsed();

        let total = total_combinations(report.berries.len(), size);
        let matches = compositions(&pruned.donuts) == compositions(&naive);
        if !matches {
            mismatches += 1;
        }

        println!(
            "size {}: pruned {} recipes, {} branches in {:.3}s | naive {} recipes, {}/{} multisets in {:.3}s | {}",
            size,
            pruned.donuts.len(),
            pruned.stats.visited,
            pruned.stats.elapsed.as_secs_f64(),
            naive.len(),
            checked,
            total,
            naive_elapsed.as_secs_f64(),
            if matches { "OK" } else { "MISMATCH" }
        );
    }

    if mismatches > 0 {
        eprintln!("{} size(s) disagree", mismatches);
        std::process::exit(1);
    }
    println!("All sizes agree.");
}
