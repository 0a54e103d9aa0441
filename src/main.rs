use clap::Parser;
use std::path::Path;

use donut_finder_rs::catalog::{Catalog, MissingCount, load_berries};
use donut_finder_rs::cli::{Cli, Command, SearchArgs};
use donut_finder_rs::error::Result;
use donut_finder_rs::finder::{DonutFilter, SearchConfig, sweep, validate_sizes};
use donut_finder_rs::init_logging;
use donut_finder_rs::interface::{
    display_catalog, display_donut, display_donuts, display_sweep_summary, sort_for_display,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let command = cli.command.unwrap_or_default();

    let Some(catalog) = open_catalog(&cli.file, cli.missing_count)? else {
        return Ok(());
    };

    match command {
        Command::Search(args) => cmd_search(&catalog, &args),
        Command::Evaluate { berries } => cmd_evaluate(&catalog, &berries),
        Command::Catalog => {
            display_catalog(&catalog);
            Ok(())
        }
    }
}

/// Load the catalog, or `None` if the file does not exist.
fn open_catalog(file_path: &str, missing: MissingCount) -> Result<Option<Catalog>> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Berry catalog not found: {}", file_path);
        eprintln!("Pass --file with the path to your berry CSV.");
        return Ok(None);
    }

    let report = load_berries(path, missing)?;
    if report.skipped > 0 {
        eprintln!("Skipped {} malformed rows", report.skipped);
    }
    eprintln!("Loaded {} berries.", report.berries.len());

    Ok(Some(Catalog::new(report.berries)))
}

/// Search every requested size and show the combined results.
fn cmd_search(catalog: &Catalog, args: &SearchArgs) -> Result<()> {
    let sizes = args.sizes();
    validate_sizes(&sizes)?;

    if catalog.is_empty() {
        println!("Catalog is empty; nothing to search.");
        return Ok(());
    }

    let config = SearchConfig {
        target_flavor: args.target,
        inventory_aware: !args.ignore_inventory,
        filter: DonutFilter {
            stars: args.stars.clone(),
            flavors: args.flavors.clone(),
        },
        ratchet: args.ratchet,
        parallel: args.parallel,
    };

    eprintln!(
        "Searching for {}-{} berry donuts >= {} flavor{}...",
        sizes.start(),
        sizes.end(),
        args.target,
        if config.inventory_aware {
            " (respecting current inventory)"
        } else {
            ""
        }
    );

    let mut outcome = sweep(catalog.berries(), sizes, &config)?;

    if args.json {
        sort_for_display(&mut outcome.donuts);
        let shown = args.top.unwrap_or(outcome.donuts.len());
        let rows: Vec<_> = outcome.donuts.iter().take(shown).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    display_donuts(&outcome.donuts, catalog, args.top);
    display_sweep_summary(&outcome, args.target);
    Ok(())
}

/// Score a hand-picked donut.
fn cmd_evaluate(catalog: &Catalog, berries: &[String]) -> Result<()> {
    let donut = catalog.donut_from_names(berries)?;
    display_donut(&donut, catalog);

    let shortfalls = catalog.shortfalls(&donut);
    if shortfalls.is_empty() {
        println!("Current inventory covers this recipe.");
    } else {
        for (name, needed, have) in shortfalls {
            println!("Not enough {}: need {}, have {}", name, needed, have);
        }
    }

    Ok(())
}
