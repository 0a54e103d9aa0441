use clap::{Args, Parser, Subcommand};

use crate::catalog::MissingCount;
use crate::finder::constants::{DEFAULT_MAX_BERRIES, DEFAULT_MIN_BERRIES, DEFAULT_TARGET_FLAVOR};
use crate::finder::filters::{FlavorFilter, StarFilter};

/// DonutFinder — search berry combinations for donuts that clear a flavor target.
#[derive(Parser, Debug)]
#[command(name = "donut_finder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the berry catalog CSV file.
    #[arg(short, long, default_value = "hyper_berries.csv", global = true)]
    pub file: String,

    /// How to treat a berry with no inventory count.
    #[arg(long, value_enum, default_value_t = MissingCount::Zero, global = true)]
    pub missing_count: MissingCount,

    /// Log search progress (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search for donuts that reach the flavor target.
    Search(SearchArgs),

    /// Score a hand-picked donut, e.g. `evaluate H-Sitrus H-Sitrus H-Cheri`.
    Evaluate {
        /// Berry names; repeat a name to use more than one.
        #[arg(required = true, num_args = 1..)]
        berries: Vec<String>,
    },

    /// List the berries in the catalog.
    Catalog,
}

impl Default for Command {
    fn default() -> Self {
        Command::Search(SearchArgs::default())
    }
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Minimum flavor total.
    #[arg(short, long, default_value_t = DEFAULT_TARGET_FLAVOR)]
    pub target: i64,

    /// Smallest donut size to search.
    #[arg(long, default_value_t = DEFAULT_MIN_BERRIES)]
    pub min: u32,

    /// Largest donut size to search.
    #[arg(long, default_value_t = DEFAULT_MAX_BERRIES)]
    pub max: u32,

    /// Search a single size (overrides --min/--max).
    #[arg(short, long)]
    pub size: Option<u32>,

    /// Allow more of a berry than the inventory holds.
    #[arg(long)]
    pub ignore_inventory: bool,

    /// Star ratings to keep: `all` or a list like `3,4`.
    #[arg(long, default_value = "all")]
    pub stars: StarFilter,

    /// Dominant flavors to keep: `all` or a list like `sour,bitter`.
    #[arg(long, default_value = "all")]
    pub flavors: FlavorFilter,

    /// Only keep recipes that beat every recipe found before them.
    #[arg(long)]
    pub ratchet: bool,

    /// Build result records on all cores.
    #[arg(long)]
    pub parallel: bool,

    /// Show at most this many recipes.
    #[arg(long)]
    pub top: Option<usize>,

    /// Print results as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl Default for SearchArgs {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET_FLAVOR,
            min: DEFAULT_MIN_BERRIES,
            max: DEFAULT_MAX_BERRIES,
            size: None,
            ignore_inventory: false,
            stars: StarFilter::All,
            flavors: FlavorFilter::All,
            ratchet: false,
            parallel: false,
            top: None,
            json: false,
        }
    }
}

impl SearchArgs {
    /// Sizes to search, smallest first.
    pub fn sizes(&self) -> std::ops::RangeInclusive<u32> {
        match self.size {
            Some(size) => size..=size,
            None => self.min..=self.max,
        }
    }
}
