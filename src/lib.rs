pub mod catalog;
pub mod cli;
pub mod error;
pub mod finder;
pub mod interface;
pub mod models;

pub use error::{DonutError, Result};
pub use models::{Berry, Donut, Flavor};

/// Install the stderr log subscriber used by the binaries.
///
/// `RUST_LOG` wins; otherwise `info` when `verbose`, else `warn`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
