mod loader;
mod store;

pub use loader::{LoadReport, MissingCount, load_berries, read_berries};
pub use store::Catalog;
