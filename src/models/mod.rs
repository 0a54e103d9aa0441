pub mod berry;
pub mod donut;
pub mod flavor;

pub use berry::{Berry, canonical_name};
pub use donut::Donut;
pub use flavor::{Flavor, FlavorProfile};
