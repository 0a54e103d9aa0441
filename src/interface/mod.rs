pub mod render;

pub use render::{
    display_catalog, display_donut, display_donuts, display_sweep_summary, recipe_string,
    sort_for_display,
};
