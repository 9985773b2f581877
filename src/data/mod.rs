//! Data module - CSV loading and cleaning

mod cleaner;
mod loader;

pub use cleaner::{clean, CleanerError};
pub use loader::{column_preview, load_csv, LoaderError};

/// Column names the analysis expects in the input dataset.
pub const DATE_COL: &str = "date";
pub const CONTINENT_COL: &str = "continent";
pub const LOCATION_COL: &str = "location";
pub const DEATHS_COL: &str = "total_deaths_per_million";
pub const AGED_65_COL: &str = "aged_65_older";
