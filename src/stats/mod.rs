//! Stats module - aggregation and correlation

mod aggregator;
mod correlation;

pub use aggregator::{
    deaths_by_continent, deaths_vs_elderly, AggregateError, ElderlyPairing, MortalitySummary,
};
pub use correlation::{pearson, Correlation};
