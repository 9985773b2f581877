//! COVID-19 Mortality Analysis
//!
//! Pipeline for the OWID COVID dataset: load the CSV, clean it, aggregate
//! death rates by continent, correlate them with elderly population share,
//! and render static charts.

pub mod charts;
pub mod data;
pub mod stats;
