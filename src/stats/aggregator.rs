//! Aggregation Module
//! Groups the cleaned table by continent and computes per-group means.

use std::cmp::Ordering;

use polars::prelude::*;
use thiserror::Error;

use crate::data::{AGED_65_COL, CONTINENT_COL, DEATHS_COL, LOCATION_COL};

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Per-continent mortality summary, ordered by descending mean.
#[derive(Debug, Clone, PartialEq)]
pub struct MortalitySummary {
    pub continent: String,
    pub avg_deaths_per_million: Option<f64>,
    pub num_countries: usize,
}

/// Per-continent mortality and elderly-share means, ordered by continent.
#[derive(Debug, Clone, PartialEq)]
pub struct ElderlyPairing {
    pub continent: String,
    pub avg_deaths_per_million: Option<f64>,
    pub avg_aged_65_pct: Option<f64>,
}

/// Mean deaths per million and distinct country count per continent,
/// sorted descending by the mean. Means cover non-null values only; a
/// continent with no values at all reports a null mean.
pub fn deaths_by_continent(df: &DataFrame) -> Result<Vec<MortalitySummary>, AggregateError> {
    let agg = df
        .clone()
        .lazy()
        .group_by_stable([col(CONTINENT_COL)])
        .agg([
            col(DEATHS_COL).mean().alias("avg_deaths_per_million"),
            col(LOCATION_COL).drop_nulls().n_unique().alias("num_countries"),
        ])
        .collect()?;

    let continents = agg.column(CONTINENT_COL)?.str()?;
    let means = agg.column("avg_deaths_per_million")?.f64()?;
    let counts = agg.column("num_countries")?.u32()?;

    let mut rows = Vec::with_capacity(agg.height());
    for i in 0..agg.height() {
        let Some(continent) = continents.get(i) else {
            continue;
        };
        rows.push(MortalitySummary {
            continent: continent.to_string(),
            avg_deaths_per_million: means.get(i).map(round2),
            num_countries: counts.get(i).unwrap_or(0) as usize,
        });
    }

    rows.sort_by(|a, b| desc_nulls_last(a.avg_deaths_per_million, b.avg_deaths_per_million));
    Ok(rows)
}

/// Mean deaths per million paired with mean elderly share per continent,
/// sorted by continent name so output is stable across runs.
pub fn deaths_vs_elderly(df: &DataFrame) -> Result<Vec<ElderlyPairing>, AggregateError> {
    let agg = df
        .clone()
        .lazy()
        .group_by_stable([col(CONTINENT_COL)])
        .agg([
            col(DEATHS_COL).mean().alias("avg_deaths_per_million"),
            col(AGED_65_COL).mean().alias("avg_aged_65_pct"),
        ])
        .collect()?;

    let continents = agg.column(CONTINENT_COL)?.str()?;
    let deaths = agg.column("avg_deaths_per_million")?.f64()?;
    let elderly = agg.column("avg_aged_65_pct")?.f64()?;

    let mut rows = Vec::with_capacity(agg.height());
    for i in 0..agg.height() {
        let Some(continent) = continents.get(i) else {
            continue;
        };
        rows.push(ElderlyPairing {
            continent: continent.to_string(),
            avg_deaths_per_million: deaths.get(i).map(round2),
            avg_aged_65_pct: elderly.get(i).map(round2),
        });
    }

    rows.sort_by(|a, b| a.continent.cmp(&b.continent));
    Ok(rows)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Descending order on the mean; continents with no mean sink to the end.
fn desc_nulls_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
