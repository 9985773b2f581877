//! Data Cleaner Module
//! Parses the date column and filters rows ahead of aggregation.

use chrono::NaiveDate;
use polars::prelude::*;
use thiserror::Error;

use super::{CONTINENT_COL, DATE_COL};

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Parse the date column and keep rows with a continent and a date on or
/// after `cutoff`. Unparsable dates become null and fail the cutoff check,
/// so they never reach aggregation. The input frame is left untouched.
pub fn clean(df: &DataFrame, cutoff: NaiveDate) -> Result<DataFrame, CleanerError> {
    let before = df.height();

    let cleaned = df
        .clone()
        .lazy()
        .with_column(col(DATE_COL).str().to_date(StrptimeOptions {
            format: Some("%Y-%m-%d".into()),
            strict: false,
            exact: true,
            cache: true,
        }))
        .filter(
            col(CONTINENT_COL)
                .is_not_null()
                .and(col(DATE_COL).gt_eq(lit(cutoff))),
        )
        .collect()?;

    log::debug!("cleaning kept {} of {} rows", cleaned.height(), before);
    Ok(cleaned)
}
