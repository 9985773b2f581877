//! CSV Data Loader Module
//! Loads the OWID dataset with a declared column schema using Polars.

use polars::prelude::*;
use thiserror::Error;

use super::{AGED_65_COL, CONTINENT_COL, DATE_COL, DEATHS_COL, LOCATION_COL};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing expected column '{0}'")]
    MissingColumn(&'static str),
}

/// Columns the analysis depends on and the dtype each is coerced to.
/// Inference is only trusted for columns outside this list.
const DECLARED_SCHEMA: [(&str, DataType); 5] = [
    (DATE_COL, DataType::String),
    (CONTINENT_COL, DataType::String),
    (LOCATION_COL, DataType::String),
    (DEATHS_COL, DataType::Float64),
    (AGED_65_COL, DataType::Float64),
];

/// Load a CSV file using Polars, then pin the declared columns to their
/// declared dtypes. A missing declared column is an error; everything else
/// in the file rides along untouched.
pub fn load_csv(path: &str) -> Result<DataFrame, LoaderError> {
    // Use lazy evaluation for memory efficiency, then collect
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10_000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    let names = df.get_column_names();
    for (name, _) in &DECLARED_SCHEMA {
        if !names.iter().any(|n| n.as_str() == *name) {
            return Err(LoaderError::MissingColumn(*name));
        }
    }

    let casts: Vec<Expr> = DECLARED_SCHEMA
        .iter()
        .map(|(name, dtype)| col(*name).cast(dtype.clone()))
        .collect();
    let df = df.lazy().with_columns(casts).collect()?;

    log::debug!("loaded {} rows from {}", df.height(), path);
    Ok(df)
}

/// First `n` column names, for the console preview.
pub fn column_preview(df: &DataFrame, n: usize) -> Vec<String> {
    df.get_column_names()
        .iter()
        .take(n)
        .map(|s| s.to_string())
        .collect()
}
