//! Static Chart Renderer
//! Draws the bar and scatter charts with Plotters and writes PNG files.

use plotters::prelude::*;
use thiserror::Error;

use crate::stats::{Correlation, ElderlyPairing, MortalitySummary};

/// Output files, written to the working directory.
pub const BAR_CHART_FILE: &str = "deaths_by_continent.png";
pub const SCATTER_CHART_FILE: &str = "deaths_vs_elderly.png";

const BAR_SIZE: (u32, u32) = (1500, 900);
const SCATTER_SIZE: (u32, u32) = (1200, 900);

const CORAL: RGBColor = RGBColor(255, 127, 80);
const STEEL_BLUE: RGBColor = RGBColor(70, 130, 180);

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to render chart: {0}")]
    Backend(String),
    #[error("No plottable rows")]
    Empty,
}

fn backend_err(e: impl std::fmt::Display) -> ChartError {
    ChartError::Backend(e.to_string())
}

/// Bar chart of average deaths per million, one bar per continent.
/// Continents without a mean have no bar to draw and are skipped.
pub fn render_bar_chart(rows: &[MortalitySummary], path: &str) -> Result<(), ChartError> {
    let bars: Vec<(&str, f64)> = rows
        .iter()
        .filter_map(|r| r.avg_deaths_per_million.map(|v| (r.continent.as_str(), v)))
        .collect();
    if bars.len() < rows.len() {
        log::debug!("{} continent(s) without a mean left off the chart", rows.len() - bars.len());
    }
    if bars.is_empty() {
        return Err(ChartError::Empty);
    }

    let y_max = (bars.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max) * 1.1).max(1.0);

    let root = BitMapBackend::new(path, BAR_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(backend_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Average COVID Deaths per Million by Continent (2020-2021)",
            ("sans-serif", 36),
        )
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d((0..bars.len()).into_segmented(), 0.0..y_max)
        .map_err(backend_err)?;

    let label_fmt = |seg: &SegmentValue<usize>| match seg {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => bars
            .get(*i)
            .map(|(name, _)| name.to_string())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Continent")
        .y_desc("Deaths per Million")
        .x_label_formatter(&label_fmt)
        .label_style(("sans-serif", 20))
        .axis_desc_style(("sans-serif", 24))
        .draw()
        .map_err(backend_err)?;

    chart
        .draw_series(bars.iter().enumerate().map(|(i, (_, v))| {
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), *v)],
                CORAL.filled(),
            );
            bar.set_margin(0, 0, 20, 20);
            bar
        }))
        .map_err(backend_err)?;

    root.present().map_err(backend_err)?;
    Ok(())
}

/// Scatter of elderly share vs deaths per million, one labeled point per
/// continent, with the correlation value in the title when defined.
pub fn render_scatter_chart(
    rows: &[ElderlyPairing],
    corr: Option<&Correlation>,
    path: &str,
) -> Result<(), ChartError> {
    let points: Vec<(f64, f64, &str)> = rows
        .iter()
        .filter_map(|r| match (r.avg_aged_65_pct, r.avg_deaths_per_million) {
            (Some(x), Some(y)) => Some((x, y, r.continent.as_str())),
            _ => None,
        })
        .collect();
    if points.is_empty() {
        return Err(ChartError::Empty);
    }

    let (x_min, x_max) = padded_range(points.iter().map(|(x, _, _)| *x));
    let (y_min, y_max) = padded_range(points.iter().map(|(_, y, _)| *y));

    let title = match corr {
        Some(c) => format!("COVID Deaths vs Elderly Population (Correlation: {:.2})", c.r),
        None => "COVID Deaths vs Elderly Population".to_string(),
    };

    let root = BitMapBackend::new(path, SCATTER_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(backend_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&title, ("sans-serif", 36))
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(backend_err)?;

    chart
        .configure_mesh()
        .x_desc("% Population Aged 65+")
        .y_desc("Avg Deaths per Million")
        .label_style(("sans-serif", 20))
        .axis_desc_style(("sans-serif", 24))
        .draw()
        .map_err(backend_err)?;

    chart
        .draw_series(points.iter().map(|(x, y, name)| {
            EmptyElement::at((*x, *y))
                + Circle::new((0, 0), 9, STEEL_BLUE.mix(0.7).filled())
                + Text::new((*name).to_string(), (-14, 12), ("sans-serif", 20))
        }))
        .map_err(backend_err)?;

    root.present().map_err(backend_err)?;
    Ok(())
}

/// Value range padded on both sides so points sit inside the axes.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let pad = if max > min {
        (max - min) * 0.1
    } else {
        max.abs().max(1.0) * 0.1
    };
    (min - pad, max + pad)
}
