//! COVID-19 Mortality Analysis
//!
//! Analyzes global death rates by continent and correlates them with
//! elderly population demographics. Data source: Our World in Data (OWID).

use anyhow::Context;
use chrono::NaiveDate;

use covid_mortality::{charts, data, stats};

/// Default input file, expected in the working directory.
const INPUT_FILE: &str = "owid-covid-data.csv";

/// Rows dated before March 2020 predate reliable reporting.
const CUTOFF_YMD: (i32, u32, u32) = (2020, 3, 1);

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| INPUT_FILE.to_string());

    let df = data::load_csv(&input).with_context(|| format!("loading {input}"))?;
    println!("Dataset shape: {:?}", df.shape());
    println!("{:?}", data::column_preview(&df, 10));
    println!("{}", df.head(Some(3)));

    let (y, m, d) = CUTOFF_YMD;
    let cutoff = NaiveDate::from_ymd_opt(y, m, d).context("invalid cutoff date")?;
    let cleaned = data::clean(&df, cutoff).context("cleaning dataset")?;
    println!("\nRetained {} rows after cleaning", cleaned.height());

    let mortality = stats::deaths_by_continent(&cleaned).context("aggregating deaths")?;
    println!("\n=== Deaths per Million by Continent ===");
    print_mortality_table(&mortality);

    let pairings = stats::deaths_vs_elderly(&cleaned).context("aggregating elderly share")?;
    println!("\n=== Deaths vs Elderly Population % ===");
    print_pairing_table(&pairings);

    let deaths: Vec<Option<f64>> = pairings.iter().map(|p| p.avg_deaths_per_million).collect();
    let elderly: Vec<Option<f64>> = pairings.iter().map(|p| p.avg_aged_65_pct).collect();
    let corr = stats::pearson(&deaths, &elderly);
    match &corr {
        Some(c) => match c.p_value {
            Some(p) => println!(
                "\nPearson Correlation (Deaths vs % 65+): {:.3} (p = {:.4}, n = {})",
                c.r, p, c.n
            ),
            None => println!(
                "\nPearson Correlation (Deaths vs % 65+): {:.3} (n = {})",
                c.r, c.n
            ),
        },
        None => println!(
            "\nPearson Correlation (Deaths vs % 65+): undefined (fewer than 2 complete pairs)"
        ),
    }

    charts::render_bar_chart(&mortality, charts::BAR_CHART_FILE)
        .with_context(|| format!("writing {}", charts::BAR_CHART_FILE))?;
    println!("\nSaved: {}", charts::BAR_CHART_FILE);

    charts::render_scatter_chart(&pairings, corr.as_ref(), charts::SCATTER_CHART_FILE)
        .with_context(|| format!("writing {}", charts::SCATTER_CHART_FILE))?;
    println!("Saved: {}", charts::SCATTER_CHART_FILE);

    println!("\nAnalysis complete! Charts saved to current directory.");
    Ok(())
}

fn fmt_mean(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.2}")).unwrap_or_else(|| "null".to_string())
}

fn print_mortality_table(rows: &[stats::MortalitySummary]) {
    println!(
        "{:<15} {:>24} {:>15}",
        "continent", "avg_deaths_per_million", "num_countries"
    );
    for r in rows {
        println!(
            "{:<15} {:>24} {:>15}",
            r.continent,
            fmt_mean(r.avg_deaths_per_million),
            r.num_countries
        );
    }
}

fn print_pairing_table(rows: &[stats::ElderlyPairing]) {
    println!(
        "{:<15} {:>24} {:>18}",
        "continent", "avg_deaths_per_million", "avg_aged_65_pct"
    );
    for r in rows {
        println!(
            "{:<15} {:>24} {:>18}",
            r.continent,
            fmt_mean(r.avg_deaths_per_million),
            fmt_mean(r.avg_aged_65_pct)
        );
    }
}
