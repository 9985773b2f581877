use std::io::Write;

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use covid_mortality::{data, stats};

const CSV: &str = "\
date,continent,location,total_deaths_per_million,aged_65_older
2020-02-15,Asia,Japan,1.0,28.0
2020-03-01,Asia,Japan,100.0,28.0
2020-04-01,Asia,South Korea,200.0,15.0
2020-04-01,Europe,France,300.0,20.0
2020-05-01,Europe,Germany,500.0,21.0
2020-05-01,,World,999.0,9.0
garbage,Europe,France,888.0,20.0
2020-06-01,Oceania,Fiji,,6.0
";

fn write_fixture() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CSV.as_bytes()).unwrap();
    file
}

#[test]
fn end_to_end_aggregation_and_correlation() {
    let file = write_fixture();

    let df = data::load_csv(file.path().to_str().unwrap()).unwrap();
    assert_eq!(df.shape(), (8, 5));

    let cutoff = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
    let cleaned = data::clean(&df, cutoff).unwrap();
    // pre-cutoff, missing-continent, and unparsable-date rows are gone
    assert_eq!(cleaned.height(), 5);

    let mortality = stats::deaths_by_continent(&cleaned).unwrap();
    assert_eq!(mortality.len(), 3);

    assert_eq!(mortality[0].continent, "Europe");
    assert_eq!(mortality[0].avg_deaths_per_million, Some(400.0));
    assert_eq!(mortality[0].num_countries, 2);

    assert_eq!(mortality[1].continent, "Asia");
    assert_eq!(mortality[1].avg_deaths_per_million, Some(150.0));
    assert_eq!(mortality[1].num_countries, 2);

    // Oceania has no death figures at all and sinks to the end
    assert_eq!(mortality[2].continent, "Oceania");
    assert_eq!(mortality[2].avg_deaths_per_million, None);
    assert_eq!(mortality[2].num_countries, 1);

    let pairings = stats::deaths_vs_elderly(&cleaned).unwrap();
    let names: Vec<&str> = pairings.iter().map(|p| p.continent.as_str()).collect();
    assert_eq!(names, vec!["Asia", "Europe", "Oceania"]);
    assert_eq!(pairings[0].avg_aged_65_pct, Some(21.5));

    let deaths: Vec<Option<f64>> = pairings.iter().map(|p| p.avg_deaths_per_million).collect();
    let elderly: Vec<Option<f64>> = pairings.iter().map(|p| p.avg_aged_65_pct).collect();

    // Oceania's pair is dropped pairwise, leaving Asia and Europe; deaths rise
    // as elderly share falls in this fixture, so the correlation is exactly -1
    let corr = stats::pearson(&deaths, &elderly).unwrap();
    assert_eq!(corr.n, 2);
    assert!((corr.r + 1.0).abs() < 1e-9);
}

#[test]
fn cleaned_table_is_a_subset_satisfying_the_filter() {
    let file = write_fixture();
    let df = data::load_csv(file.path().to_str().unwrap()).unwrap();

    let cutoff = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
    let cleaned = data::clean(&df, cutoff).unwrap();

    assert!(cleaned.height() <= df.height());
    assert_eq!(cleaned.column("continent").unwrap().null_count(), 0);
    assert_eq!(cleaned.column("date").unwrap().null_count(), 0);

    // repeated aggregation over the same cleaned table is identical
    let mortality_a = stats::deaths_by_continent(&cleaned).unwrap();
    let mortality_b = stats::deaths_by_continent(&cleaned).unwrap();
    assert_eq!(mortality_a, mortality_b);
}
