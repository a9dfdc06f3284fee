use std::io::Write;

use assert_approx_eq::assert_approx_eq;
use countcorr::io::read_count_table;
use countcorr::{report, CorrelationError, CorrelationReport, CountTable};
use rand::prelude::*;
use rand_distr::Poisson;
use rstest::{fixture, rstest};
use tempfile::NamedTempFile;

#[fixture]
fn counts() -> CountTable {
    CountTable::from_columns(vec![
        ("A", vec![0.0, 1.0, 3.0]),
        ("B", vec![1.0, 1.0, 7.0]),
    ])
    .unwrap()
}

#[rstest]
fn adjusted_r_squared_is_bounded(counts: CountTable) {
    let stats = report(&counts, "A", "B").unwrap();
    assert!(stats.adj_r_squared() >= 0.0);
    assert!(stats.adj_r_squared() <= 1.0);
    assert_approx_eq!(stats.adj_r_squared(), 0.5);
    assert_approx_eq!(stats.slope(), 0.75);
}

#[rstest]
fn missing_column_produces_no_report(counts: CountTable) {
    let result = CorrelationReport::build(&counts, "A", "C");
    assert_eq!(
        result.unwrap_err(),
        CorrelationError::MissingColumn("C".to_string())
    );
}

#[rstest]
#[case(-1.0)]
#[case(-1.5)]
#[case(-100.0)]
fn log_domain_is_enforced(#[case] bad_value: f64) {
    let table = CountTable::from_columns(vec![
        ("A", vec![0.0, 1.0, 3.0]),
        ("B", vec![1.0, bad_value, 7.0]),
    ])
    .unwrap();
    assert!(matches!(
        report(&table, "A", "B"),
        Err(CorrelationError::InvalidDomain { ref column, value })
            if column == "B" && value == bad_value
    ));
}

#[rstest]
fn identical_calls_yield_identical_summaries(counts: CountTable) {
    let first = report(&counts, "A", "B").unwrap();
    let second = report(&counts, "A", "B").unwrap();
    assert_eq!(first, second);
}

#[rstest]
fn swapping_columns_preserves_adjusted_r_squared(counts: CountTable) {
    let forward = report(&counts, "A", "B").unwrap();
    let swapped = report(&counts, "B", "A").unwrap();

    assert_approx_eq!(forward.adj_r_squared(), swapped.adj_r_squared());
    assert!((forward.slope() - swapped.slope()).abs() > 1e-6);
}

#[test]
fn simulated_counts_round_trip_through_csv() {
    let _ = pretty_env_logger::try_init();

    let mut rng = StdRng::seed_from_u64(42);
    let poisson = Poisson::new(5.0).unwrap();
    let control: Vec<f64> = (0..100).map(|_| poisson.sample(&mut rng)).collect();
    let treated: Vec<f64> = control
        .iter()
        .map(|&c| (c * 1.5).round() + rng.gen_range(0..3) as f64)
        .collect();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "treated,control").unwrap();
    for (t, c) in treated.iter().zip(control.iter()) {
        writeln!(file, "{},{}", t, c).unwrap();
    }
    file.flush().unwrap();

    let table = read_count_table(file.path()).unwrap();
    assert_eq!(table.height(), 100);

    let stats = report(&table, "treated", "control").unwrap();
    assert_eq!(stats.n_obs(), 100);
    assert!(stats.slope() > 0.0);
    assert!(stats.r_squared() > 0.5);
    assert!(stats.adj_r_squared() <= 1.0);
    assert!(stats.slope_p_value() < 0.05);

    // The in-memory fit matches the CSV round-trip exactly.
    let direct = CountTable::from_columns(vec![
        ("treated", treated),
        ("control", control),
    ])
    .unwrap();
    assert_eq!(report(&direct, "treated", "control").unwrap(), stats);
}

#[cfg(feature = "plots")]
#[rstest]
fn plot_annotation_matches_summary(counts: CountTable) {
    let built = CorrelationReport::build(&counts, "A", "B").unwrap();
    // Adjusted R^2 is exactly 1/2 for this table; the annotation reports the
    // same value to 4 significant digits.
    assert_eq!(built.annotation(), "adj. R^2 = 0.5000");
    assert!(built
        .render()
        .to_json()
        .contains("adj. R^2 = 0.5000"));
}
