use std::path::PathBuf;

use anyhow::{Context, Result};

use pl_prep::config::{PrepConfig, arg_value};
use pl_prep::season_combiner;

fn main() -> Result<()> {
    let cfg = PrepConfig::load();
    pl_prep::logging::init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let input_dir = arg_value(&args, "input")
        .map(PathBuf::from)
        .unwrap_or_else(|| cfg.uncombined_dir.clone());
    let output = arg_value(&args, "output")
        .map(PathBuf::from)
        .unwrap_or_else(|| cfg.combined_output());

    let report = season_combiner::combine_seasons(&input_dir)?;
    report
        .dataset
        .write_csv(&output)
        .with_context(|| format!("write combined dataset {}", output.display()))?;

    let summary = report.dataset.summary();
    println!("Season combine complete");
    println!("Output: {}", output.display());
    println!("Files: {}/{}", report.files_combined, report.files_found);
    println!("Seasons covered: {}", summary.seasons);
    match (summary.first_date, summary.last_date) {
        (Some(first), Some(last)) => println!("Date range: {first} to {last}"),
        _ => println!("Date range: n/a"),
    }
    println!("Total matches: {}", summary.total_matches);
    println!("Unique teams: {}", summary.unique_teams);
    if !report.errors.is_empty() {
        println!("Errors: {}", report.errors.len());
        for err in report.errors.iter().take(8) {
            println!(" - {err}");
        }
    }

    Ok(())
}
