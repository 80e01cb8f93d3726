use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;

use pl_prep::config::{PrepConfig, arg_value};
use pl_prep::model_artifacts::{self, TEAM_ENCODING_FILE};
use pl_prep::team_encoding::TeamEncoder;

fn main() -> Result<()> {
    let cfg = PrepConfig::load();
    pl_prep::logging::init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let models_dir = arg_value(&args, "models")
        .map(PathBuf::from)
        .unwrap_or_else(|| cfg.models_dir.clone());
    fs::create_dir_all(&models_dir)
        .with_context(|| format!("create models dir {}", models_dir.display()))?;

    print!("{}", model_artifacts::export_guide(&models_dir));

    let statuses = model_artifacts::check_artifacts(&models_dir);
    println!();
    println!("Current contents of {}:", models_dir.display());
    for status in &statuses {
        let mark = if status.present { "ok" } else { "missing" };
        println!("  [{mark}] {}", status.name);
    }

    let encoding_path = models_dir.join(TEAM_ENCODING_FILE);
    if encoding_path.is_file() {
        match TeamEncoder::load_json(&encoding_path) {
            Ok(encoder) => println!("Team vocabulary: {} teams", encoder.len()),
            Err(err) => warn!(
                path = %encoding_path.display(),
                error = %err,
                "unreadable team vocabulary"
            ),
        }
    }

    let missing = model_artifacts::missing_artifacts(&statuses);
    if missing.is_empty() {
        println!("All {} artifacts present", statuses.len());
    } else {
        println!("Missing {} of {} artifacts", missing.len(), statuses.len());
    }

    Ok(())
}
