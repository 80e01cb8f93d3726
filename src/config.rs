use std::env;
use std::path::PathBuf;

use crate::validation::SuggestionConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct PrepConfig {
    pub data_dir: PathBuf,
    pub uncombined_dir: PathBuf,
    pub combined_dir: PathBuf,
    pub models_dir: PathBuf,
    pub suggestions: SuggestionConfig,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self::with_data_dir(PathBuf::from("data"))
    }
}

impl PrepConfig {
    fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            uncombined_dir: data_dir.join("raw").join("uncombined"),
            combined_dir: data_dir.join("raw").join("combined"),
            data_dir,
            models_dir: PathBuf::from("models"),
            suggestions: SuggestionConfig::default(),
        }
    }

    /// Loads `.env.local` then `.env` (first value wins), then reads `PL_PREP_*`.
    pub fn load() -> Self {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::from_filename(".env");
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path_var = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
                .map(PathBuf::from)
        };

        let mut cfg = Self::with_data_dir(
            path_var("PL_PREP_DATA_DIR").unwrap_or_else(|| PathBuf::from("data")),
        );
        if let Some(dir) = path_var("PL_PREP_UNCOMBINED_DIR") {
            cfg.uncombined_dir = dir;
        }
        if let Some(dir) = path_var("PL_PREP_COMBINED_DIR") {
            cfg.combined_dir = dir;
        }
        if let Some(dir) = path_var("PL_PREP_MODELS_DIR") {
            cfg.models_dir = dir;
        }
        if let Some(cutoff) = lookup("PL_PREP_SUGGESTION_CUTOFF")
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|c| (0.0..=1.0).contains(c))
        {
            cfg.suggestions.cutoff = cutoff;
        }
        if let Some(max) = lookup("PL_PREP_MAX_SUGGESTIONS")
            .and_then(|raw| raw.trim().parse::<usize>().ok())
        {
            cfg.suggestions.max_suggestions = max;
        }
        cfg
    }

    pub fn combined_output(&self) -> PathBuf {
        self.combined_dir.join(crate::season_combiner::DEFAULT_OUTPUT_NAME)
    }
}

/// Value of `--name=value` or `--name value` from the process arguments.
pub fn arg_value(args: &[String], name: &str) -> Option<String> {
    let prefix = format!("--{name}=");
    let flag = format!("--{name}");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(raw) = arg.strip_prefix(&prefix) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if *arg == flag {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            if !next.trim().is_empty() {
                return Some(next.trim().to_string());
            }
        }
    }
    None
}
