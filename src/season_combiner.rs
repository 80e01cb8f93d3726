use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::error::{PrepError, Result};

pub const SEASON_COLUMN: &str = "Season";
pub const SOURCE_FILE_COLUMN: &str = "SourceFile";
pub const DEFAULT_OUTPUT_NAME: &str = "premier_league_combined.csv";

const UNKNOWN_SEASON: &str = "Unknown";

/// `season-9394.csv` -> `1993-94`, `season-0001.csv` -> `2000-01`. Halves of 90 and
/// above are read as 19xx, the rest as 20xx; the second half keeps its two digits.
pub fn season_from_filename(name: &str) -> Option<String> {
    for (idx, _) in name.match_indices("season-") {
        let rest = &name[idx + "season-".len()..];
        let Some(code) = rest.get(..4) else {
            continue;
        };
        if !code.bytes().all(|b| b.is_ascii_digit()) || !rest[4..].starts_with(".csv") {
            continue;
        }
        let (first, second) = code.split_at(2);
        return Some(format!("{}-{second}", full_year(first)));
    }
    None
}

fn full_year(two_digits: &str) -> String {
    let century = match two_digits.parse::<u8>() {
        Ok(yy) if yy >= 90 => "19",
        _ => "20",
    };
    format!("{century}{two_digits}")
}

/// Match dates appear as `14/08/93` in early seasons and `13/08/2022` in later ones.
pub fn parse_match_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%d/%m/%y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .ok()
}

/// One season file as read from disk, before concatenation.
#[derive(Debug, Clone)]
pub struct SeasonTable {
    pub season: String,
    pub source_file: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn find_season_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("read season dir {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.context("read season dir entry")?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with("season-") && name.ends_with(".csv") && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn read_season_file(path: &Path) -> Result<SeasonTable> {
    let source_file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let season = season_from_filename(&source_file).unwrap_or_else(|| UNKNOWN_SEASON.to_string());

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;
    let raw_headers = reader.byte_headers()?.clone();
    if raw_headers.iter().all(|h| h.iter().all(u8::is_ascii_whitespace)) {
        return Err(PrepError::NoColumns(source_file));
    }

    // Season/SourceFile are re-derived from the file name, so source copies are dropped.
    let mut keep = Vec::new();
    let mut headers = Vec::new();
    for (idx, raw) in raw_headers.iter().enumerate() {
        let name = String::from_utf8_lossy(raw).trim().to_string();
        if name == SEASON_COLUMN || name == SOURCE_FILE_COLUMN {
            continue;
        }
        let name = if name.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            name
        };
        keep.push(idx);
        headers.push(dedup_header(&headers, name));
    }

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        if record.iter().all(|cell| cell.iter().all(u8::is_ascii_whitespace)) {
            continue;
        }
        let row = keep
            .iter()
            .map(|idx| {
                record
                    .get(*idx)
                    .map(|cell| String::from_utf8_lossy(cell).into_owned())
                    .unwrap_or_default()
            })
            .collect();
        rows.push(row);
    }

    Ok(SeasonTable {
        season,
        source_file,
        headers,
        rows,
    })
}

/// A repeated header gets the first free `.N` suffix: `Referee`, `Referee.1`, ...
fn dedup_header(seen: &[String], name: String) -> String {
    if !seen.contains(&name) {
        return name;
    }
    let mut n = 1;
    loop {
        let candidate = format!("{name}.{n}");
        if !seen.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedDataset {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub seasons: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub total_matches: usize,
    pub unique_teams: usize,
}

impl CombinedDataset {
    /// Concatenates season tables. Columns are the union in first-seen order behind
    /// `Season` and `SourceFile`; `Date` is rewritten as ISO and rows are stably sorted
    /// by season, then date, with unparseable dates last.
    pub fn from_tables(tables: Vec<SeasonTable>) -> Self {
        let mut columns = vec![SEASON_COLUMN.to_string(), SOURCE_FILE_COLUMN.to_string()];
        for table in &tables {
            for header in &table.headers {
                if !columns.contains(header) {
                    columns.push(header.clone());
                }
            }
        }
        let date_idx = columns.iter().position(|c| c == "Date");

        let mut keyed = Vec::new();
        for table in tables {
            let positions = table
                .headers
                .iter()
                .map(|h| columns.iter().position(|c| c == h))
                .collect::<Vec<_>>();
            for cells in table.rows {
                let mut row = vec![String::new(); columns.len()];
                row[0] = table.season.clone();
                row[1] = table.source_file.clone();
                for (cell, pos) in cells.into_iter().zip(&positions) {
                    if let Some(pos) = pos {
                        row[*pos] = cell;
                    }
                }
                let date = date_idx.and_then(|idx| parse_match_date(&row[idx]));
                if let Some(idx) = date_idx {
                    row[idx] = date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
                }
                keyed.push((table.season.clone(), date, row));
            }
        }

        keyed.sort_by(|(sa, da, _), (sb, db, _)| {
            sa.cmp(sb).then_with(|| match (da, db) {
                (Some(a), Some(b)) => a.cmp(b),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            })
        });

        Self {
            columns,
            rows: keyed.into_iter().map(|(_, _, row)| row).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }

    fn non_empty_values<'a>(&'a self, column: &str) -> impl Iterator<Item = &'a str> + 'a {
        let idx = self.column_index(column);
        self.rows
            .iter()
            .filter_map(move |row| idx.and_then(|i| row.get(i)))
            .map(|cell| cell.trim())
            .filter(|cell| !cell.is_empty())
    }

    pub fn summary(&self) -> DatasetSummary {
        let seasons = self.non_empty_values(SEASON_COLUMN).collect::<BTreeSet<_>>().len();
        let dates = self
            .non_empty_values("Date")
            .filter_map(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
            .collect::<Vec<_>>();
        let teams = self
            .non_empty_values("HomeTeam")
            .chain(self.non_empty_values("AwayTeam"))
            .collect::<BTreeSet<_>>();
        DatasetSummary {
            seasons,
            first_date: dates.iter().min().copied(),
            last_date: dates.iter().max().copied(),
            total_matches: self.rows.len(),
            unique_teams: teams.len(),
        }
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CombineReport {
    pub files_found: usize,
    pub files_combined: usize,
    pub dataset: CombinedDataset,
    pub errors: Vec<String>,
}

/// Reads every `season-*.csv` under `input_dir` and concatenates them. Files that
/// fail to read are logged and skipped; it is an error only if none could be read.
pub fn combine_seasons(input_dir: &Path) -> anyhow::Result<CombineReport> {
    let files = find_season_files(input_dir)?;
    info!(count = files.len(), dir = %input_dir.display(), "found season files");

    let results = files
        .par_iter()
        .map(|path| (path, read_season_file(path)))
        .collect::<Vec<_>>();

    let mut tables = Vec::new();
    let mut errors = Vec::new();
    for (path, result) in results {
        match result {
            Ok(table) => {
                info!(
                    file = %table.source_file,
                    season = %table.season,
                    matches = table.rows.len(),
                    "added season"
                );
                tables.push(table);
            }
            Err(err) => {
                warn!(file = %path.display(), error = %err, "skipping season file");
                errors.push(format!("{}: {err}", path.display()));
            }
        }
    }

    if tables.is_empty() {
        return Err(anyhow!(
            "no season files combined from {}",
            input_dir.display()
        ));
    }

    let files_combined = tables.len();
    let dataset = CombinedDataset::from_tables(tables);
    info!(
        files = files_combined,
        matches = dataset.len(),
        "combined season datasets"
    );

    Ok(CombineReport {
        files_found: files.len(),
        files_combined,
        dataset,
        errors,
    })
}
