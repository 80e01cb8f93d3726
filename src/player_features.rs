use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PrepError, Result};
use crate::records::{FeatureRow, ratio_or_zero, zero_if_not_finite};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Defender,
    Midfielder,
    Forward,
    Goalkeeper,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
        Position::Goalkeeper,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
            Position::Goalkeeper => "Goalkeeper",
        }
    }

    /// Exact canonical name only; free text goes through `validation::validate_position`.
    pub fn from_canonical(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == raw)
    }

    pub fn feature_names(self) -> &'static [&'static str] {
        match self {
            Position::Defender => &DEFENDER_FEATURES,
            Position::Midfielder => &MIDFIELDER_FEATURES,
            Position::Forward => &FORWARD_FEATURES,
            Position::Goalkeeper => &GOALKEEPER_FEATURES,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const DEFENDER_FEATURES: [&str; 11] = [
    "Age",
    "Min",
    "90s",
    "Tackles_per_90",
    "Interceptions_per_90",
    "Tkl",
    "Int",
    "Clr",
    "Pass_Completion_pct",
    "Goals_per_90",
    "Assists_per_90",
];

pub const MIDFIELDER_FEATURES: [&str; 11] = [
    "Age",
    "Min",
    "90s",
    "Goals_per_90",
    "Assists_per_90",
    "Productivity_Score",
    "Pass_Completion_pct",
    "KP",
    "PrgP",
    "Tackles_per_90",
    "Interceptions_per_90",
];

pub const FORWARD_FEATURES: [&str; 11] = [
    "Age",
    "Min",
    "90s",
    "Goals_per_90",
    "Assists_per_90",
    "Productivity_Score",
    "Sh",
    "SoT",
    "Shots_on_Target_pct",
    "G/Sh",
    "PrgC",
];

pub const GOALKEEPER_FEATURES: [&str; 8] =
    ["Age", "Min", "90s", "GA90", "Save%", "Saves", "CS%", "PSxG"];

/// FBref-style season line for one player. The columns feeding derived metrics are
/// required; the rest are only needed when a position subset selects them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(rename = "90s")]
    pub nineties: f64,
    #[serde(rename = "Gls")]
    pub goals: f64,
    #[serde(rename = "Ast")]
    pub assists: f64,
    #[serde(rename = "Tkl")]
    pub tackles: f64,
    #[serde(rename = "Int")]
    pub interceptions: f64,
    #[serde(rename = "Cmp")]
    pub passes_completed: f64,
    #[serde(rename = "Att")]
    pub passes_attempted: f64,
    #[serde(rename = "Sh")]
    pub shots: f64,
    #[serde(rename = "SoT")]
    pub shots_on_target: f64,

    #[serde(rename = "Age", default)]
    pub age: Option<f64>,
    #[serde(rename = "Min", default)]
    pub minutes: Option<f64>,
    #[serde(rename = "Clr", default)]
    pub clearances: Option<f64>,
    #[serde(rename = "KP", default)]
    pub key_passes: Option<f64>,
    #[serde(rename = "PrgP", default)]
    pub progressive_passes: Option<f64>,
    #[serde(rename = "PrgC", default)]
    pub progressive_carries: Option<f64>,
    #[serde(rename = "G/Sh", default)]
    pub goals_per_shot: Option<f64>,
    #[serde(rename = "GA90", default)]
    pub goals_against_per_90: Option<f64>,
    #[serde(rename = "Save%", default)]
    pub save_pct: Option<f64>,
    #[serde(rename = "Saves", default)]
    pub saves: Option<f64>,
    #[serde(rename = "CS%", default)]
    pub clean_sheet_pct: Option<f64>,
    #[serde(rename = "PSxG", default)]
    pub post_shot_xg: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerMetrics {
    pub goals_per_90: f64,
    pub assists_per_90: f64,
    pub tackles_per_90: f64,
    pub interceptions_per_90: f64,
    pub pass_completion_pct: f64,
    pub shots_on_target_pct: f64,
    pub productivity_score: f64,
}

/// Per-90 and percentage metrics. Anything that is not finite becomes 0, which is
/// how the recommendation models saw missing values during training.
pub fn derive_player_metrics(stats: &PlayerStats) -> PlayerMetrics {
    PlayerMetrics {
        goals_per_90: ratio_or_zero(stats.goals, stats.nineties),
        assists_per_90: ratio_or_zero(stats.assists, stats.nineties),
        tackles_per_90: ratio_or_zero(stats.tackles, stats.nineties),
        interceptions_per_90: ratio_or_zero(stats.interceptions, stats.nineties),
        pass_completion_pct: zero_if_not_finite(
            stats.passes_completed / stats.passes_attempted * 100.0,
        ),
        shots_on_target_pct: zero_if_not_finite(stats.shots_on_target / stats.shots * 100.0),
        productivity_score: ratio_or_zero(stats.goals + stats.assists, stats.nineties),
    }
}

fn column(stats: &PlayerStats, metrics: &PlayerMetrics, name: &str) -> Option<f64> {
    match name {
        "90s" => Some(stats.nineties),
        "Gls" => Some(stats.goals),
        "Ast" => Some(stats.assists),
        "Tkl" => Some(stats.tackles),
        "Int" => Some(stats.interceptions),
        "Cmp" => Some(stats.passes_completed),
        "Att" => Some(stats.passes_attempted),
        "Sh" => Some(stats.shots),
        "SoT" => Some(stats.shots_on_target),
        "Age" => stats.age,
        "Min" => stats.minutes,
        "Clr" => stats.clearances,
        "KP" => stats.key_passes,
        "PrgP" => stats.progressive_passes,
        "PrgC" => stats.progressive_carries,
        "G/Sh" => stats.goals_per_shot,
        "GA90" => stats.goals_against_per_90,
        "Save%" => stats.save_pct,
        "Saves" => stats.saves,
        "CS%" => stats.clean_sheet_pct,
        "PSxG" => stats.post_shot_xg,
        "Goals_per_90" => Some(metrics.goals_per_90),
        "Assists_per_90" => Some(metrics.assists_per_90),
        "Tackles_per_90" => Some(metrics.tackles_per_90),
        "Interceptions_per_90" => Some(metrics.interceptions_per_90),
        "Pass_Completion_pct" => Some(metrics.pass_completion_pct),
        "Shots_on_Target_pct" => Some(metrics.shots_on_target_pct),
        "Productivity_Score" => Some(metrics.productivity_score),
        _ => None,
    }
}

pub fn position_features(stats: &PlayerStats, position: Position) -> Result<FeatureRow> {
    let metrics = derive_player_metrics(stats);
    let names = position.feature_names();
    let mut row = FeatureRow::with_capacity(names.len());
    for name in names {
        let value = column(stats, &metrics, name)
            .ok_or_else(|| PrepError::MissingColumn((*name).to_string()))?;
        row.push(*name, value);
    }
    Ok(row)
}

/// Position-specific recommendation features. An unrecognized position yields an
/// empty row rather than an error.
pub fn preprocess_player_data(stats: &PlayerStats, position: &str) -> Result<FeatureRow> {
    match Position::from_canonical(position) {
        Some(position) => position_features(stats, position),
        None => Ok(FeatureRow::new()),
    }
}
