use serde::{Deserialize, Serialize};

use crate::records::{FeatureRow, ratio_or_nan};

/// Column order of the style vector expected by the clustering models.
pub const STYLE_FEATURE_NAMES: [&str; 17] = [
    "Avg_Goals_Scored",
    "Avg_Shots",
    "Avg_Shots_On_Target",
    "Shot_Accuracy",
    "Goals_per_Shot",
    "Avg_Goals_Conceded",
    "Clean_Sheet_Rate",
    "Avg_Corners",
    "Corners_per_Shot",
    "Fouls_per_Match",
    "Yellow_per_Match",
    "Red_per_Match",
    "Cards_per_Foul",
    "Win_Rate",
    "Home_Win_Rate",
    "Away_Win_Rate",
    "Points_Per_Game",
];

/// Season aggregates for one team. Unknown columns in the source record are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStyleStats {
    #[serde(rename = "Matches_Played")]
    pub matches_played: f64,
    #[serde(rename = "Fouls")]
    pub fouls: f64,
    #[serde(rename = "Yellow_Cards")]
    pub yellow_cards: f64,
    #[serde(rename = "Red_Cards")]
    pub red_cards: f64,
    #[serde(rename = "Avg_Goals_Scored")]
    pub avg_goals_scored: f64,
    #[serde(rename = "Avg_Shots")]
    pub avg_shots: f64,
    #[serde(rename = "Avg_Shots_On_Target")]
    pub avg_shots_on_target: f64,
    #[serde(rename = "Shot_Accuracy")]
    pub shot_accuracy: f64,
    #[serde(rename = "Avg_Goals_Conceded")]
    pub avg_goals_conceded: f64,
    #[serde(rename = "Clean_Sheet_Rate")]
    pub clean_sheet_rate: f64,
    #[serde(rename = "Avg_Corners")]
    pub avg_corners: f64,
    #[serde(rename = "Win_Rate")]
    pub win_rate: f64,
    #[serde(rename = "Home_Win_Rate")]
    pub home_win_rate: f64,
    #[serde(rename = "Away_Win_Rate")]
    pub away_win_rate: f64,
    #[serde(rename = "Points_Per_Game")]
    pub points_per_game: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleVector {
    pub values: [f64; 17],
}

impl StyleVector {
    pub fn get(&self, name: &str) -> Option<f64> {
        STYLE_FEATURE_NAMES
            .iter()
            .position(|col| *col == name)
            .map(|idx| self.values[idx])
    }

    pub fn to_row(&self) -> FeatureRow {
        STYLE_FEATURE_NAMES.into_iter().zip(self.values).collect()
    }
}

/// Builds the 17-column style vector. A zero denominator gives NaN for that ratio,
/// matching the missing-value convention the clustering models were fitted with.
pub fn preprocess_team_style_data(stats: &TeamStyleStats) -> StyleVector {
    let fouls_per_match = ratio_or_nan(stats.fouls, stats.matches_played);
    let yellow_per_match = ratio_or_nan(stats.yellow_cards, stats.matches_played);
    let red_per_match = ratio_or_nan(stats.red_cards, stats.matches_played);
    let cards_per_foul = ratio_or_nan(stats.yellow_cards + stats.red_cards, stats.fouls);
    let goals_per_shot = ratio_or_nan(stats.avg_goals_scored, stats.avg_shots);
    let corners_per_shot = ratio_or_nan(stats.avg_corners, stats.avg_shots);

    StyleVector {
        values: [
            stats.avg_goals_scored,
            stats.avg_shots,
            stats.avg_shots_on_target,
            stats.shot_accuracy,
            goals_per_shot,
            stats.avg_goals_conceded,
            stats.clean_sheet_rate,
            stats.avg_corners,
            corners_per_shot,
            fouls_per_match,
            yellow_per_match,
            red_per_match,
            cards_per_foul,
            stats.win_rate,
            stats.home_win_rate,
            stats.away_win_rate,
            stats.points_per_game,
        ],
    }
}
