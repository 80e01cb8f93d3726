use serde::{Deserialize, Serialize};

use crate::records::{FeatureRow, ratio_or_nan};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSeasonStats {
    pub team: String,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonFeatures {
    #[serde(flatten)]
    pub stats: TeamSeasonStats,
    pub matches_played: u64,
    pub points: u64,
    pub win_rate: f64,
    pub points_per_game: f64,
    pub goal_difference: i64,
    // Needs match-by-match data, which this layer never sees.
    pub clean_sheet_rate: f64,
}

impl SeasonFeatures {
    pub fn to_row(&self) -> FeatureRow {
        let mut row = FeatureRow::with_capacity(11);
        row.push("wins", f64::from(self.stats.wins));
        row.push("draws", f64::from(self.stats.draws));
        row.push("losses", f64::from(self.stats.losses));
        row.push("goals_scored", f64::from(self.stats.goals_scored));
        row.push("goals_conceded", f64::from(self.stats.goals_conceded));
        row.push("matches_played", self.matches_played as f64);
        row.push("points", self.points as f64);
        row.push("win_rate", self.win_rate);
        row.push("points_per_game", self.points_per_game);
        row.push("goal_difference", self.goal_difference as f64);
        row.push("clean_sheet_rate", self.clean_sheet_rate);
        row
    }
}

/// Season-ranking features. A team with no matches gets NaN rates; callers guard.
pub fn preprocess_season_data(stats: &TeamSeasonStats) -> SeasonFeatures {
    let (wins, draws, losses) = (
        u64::from(stats.wins),
        u64::from(stats.draws),
        u64::from(stats.losses),
    );
    // Summed in u64 so no u32 record can overflow.
    let matches_played = wins + draws + losses;
    let points = wins * 3 + draws;
    let win_rate = ratio_or_nan(wins as f64, matches_played as f64);
    let points_per_game = ratio_or_nan(points as f64, matches_played as f64);
    let goal_difference = i64::from(stats.goals_scored) - i64::from(stats.goals_conceded);

    SeasonFeatures {
        stats: stats.clone(),
        matches_played,
        points,
        win_rate,
        points_per_game,
        goal_difference,
        clean_sheet_rate: 0.0,
    }
}
