use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::records::FeatureRow;
use crate::season_combiner::CombinedDataset;

pub const MATCH_FEATURE_NAMES: [&str; 9] = [
    "home_wins_L5",
    "home_goals_L5",
    "home_form_L5",
    "away_wins_L5",
    "away_goals_L5",
    "away_form_L5",
    "h2h_home_wins",
    "h2h_draws",
    "h2h_away_wins",
];

/// One finished fixture from the combined season dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalMatch {
    pub season: String,
    pub date: Option<NaiveDate>,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: Option<u8>,
    pub away_goals: Option<u8>,
    pub result: Option<char>,
}

impl HistoricalMatch {
    /// 'H', 'D' or 'A'. Goals win over the recorded result when both are present.
    pub fn outcome(&self) -> Option<char> {
        match (self.home_goals, self.away_goals) {
            (Some(home), Some(away)) if home > away => Some('H'),
            (Some(home), Some(away)) if home < away => Some('A'),
            (Some(_), Some(_)) => Some('D'),
            _ => self.result,
        }
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }

    /// Rows without both team names are skipped.
    pub fn from_combined(dataset: &CombinedDataset) -> Vec<HistoricalMatch> {
        let mut out = Vec::with_capacity(dataset.len());
        for idx in 0..dataset.len() {
            let cell = |col: &str| {
                dataset
                    .value(idx, col)
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
            };
            let (Some(home_team), Some(away_team)) = (cell("HomeTeam"), cell("AwayTeam")) else {
                continue;
            };
            out.push(HistoricalMatch {
                season: cell("Season").unwrap_or("Unknown").to_string(),
                date: cell("Date").and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()),
                home_team: home_team.to_string(),
                away_team: away_team.to_string(),
                home_goals: cell("FTHG").and_then(|raw| raw.parse().ok()),
                away_goals: cell("FTAG").and_then(|raw| raw.parse().ok()),
                result: cell("FTR").and_then(|raw| raw.chars().next()),
            });
        }
        out
    }
}

/// Match-outcome features for one fixture.
///
/// The rolling-window and head-to-head slots are not derived yet: every slot is
/// zero whatever history is passed. `history_rows_seen` records how much history
/// the caller supplied so the gap stays visible downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchFeatures {
    pub home_team: String,
    pub away_team: String,
    pub home_wins_l5: f64,
    pub home_goals_l5: f64,
    pub home_form_l5: f64,
    pub away_wins_l5: f64,
    pub away_goals_l5: f64,
    pub away_form_l5: f64,
    pub h2h_home_wins: f64,
    pub h2h_draws: f64,
    pub h2h_away_wins: f64,
    pub history_rows_seen: usize,
}

impl MatchFeatures {
    pub fn to_row(&self) -> FeatureRow {
        let values = [
            self.home_wins_l5,
            self.home_goals_l5,
            self.home_form_l5,
            self.away_wins_l5,
            self.away_goals_l5,
            self.away_form_l5,
            self.h2h_home_wins,
            self.h2h_draws,
            self.h2h_away_wins,
        ];
        MATCH_FEATURE_NAMES.into_iter().zip(values).collect()
    }
}

pub fn preprocess_match_data(
    home_team: &str,
    away_team: &str,
    history: Option<&[HistoricalMatch]>,
) -> MatchFeatures {
    // TODO: derive the L5 and head-to-head slots once a reference dataset exists to
    // validate the notebook formulas against. They are built from
    // `HistoricalMatch::involves` (a team's last five) and `HistoricalMatch::outcome`
    // (wins, form points and head-to-head tallies).
    MatchFeatures {
        home_team: home_team.to_string(),
        away_team: away_team.to_string(),
        home_wins_l5: 0.0,
        home_goals_l5: 0.0,
        home_form_l5: 0.0,
        away_wins_l5: 0.0,
        away_goals_l5: 0.0,
        away_form_l5: 0.0,
        h2h_home_wins: 0.0,
        h2h_draws: 0.0,
        h2h_away_wins: 0.0,
        history_rows_seen: history.map_or(0, |rows| rows.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(home: &str, away: &str, hg: u8, ag: u8) -> HistoricalMatch {
        HistoricalMatch {
            season: "2023-24".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 8, 12),
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_goals: Some(hg),
            away_goals: Some(ag),
            result: None,
        }
    }

    #[test]
    fn slots_are_zero_without_history() {
        let out = preprocess_match_data("Arsenal", "Chelsea", None);
        assert_eq!(out.home_team, "Arsenal");
        assert_eq!(out.away_team, "Chelsea");
        assert_eq!(out.history_rows_seen, 0);
        assert!(out.to_row().values().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn slots_stay_zero_with_history() {
        let history = vec![
            fixture("Arsenal", "Chelsea", 3, 0),
            fixture("Chelsea", "Arsenal", 1, 1),
            fixture("Arsenal", "Fulham", 2, 1),
        ];
        let out = preprocess_match_data("Arsenal", "Chelsea", Some(&history));
        assert_eq!(out.history_rows_seen, 3);
        let row = out.to_row();
        assert_eq!(row.len(), MATCH_FEATURE_NAMES.len());
        assert!(row.values().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn outcome_prefers_goals_over_recorded_result() {
        let mut m = fixture("Arsenal", "Chelsea", 0, 2);
        m.result = Some('H');
        assert_eq!(m.outcome(), Some('A'));
        m.home_goals = None;
        assert_eq!(m.outcome(), Some('H'));
        assert!(m.involves("Chelsea"));
        assert!(!m.involves("Fulham"));
    }
}
