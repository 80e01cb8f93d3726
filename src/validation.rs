use serde::{Deserialize, Serialize};

use crate::fuzzy::close_matches;
use crate::player_features::Position;

const POSITION_SYNONYMS: [(&str, Position); 8] = [
    ("def", Position::Defender),
    ("defender", Position::Defender),
    ("mid", Position::Midfielder),
    ("midfielder", Position::Midfielder),
    ("fwd", Position::Forward),
    ("forward", Position::Forward),
    ("gk", Position::Goalkeeper),
    ("goalkeeper", Position::Goalkeeper),
];

/// Outcome of a free-text check. On success `message` carries the normalized value,
/// otherwise a message for the caller to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub is_valid: bool,
    pub message: String,
}

impl Validation {
    fn valid(value: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            message: value.into(),
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuggestionConfig {
    pub max_suggestions: usize,
    pub cutoff: f64,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 3,
            cutoff: 0.6,
        }
    }
}

pub fn validate_team_name(team: &str, valid_teams: &[String]) -> Validation {
    validate_team_name_with(team, valid_teams, SuggestionConfig::default())
}

pub fn validate_team_name_with(
    team: &str,
    valid_teams: &[String],
    cfg: SuggestionConfig,
) -> Validation {
    if valid_teams.iter().any(|t| t == team) {
        return Validation::valid(team);
    }
    let suggestions = close_matches(team, valid_teams, cfg.max_suggestions, cfg.cutoff);
    if suggestions.is_empty() {
        Validation::invalid(format!("Unknown team: {team}"))
    } else {
        Validation::invalid(format!("Did you mean: {}?", suggestions.join(", ")))
    }
}

impl Position {
    /// Case-insensitive lookup over the short and long position names.
    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim().to_lowercase();
        POSITION_SYNONYMS
            .iter()
            .find(|(synonym, _)| *synonym == key)
            .map(|(_, position)| *position)
    }
}

pub fn validate_position(position: &str) -> Validation {
    match Position::parse(position) {
        Some(position) => Validation::valid(position.name()),
        None => {
            let valid = Position::ALL.map(Position::name).join(", ");
            Validation::invalid(format!("Invalid position. Valid: {valid}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams() -> Vec<String> {
        ["Arsenal", "Chelsea", "Liverpool", "Man City", "Man United"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn exact_team_is_valid() {
        let out = validate_team_name("Chelsea", &teams());
        assert!(out.is_valid);
        assert_eq!(out.message, "Chelsea");
    }

    #[test]
    fn misspelled_team_gets_suggestion() {
        let out = validate_team_name("Arsnal", &teams());
        assert!(!out.is_valid);
        assert_eq!(out.message, "Did you mean: Arsenal?");
    }

    #[test]
    fn wrong_case_is_not_exact_but_suggested() {
        let out = validate_team_name("liverpool", &teams());
        assert!(!out.is_valid);
        assert!(out.message.contains("Liverpool"));
    }

    #[test]
    fn unrelated_team_is_unknown() {
        let out = validate_team_name("Wrexham", &teams());
        assert!(!out.is_valid);
        assert_eq!(out.message, "Unknown team: Wrexham");
    }

    #[test]
    fn suggestion_count_follows_config() {
        let cfg = SuggestionConfig {
            max_suggestions: 1,
            cutoff: 0.5,
        };
        let out = validate_team_name_with("Man Utd", &teams(), cfg);
        assert_eq!(out.message, "Did you mean: Man United?");
    }

    #[test]
    fn positions_are_case_insensitive() {
        assert_eq!(validate_position("GK"), Validation::valid("Goalkeeper"));
        assert_eq!(validate_position("Mid"), Validation::valid("Midfielder"));
        assert_eq!(validate_position(" defender "), Validation::valid("Defender"));
        assert_eq!(validate_position("FWD"), Validation::valid("Forward"));
    }

    #[test]
    fn unknown_position_lists_canonical_names() {
        let out = validate_position("xyz");
        assert!(!out.is_valid);
        assert_eq!(
            out.message,
            "Invalid position. Valid: Defender, Midfielder, Forward, Goalkeeper"
        );
    }
}
