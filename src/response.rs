use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{PrepError, Result};

pub const DEFAULT_CLASSES: [&str; 3] = ["Away Win", "Draw", "Home Win"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLevel::High => write!(f, "High"),
            ConfidenceLevel::Medium => write!(f, "Medium"),
            ConfidenceLevel::Low => write!(f, "Low"),
        }
    }
}

/// Lower bounds of the High and Medium tiers; each bound belongs to its tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            high: 0.7,
            medium: 0.5,
        }
    }
}

impl ConfidenceThresholds {
    pub fn level(&self, max_probability: f64) -> ConfidenceLevel {
        if max_probability >= self.high {
            ConfidenceLevel::High
        } else if max_probability >= self.medium {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

pub fn get_confidence_level(max_probability: f64) -> ConfidenceLevel {
    ConfidenceThresholds::default().level(max_probability)
}

/// Class key used in API responses: "Home Win" -> "home_win".
pub fn class_key(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}

/// Probabilities keyed by class, in the model's class order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabeledProbabilities {
    entries: Vec<(String, f64)>,
}

impl LabeledProbabilities {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, p)| *p)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), *p))
    }

    /// Highest probability; the first class wins ties. NaN entries are skipped.
    pub fn top(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (key, p) in self.iter() {
            if p.is_nan() {
                continue;
            }
            if best.is_none_or(|(_, bp)| p > bp) {
                best = Some((key, p));
            }
        }
        best
    }
}

impl Serialize for LabeledProbabilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, p) in &self.entries {
            map.serialize_entry(key, p)?;
        }
        map.end()
    }
}

/// Pairs each probability with the class label at the same position. The two
/// slices must be the same length; anything else is rejected rather than truncated.
pub fn format_probabilities<S: AsRef<str>>(
    probabilities: &[f64],
    classes: &[S],
) -> Result<LabeledProbabilities> {
    if probabilities.len() != classes.len() {
        return Err(PrepError::LengthMismatch {
            probabilities: probabilities.len(),
            classes: classes.len(),
        });
    }
    let entries = classes
        .iter()
        .zip(probabilities)
        .map(|(cls, p)| (class_key(cls.as_ref()), *p))
        .collect();
    Ok(LabeledProbabilities { entries })
}

pub fn format_default_probabilities(probabilities: &[f64]) -> Result<LabeledProbabilities> {
    format_probabilities(probabilities, &DEFAULT_CLASSES)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionSummary {
    pub probabilities: LabeledProbabilities,
    pub predicted: Option<String>,
    pub max_probability: f64,
    pub confidence: ConfidenceLevel,
}

/// Ready-to-serve view of one prediction: labeled probabilities, the arg-max class
/// and its confidence tier.
pub fn summarize<S: AsRef<str>>(
    probabilities: &[f64],
    classes: &[S],
) -> Result<PredictionSummary> {
    let probabilities = format_probabilities(probabilities, classes)?;
    let (predicted, max_probability) = match probabilities.top() {
        Some((key, p)) => (Some(key.to_string()), p),
        None => (None, f64::NAN),
    };
    Ok(PredictionSummary {
        predicted,
        max_probability,
        confidence: get_confidence_level(max_probability),
        probabilities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_classes_become_snake_case_keys() {
        let out = format_default_probabilities(&[0.2, 0.3, 0.5]).unwrap();
        assert_eq!(
            out.iter().collect::<Vec<_>>(),
            vec![("away_win", 0.2), ("draw", 0.3), ("home_win", 0.5)]
        );
        assert_eq!(out.get("home_win"), Some(0.5));
    }

    #[test]
    fn serializes_as_ordered_object() {
        let out = format_default_probabilities(&[0.2, 0.3, 0.5]).unwrap();
        assert_eq!(
            serde_json::to_string(&out).unwrap(),
            r#"{"away_win":0.2,"draw":0.3,"home_win":0.5}"#
        );
    }

    #[test]
    fn custom_classes() {
        let out = format_probabilities(&[0.9, 0.1], &["Top Four", "Rest Of League"]).unwrap();
        assert_eq!(out.get("top_four"), Some(0.9));
        assert_eq!(out.get("rest_of_league"), Some(0.1));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let err = format_default_probabilities(&[0.5, 0.5]).unwrap_err();
        assert!(matches!(
            err,
            PrepError::LengthMismatch {
                probabilities: 2,
                classes: 3
            }
        ));
    }

    #[test]
    fn tier_boundaries_belong_to_upper_tier() {
        assert_eq!(get_confidence_level(0.7), ConfidenceLevel::High);
        assert_eq!(get_confidence_level(0.95), ConfidenceLevel::High);
        assert_eq!(get_confidence_level(0.5), ConfidenceLevel::Medium);
        assert_eq!(get_confidence_level(0.69999), ConfidenceLevel::Medium);
        assert_eq!(get_confidence_level(0.49999), ConfidenceLevel::Low);
        assert_eq!(get_confidence_level(f64::NAN), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::Medium.to_string(), "Medium");
    }

    #[test]
    fn summary_picks_first_max() {
        let s = summarize(&[0.4, 0.2, 0.4], &DEFAULT_CLASSES).unwrap();
        assert_eq!(s.predicted.as_deref(), Some("away_win"));
        assert_eq!(s.max_probability, 0.4);
        assert_eq!(s.confidence, ConfidenceLevel::Low);

        let s = summarize(&[0.1, 0.15, 0.75], &DEFAULT_CLASSES).unwrap();
        assert_eq!(s.predicted.as_deref(), Some("home_win"));
        assert_eq!(s.confidence, ConfidenceLevel::High);
    }
}
