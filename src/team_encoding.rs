use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PrepError, Result};

/// On-disk shapes written by the training notebooks: either the encoder's class
/// list or an explicit name -> code table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VocabularyArtifact {
    Classes(Vec<String>),
    Mapping(BTreeMap<String, usize>),
}

/// Team name <-> dense integer code, fitted once at training time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamEncoder {
    classes: Vec<String>,
    by_name: HashMap<String, usize>,
}

impl TeamEncoder {
    /// Classes are sorted and de-duplicated, so codes follow lexical order.
    pub fn from_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classes = classes.into_iter().map(Into::into).collect::<Vec<String>>();
        classes.sort();
        classes.dedup();
        Self::from_ordered(classes)
    }

    fn from_ordered(classes: Vec<String>) -> Self {
        let by_name = classes
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), idx))
            .collect();
        Self { classes, by_name }
    }

    pub fn from_artifact(artifact: VocabularyArtifact) -> Result<Self> {
        match artifact {
            VocabularyArtifact::Classes(classes) => Ok(Self::from_classes(classes)),
            VocabularyArtifact::Mapping(mapping) => {
                let total = mapping.len();
                let mut classes = vec![None; total];
                for (name, code) in mapping {
                    let Some(slot) = classes.get_mut(code) else {
                        return Err(PrepError::InvalidVocabulary(format!(
                            "code {code} for {name} is outside 0..{total}"
                        )));
                    };
                    if let Some(existing) = slot.replace(name.clone()) {
                        return Err(PrepError::InvalidVocabulary(format!(
                            "code {code} is shared by {existing} and {name}"
                        )));
                    }
                }
                // Every slot is filled: codes are in range, unique, and as many as names.
                Ok(Self::from_ordered(classes.into_iter().flatten().collect()))
            }
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let artifact = serde_json::from_str::<VocabularyArtifact>(raw)?;
        Self::from_artifact(artifact)
    }

    pub fn load_json(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn contains(&self, team: &str) -> bool {
        self.by_name.contains_key(team)
    }

    pub fn encode(&self, team: &str) -> Result<usize> {
        self.by_name
            .get(team)
            .copied()
            .ok_or_else(|| PrepError::UnknownLabel(team.to_string()))
    }

    pub fn decode(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }

    pub fn to_artifact(&self) -> VocabularyArtifact {
        VocabularyArtifact::Classes(self.classes.clone())
    }
}

/// Encodes a fixture's two team names; fails on the first name the encoder never saw.
pub fn encode_teams(
    home_team: &str,
    away_team: &str,
    encoder: &TeamEncoder,
) -> Result<(usize, usize)> {
    let home = encoder.encode(home_team)?;
    let away = encoder.encode(away_team)?;
    Ok((home, away))
}
