use std::path::{Path, PathBuf};

use serde::Serialize;

pub const TEAM_ENCODING_FILE: &str = "team_encoding.json";

/// Files the training notebooks export into the models directory.
pub const EXPECTED_ARTIFACTS: [&str; 9] = [
    "bo2_match_prediction.pkl",
    "bo3_kmeans_clustering.pkl",
    "bo3_gmm_clustering.pkl",
    "bo4_defender_lgb.pkl",
    "bo4_midfielder_lgb.pkl",
    "bo4_forward_lgb.pkl",
    "bo4_goalkeeper_lgb.pkl",
    "teams.json",
    TEAM_ENCODING_FILE,
];

const EXPORT_NOTEBOOKS: [&str; 3] = [
    "BO2_match_winner_comparison.ipynb",
    "BO3_team_segmentation.ipynb",
    "BO4_players_reccomendation.ipynb",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactStatus {
    pub name: &'static str,
    pub path: PathBuf,
    pub present: bool,
}

pub fn check_artifacts(models_dir: &Path) -> Vec<ArtifactStatus> {
    EXPECTED_ARTIFACTS
        .into_iter()
        .map(|name| {
            let path = models_dir.join(name);
            let present = path.is_file();
            ArtifactStatus {
                name,
                path,
                present,
            }
        })
        .collect()
}

pub fn missing_artifacts(statuses: &[ArtifactStatus]) -> Vec<&'static str> {
    statuses
        .iter()
        .filter(|s| !s.present)
        .map(|s| s.name)
        .collect()
}

pub fn export_guide(models_dir: &Path) -> String {
    let mut out = String::new();
    out.push_str("MODEL EXPORT GUIDE\n\n");
    out.push_str(&format!("Models will be exported to: {}\n\n", models_dir.display()));
    out.push_str("The export happens inside the notebooks. For each notebook:\n");
    for (idx, notebook) in EXPORT_NOTEBOOKS.iter().enumerate() {
        out.push_str(&format!(
            "{}. Open {notebook} and run all cells, including the 'Model Export' cells\n",
            idx + 1
        ));
    }
    out.push_str("\nAfter all notebooks have run, the models directory should contain:\n");
    for name in EXPECTED_ARTIFACTS {
        out.push_str(&format!("  - {name}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_present_and_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("teams.json"), "[]").unwrap();
        std::fs::write(dir.path().join("bo2_match_prediction.pkl"), b"x").unwrap();

        let statuses = check_artifacts(dir.path());
        assert_eq!(statuses.len(), EXPECTED_ARTIFACTS.len());
        let missing = missing_artifacts(&statuses);
        assert_eq!(missing.len(), EXPECTED_ARTIFACTS.len() - 2);
        assert!(!missing.contains(&"teams.json"));
        assert!(missing.contains(&TEAM_ENCODING_FILE));
    }

    #[test]
    fn guide_lists_every_artifact() {
        let guide = export_guide(Path::new("models"));
        for name in EXPECTED_ARTIFACTS {
            assert!(guide.contains(name), "{name} missing from guide");
        }
        assert!(guide.contains("BO3_team_segmentation.ipynb"));
    }
}
