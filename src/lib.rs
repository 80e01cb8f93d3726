pub mod config;
pub mod error;
pub mod fuzzy;
pub mod logging;
pub mod match_features;
pub mod model_artifacts;
pub mod player_features;
pub mod records;
pub mod response;
pub mod season_combiner;
pub mod season_features;
pub mod style_features;
pub mod team_encoding;
pub mod validation;

pub use error::{PrepError, Result};
pub use records::FeatureRow;
