//! Threshold presets for common restructuring appetites.
//!
//! - **Strict**: restructure eagerly; merge looser pairs, split more services
//! - **Balanced**: the defaults
//! - **Lenient**: only act on clear-cut cases
//!
//! # Example
//!
//! ```rust
//! use boundmap::config::presets::PresetLevel;
//!
//! let thresholds = PresetLevel::Strict.thresholds();
//! assert!(thresholds.merge_coupling < 0.7);
//! ```

use serde::{Deserialize, Serialize};

use super::core::BoundmapConfig;
use super::thresholds::ThresholdsConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetLevel {
    Strict,
    Balanced,
    Lenient,
}

impl PresetLevel {
    pub fn thresholds(self) -> ThresholdsConfig {
        match self {
            PresetLevel::Strict => ThresholdsConfig {
                merge_coupling: 0.6,
                split_cohesion: 0.7,
                min_split_features: 3,
                domain_similarity: 0.5,
            },
            PresetLevel::Balanced => ThresholdsConfig::default(),
            PresetLevel::Lenient => ThresholdsConfig {
                merge_coupling: 0.85,
                split_cohesion: 0.45,
                min_split_features: 6,
                domain_similarity: 0.75,
            },
        }
    }

    /// Overlay this preset's thresholds onto an existing configuration.
    pub fn apply(self, config: BoundmapConfig) -> BoundmapConfig {
        BoundmapConfig {
            thresholds: self.thresholds(),
            ..config
        }
    }
}
