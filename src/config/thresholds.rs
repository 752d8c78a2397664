use serde::{Deserialize, Serialize};

/// Policy knobs that decide when the transformer restructures services.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    /// Pairs coupled strictly above this value are merged.
    #[serde(default = "default_merge_coupling")]
    pub merge_coupling: f64,

    /// Services with cohesion strictly below this value are split candidates.
    #[serde(default = "default_split_cohesion")]
    pub split_cohesion: f64,

    /// Split candidates also need at least this many features.
    #[serde(default = "default_min_split_features")]
    pub min_split_features: usize,

    /// Same-domain services whose feature Jaccard similarity exceeds this are merged.
    #[serde(default = "default_domain_similarity")]
    pub domain_similarity: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            merge_coupling: default_merge_coupling(),
            split_cohesion: default_split_cohesion(),
            min_split_features: default_min_split_features(),
            domain_similarity: default_domain_similarity(),
        }
    }
}

impl ThresholdsConfig {
    pub fn validate(&self) -> Result<(), (&'static str, String)> {
        let unit_checks = [
            ("merge_coupling", self.merge_coupling),
            ("split_cohesion", self.split_cohesion),
            ("domain_similarity", self.domain_similarity),
        ];
        for (field, value) in unit_checks {
            if !(0.0..=1.0).contains(&value) {
                return Err((field, format!("must be within [0, 1], got {}", value)));
            }
        }
        if self.min_split_features < 2 {
            return Err((
                "min_split_features",
                "a service needs at least 2 features to be split".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn default_merge_coupling() -> f64 {
    0.7
}
pub fn default_split_cohesion() -> f64 {
    0.6
}
pub fn default_min_split_features() -> usize {
    4
}
pub fn default_domain_similarity() -> f64 {
    0.6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ThresholdsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let thresholds = ThresholdsConfig {
            merge_coupling: 1.5,
            ..Default::default()
        };
        let (field, _) = thresholds.validate().unwrap_err();
        assert_eq!(field, "merge_coupling");
    }

    #[test]
    fn test_min_split_features_floor() {
        let thresholds = ThresholdsConfig {
            min_split_features: 1,
            ..Default::default()
        };
        assert_eq!(thresholds.validate().unwrap_err().0, "min_split_features");
    }
}
