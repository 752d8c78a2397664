use serde::{Deserialize, Serialize};

/// Weights of the three cohesion signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CohesionWeights {
    /// Weight of the fraction of features that mention the domain tag.
    #[serde(default = "default_domain_overlap_weight")]
    pub domain_overlap: f64,

    /// Weight of the responsibility-count step function.
    #[serde(default = "default_responsibility_weight")]
    pub responsibility_focus: f64,

    /// Flat bonus for owning any data.
    #[serde(default = "default_data_ownership_weight")]
    pub data_ownership: f64,
}

impl Default for CohesionWeights {
    fn default() -> Self {
        Self {
            domain_overlap: default_domain_overlap_weight(),
            responsibility_focus: default_responsibility_weight(),
            data_ownership: default_data_ownership_weight(),
        }
    }
}

/// Weights of the pairwise coupling signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CouplingWeights {
    /// Per direct dependency between the pair, either direction.
    #[serde(default = "default_direct_dependency_weight")]
    pub direct_dependency: f64,

    /// Per data entity both services claim.
    #[serde(default = "default_shared_data_weight")]
    pub shared_data: f64,

    /// Per interface type both services expose.
    #[serde(default = "default_shared_interface_weight")]
    pub shared_interface_type: f64,

    /// Flat addition when both services carry the same domain tag.
    #[serde(default = "default_same_domain_weight")]
    pub same_domain: f64,
}

impl Default for CouplingWeights {
    fn default() -> Self {
        Self {
            direct_dependency: default_direct_dependency_weight(),
            shared_data: default_shared_data_weight(),
            shared_interface_type: default_shared_interface_weight(),
            same_domain: default_same_domain_weight(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringWeights {
    #[serde(default)]
    pub cohesion: CohesionWeights,
    #[serde(default)]
    pub coupling: CouplingWeights,
}

impl ScoringWeights {
    // Pure function: Check if weight is in valid range
    pub fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    // Pure function: Validate a single weight
    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{} weight must be between 0.0 and 1.0", name))
        }
    }

    // Pure function: Collect all weight validations
    pub fn collect_weight_validations(&self) -> Vec<Result<(), String>> {
        vec![
            Self::validate_weight(self.cohesion.domain_overlap, "Domain overlap"),
            Self::validate_weight(self.cohesion.responsibility_focus, "Responsibility focus"),
            Self::validate_weight(self.cohesion.data_ownership, "Data ownership"),
            Self::validate_weight(self.coupling.direct_dependency, "Direct dependency"),
            Self::validate_weight(self.coupling.shared_data, "Shared data"),
            Self::validate_weight(self.coupling.shared_interface_type, "Shared interface type"),
            Self::validate_weight(self.coupling.same_domain, "Same domain"),
        ]
    }

    pub fn validate(&self) -> Result<(), String> {
        for validation in self.collect_weight_validations() {
            validation?;
        }
        Ok(())
    }
}

pub fn default_domain_overlap_weight() -> f64 {
    0.4
}
pub fn default_responsibility_weight() -> f64 {
    0.3
}
pub fn default_data_ownership_weight() -> f64 {
    0.3
}
pub fn default_direct_dependency_weight() -> f64 {
    0.3
}
pub fn default_shared_data_weight() -> f64 {
    0.4
}
pub fn default_shared_interface_weight() -> f64 {
    0.2
}
pub fn default_same_domain_weight() -> f64 {
    0.3
}
