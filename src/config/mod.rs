// Sub-modules
mod core;
mod loader;
pub mod presets;
mod scoring;
mod thresholds;

pub use self::core::{BoundmapConfig, PlanConfig, PlanMode, ServerConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, ConfigLoadError, CONFIG_FILE_NAME,
};
pub use scoring::{
    default_data_ownership_weight, default_direct_dependency_weight,
    default_domain_overlap_weight, default_responsibility_weight, default_same_domain_weight,
    default_shared_data_weight, default_shared_interface_weight, CohesionWeights,
    CouplingWeights, ScoringWeights,
};
pub use thresholds::{
    default_domain_similarity, default_merge_coupling, default_min_split_features,
    default_split_cohesion, ThresholdsConfig,
};
