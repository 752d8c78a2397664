//! Boundary transformation pipeline.
//!
//! Five stages run in a fixed order, each on the complete output of the one
//! before it:
//!
//! 1. merge highly coupled pairs
//! 2. split low-cohesion services
//! 3. merge same-domain services with overlapping features
//! 4. consolidate contested data ownership
//! 5. apply preferred interface versioning
//!
//! New service records get their ids from an [`IdGenerator`]. After every
//! stage the pipeline checks that ids are still unique; a collision means
//! the generator is broken and fails the request.

pub mod ids;
pub mod stage;
pub mod stages;

use crate::boundmap_error::BoundmapError;
use crate::config::{ScoringWeights, ThresholdsConfig};
use crate::core::ServiceBoundary;
use crate::observability::{set_current_stage, OptimizationPhase};
use std::collections::HashSet;
use std::sync::Arc;

pub use ids::{HashIdGenerator, IdGenerator, IdOperation, SequentialIdGenerator};
pub use stage::{BoundaryStage, PureStage, Stage};
use stages::{optimize_interfaces, DataOwnershipStage, DomainAlignmentStage, MergeStage, SplitStage};

pub struct BoundaryTransformer {
    stages: Vec<Box<dyn BoundaryStage>>,
}

impl BoundaryTransformer {
    pub fn new(
        thresholds: &ThresholdsConfig,
        weights: &ScoringWeights,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let stages: Vec<Box<dyn BoundaryStage>> = vec![
            Box::new(MergeStage::new(
                thresholds.merge_coupling,
                weights.coupling,
                Arc::clone(&ids),
            )),
            Box::new(SplitStage::new(
                thresholds.split_cohesion,
                thresholds.min_split_features,
                weights.cohesion,
                Arc::clone(&ids),
            )),
            Box::new(DomainAlignmentStage::new(thresholds.domain_similarity, ids)),
            Box::new(DataOwnershipStage::new(weights.cohesion)),
            Box::new(PureStage::new("optimize-interfaces", optimize_interfaces)),
        ];
        Self { stages }
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.stage_name()).collect()
    }

    /// Run every stage over a copy of `boundaries`.
    pub fn transform(
        &self,
        boundaries: &[ServiceBoundary],
    ) -> Result<Vec<ServiceBoundary>, BoundmapError> {
        self.stages
            .iter()
            .try_fold(boundaries.to_vec(), |current, stage| {
                let _stage = set_current_stage(stage.stage_name());
                let before = current.len();
                let next = stage.apply(current)?;
                log::debug!(
                    "Stage {}: {} -> {} services",
                    stage.stage_name(),
                    before,
                    next.len()
                );
                ensure_unique_ids(&next, stage.stage_name())?;
                Ok(next)
            })
    }
}

fn ensure_unique_ids(boundaries: &[ServiceBoundary], stage: &str) -> Result<(), BoundmapError> {
    let mut seen = HashSet::new();
    match boundaries.iter().find(|b| !seen.insert(b.id.as_str())) {
        Some(duplicate) => Err(BoundmapError::analysis_with_phase(
            format!("stage {} produced duplicate service id {}", stage, duplicate.id),
            OptimizationPhase::Transformation,
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundmap_error::ErrorCode;
    use crate::core::VersioningStrategy;
    use crate::testkit::proptest_generators::catalog_strategy;
    use crate::testkit::{sample_catalog, BoundaryBuilder};
    use proptest::prelude::*;

    fn transformer() -> BoundaryTransformer {
        BoundaryTransformer::new(
            &ThresholdsConfig::default(),
            &ScoringWeights::default(),
            Arc::new(HashIdGenerator),
        )
    }

    /// Hands out the same id every time.
    struct ConstantIds;

    impl IdGenerator for ConstantIds {
        fn generate(&self, _operation: IdOperation, _constituents: &[&str]) -> String {
            "svc-same".to_string()
        }
    }

    #[test]
    fn test_stages_run_in_order() {
        assert_eq!(
            transformer().stage_names(),
            vec![
                "merge-coupled-services",
                "split-low-cohesion-services",
                "align-domains",
                "consolidate-data-ownership",
                "optimize-interfaces",
            ]
        );
    }

    #[test]
    fn test_sample_catalog_is_restructured() {
        let optimized = crate::assert_result_ok!(transformer().transform(&sample_catalog()));
        let names: Vec<_> = optimized.iter().map(|b| b.name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "brand-profile-brand-audit",
                "studio-core",
                "studio-extended",
                "search",
                "listings",
            ]
        );
        assert!(optimized
            .iter()
            .flat_map(|b| &b.interfaces)
            .all(|i| i.versioning == i.interface_type.preferred_versioning()));
    }

    #[test]
    fn test_empty_catalog_stays_empty() {
        let optimized = crate::assert_result_ok!(transformer().transform(&[]));
        assert!(optimized.is_empty());
    }

    #[test]
    fn test_colliding_ids_fail_the_transformation() {
        let transformer = BoundaryTransformer::new(
            &ThresholdsConfig::default(),
            &ScoringWeights::default(),
            Arc::new(ConstantIds),
        );
        let studio = sample_catalog().remove(2);
        let result = transformer.transform(&[studio]);
        crate::assert_error_code!(result, ErrorCode::ANALYSIS_TRANSFORM);
    }

    #[test]
    fn test_rest_interfaces_get_url_versioning() {
        let boundary = BoundaryBuilder::new("api", "d")
            .interface(crate::core::InterfaceType::Rest)
            .build();
        let optimized = crate::assert_result_ok!(transformer().transform(&[boundary]));
        assert_eq!(optimized[0].interfaces[0].versioning, VersioningStrategy::Url);
    }

    proptest! {
        /// Property: no data entity has more than one owner afterwards.
        #[test]
        fn data_ownership_is_exclusive(catalog in catalog_strategy(8)) {
            let optimized = transformer().transform(&catalog).unwrap();
            let mut owners = std::collections::HashMap::new();
            for boundary in &optimized {
                for entity in &boundary.data_ownership {
                    let previous = owners.insert(entity.clone(), boundary.id.clone());
                    prop_assert!(
                        previous.is_none() || previous.as_ref() == Some(&boundary.id),
                        "{} owned by {:?} and {}", entity, previous, boundary.id
                    );
                }
            }
        }

        /// Property: the transformation is deterministic.
        #[test]
        fn transformation_is_deterministic(catalog in catalog_strategy(6)) {
            prop_assert_eq!(
                transformer().transform(&catalog).unwrap(),
                transformer().transform(&catalog).unwrap()
            );
        }

        /// Property: the input catalog is never modified.
        #[test]
        fn input_is_untouched(catalog in catalog_strategy(6)) {
            let before = catalog.clone();
            let _ = transformer().transform(&catalog);
            prop_assert_eq!(catalog, before);
        }
    }
}
