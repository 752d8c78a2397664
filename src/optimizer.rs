//! Optimization orchestrator.
//!
//! Composes the metrics calculator, transformer, recommendation generator and
//! migration planner by explicit data passing. The [`Optimizer`] holds only
//! immutable configuration and a thread-safe id generator, so one instance
//! can be shared behind an `Arc` by every HTTP worker.

use crate::boundmap_error::{BoundmapError, ErrorCode};
use crate::config::BoundmapConfig;
use crate::core::{OptimizationMetrics, OptimizationResult, ServiceBoundary, ServiceHealth};
use crate::metrics::MetricsCalculator;
use crate::migration::MigrationPlanner;
use crate::observability::{set_phase, OptimizationPhase};
use crate::recommendations::RecommendationGenerator;
use crate::transform::{BoundaryTransformer, HashIdGenerator, IdGenerator};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, info_span};

/// Check every boundary and report all problems together.
///
/// Each boundary needs a non-empty id and name, and ids must be unique.
pub fn validate_boundaries(boundaries: &[ServiceBoundary]) -> Result<(), BoundmapError> {
    let mut errors = Vec::new();
    let mut duplicates_only = true;
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (index, boundary) in boundaries.iter().enumerate() {
        if boundary.id.trim().is_empty() {
            errors.push(format!("boundary #{} has an empty id", index));
            duplicates_only = false;
        } else if let Some(first) = first_seen.insert(boundary.id.as_str(), index) {
            errors.push(format!(
                "duplicate service id '{}' at boundaries #{} and #{}",
                boundary.id, first, index
            ));
            // keep the earliest position for later duplicates
            first_seen.insert(boundary.id.as_str(), first);
        }
        if boundary.name.trim().is_empty() {
            errors.push(format!("boundary #{} has an empty name", index));
            duplicates_only = false;
        }
    }

    if errors.is_empty() {
        return Ok(());
    }
    let code = if duplicates_only {
        ErrorCode::VALIDATION_DUPLICATE_ID
    } else {
        ErrorCode::VALIDATION_GENERIC
    };
    Err(BoundmapError::validations(code, errors))
}

pub struct Optimizer {
    config: BoundmapConfig,
    metrics: MetricsCalculator,
    transformer: BoundaryTransformer,
    recommendations: RecommendationGenerator,
    planner: MigrationPlanner,
}

impl Optimizer {
    /// Optimizer with content-hash ids for new service records.
    pub fn new(config: BoundmapConfig) -> Self {
        Self::with_id_generator(config, Arc::new(HashIdGenerator))
    }

    pub fn with_id_generator(config: BoundmapConfig, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            metrics: MetricsCalculator::new(config.scoring),
            transformer: BoundaryTransformer::new(&config.thresholds, &config.scoring, ids),
            recommendations: RecommendationGenerator::new(
                config.thresholds.split_cohesion,
                config.scoring.cohesion,
            ),
            planner: MigrationPlanner::new(config.plan.mode),
            config,
        }
    }

    pub fn config(&self) -> &BoundmapConfig {
        &self.config
    }

    fn with_service_metrics(&self, boundaries: &[ServiceBoundary]) -> Vec<ServiceBoundary> {
        boundaries
            .iter()
            .zip(self.metrics.service_metrics(boundaries))
            .map(|(boundary, metrics)| boundary.with_metrics(metrics))
            .collect()
    }

    pub fn optimize_boundaries(
        &self,
        boundaries: &[ServiceBoundary],
    ) -> Result<OptimizationResult, BoundmapError> {
        let span = info_span!("optimize_boundaries", services = boundaries.len());
        let _guard = span.enter();

        {
            let _phase = set_phase(OptimizationPhase::Validation);
            validate_boundaries(boundaries)?;
        }

        let original_metrics = {
            let _phase = set_phase(OptimizationPhase::MetricsCalculation);
            self.metrics.system_metrics(boundaries)
        };

        let optimized = {
            let _span = info_span!("transformation").entered();
            let _phase = set_phase(OptimizationPhase::Transformation);
            self.transformer.transform(boundaries)?
        };

        let optimized_metrics = {
            let _phase = set_phase(OptimizationPhase::MetricsCalculation);
            self.metrics.system_metrics(&optimized)
        };

        let recommendations = {
            let _phase = set_phase(OptimizationPhase::Recommendation);
            self.recommendations.generate(boundaries, &optimized)
        };

        let migration_plan = {
            let _phase = set_phase(OptimizationPhase::MigrationPlanning);
            self.planner.plan(&recommendations)
        };

        info!(
            original = boundaries.len(),
            optimized = optimized.len(),
            recommendations = recommendations.len(),
            "Optimization complete"
        );

        Ok(OptimizationResult {
            original_boundaries: self.with_service_metrics(boundaries),
            optimized_boundaries: self.with_service_metrics(&optimized),
            optimization_metrics: OptimizationMetrics::between(original_metrics, optimized_metrics),
            recommendations,
            migration_plan: Some(migration_plan),
        })
    }

    /// Per-service metrics in input order, without transforming anything.
    pub fn analyze_service_health(
        &self,
        boundaries: &[ServiceBoundary],
    ) -> Result<Vec<ServiceHealth>, BoundmapError> {
        let _span = info_span!("analyze_service_health", services = boundaries.len()).entered();
        {
            let _phase = set_phase(OptimizationPhase::Validation);
            validate_boundaries(boundaries)?;
        }

        let _phase = set_phase(OptimizationPhase::MetricsCalculation);
        let health = boundaries
            .iter()
            .zip(self.metrics.service_metrics(boundaries))
            .map(|(boundary, metrics)| ServiceHealth {
                service_id: boundary.id.clone(),
                service_name: boundary.name.clone(),
                metrics,
            })
            .collect();
        Ok(health)
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new(BoundmapConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DependencyType, RecommendationType};
    use crate::testkit::proptest_generators::catalog_strategy;
    use crate::testkit::{sample_catalog, BoundaryBuilder};
    use proptest::prelude::*;

    #[test]
    fn test_validation_collects_every_problem() {
        let boundaries = vec![
            BoundaryBuilder::new("a", "d").id("").build(),
            BoundaryBuilder::new("", "d").id("x").build(),
            BoundaryBuilder::new("b", "d").id("x").build(),
        ];
        let err = crate::assert_error_code!(
            validate_boundaries(&boundaries),
            ErrorCode::VALIDATION_GENERIC
        );
        match err {
            BoundmapError::Validation { count, .. } => assert_eq!(count, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_ids_only() {
        let boundaries = vec![
            BoundaryBuilder::new("a", "d").id("same").build(),
            BoundaryBuilder::new("b", "d").id("same").build(),
            BoundaryBuilder::new("c", "d").id("same").build(),
        ];
        let err = crate::assert_error_code!(
            validate_boundaries(&boundaries),
            ErrorCode::VALIDATION_DUPLICATE_ID
        );
        assert!(err.to_string().contains("#0 and #2"));
    }

    #[test]
    fn test_invalid_input_fails_before_any_work() {
        let boundaries = vec![BoundaryBuilder::new("", "d").id("").build()];
        let result = Optimizer::default().optimize_boundaries(&boundaries);
        assert_eq!(crate::assert_result_err!(result).http_status(), 400);
    }

    #[test]
    fn test_empty_catalog_still_gets_a_plan() {
        let result = crate::assert_result_ok!(Optimizer::default().optimize_boundaries(&[]));
        assert!(result.optimized_boundaries.is_empty());
        assert!(result.recommendations.is_empty());
        assert_eq!(result.migration_plan.map(|p| p.phases.len()), Some(4));
    }

    #[test]
    fn test_deltas_follow_sign_conventions() {
        let result =
            crate::assert_result_ok!(Optimizer::default().optimize_boundaries(&sample_catalog()));
        let m = result.optimization_metrics;
        assert_eq!(m.complexity_reduction, m.original.complexity - m.optimized.complexity);
        assert_eq!(m.performance_impact, m.optimized.performance - m.original.performance);
        assert_eq!(
            m.maintainability_improvement,
            m.optimized.maintainability - m.original.maintainability
        );
    }

    #[test]
    fn test_result_boundaries_carry_metrics() {
        let result =
            crate::assert_result_ok!(Optimizer::default().optimize_boundaries(&sample_catalog()));
        assert!(result.original_boundaries.iter().all(|b| b.metrics.is_some()));
        assert!(result.optimized_boundaries.iter().all(|b| b.metrics.is_some()));
    }

    #[test]
    fn test_health_keeps_input_order() {
        let catalog = sample_catalog();
        let health = crate::assert_result_ok!(Optimizer::default().analyze_service_health(&catalog));
        let ids: Vec<_> = health.iter().map(|h| h.service_id.as_str()).collect();
        let expected: Vec<_> = catalog.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_mutually_dependent_brand_services_merge() {
        let boundaries = vec![
            BoundaryBuilder::new("brand-a", "brand")
                .depends_on("brand-b", DependencyType::Synchronous)
                .owns("brand_profile")
                .build(),
            BoundaryBuilder::new("brand-b", "brand")
                .depends_on("brand-a", DependencyType::Synchronous)
                .owns("brand_profile")
                .build(),
        ];
        let result = crate::assert_result_ok!(Optimizer::default().optimize_boundaries(&boundaries));

        assert_eq!(result.optimized_boundaries.len(), 1);
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.recommendation_type == RecommendationType::MergeServices));
    }

    #[test]
    fn test_split_with_case_variant_features_stays_split() {
        let boundaries = vec![BoundaryBuilder::new("studio", "content")
            .features(&["Search", "Rank", "search", "rank"])
            .build()];
        let result = crate::assert_result_ok!(Optimizer::default().optimize_boundaries(&boundaries));

        let names: Vec<_> = result
            .optimized_boundaries
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(names, vec!["studio-core", "studio-extended"]);
        let split = result
            .recommendations
            .iter()
            .find(|r| r.recommendation_type == RecommendationType::SplitService)
            .map(|r| r.services.clone());
        assert_eq!(split, Some(vec!["studio".to_string()]));
    }

    proptest! {
        /// Property: merge and split recommendations mirror the change in
        /// service count.
        #[test]
        fn recommendations_match_service_count(catalog in catalog_strategy(8)) {
            let result = Optimizer::default().optimize_boundaries(&catalog).unwrap();
            let has = |kind| result.recommendations.iter().any(|r| r.recommendation_type == kind);

            let original = result.original_boundaries.len();
            let optimized = result.optimized_boundaries.len();
            prop_assert_eq!(has(RecommendationType::MergeServices), optimized < original);
            prop_assert_eq!(has(RecommendationType::SplitService), optimized > original);
        }

        /// Property: optimizing twice gives the same answer.
        #[test]
        fn optimization_is_deterministic(catalog in catalog_strategy(6)) {
            let optimizer = Optimizer::default();
            prop_assert_eq!(
                optimizer.optimize_boundaries(&catalog).unwrap(),
                optimizer.optimize_boundaries(&catalog).unwrap()
            );
        }
    }
}
