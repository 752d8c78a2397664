//! Migration planning.
//!
//! Every plan has the same four phases, each depending on the one before:
//!
//! | Id | Phase | Template duration |
//! |----|-------|-------------------|
//! | phase-1 | Analysis & Planning | 1-2 weeks |
//! | phase-2 | Infrastructure Preparation | 2-3 weeks |
//! | phase-3 | Implementation | 4-8 weeks |
//! | phase-4 | Migration & Validation | 2-4 weeks |
//!
//! In [`PlanMode::Scaled`] the Implementation phase is sized from the number
//! of recommendations instead (2 weeks plus 2-4 weeks per recommendation)
//! and the total is recomputed.

pub mod duration;
pub mod risk;

use crate::config::PlanMode;
use crate::core::{BoundaryRecommendation, MigrationPhase, MigrationPlan, RecommendationType};
pub use duration::WeekRange;

const ANALYSIS: WeekRange = WeekRange::new(1, 2);
const INFRASTRUCTURE: WeekRange = WeekRange::new(2, 3);
const IMPLEMENTATION: WeekRange = WeekRange::new(4, 8);
const VALIDATION: WeekRange = WeekRange::new(2, 4);

const SCALED_BASE: WeekRange = WeekRange::new(2, 2);
const SCALED_PER_RECOMMENDATION: WeekRange = WeekRange::new(2, 4);

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Recommendation types present, deduplicated in first-seen order.
fn recommendation_types(recommendations: &[BoundaryRecommendation]) -> Vec<RecommendationType> {
    recommendations
        .iter()
        .map(|r| r.recommendation_type)
        .fold(Vec::new(), |mut types, t| {
            if !types.contains(&t) {
                types.push(t);
            }
            types
        })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MigrationPlanner {
    mode: PlanMode,
}

impl MigrationPlanner {
    pub fn new(mode: PlanMode) -> Self {
        Self { mode }
    }

    pub fn implementation_duration(&self, recommendation_count: usize) -> WeekRange {
        match self.mode {
            PlanMode::Template => IMPLEMENTATION,
            PlanMode::Scaled => {
                let count = u32::try_from(recommendation_count).unwrap_or(u32::MAX);
                WeekRange::new(
                    SCALED_BASE.min + SCALED_PER_RECOMMENDATION.min.saturating_mul(count),
                    SCALED_BASE.max + SCALED_PER_RECOMMENDATION.max.saturating_mul(count),
                )
            }
        }
    }

    pub fn plan(&self, recommendations: &[BoundaryRecommendation]) -> MigrationPlan {
        let implementation = self.implementation_duration(recommendations.len());
        let total = ANALYSIS + INFRASTRUCTURE + implementation + VALIDATION;

        let phases = vec![
            MigrationPhase {
                id: "phase-1".to_string(),
                name: "Analysis & Planning".to_string(),
                description: "Confirm the target boundaries with service owners and sequence the changes".to_string(),
                recommendations: Vec::new(),
                estimated_duration: ANALYSIS.to_string(),
                prerequisites: Vec::new(),
                deliverables: strings(&[
                    "Current-state dependency map",
                    "Target service boundary design",
                    "Sequenced migration backlog",
                ]),
            },
            MigrationPhase {
                id: "phase-2".to_string(),
                name: "Infrastructure Preparation".to_string(),
                description: "Provision deployment, routing and observability for the new services".to_string(),
                recommendations: Vec::new(),
                estimated_duration: INFRASTRUCTURE.to_string(),
                prerequisites: strings(&["phase-1"]),
                deliverables: strings(&[
                    "Deployment pipelines for new services",
                    "Feature flags and traffic routing",
                    "Dashboards and alerts per service",
                ]),
            },
            MigrationPhase {
                id: "phase-3".to_string(),
                name: "Implementation".to_string(),
                description: "Carry out the recommended boundary changes".to_string(),
                recommendations: recommendation_types(recommendations),
                estimated_duration: implementation.to_string(),
                prerequisites: strings(&["phase-2"]),
                deliverables: strings(&[
                    "Restructured services",
                    "Updated interface contracts",
                    "Data migration scripts",
                ]),
            },
            MigrationPhase {
                id: "phase-4".to_string(),
                name: "Migration & Validation".to_string(),
                description: "Shift traffic to the new boundaries and verify behavior".to_string(),
                recommendations: Vec::new(),
                estimated_duration: VALIDATION.to_string(),
                prerequisites: strings(&["phase-3"]),
                deliverables: strings(&[
                    "Production cutover",
                    "Performance validation report",
                    "Decommissioned legacy services",
                ]),
            },
        ];

        log::debug!(
            "Planned {} phases over {} ({:?} mode)",
            phases.len(),
            total,
            self.mode
        );

        MigrationPlan {
            phases,
            total_duration: total.to_string(),
            risk_assessment: risk::assess(recommendations, self.mode),
            rollback_strategy: risk::rollback_strategy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Impact, Level};
    use pretty_assertions::assert_eq;

    fn recommendation(kind: RecommendationType, complexity: Level) -> BoundaryRecommendation {
        BoundaryRecommendation {
            recommendation_type: kind,
            services: Vec::new(),
            reasoning: String::new(),
            priority: Level::High,
            estimated_impact: Impact::Positive,
            implementation_complexity: complexity,
            estimated_effort: String::new(),
        }
    }

    #[test]
    fn test_template_plan_is_unconditional() {
        let plan = MigrationPlanner::default().plan(&[]);

        let ids: Vec<_> = plan.phases.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["phase-1", "phase-2", "phase-3", "phase-4"]);
        assert_eq!(plan.total_duration, "9-17 weeks");
        assert_eq!(plan.phases[2].estimated_duration, "4-8 weeks");
        assert_eq!(plan.risk_assessment.overall_risk, Level::Medium);
        assert!(plan.phases[0].prerequisites.is_empty());
        assert_eq!(plan.phases[3].prerequisites, vec!["phase-3"]);
        assert!(!plan.rollback_strategy.is_empty());
    }

    #[test]
    fn test_implementation_lists_types_once() {
        let recs = [
            recommendation(RecommendationType::ConsolidateData, Level::High),
            recommendation(RecommendationType::SplitService, Level::High),
            recommendation(RecommendationType::ConsolidateData, Level::High),
        ];
        let plan = MigrationPlanner::default().plan(&recs);

        assert_eq!(
            plan.phases[2].recommendations,
            vec![
                RecommendationType::ConsolidateData,
                RecommendationType::SplitService
            ]
        );
        assert_eq!(plan.risk_assessment.overall_risk, Level::High);
    }

    #[test]
    fn test_scaled_plan_sizes_implementation() {
        let planner = MigrationPlanner::new(PlanMode::Scaled);
        let recs = [
            recommendation(RecommendationType::MergeServices, Level::Medium),
            recommendation(RecommendationType::ConsolidateData, Level::Medium),
        ];
        let plan = planner.plan(&recs);

        assert_eq!(plan.phases[2].estimated_duration, "6-10 weeks");
        assert_eq!(plan.total_duration, "11-19 weeks");
        assert_eq!(plan.risk_assessment.overall_risk, Level::Medium);
    }

    #[test]
    fn test_scaled_empty_plan() {
        let plan = MigrationPlanner::new(PlanMode::Scaled).plan(&[]);
        assert_eq!(plan.phases.len(), 4);
        assert_eq!(plan.phases[2].estimated_duration, "2 weeks");
        assert_eq!(plan.total_duration, "7-11 weeks");
        assert_eq!(plan.risk_assessment.overall_risk, Level::Low);
    }
}
