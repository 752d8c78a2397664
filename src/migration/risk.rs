//! Risk assessment and rollback steps for a migration plan.

use crate::config::PlanMode;
use crate::core::{BoundaryRecommendation, Level, RiskAssessment, RiskFactor};

fn risk_factor(factor: &str, impact: Level, probability: Level, mitigation: &str) -> RiskFactor {
    RiskFactor {
        factor: factor.to_string(),
        impact,
        probability,
        mitigation: mitigation.to_string(),
    }
}

fn risk_factors() -> Vec<RiskFactor> {
    vec![
        risk_factor(
            "Service dependency complexity",
            Level::High,
            Level::Medium,
            "Map every synchronous call path before moving code and add contract tests at each new boundary",
        ),
        risk_factor(
            "Data consistency during migration",
            Level::High,
            Level::Medium,
            "Run dual writes with reconciliation until the new owning service is authoritative",
        ),
        risk_factor(
            "Performance degradation",
            Level::Medium,
            Level::Low,
            "Load test each restructured service against production traffic profiles before cutover",
        ),
    ]
}

fn mitigation_strategies() -> Vec<String> {
    [
        "Migrate incrementally, one boundary change at a time",
        "Route traffic through feature flags so each change can be switched off",
        "Monitor error rates and latency for every affected service during rollout",
        "Keep the previous deployment warm until the new one has soaked",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn rollback_strategy() -> Vec<String> {
    [
        "Keep the original services deployable until validation completes",
        "Switch traffic back through the feature flags guarding each change",
        "Restore data ownership from pre-migration snapshots",
        "Revert interface version changes at the gateway",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Overall risk: high when any recommendation is complex to implement. The
/// scaled mode also reports low risk for an empty recommendation set.
pub fn overall_risk(recommendations: &[BoundaryRecommendation], mode: PlanMode) -> Level {
    if recommendations
        .iter()
        .any(|r| r.implementation_complexity == Level::High)
    {
        Level::High
    } else if mode == PlanMode::Scaled && recommendations.is_empty() {
        Level::Low
    } else {
        Level::Medium
    }
}

pub fn assess(recommendations: &[BoundaryRecommendation], mode: PlanMode) -> RiskAssessment {
    RiskAssessment {
        overall_risk: overall_risk(recommendations, mode),
        risk_factors: risk_factors(),
        mitigation_strategies: mitigation_strategies(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Impact, RecommendationType};

    fn recommendation(complexity: Level) -> BoundaryRecommendation {
        BoundaryRecommendation {
            recommendation_type: RecommendationType::MergeServices,
            services: vec!["a".to_string()],
            reasoning: String::new(),
            priority: Level::Medium,
            estimated_impact: Impact::Positive,
            implementation_complexity: complexity,
            estimated_effort: "2-4 weeks".to_string(),
        }
    }

    #[test]
    fn test_high_complexity_means_high_risk() {
        let recs = [recommendation(Level::Medium), recommendation(Level::High)];
        assert_eq!(overall_risk(&recs, PlanMode::Template), Level::High);
        assert_eq!(overall_risk(&recs, PlanMode::Scaled), Level::High);
    }

    #[test]
    fn test_template_never_reports_low_risk() {
        assert_eq!(overall_risk(&[], PlanMode::Template), Level::Medium);
        assert_eq!(
            overall_risk(&[recommendation(Level::Medium)], PlanMode::Template),
            Level::Medium
        );
    }

    #[test]
    fn test_scaled_empty_plan_is_low_risk() {
        assert_eq!(overall_risk(&[], PlanMode::Scaled), Level::Low);
    }

    #[test]
    fn test_assessment_carries_fixed_catalog() {
        let assessment = assess(&[], PlanMode::Template);
        assert_eq!(assessment.risk_factors.len(), 3);
        assert!(assessment.risk_factors[1].factor.contains("Data consistency"));
        assert!(!assessment.mitigation_strategies.is_empty());
    }
}
