//! Recommendation generation.
//!
//! Recommendations are derived by diffing the original decomposition against
//! the optimized one rather than by searching for moves:
//!
//! | Signal | Recommendation | Priority | Complexity | Effort |
//! |--------|----------------|----------|------------|--------|
//! | fewer services afterwards | `merge_services` | medium | medium | 2-4 weeks |
//! | more services afterwards | `split_service` | high | high | 4-8 weeks |
//! | an entity with several owners | `consolidate_data` | high | high | 3-6 weeks |
//!
//! The list is ranked high priority first; equal priorities keep the order
//! above.

use crate::config::CohesionWeights;
use crate::core::{BoundaryRecommendation, Impact, Level, RecommendationType, ServiceBoundary};
use crate::metrics::cohesion;
use std::cmp::Reverse;
use std::collections::HashMap;

pub struct RecommendationGenerator {
    split_cohesion: f64,
    weights: CohesionWeights,
}

impl RecommendationGenerator {
    pub fn new(split_cohesion: f64, weights: CohesionWeights) -> Self {
        Self {
            split_cohesion,
            weights,
        }
    }

    pub fn generate(
        &self,
        original: &[ServiceBoundary],
        optimized: &[ServiceBoundary],
    ) -> Vec<BoundaryRecommendation> {
        let mut recommendations: Vec<BoundaryRecommendation> = [
            merge_recommendation(original, optimized),
            self.split_recommendation(original, optimized),
            consolidation_recommendation(original),
        ]
        .into_iter()
        .flatten()
        .collect();

        recommendations.sort_by_key(|r| Reverse(r.priority));
        log::debug!("Generated {} recommendations", recommendations.len());
        recommendations
    }

    fn split_recommendation(
        &self,
        original: &[ServiceBoundary],
        optimized: &[ServiceBoundary],
    ) -> Option<BoundaryRecommendation> {
        if optimized.len() <= original.len() {
            return None;
        }
        let services: Vec<String> = original
            .iter()
            .filter(|b| cohesion(b, &self.weights) < self.split_cohesion)
            .map(|b| b.name.clone())
            .collect();

        Some(BoundaryRecommendation {
            recommendation_type: RecommendationType::SplitService,
            reasoning: format!(
                "{} service(s) have cohesion below {:.2} and mix unrelated features; \
                 splitting them gives each half a focused responsibility",
                services.len(),
                self.split_cohesion
            ),
            services,
            priority: Level::High,
            estimated_impact: Impact::Positive,
            implementation_complexity: Level::High,
            estimated_effort: "4-8 weeks".to_string(),
        })
    }
}

fn merge_recommendation(
    original: &[ServiceBoundary],
    optimized: &[ServiceBoundary],
) -> Option<BoundaryRecommendation> {
    if optimized.len() >= original.len() {
        return None;
    }
    Some(BoundaryRecommendation {
        recommendation_type: RecommendationType::MergeServices,
        services: original.iter().map(|b| b.name.clone()).collect(),
        reasoning: format!(
            "Merging tightly coupled services reduces the system from {} to {} services \
             and removes chatty cross-service calls",
            original.len(),
            optimized.len()
        ),
        priority: Level::Medium,
        estimated_impact: Impact::Positive,
        implementation_complexity: Level::Medium,
        estimated_effort: "2-4 weeks".to_string(),
    })
}

/// Services that share ownership of at least one entity, in first-seen order.
fn conflicting_services(original: &[ServiceBoundary]) -> Vec<String> {
    let mut claimants: HashMap<&str, Vec<&ServiceBoundary>> = HashMap::new();
    for boundary in original {
        for entity in &boundary.data_ownership {
            let owners = claimants.entry(entity.as_str()).or_default();
            if !owners.iter().any(|owner| owner.id == boundary.id) {
                owners.push(boundary);
            }
        }
    }

    original
        .iter()
        .filter(|boundary| {
            boundary.data_ownership.iter().any(|entity| {
                claimants
                    .get(entity.as_str())
                    .is_some_and(|owners| owners.len() > 1)
            })
        })
        .map(|boundary| boundary.name.clone())
        .fold(Vec::new(), |mut names, name| {
            if !names.contains(&name) {
                names.push(name);
            }
            names
        })
}

fn consolidation_recommendation(original: &[ServiceBoundary]) -> Option<BoundaryRecommendation> {
    let services = conflicting_services(original);
    if services.is_empty() {
        return None;
    }
    Some(BoundaryRecommendation {
        recommendation_type: RecommendationType::ConsolidateData,
        reasoning: format!(
            "{} services claim ownership of the same data; give each entity a single \
             owning service and expose it to the others through its interface",
            services.len()
        ),
        services,
        priority: Level::High,
        estimated_impact: Impact::Positive,
        implementation_complexity: Level::High,
        estimated_effort: "3-6 weeks".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::BoundaryBuilder;
    use pretty_assertions::assert_eq;

    fn generator() -> RecommendationGenerator {
        RecommendationGenerator::new(0.6, CohesionWeights::default())
    }

    fn types(recommendations: &[BoundaryRecommendation]) -> Vec<RecommendationType> {
        recommendations.iter().map(|r| r.recommendation_type).collect()
    }

    #[test]
    fn test_no_change_no_recommendations() {
        let catalog = vec![BoundaryBuilder::new("a", "d").owns("x").build()];
        assert!(generator().generate(&catalog, &catalog).is_empty());
    }

    #[test]
    fn test_fewer_services_recommends_merge_of_all() {
        let original = vec![
            BoundaryBuilder::new("a", "d").build(),
            BoundaryBuilder::new("b", "d").build(),
        ];
        let optimized = vec![BoundaryBuilder::new("a-b", "d").build()];

        let recommendations = generator().generate(&original, &optimized);
        assert_eq!(types(&recommendations), vec![RecommendationType::MergeServices]);
        assert_eq!(recommendations[0].services, vec!["a", "b"]);
        assert_eq!(recommendations[0].priority, Level::Medium);
        assert_eq!(recommendations[0].estimated_effort, "2-4 weeks");
    }

    #[test]
    fn test_more_services_names_low_cohesion_originals() {
        let original = vec![
            BoundaryBuilder::new("studio", "content")
                .features(&["a", "b", "c", "d"])
                .build(),
            BoundaryBuilder::new("brand", "brand")
                .feature("brand voice")
                .owns("brand")
                .build(),
        ];
        let optimized = vec![
            BoundaryBuilder::new("studio-core", "content").build(),
            BoundaryBuilder::new("studio-extended", "content").build(),
            BoundaryBuilder::new("brand", "brand").build(),
        ];

        let recommendations = generator().generate(&original, &optimized);
        assert_eq!(types(&recommendations), vec![RecommendationType::SplitService]);
        assert_eq!(recommendations[0].services, vec!["studio"]);
        assert_eq!(recommendations[0].implementation_complexity, Level::High);
    }

    #[test]
    fn test_shared_entity_recommends_consolidation() {
        let original = vec![
            BoundaryBuilder::new("search", "discovery").owns("listing").build(),
            BoundaryBuilder::new("billing", "billing").owns("invoice").build(),
            BoundaryBuilder::new("listings", "listing").owns("listing").build(),
        ];

        let recommendations = generator().generate(&original, &original);
        assert_eq!(types(&recommendations), vec![RecommendationType::ConsolidateData]);
        assert_eq!(recommendations[0].services, vec!["search", "listings"]);
        assert_eq!(recommendations[0].estimated_effort, "3-6 weeks");
    }

    #[test]
    fn test_entity_listed_twice_by_one_service_is_not_a_conflict() {
        let original = vec![BoundaryBuilder::new("a", "d").owns("x").owns("x").build()];
        assert!(generator().generate(&original, &original).is_empty());
    }

    #[test]
    fn test_ranked_high_priority_first() {
        let original = vec![
            BoundaryBuilder::new("a", "d").owns("x").build(),
            BoundaryBuilder::new("b", "d").owns("x").build(),
        ];
        let optimized = vec![BoundaryBuilder::new("a-b", "d").owns("x").build()];

        let recommendations = generator().generate(&original, &optimized);
        assert_eq!(
            types(&recommendations),
            vec![
                RecommendationType::ConsolidateData,
                RecommendationType::MergeServices
            ]
        );
        assert!(recommendations
            .iter()
            .all(|r| r.estimated_impact == Impact::Positive));
    }
}
