//! Per-service quality scores.
//!
//! Each function scores one boundary in isolation, except coupling, which is
//! read off the system's [`CouplingMatrix`](crate::coupling::CouplingMatrix).

use crate::config::CohesionWeights;
use crate::core::ServiceBoundary;

/// Fraction of features that mention the domain tag, or that the domain tag
/// mentions. Zero when either side is empty; blank features never align.
pub fn domain_overlap(boundary: &ServiceBoundary) -> f64 {
    let domain = boundary.domain.to_lowercase();
    if domain.is_empty() || boundary.features.is_empty() {
        return 0.0;
    }

    let aligned = boundary
        .features
        .iter()
        .map(|feature| feature.to_lowercase())
        .filter(|feature| {
            feature.contains(&domain)
                || (!feature.trim().is_empty() && domain.contains(feature.as_str()))
        })
        .count();

    aligned as f64 / boundary.features.len() as f64
}

/// Step function rewarding services with few responsibilities.
pub fn responsibility_focus(count: usize) -> f64 {
    match count {
        0..=3 => 1.0,
        4..=5 => 0.7,
        _ => 0.4,
    }
}

pub fn cohesion(boundary: &ServiceBoundary, weights: &CohesionWeights) -> f64 {
    let mut score = weights.domain_overlap * domain_overlap(boundary)
        + weights.responsibility_focus * responsibility_focus(boundary.responsibilities.len());

    if !boundary.data_ownership.is_empty() {
        score += weights.data_ownership;
    }

    score.min(1.0)
}

fn saturating_ratio(count: usize, ceiling: f64) -> f64 {
    (count as f64 / ceiling).min(1.0)
}

/// Size-based complexity: features saturate at 10, interfaces at 5 and
/// dependencies at 8.
pub fn complexity(boundary: &ServiceBoundary) -> f64 {
    let features = saturating_ratio(boundary.features.len(), 10.0);
    let interfaces = saturating_ratio(boundary.interfaces.len(), 5.0);
    let dependencies = saturating_ratio(boundary.dependencies.len(), 8.0);
    (features + interfaces + dependencies) / 3.0
}

pub fn maintainability(cohesion: f64, complexity: f64) -> f64 {
    (cohesion + (1.0 - complexity)) / 2.0
}

fn interface_efficiency(boundary: &ServiceBoundary) -> f64 {
    if boundary
        .interfaces
        .iter()
        .all(|interface| interface.interface_type.is_efficient())
    {
        0.8
    } else {
        0.6
    }
}

fn dependency_efficiency(boundary: &ServiceBoundary) -> f64 {
    if boundary.dependencies.is_empty() {
        return 1.0;
    }
    let non_blocking = boundary
        .dependencies
        .iter()
        .filter(|dep| dep.dependency_type.is_non_blocking())
        .count();
    non_blocking as f64 / boundary.dependencies.len() as f64
}

pub fn performance(boundary: &ServiceBoundary) -> f64 {
    (interface_efficiency(boundary) + dependency_efficiency(boundary)) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DependencyType, InterfaceType};
    use crate::testkit::BoundaryBuilder;

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_domain_overlap_is_case_insensitive_both_ways() {
        let boundary = BoundaryBuilder::new("brand", "Brand")
            .features(&["BRAND voice", "bra", "billing"])
            .build();
        // "brand voice" contains "brand"; "bra" is contained in "brand"
        approx(domain_overlap(&boundary), 2.0 / 3.0);
    }

    #[test]
    fn test_domain_overlap_empty_domain_scores_zero() {
        let boundary = BoundaryBuilder::new("x", "").features(&["anything"]).build();
        approx(domain_overlap(&boundary), 0.0);
    }

    #[test]
    fn test_domain_overlap_ignores_blank_features() {
        let boundary = BoundaryBuilder::new("x", "content")
            .features(&["", "", "", "billing"])
            .build();
        approx(domain_overlap(&boundary), 0.0);
        approx(cohesion(&boundary, &CohesionWeights::default()), 0.3);

        let spaced = BoundaryBuilder::new("y", "content ops")
            .features(&[" ", "content ops review"])
            .build();
        approx(domain_overlap(&spaced), 0.5);
    }

    #[test]
    fn test_cohesion_of_focused_service() {
        let boundary = BoundaryBuilder::new("brand-profile", "brand")
            .features(&["brand voice", "brand assets"])
            .responsibilities(&["manage brand identity"])
            .owns("brand")
            .build();
        approx(cohesion(&boundary, &CohesionWeights::default()), 1.0);
    }

    #[test]
    fn test_cohesion_of_unfocused_service() {
        let boundary = BoundaryBuilder::new("studio", "content")
            .features(&["caption writer", "image resizing", "billing", "email"])
            .responsibilities(&["a", "b", "c", "d", "e", "f"])
            .build();
        // 0.4 * 0 + 0.3 * 0.4 + 0
        approx(cohesion(&boundary, &CohesionWeights::default()), 0.12);
    }

    #[test]
    fn test_responsibility_focus_steps() {
        assert_eq!(responsibility_focus(0), 1.0);
        assert_eq!(responsibility_focus(3), 1.0);
        assert_eq!(responsibility_focus(5), 0.7);
        assert_eq!(responsibility_focus(6), 0.4);
    }

    #[test]
    fn test_complexity_saturates() {
        let features: Vec<String> = (0..20).map(|i| format!("f{i}")).collect();
        let refs: Vec<&str> = features.iter().map(String::as_str).collect();
        let boundary = BoundaryBuilder::new("big", "d")
            .features(&refs)
            .interface(InterfaceType::Rest)
            .build();
        // (1.0 + 0.2 + 0.0) / 3
        approx(complexity(&boundary), 0.4);
    }

    #[test]
    fn test_performance_of_empty_service() {
        let boundary = BoundaryBuilder::new("empty", "d").build();
        approx(performance(&boundary), 0.9);
    }

    #[test]
    fn test_performance_penalizes_blocking_calls_and_slow_interfaces() {
        let boundary = BoundaryBuilder::new("chatty", "d")
            .interface(InterfaceType::Graphql)
            .depends_on("a", DependencyType::Synchronous)
            .depends_on("b", DependencyType::EventDriven)
            .build();
        // (0.6 + 0.5) / 2
        approx(performance(&boundary), 0.55);
    }

    #[test]
    fn test_maintainability_blends_cohesion_and_simplicity() {
        approx(maintainability(1.0, 0.0), 1.0);
        approx(maintainability(0.5, 0.5), 0.5);
    }
}
