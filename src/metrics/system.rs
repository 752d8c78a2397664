use crate::core::{ServiceBoundary, ServiceMetrics, SystemMetrics};
use std::collections::BTreeMap;

/// Share of services that live in a domain with at least one sibling.
pub fn domain_alignment(boundaries: &[ServiceBoundary]) -> f64 {
    if boundaries.is_empty() {
        return 0.0;
    }

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for boundary in boundaries {
        *counts.entry(boundary.domain.as_str()).or_default() += 1;
    }

    let total = boundaries.len() as f64;
    counts
        .values()
        .filter(|&&count| count > 1)
        .map(|&count| count as f64 / total)
        .sum()
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        values.sum::<f64>() / count as f64
    }
}

/// Arithmetic means of the per-service scores.
pub fn aggregate(per_service: &[ServiceMetrics], domain_alignment: f64) -> SystemMetrics {
    let n = per_service.len();
    SystemMetrics {
        cohesion: mean(per_service.iter().map(|m| m.cohesion), n),
        coupling: mean(per_service.iter().map(|m| m.coupling), n),
        complexity: mean(per_service.iter().map(|m| m.complexity), n),
        maintainability: mean(per_service.iter().map(|m| m.maintainability), n),
        performance: mean(per_service.iter().map(|m| m.performance), n),
        domain_alignment,
    }
}
