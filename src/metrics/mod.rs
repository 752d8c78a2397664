//! Metrics calculation module
//!
//! Scores every service on cohesion, coupling, complexity, maintainability
//! and performance, and rolls the scores up into [`SystemMetrics`].
//!
//! Coupling is the only score that depends on the rest of the system, so the
//! calculator builds one [`CouplingMatrix`] per call and reads every
//! service's mean coupling from it.

pub mod service;
pub mod system;

use crate::config::ScoringWeights;
use crate::core::{ServiceBoundary, ServiceMetrics, SystemMetrics};
use crate::coupling::CouplingMatrix;
use crate::observability::set_current_service;

pub use service::{cohesion, complexity, maintainability, performance};
pub use system::domain_alignment;

/// Computes service and system metrics under a fixed set of weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsCalculator {
    weights: ScoringWeights,
}

impl MetricsCalculator {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn cohesion(&self, boundary: &ServiceBoundary) -> f64 {
        service::cohesion(boundary, &self.weights.cohesion)
    }

    pub fn coupling_matrix(&self, boundaries: &[ServiceBoundary]) -> CouplingMatrix {
        CouplingMatrix::build(boundaries, &self.weights.coupling)
    }

    /// Metrics for every service, in input order.
    pub fn service_metrics(&self, boundaries: &[ServiceBoundary]) -> Vec<ServiceMetrics> {
        let matrix = self.coupling_matrix(boundaries);
        boundaries
            .iter()
            .enumerate()
            .map(|(i, boundary)| {
                let _service = set_current_service(&boundary.name);
                let cohesion = self.cohesion(boundary);
                let complexity = service::complexity(boundary);
                ServiceMetrics {
                    cohesion,
                    coupling: matrix.mean_coupling(i),
                    complexity,
                    maintainability: service::maintainability(cohesion, complexity),
                    performance: service::performance(boundary),
                }
            })
            .collect()
    }

    pub fn system_metrics(&self, boundaries: &[ServiceBoundary]) -> SystemMetrics {
        let per_service = self.service_metrics(boundaries);
        let system = system::aggregate(&per_service, system::domain_alignment(boundaries));
        log::debug!(
            "System metrics over {} services: cohesion={:.3} coupling={:.3} complexity={:.3}",
            boundaries.len(),
            system.cohesion,
            system.coupling,
            system.complexity
        );
        system
    }
}
