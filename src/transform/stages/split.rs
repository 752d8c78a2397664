//! Split unfocused services into a core and an extended half.

use crate::boundmap_error::BoundmapError;
use crate::config::CohesionWeights;
use crate::core::ServiceBoundary;
use crate::metrics::cohesion;
use crate::observability::set_current_service;
use crate::transform::ids::{IdGenerator, IdOperation};
use crate::transform::stage::Stage;
use std::collections::HashSet;
use std::sync::Arc;

/// Split a list at its midpoint; the first half gets the odd element.
fn halves<T: Clone>(items: &[T]) -> (Vec<T>, Vec<T>) {
    let mid = items.len().div_ceil(2);
    (items[..mid].to_vec(), items[mid..].to_vec())
}

/// Partition a list by index parity: even indices first, odd second.
fn by_parity<T: Clone>(items: &[T]) -> (Vec<T>, Vec<T>) {
    let (even, odd): (Vec<_>, Vec<_>) = items.iter().enumerate().partition(|(i, _)| i % 2 == 0);
    (
        even.into_iter().map(|(_, item)| item.clone()).collect(),
        odd.into_iter().map(|(_, item)| item.clone()).collect(),
    )
}

/// Features with case-insensitive repeats removed, first spelling kept.
///
/// The halves of a split must not share a feature, or domain alignment would
/// merge them straight back together.
fn distinct_features(features: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    features
        .iter()
        .filter(|feature| seen.insert(feature.to_lowercase()))
        .cloned()
        .collect()
}

pub fn split_boundary(
    boundary: &ServiceBoundary,
    ids: &dyn IdGenerator,
) -> (ServiceBoundary, ServiceBoundary) {
    let (core_features, extended_features) = halves(&distinct_features(&boundary.features));
    let (core_responsibilities, extended_responsibilities) = halves(&boundary.responsibilities);
    let (core_interfaces, extended_interfaces) = by_parity(&boundary.interfaces);
    let (core_dependencies, extended_dependencies) = by_parity(&boundary.dependencies);
    let (core_data, extended_data) = by_parity(&boundary.data_ownership);

    let core = ServiceBoundary {
        id: ids.generate(IdOperation::SplitCore, &[&boundary.id]),
        name: format!("{}-core", boundary.name),
        domain: boundary.domain.clone(),
        features: core_features,
        responsibilities: core_responsibilities,
        interfaces: core_interfaces,
        dependencies: core_dependencies,
        data_ownership: core_data,
        metrics: None,
    };
    let extended = ServiceBoundary {
        id: ids.generate(IdOperation::SplitExtended, &[&boundary.id]),
        name: format!("{}-extended", boundary.name),
        domain: boundary.domain.clone(),
        features: extended_features,
        responsibilities: extended_responsibilities,
        interfaces: extended_interfaces,
        dependencies: extended_dependencies,
        data_ownership: extended_data,
        metrics: None,
    };
    (core, extended)
}

pub struct SplitStage {
    cohesion_threshold: f64,
    min_features: usize,
    weights: CohesionWeights,
    ids: Arc<dyn IdGenerator>,
}

impl SplitStage {
    pub fn new(
        cohesion_threshold: f64,
        min_features: usize,
        weights: CohesionWeights,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            cohesion_threshold,
            min_features,
            weights,
            ids,
        }
    }

    fn should_split(&self, boundary: &ServiceBoundary) -> bool {
        boundary.features.len() >= self.min_features
            && cohesion(boundary, &self.weights) < self.cohesion_threshold
    }
}

impl Stage for SplitStage {
    type Input = Vec<ServiceBoundary>;
    type Output = Vec<ServiceBoundary>;
    type Error = BoundmapError;

    fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let output = input
            .iter()
            .flat_map(|boundary| {
                let _service = set_current_service(&boundary.name);
                if self.should_split(boundary) {
                    log::debug!("Splitting low-cohesion service {}", boundary.name);
                    let (core, extended) = split_boundary(boundary, self.ids.as_ref());
                    vec![core, extended]
                } else {
                    vec![boundary.clone()]
                }
            })
            .collect();
        Ok(output)
    }

    fn name(&self) -> &str {
        "split-low-cohesion-services"
    }
}
