//! Merge highly coupled service pairs.

use crate::boundmap_error::BoundmapError;
use crate::config::CouplingWeights;
use crate::core::ServiceBoundary;
use crate::coupling::CouplingMatrix;
use crate::observability::set_current_service;
use crate::transform::ids::{IdGenerator, IdOperation};
use crate::transform::stage::Stage;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Combine two services into one record.
///
/// List fields are concatenated; data ownership is a set union that keeps
/// `a`'s entities first.
pub fn merge_pair(
    a: &ServiceBoundary,
    b: &ServiceBoundary,
    operation: IdOperation,
    ids: &dyn IdGenerator,
) -> ServiceBoundary {
    let domain = if a.domain == b.domain {
        a.domain.clone()
    } else {
        "composite".to_string()
    };

    let mut data_ownership = a.data_ownership.clone();
    for entity in &b.data_ownership {
        if !data_ownership.contains(entity) {
            data_ownership.push(entity.clone());
        }
    }

    ServiceBoundary {
        id: ids.generate(operation, &[&a.id, &b.id]),
        name: format!("{}-{}", a.name, b.name),
        domain,
        features: [a.features.as_slice(), b.features.as_slice()].concat(),
        responsibilities: [a.responsibilities.as_slice(), b.responsibilities.as_slice()].concat(),
        interfaces: [a.interfaces.as_slice(), b.interfaces.as_slice()].concat(),
        dependencies: [a.dependencies.as_slice(), b.dependencies.as_slice()].concat(),
        data_ownership,
        metrics: None,
    }
}

#[derive(Default)]
struct MergeState {
    absorbed: BTreeSet<usize>,
    merged: BTreeMap<usize, ServiceBoundary>,
}

/// Greedily apply `pairs` in order. A service takes part in at most one
/// merge; pairs touching an already-absorbed service are skipped. Each merged
/// record replaces its first constituent in place.
///
/// Connected components are not collapsed: when `a-b` and `a-c` both
/// qualify, `a-b` merges and `c` survives on its own. A later run over the
/// result picks up `c` if it is still coupled to the merged service.
pub fn apply_pairwise_merges(
    boundaries: &[ServiceBoundary],
    pairs: impl IntoIterator<Item = (usize, usize)>,
    operation: IdOperation,
    ids: &dyn IdGenerator,
) -> Vec<ServiceBoundary> {
    let state = pairs
        .into_iter()
        .fold(MergeState::default(), |mut state, (i, j)| {
            if state.absorbed.contains(&i) || state.absorbed.contains(&j) {
                return state;
            }
            let _service = set_current_service(format!(
                "{} + {}",
                boundaries[i].name, boundaries[j].name
            ));
            let merged = merge_pair(&boundaries[i], &boundaries[j], operation, ids);
            log::debug!(
                "{}: {} + {} -> {}",
                operation,
                boundaries[i].name,
                boundaries[j].name,
                merged.name
            );
            state.absorbed.extend([i, j]);
            state.merged.insert(i, merged);
            state
        });

    boundaries
        .iter()
        .enumerate()
        .filter_map(|(index, boundary)| match state.merged.get(&index) {
            Some(merged) => Some(merged.clone()),
            None if state.absorbed.contains(&index) => None,
            None => Some(boundary.clone()),
        })
        .collect()
}

pub struct MergeStage {
    threshold: f64,
    weights: CouplingWeights,
    ids: Arc<dyn IdGenerator>,
}

impl MergeStage {
    pub fn new(threshold: f64, weights: CouplingWeights, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            threshold,
            weights,
            ids,
        }
    }
}

impl Stage for MergeStage {
    type Input = Vec<ServiceBoundary>;
    type Output = Vec<ServiceBoundary>;
    type Error = BoundmapError;

    fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let matrix = CouplingMatrix::build(&input, &self.weights);
        let pairs = matrix
            .merge_candidates(self.threshold)
            .into_iter()
            .map(|candidate| (candidate.first, candidate.second));

        Ok(apply_pairwise_merges(
            &input,
            pairs,
            IdOperation::Merge,
            self.ids.as_ref(),
        ))
    }

    fn name(&self) -> &str {
        "merge-coupled-services"
    }
}
