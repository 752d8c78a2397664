use crate::config::CouplingWeights;
use crate::core::{InterfaceType, ServiceBoundary};
use std::collections::BTreeSet;

/// A pair of services whose coupling exceeds the merge threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeCandidate {
    pub first: usize,
    pub second: usize,
    pub coupling: f64,
}

/// Number of dependencies between `a` and `b`, summed over both directions.
fn direct_references(a: &ServiceBoundary, b: &ServiceBoundary) -> usize {
    let a_to_b = a.dependencies.iter().filter(|dep| dep.targets(b)).count();
    let b_to_a = b.dependencies.iter().filter(|dep| dep.targets(a)).count();
    a_to_b + b_to_a
}

fn shared_data(a: &ServiceBoundary, b: &ServiceBoundary) -> usize {
    let owned: BTreeSet<&str> = a.data_ownership.iter().map(String::as_str).collect();
    let other: BTreeSet<&str> = b.data_ownership.iter().map(String::as_str).collect();
    owned.intersection(&other).count()
}

fn shared_interface_types(a: &ServiceBoundary, b: &ServiceBoundary) -> usize {
    let types: BTreeSet<InterfaceType> = a.interfaces.iter().map(|i| i.interface_type).collect();
    let other: BTreeSet<InterfaceType> = b.interfaces.iter().map(|i| i.interface_type).collect();
    types.intersection(&other).count()
}

/// Coupling score of one pair, in `[0, 1]`.
pub fn pairwise_coupling(a: &ServiceBoundary, b: &ServiceBoundary, weights: &CouplingWeights) -> f64 {
    let mut score = weights.direct_dependency * direct_references(a, b) as f64
        + weights.shared_data * shared_data(a, b) as f64
        + weights.shared_interface_type * shared_interface_types(a, b) as f64;

    if a.domain == b.domain {
        score += weights.same_domain;
    }

    score.min(1.0)
}

/// Dense N×N coupling matrix with a zero diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct CouplingMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl CouplingMatrix {
    /// Build the matrix for `boundaries`, computing every off-diagonal cell.
    pub fn build(boundaries: &[ServiceBoundary], weights: &CouplingWeights) -> Self {
        let size = boundaries.len();
        let cells = (0..size)
            .flat_map(|i| (0..size).map(move |j| (i, j)))
            .map(|(i, j)| {
                if i == j {
                    0.0
                } else {
                    pairwise_coupling(&boundaries[i], &boundaries[j], weights)
                }
            })
            .collect();

        log::trace!("Built {}x{} coupling matrix", size, size);
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.size + j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    /// Mean coupling of service `i` against every other service.
    ///
    /// Zero when the system has a single service.
    pub fn mean_coupling(&self, i: usize) -> f64 {
        if self.size < 2 {
            return 0.0;
        }
        let total: f64 = self
            .row(i)
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, value)| value)
            .sum();
        total / (self.size - 1) as f64
    }

    /// Pairs `(i, j)` with `i < j` and coupling strictly above `threshold`,
    /// in row-major order.
    pub fn merge_candidates(&self, threshold: f64) -> Vec<MergeCandidate> {
        (0..self.size)
            .flat_map(|i| (i + 1..self.size).map(move |j| (i, j)))
            .filter_map(|(first, second)| {
                let coupling = self.get(first, second);
                (coupling > threshold).then_some(MergeCandidate {
                    first,
                    second,
                    coupling,
                })
            })
            .collect()
    }
}
