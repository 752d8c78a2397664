//! Merge same-domain services whose feature sets mostly overlap.

use super::merge::apply_pairwise_merges;
use crate::boundmap_error::BoundmapError;
use crate::core::ServiceBoundary;
use crate::transform::ids::{IdGenerator, IdOperation};
use crate::transform::stage::Stage;
use std::collections::BTreeSet;
use std::sync::Arc;

fn feature_set(boundary: &ServiceBoundary) -> BTreeSet<String> {
    boundary.features.iter().map(|f| f.to_lowercase()).collect()
}

/// Jaccard similarity of the lower-cased feature sets. Zero when both are
/// empty.
pub fn feature_similarity(a: &ServiceBoundary, b: &ServiceBoundary) -> f64 {
    let left = feature_set(a);
    let right = feature_set(b);
    let union = left.union(&right).count();
    if union == 0 {
        return 0.0;
    }
    left.intersection(&right).count() as f64 / union as f64
}

pub struct DomainAlignmentStage {
    threshold: f64,
    ids: Arc<dyn IdGenerator>,
}

impl DomainAlignmentStage {
    pub fn new(threshold: f64, ids: Arc<dyn IdGenerator>) -> Self {
        Self { threshold, ids }
    }

    fn similar_pairs(&self, boundaries: &[ServiceBoundary]) -> Vec<(usize, usize)> {
        let n = boundaries.len();
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .filter(|&(i, j)| {
                boundaries[i].domain == boundaries[j].domain
                    && feature_similarity(&boundaries[i], &boundaries[j]) > self.threshold
            })
            .collect()
    }
}

impl Stage for DomainAlignmentStage {
    type Input = Vec<ServiceBoundary>;
    type Output = Vec<ServiceBoundary>;
    type Error = BoundmapError;

    fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let pairs = self.similar_pairs(&input);
        Ok(apply_pairwise_merges(
            &input,
            pairs,
            IdOperation::DomainAlignment,
            self.ids.as_ref(),
        ))
    }

    fn name(&self) -> &str {
        "align-domains"
    }
}
