//! Give every contested data entity a single owner.

use crate::boundmap_error::BoundmapError;
use crate::config::CohesionWeights;
use crate::core::ServiceBoundary;
use crate::metrics::cohesion;
use crate::transform::stage::Stage;
use std::collections::HashMap;

/// Index of the winning claimant for every entity. The most cohesive
/// claimant wins; ties go to the claimant that appears first.
fn assign_owners(boundaries: &[ServiceBoundary], scores: &[f64]) -> HashMap<String, usize> {
    let mut owners: HashMap<String, usize> = HashMap::new();
    for (index, boundary) in boundaries.iter().enumerate() {
        for entity in &boundary.data_ownership {
            owners
                .entry(entity.clone())
                .and_modify(|owner| {
                    if scores[index] > scores[*owner] {
                        *owner = index;
                    }
                })
                .or_insert(index);
        }
    }
    owners
}

pub struct DataOwnershipStage {
    weights: CohesionWeights,
}

impl DataOwnershipStage {
    pub fn new(weights: CohesionWeights) -> Self {
        Self { weights }
    }
}

impl Stage for DataOwnershipStage {
    type Input = Vec<ServiceBoundary>;
    type Output = Vec<ServiceBoundary>;
    type Error = BoundmapError;

    fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        // Scored once on the stage input so earlier reassignments cannot
        // change later decisions.
        let scores: Vec<f64> = input.iter().map(|b| cohesion(b, &self.weights)).collect();
        let owners = assign_owners(&input, &scores);

        let output = input
            .iter()
            .enumerate()
            .map(|(index, boundary)| {
                let data_ownership: Vec<String> = boundary
                    .data_ownership
                    .iter()
                    .filter(|entity| owners.get(entity.as_str()) == Some(&index))
                    .cloned()
                    .collect();
                if data_ownership.len() != boundary.data_ownership.len() {
                    log::debug!(
                        "{} gives up {} contested entities",
                        boundary.name,
                        boundary.data_ownership.len() - data_ownership.len()
                    );
                }
                ServiceBoundary {
                    data_ownership,
                    ..boundary.clone()
                }
            })
            .collect();
        Ok(output)
    }

    fn name(&self) -> &str {
        "consolidate-data-ownership"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::BoundaryBuilder;
    use pretty_assertions::assert_eq;

    fn stage() -> DataOwnershipStage {
        DataOwnershipStage::new(CohesionWeights::default())
    }

    #[test]
    fn test_most_cohesive_claimant_keeps_entity() {
        let boundaries = vec![
            BoundaryBuilder::new("search", "discovery")
                .features(&["ranking"])
                .owns("listing")
                .build(),
            BoundaryBuilder::new("listings", "listing")
                .features(&["listing editor"])
                .owns("listing")
                .build(),
        ];
        let output = crate::assert_result_ok!(stage().execute(boundaries));

        assert!(output[0].data_ownership.is_empty());
        assert_eq!(output[1].data_ownership, vec!["listing"]);
    }

    #[test]
    fn test_ties_go_to_first_claimant() {
        let boundaries = vec![
            BoundaryBuilder::new("a", "d").owns("user").owns("audit").build(),
            BoundaryBuilder::new("b", "d").owns("user").build(),
        ];
        let output = crate::assert_result_ok!(stage().execute(boundaries));

        assert_eq!(output[0].data_ownership, vec!["user", "audit"]);
        assert!(output[1].data_ownership.is_empty());
    }

    #[test]
    fn test_uncontested_entities_are_untouched() {
        let boundaries = vec![
            BoundaryBuilder::new("a", "d").owns("x").build(),
            BoundaryBuilder::new("b", "d").owns("y").build(),
        ];
        let before = boundaries.clone();
        let output = crate::assert_result_ok!(stage().execute(boundaries));
        assert_eq!(output, before);
    }
}
