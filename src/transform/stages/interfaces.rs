use crate::core::{ServiceBoundary, ServiceInterface};

/// Apply each interface type's preferred versioning strategy.
pub fn optimize_interfaces(boundaries: Vec<ServiceBoundary>) -> Vec<ServiceBoundary> {
    boundaries
        .into_iter()
        .map(|boundary| ServiceBoundary {
            interfaces: boundary
                .interfaces
                .iter()
                .map(|interface| ServiceInterface {
                    versioning: interface.interface_type.preferred_versioning(),
                    ..interface.clone()
                })
                .collect(),
            ..boundary
        })
        .collect()
}
