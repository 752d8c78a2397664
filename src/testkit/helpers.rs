//! Test helper functions for creating test data.
//!
//! | Helper | Purpose |
//! |--------|---------|
//! | [`BoundaryBuilder`] | Build service boundaries fluently |
//! | [`ConfigBuilder`] | Build test configurations fluently |
//! | [`sample_catalog`] | A small, realistic five-service catalog |
//! | [`ContextRecordingIds`] | Id generator that records the service in context |
//!
//! # Example
//!
//! ```rust
//! use boundmap::core::DependencyType;
//! use boundmap::testkit::BoundaryBuilder;
//!
//! let boundary = BoundaryBuilder::new("orders", "commerce")
//!     .features(&["order capture", "order history"])
//!     .depends_on("payments", DependencyType::Asynchronous)
//!     .owns("order")
//!     .build();
//! assert_eq!(boundary.id, "orders");
//! ```

use crate::config::{BoundmapConfig, PlanMode, ThresholdsConfig};
use crate::core::{
    DependencyType, InterfaceType, ServiceBoundary, ServiceDependency, ServiceInterface,
};
use crate::observability::get_current_context;
use crate::transform::{IdGenerator, IdOperation};
use std::sync::{Arc, Mutex};

/// Fluent builder for [`ServiceBoundary`] fixtures.
///
/// The id defaults to the name; every list starts empty.
#[derive(Debug, Clone)]
pub struct BoundaryBuilder {
    boundary: ServiceBoundary,
}

impl BoundaryBuilder {
    pub fn new(name: &str, domain: &str) -> Self {
        Self {
            boundary: ServiceBoundary {
                id: name.to_string(),
                name: name.to_string(),
                domain: domain.to_string(),
                features: Vec::new(),
                responsibilities: Vec::new(),
                interfaces: Vec::new(),
                dependencies: Vec::new(),
                data_ownership: Vec::new(),
                metrics: None,
            },
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.boundary.id = id.to_string();
        self
    }

    pub fn feature(mut self, feature: &str) -> Self {
        self.boundary.features.push(feature.to_string());
        self
    }

    pub fn features(self, features: &[&str]) -> Self {
        features.iter().fold(self, |builder, f| builder.feature(f))
    }

    pub fn responsibility(mut self, responsibility: &str) -> Self {
        self.boundary.responsibilities.push(responsibility.to_string());
        self
    }

    pub fn responsibilities(self, responsibilities: &[&str]) -> Self {
        responsibilities
            .iter()
            .fold(self, |builder, r| builder.responsibility(r))
    }

    pub fn interface(mut self, interface_type: InterfaceType) -> Self {
        self.boundary
            .interfaces
            .push(ServiceInterface::new(interface_type));
        self
    }

    pub fn interface_with(mut self, interface: ServiceInterface) -> Self {
        self.boundary.interfaces.push(interface);
        self
    }

    pub fn depends_on(mut self, service: &str, dependency_type: DependencyType) -> Self {
        self.boundary
            .dependencies
            .push(ServiceDependency::new(service, dependency_type));
        self
    }

    pub fn dependency(mut self, dependency: ServiceDependency) -> Self {
        self.boundary.dependencies.push(dependency);
        self
    }

    pub fn owns(mut self, entity: &str) -> Self {
        self.boundary.data_ownership.push(entity.to_string());
        self
    }

    pub fn build(self) -> ServiceBoundary {
        self.boundary
    }
}

/// Fluent builder for test configurations.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: BoundmapConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge_coupling(mut self, threshold: f64) -> Self {
        self.config.thresholds.merge_coupling = threshold;
        self
    }

    pub fn split_cohesion(mut self, threshold: f64) -> Self {
        self.config.thresholds.split_cohesion = threshold;
        self
    }

    pub fn min_split_features(mut self, count: usize) -> Self {
        self.config.thresholds.min_split_features = count;
        self
    }

    pub fn domain_similarity(mut self, threshold: f64) -> Self {
        self.config.thresholds.domain_similarity = threshold;
        self
    }

    pub fn thresholds(mut self, thresholds: ThresholdsConfig) -> Self {
        self.config.thresholds = thresholds;
        self
    }

    pub fn plan_mode(mut self, mode: PlanMode) -> Self {
        self.config.plan.mode = mode;
        self
    }

    pub fn build(self) -> BoundmapConfig {
        self.config
    }
}

/// Sequential id generator that remembers which service the optimization
/// context named each time an id was requested.
#[derive(Debug, Clone, Default)]
pub struct ContextRecordingIds {
    seen: Arc<Mutex<Vec<Option<String>>>>,
}

impl ContextRecordingIds {
    pub fn seen(&self) -> Vec<Option<String>> {
        match self.seen.lock() {
            Ok(seen) => seen.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl IdGenerator for ContextRecordingIds {
    fn generate(&self, _operation: IdOperation, _constituents: &[&str]) -> String {
        let mut seen = match self.seen.lock() {
            Ok(seen) => seen,
            Err(poisoned) => poisoned.into_inner(),
        };
        seen.push(get_current_context().current_service);
        format!("svc-{}", seen.len())
    }
}

/// Five services from a content platform: two tightly coupled brand
/// services, an unfocused studio service, and a search service that shares
/// the `listing` entity with the listings service.
pub fn sample_catalog() -> Vec<ServiceBoundary> {
    vec![
        BoundaryBuilder::new("brand-profile", "brand")
            .features(&["brand voice", "brand assets"])
            .responsibilities(&["manage brand identity"])
            .interface(InterfaceType::Rest)
            .depends_on("brand-audit", DependencyType::Synchronous)
            .owns("brand")
            .build(),
        BoundaryBuilder::new("brand-audit", "brand")
            .features(&["brand consistency audit"])
            .responsibilities(&["score brand consistency"])
            .interface(InterfaceType::Rest)
            .depends_on("brand-profile", DependencyType::Synchronous)
            .owns("brand")
            .build(),
        BoundaryBuilder::new("studio", "content")
            .features(&[
                "caption writer",
                "image resizing",
                "hashtag suggestions",
                "post scheduling",
                "usage billing",
                "email digests",
            ])
            .responsibilities(&["everything creative"])
            .interface(InterfaceType::Graphql)
            .interface(InterfaceType::MessageQueue)
            .depends_on("brand-profile", DependencyType::Synchronous)
            .depends_on("search", DependencyType::EventDriven)
            .build(),
        BoundaryBuilder::new("search", "discovery")
            .features(&["listing search", "discovery ranking"])
            .responsibilities(&["index listings", "rank results"])
            .interface(InterfaceType::Grpc)
            .owns("listing")
            .owns("search_index")
            .build(),
        BoundaryBuilder::new("listings", "listing")
            .features(&["listing editor", "listing publishing"])
            .responsibilities(&["own listing lifecycle"])
            .interface(InterfaceType::Rest)
            .depends_on("search", DependencyType::Asynchronous)
            .owns("listing")
            .build(),
    ]
}
